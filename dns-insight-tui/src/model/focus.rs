//! 焦点状态定义

use dns_insight_core::Category;

/// 分类列内的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// 上方的下钻列表
    #[default]
    List,
    /// 下方的详情表
    Detail,
}

impl Section {
    /// 切换到另一个区域
    pub fn toggle(self) -> Self {
        match self {
            Section::List => Section::Detail,
            Section::Detail => Section::List,
        }
    }
}

/// 当前焦点：哪个分类列的哪个区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub category: Category,
    pub section: Section,
}

impl Default for Focus {
    fn default() -> Self {
        Self {
            category: Category::Mx,
            section: Section::List,
        }
    }
}

impl Focus {
    /// 是否聚焦在指定分类的指定区域
    pub fn is(&self, category: Category, section: Section) -> bool {
        self.category == category && self.section == section
    }

    /// 右移一列（循环）
    pub fn next_category(&mut self) {
        self.category = self.category.next();
        self.section = Section::List;
    }

    /// 左移一列（循环）
    pub fn previous_category(&mut self) {
        self.category = self.category.previous();
        self.section = Section::List;
    }
}
