//! 面板状态
//!
//! 每个分类有一个列表面板和一个详情面板，分别实现核心库的
//! `ListTarget` / `DetailTarget`。管道只会通过这两个 trait 写入面板，
//! View 层只读取。

use dns_insight_core::{
    Category, DetailTable, DetailTarget, DrillDownList, ListTarget, PanelError, SelectionEvent,
};

/// 面板内容状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaneState<T> {
    /// 尚未发起请求
    #[default]
    Idle,
    /// 请求进行中
    Loading,
    /// 已渲染
    Ready(T),
    /// 请求失败，保存错误描述
    Failed(String),
}

impl<T> PaneState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// 列表面板：下钻组件 + 选中项
#[derive(Debug, Default)]
pub struct ListPane {
    pub state: PaneState<DrillDownList>,
    /// 当前选中的索引
    pub selected: usize,
}

impl ListPane {
    fn len(&self) -> usize {
        self.state.ready().map_or(0, DrillDownList::len)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }

    /// 激活当前选中项，没有可激活的条目时返回 `None`
    pub fn activate(&self) -> Option<SelectionEvent> {
        self.state.ready()?.activate(self.selected)
    }
}

impl ListTarget for ListPane {
    fn show_loading(&mut self, _category: Category) {
        self.state = PaneState::Loading;
    }

    fn render_list(&mut self, list: DrillDownList) {
        // 刷新后尽量保持选中位置
        self.selected = self.selected.min(list.len().saturating_sub(1));
        self.state = PaneState::Ready(list);
    }

    fn show_error(&mut self, _category: Category, error: &PanelError) {
        self.state = PaneState::Failed(error.to_string());
        self.selected = 0;
    }
}

/// 详情面板：选中分组的记录表
#[derive(Debug, Default)]
pub struct DetailPane {
    pub state: PaneState<DetailTable>,
    /// 正在加载或已显示的分组
    pub group_id: Option<String>,
    /// 表格的首个可见行
    pub offset: usize,
}

impl DetailPane {
    fn len(&self) -> usize {
        self.state.ready().map_or(0, DetailTable::len)
    }

    /// 上滚一行
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// 下滚一行
    pub fn scroll_down(&mut self) {
        if self.offset + 1 < self.len() {
            self.offset += 1;
        }
    }

    /// 回到顶部
    pub fn scroll_top(&mut self) {
        self.offset = 0;
    }

    /// 滚到底部
    pub fn scroll_bottom(&mut self) {
        self.offset = self.len().saturating_sub(1);
    }
}

impl DetailTarget for DetailPane {
    fn show_loading(&mut self, _category: Category, group_id: &str) {
        self.state = PaneState::Loading;
        self.group_id = Some(group_id.to_string());
    }

    fn render_detail(&mut self, table: DetailTable) {
        self.group_id = Some(table.group_id.clone());
        self.offset = 0;
        self.state = PaneState::Ready(table);
    }

    fn show_error(&mut self, _category: Category, error: &PanelError) {
        self.state = PaneState::Failed(error.to_string());
        self.offset = 0;
    }
}
