//! 应用主状态结构

use dns_insight_core::{Category, Dashboard, DashboardConfig, Fetcher};

use super::{DetailPane, Focus, ListPane};

/// 面板集合：每个分类一列（列表 + 详情）
pub type Panels = Dashboard<ListPane, DetailPane>;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: Focus,

    /// 三个分类的管道及其面板
    pub dashboard: Panels,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 搜索 API 地址（显示在标题栏）
    pub api_base: String,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 不会发起请求；调用方随后执行 `dashboard.start()`。
    pub fn new(fetcher: Fetcher, config: &DashboardConfig) -> Self {
        let dashboard = Dashboard::new(fetcher, config.stale_responses, |_| {
            (ListPane::default(), DetailPane::default())
        });

        Self {
            should_quit: false,
            focus: Focus::default(),
            dashboard,
            status_message: None,
            api_base: config.api.base_url.clone(),
        }
    }

    /// 指定分类的列表面板
    pub fn list(&self, category: Category) -> &ListPane {
        self.dashboard.pipeline(category).list_target()
    }

    /// 指定分类的详情面板
    pub fn detail(&self, category: Category) -> &DetailPane {
        self.dashboard.pipeline(category).detail_target()
    }

    /// 当前焦点列的列表面板
    pub fn focused_list_mut(&mut self) -> &mut ListPane {
        self.dashboard
            .pipeline_mut(self.focus.category)
            .list_target_mut()
    }

    /// 当前焦点列的详情面板
    pub fn focused_detail_mut(&mut self) -> &mut DetailPane {
        self.dashboard
            .pipeline_mut(self.focus.category)
            .detail_target_mut()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
