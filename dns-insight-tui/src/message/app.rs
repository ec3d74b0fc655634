//! 应用主消息枚举

use dns_insight_core::PipelineEvent;

use super::PanelMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到右侧分类列
    NextCategory,

    /// 焦点移到左侧分类列
    PreviousCategory,

    /// 在列表与详情之间切换
    ToggleSection,

    /// 面板内移动
    Panel(PanelMessage),

    /// 激活列表中选中的分组
    Activate,

    /// 重新加载当前分类的列表
    Reload,

    /// 返回列表区域
    GoBack,

    /// 后台请求完成
    Pipeline(PipelineEvent),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
