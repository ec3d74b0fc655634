//! 面板内移动消息

/// 面板消息
///
/// 列表区域移动选中项，详情区域滚动表格。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMessage {
    /// 上一项
    SelectPrevious,
    /// 下一项
    SelectNext,
    /// 第一项
    SelectFirst,
    /// 最后一项
    SelectLast,
}
