//! 面板内移动

use crate::message::PanelMessage;
use crate::model::{App, Section};

/// 处理面板消息：列表区域移动选中项，详情区域滚动
pub fn update(app: &mut App, msg: PanelMessage) {
    match app.focus.section {
        Section::List => {
            let pane = app.focused_list_mut();
            match msg {
                PanelMessage::SelectPrevious => pane.select_previous(),
                PanelMessage::SelectNext => pane.select_next(),
                PanelMessage::SelectFirst => pane.select_first(),
                PanelMessage::SelectLast => pane.select_last(),
            }
        }
        Section::Detail => {
            let pane = app.focused_detail_mut();
            match msg {
                PanelMessage::SelectPrevious => pane.scroll_up(),
                PanelMessage::SelectNext => pane.scroll_down(),
                PanelMessage::SelectFirst => pane.scroll_top(),
                PanelMessage::SelectLast => pane.scroll_bottom(),
            }
        }
    }
}
