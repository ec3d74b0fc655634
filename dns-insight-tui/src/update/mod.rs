//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod panel;              // 面板内移动
//!         mod pipeline;           // 后台请求完成
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//!     Activate / Reload 通过 dashboard 发起请求后立即返回；
//!     请求完成时主循环收到 PipelineEvent，再经 AppMessage::Pipeline 回到这里。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod panel;
mod pipeline;

use dns_insight_core::PanelError;

use crate::message::AppMessage;
use crate::model::{App, Section};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextCategory => {
            app.focus.next_category();
        }

        AppMessage::PreviousCategory => {
            app.focus.previous_category();
        }

        AppMessage::ToggleSection => {
            app.focus.section = app.focus.section.toggle();
        }

        AppMessage::Panel(panel_msg) => {
            panel::update(app, panel_msg);
        }

        AppMessage::Activate => {
            activate(app);
        }

        AppMessage::Reload => {
            let category = app.focus.category;
            app.dashboard.reload(category);
            app.set_status(format!("Reloading {} groups...", category.label()));
        }

        AppMessage::GoBack => {
            app.focus.section = Section::List;
            app.clear_status();
        }

        AppMessage::Pipeline(event) => {
            pipeline::update(app, event);
        }

        AppMessage::Noop => {}
    }
}

/// 激活当前列的选中分组，发起详情请求
fn activate(app: &mut App) {
    let category = app.focus.category;
    let selection = app.list(category).activate();
    let group = selection.as_ref().map(|s| s.group_id.clone());

    match app.dashboard.select(selection) {
        Ok(request_id) => {
            let group = group.unwrap_or_default();
            log::debug!("{category} detail request {request_id} for {group}");
            app.set_status(format!("Loading {} records for {group}...", category.label()));
        }
        Err(PanelError::MissingSelectionContext) => {
            app.set_status(format!("No {} group to open", category.label()));
        }
        Err(e) => {
            log::warn!("Selection rejected: {e}");
            app.set_status(e.to_string());
        }
    }
}
