//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达，
//! 包括后台 fetch 完成后回到主循环的 PipelineEvent。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod panel;          // 面板内的移动
//!
//!         pub use app::AppMessage;
//!         pub use panel::PanelMessage;
//!
//!
//!     消息的两个来源：
//!         · event/handler.rs   键盘事件 → AppMessage
//!         · app.rs             dashboard.try_next_event() → AppMessage::Pipeline
//!
//!     两者都交给 update::update(app, msg) 处理。
//!

mod app;
mod panel;

pub use app::AppMessage;
pub use panel::PanelMessage;
