//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长阻塞 timeout
//!
//!     · handle_event    事件分发
//!
//!         判断顺序：
//!             - 全局快捷键：q / Ctrl+C 退出，r / Alt+r 重新加载，Esc 返回列表
//!             - Tab 切换 列表/详情，← → (h l) 切换分类列
//!             - Enter：焦点在列表区域时激活选中分组
//!             - ↑ ↓ (k j) / Home / End：面板内移动
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
