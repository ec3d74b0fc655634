//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（分类列 + 列表/详情区域）
//!         mod panes;          // 列表面板、详情面板
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: Focus,                   // 当前焦点
//!             pub dashboard: Panels,              // 三条分类管道，各自持有面板
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub api_base: String,               // 搜索 API 地址
//!         }
//!
//!     面板由 Dashboard 持有：每个分类的 ListPane / DetailPane 只会被该分类的
//!     管道写入，View 层通过 app.list(c) / app.detail(c) 读取。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（Focus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Focus { category: Category, section: Section }
//!
//!     数据流：
//!         用户按 ← / → 键
//!             ↓
//!         event/handler.rs 返回 AppMessage::NextCategory / PreviousCategory
//!             ↓
//!         update/mod.rs 执行 app.focus.next_category()
//!             ↓
//!         view 层根据 app.focus.is(c, section) 设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、面板状态（ListPane / DetailPane）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         PaneState<T> = Idle | Loading | Ready(T) | Failed(String)
//!
//!     数据流：
//!         用户在列表按 Enter
//!             ↓
//!         ListPane::activate() 产生 SelectionEvent
//!             ↓
//!         dashboard.select() → DetailPane 进入 Loading，后台发起请求
//!             ↓
//!         主循环取回 PipelineEvent → AppMessage::Pipeline
//!             ↓
//!         dashboard.apply() → DetailPane 变为 Ready(table) 或 Failed
//!

mod app;
mod focus;
mod panes;

pub use app::App;
pub use focus::{Focus, Section};
pub use panes::{DetailPane, ListPane, PaneState};
