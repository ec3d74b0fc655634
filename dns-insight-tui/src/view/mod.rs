//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//!
//!     ┌──────────────────────── 标题栏 ─────────────────────────┐
//!     ├───────── MX ──────┬──────── SPF ──────┬─────── DKIM ──────┤
//!     │  下钻列表         │  下钻列表         │  下钻列表         │
//!     ├───────────────────┼───────────────────┼───────────────────┤
//!     │  详情表           │  详情表           │  详情表           │
//!     │  Zone Domain Value│                   │                   │
//!     ├──────────────────────── 状态栏 ─────────────────────────┤
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局
//!         mod components;     // 分类列、状态栏
//!         mod theme;          // 颜色和样式
//!

mod components;
mod layout;
mod theme;

pub use layout::render;
