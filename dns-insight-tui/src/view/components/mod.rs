//! 界面组件

pub mod column;
pub mod statusbar;
