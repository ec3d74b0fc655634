//! 类型定义模块

mod category;
mod context;
mod records;
mod selection;

pub use category::Category;
pub use context::{Phase, PipelineContext, RequestId};
pub use records::{DetailRecord, ListEntry};
pub use selection::{SelectionEvent, TABLE_SUFFIX};
