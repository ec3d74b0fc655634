//! Rendering targets
//!
//! Each category owns exactly one list target and one detail target. They are
//! injected into the pipeline at construction and written only by that
//! pipeline, so no two sources ever draw into the same target.
//!
//! Every call replaces the target's previous contents entirely.

pub mod html;
mod table;
mod widget;

pub use table::{DetailRow, DetailTable, Link, DETAIL_HEADER};
pub use widget::{DrillDownItem, DrillDownList};

use crate::error::PanelError;
use crate::types::Category;

/// Target for the drill-down list of a category
pub trait ListTarget {
    /// A list request is in flight
    fn show_loading(&mut self, category: Category);

    /// Replace contents with the drill-down widget
    fn render_list(&mut self, list: DrillDownList);

    /// Replace contents with a visible error state
    fn show_error(&mut self, category: Category, error: &PanelError);
}

/// Target for the detail table of a category
pub trait DetailTarget {
    /// A detail request for `group_id` is in flight
    fn show_loading(&mut self, category: Category, group_id: &str);

    /// Replace contents with the detail table
    fn render_detail(&mut self, table: DetailTable);

    /// Replace contents with a visible error state
    fn show_error(&mut self, category: Category, error: &PanelError);
}
