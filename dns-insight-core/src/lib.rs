//! DNS Insight Core Library
//!
//! Drill-down panels for DNS zone metadata aggregated across many zones:
//! - MX records (`dnsType=mx`)
//! - SPF text records (`txtSearch=spf`)
//! - DKIM text records (`txtSearch=dkim`)
//!
//! Each category runs its own [`CategoryPipeline`]: a list load renders a
//! drill-down widget of aggregate groups, a selection on that widget issues a
//! detail load, and the detail response overwrites the category's detail
//! table. Pipelines never share rendering targets and never interact.
//!
//! Rendering targets are injected through the [`ListTarget`] / [`DetailTarget`]
//! traits, so the same pipelines drive the HTML panel ([`render::html`]) and
//! the terminal dashboard.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use dns_insight_core::render::html::{HtmlDetail, HtmlList};
//! use dns_insight_core::{Dashboard, DashboardConfig, Fetcher, HttpFetchClient};
//!
//! # async fn example() -> dns_insight_core::PanelResult<()> {
//! let config = DashboardConfig::default();
//! let fetcher = Fetcher::new(Arc::new(HttpFetchClient::new(&config.api)?));
//! let mut dashboard = Dashboard::new(fetcher, config.stale_responses, |_| {
//!     (HtmlList::default(), HtmlDetail::default())
//! });
//!
//! dashboard.start();
//! dashboard.settle().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod types;

// Re-export common types
pub use config::{ApiConfig, DashboardConfig, StaleResponsePolicy};
pub use dashboard::Dashboard;
pub use error::{PanelError, PanelResult};
pub use fetch::{FetchClient, Fetcher, HttpFetchClient};
pub use pipeline::{CategoryPipeline, Delivery, PipelineEvent};
pub use render::{DetailTable, DetailTarget, DrillDownList, ListTarget};
pub use types::{
    Category, DetailRecord, ListEntry, Phase, PipelineContext, RequestId, SelectionEvent,
};
