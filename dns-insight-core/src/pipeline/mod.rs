//! Category pipelines
//!
//! One pipeline per category moves through:
//!
//! ```text
//! load_list ──▶ (fetch) ──▶ deliver(ListLoaded) ──▶ list target: drill-down widget
//!                                                          │ activation
//!                                                          ▼
//!            deliver(DetailLoaded) ◀── (fetch) ◀── on_selection(SelectionEvent)
//!                    │
//!                    ▼
//!            detail target: detail table
//! ```
//!
//! Fetch continuations only post a [`PipelineEvent`]; the owner of the
//! pipeline delivers it back on its own task, so targets are only ever written
//! from one place.

mod sequence;

pub use sequence::RequestSequencer;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::StaleResponsePolicy;
use crate::error::{PanelError, PanelResult};
use crate::fetch::Fetcher;
use crate::query;
use crate::render::{DetailTable, DetailTarget, DrillDownList, ListTarget};
use crate::types::{
    Category, DetailRecord, ListEntry, Phase, PipelineContext, RequestId, SelectionEvent,
};

/// Completion of a pipeline request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// List-mode response decoded
    ListLoaded {
        context: PipelineContext,
        entries: Vec<ListEntry>,
    },
    /// Detail-mode response decoded
    DetailLoaded {
        context: PipelineContext,
        records: Vec<DetailRecord>,
    },
    /// Request failed or response was malformed
    Failed {
        context: PipelineContext,
        error: PanelError,
    },
}

impl PipelineEvent {
    pub fn context(&self) -> &PipelineContext {
        match self {
            Self::ListLoaded { context, .. }
            | Self::DetailLoaded { context, .. }
            | Self::Failed { context, .. } => context,
        }
    }
}

/// What happened to a delivered event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Written into a target
    Rendered,
    /// Dropped as stale or misrouted
    Discarded,
}

/// Sender fetch continuations post completions to
pub type EventSender = UnboundedSender<PipelineEvent>;

/// List + detail pipeline of one category
pub struct CategoryPipeline<L, D> {
    category: Category,
    list_target: L,
    detail_target: D,
    list_requests: RequestSequencer,
    detail_requests: RequestSequencer,
    policy: StaleResponsePolicy,
}

impl<L, D> CategoryPipeline<L, D> {
    /// Create a pipeline owning its two rendering targets
    pub fn new(
        category: Category,
        list_target: L,
        detail_target: D,
        policy: StaleResponsePolicy,
    ) -> Self {
        Self {
            category,
            list_target,
            detail_target,
            list_requests: RequestSequencer::default(),
            detail_requests: RequestSequencer::default(),
            policy,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn list_target(&self) -> &L {
        &self.list_target
    }

    pub fn list_target_mut(&mut self) -> &mut L {
        &mut self.list_target
    }

    pub fn detail_target(&self) -> &D {
        &self.detail_target
    }

    pub fn detail_target_mut(&mut self) -> &mut D {
        &mut self.detail_target
    }

    /// Latest detail request issued, if any
    pub fn latest_detail_request(&self) -> Option<RequestId> {
        self.detail_requests.latest()
    }

    /// Whether a response with this context may still be rendered
    fn accepts(&self, context: &PipelineContext) -> bool {
        if context.category != self.category {
            log::warn!(
                "{} pipeline received a response for {context}",
                self.category
            );
            return false;
        }

        match self.policy {
            StaleResponsePolicy::LastArrivalWins => true,
            StaleResponsePolicy::Discard => {
                let current = match context.phase {
                    Phase::List => self.list_requests.is_latest(context.request_id),
                    Phase::Detail { .. } => self.detail_requests.is_latest(context.request_id),
                };
                if !current {
                    log::debug!("Discarding stale response for {context}");
                }
                current
            }
        }
    }
}

impl<L: ListTarget, D: DetailTarget> CategoryPipeline<L, D> {
    /// Request the aggregate listing of this category
    pub fn load_list(&mut self, fetcher: &Fetcher, events: &EventSender) -> RequestId {
        let request_id = self.list_requests.next();
        let context = PipelineContext::list(self.category, request_id);
        let path = query::list_path(self.category);
        log::debug!("{context}: GET {path}");

        self.list_target.show_loading(self.category);

        let (ok_tx, err_tx) = (events.clone(), events.clone());
        fetcher.fetch(
            path,
            context,
            move |entries: Vec<ListEntry>, context| {
                let _ = ok_tx.send(PipelineEvent::ListLoaded { context, entries });
            },
            move |error, context| {
                let _ = err_tx.send(PipelineEvent::Failed { context, error });
            },
        );

        request_id
    }

    /// Handle activation of a drill-down entry.
    ///
    /// `None` (or an empty group id) is a deselection: nothing is fetched and
    /// nothing is rendered.
    pub fn on_selection(
        &mut self,
        event: Option<&SelectionEvent>,
        fetcher: &Fetcher,
        events: &EventSender,
    ) -> PanelResult<RequestId> {
        let event = event
            .filter(|e| !e.group_id.is_empty())
            .ok_or(PanelError::MissingSelectionContext)?;

        if event.category != self.category {
            return Err(PanelError::CategoryMismatch {
                expected: self.category,
                actual: event.category,
            });
        }

        let request_id = self.detail_requests.next();
        let context = PipelineContext::detail(self.category, event.group_id.as_str(), request_id);
        let path = query::detail_path(self.category, &event.group_id);
        log::debug!("{context}: GET {path}");

        self.detail_target
            .show_loading(self.category, &event.group_id);

        let (ok_tx, err_tx) = (events.clone(), events.clone());
        fetcher.fetch(
            path,
            context,
            move |records: Vec<DetailRecord>, context| {
                let _ = ok_tx.send(PipelineEvent::DetailLoaded { context, records });
            },
            move |error, context| {
                let _ = err_tx.send(PipelineEvent::Failed { context, error });
            },
        );

        Ok(request_id)
    }

    /// Render a completed request into the target matching its phase
    pub fn deliver(&mut self, event: PipelineEvent) -> Delivery {
        if !self.accepts(event.context()) {
            return Delivery::Discarded;
        }

        match event {
            PipelineEvent::ListLoaded { context, entries } => {
                if !context.is_list() {
                    log::warn!("List payload delivered for {context}");
                    return Delivery::Discarded;
                }
                log::debug!("{context}: rendering {} groups", entries.len());
                self.list_target
                    .render_list(DrillDownList::from_entries(self.category, entries));
            }
            PipelineEvent::DetailLoaded { context, records } => {
                log::debug!("{context}: rendering {} records", records.len());
                let Phase::Detail { group_id } = context.phase else {
                    log::warn!("Detail payload delivered for {} list request", self.category);
                    return Delivery::Discarded;
                };
                self.detail_target
                    .render_detail(DetailTable::from_records(self.category, group_id, records));
            }
            PipelineEvent::Failed { context, error } => {
                if error.is_expected() {
                    log::warn!("{context} failed: {error}");
                } else {
                    log::error!("{context} failed: {error}");
                }
                match context.phase {
                    Phase::List => self.list_target.show_error(self.category, &error),
                    Phase::Detail { .. } => self.detail_target.show_error(self.category, &error),
                }
            }
        }

        Delivery::Rendered
    }
}
