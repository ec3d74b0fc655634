//! Dashboard
//!
//! Owns the three category pipelines and the channel their fetch
//! continuations report back on. All rendering happens in [`Dashboard::apply`],
//! on whichever task drives the dashboard.

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::config::StaleResponsePolicy;
use crate::error::{PanelError, PanelResult};
use crate::fetch::Fetcher;
use crate::pipeline::{CategoryPipeline, Delivery, EventSender, PipelineEvent};
use crate::render::{DetailTarget, ListTarget};
use crate::types::{Category, RequestId, SelectionEvent};

/// The MX / SPF / DKIM panels
pub struct Dashboard<L, D> {
    /// Indexed by [`Category::index`]
    pipelines: Vec<CategoryPipeline<L, D>>,
    fetcher: Fetcher,
    events_tx: EventSender,
    events_rx: UnboundedReceiver<PipelineEvent>,
    in_flight: usize,
}

impl<L, D> Dashboard<L, D> {
    /// Build one pipeline per category, asking `targets` for its rendering targets
    pub fn new<F>(fetcher: Fetcher, policy: StaleResponsePolicy, mut targets: F) -> Self
    where
        F: FnMut(Category) -> (L, D),
    {
        let pipelines = Category::ALL
            .into_iter()
            .map(|category| {
                let (list, detail) = targets(category);
                CategoryPipeline::new(category, list, detail, policy)
            })
            .collect();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            pipelines,
            fetcher,
            events_tx,
            events_rx,
            in_flight: 0,
        }
    }

    pub fn pipeline(&self, category: Category) -> &CategoryPipeline<L, D> {
        &self.pipelines[category.index()]
    }

    pub fn pipeline_mut(&mut self, category: Category) -> &mut CategoryPipeline<L, D> {
        &mut self.pipelines[category.index()]
    }

    pub fn pipelines(&self) -> impl Iterator<Item = &CategoryPipeline<L, D>> {
        self.pipelines.iter()
    }

    /// Requests issued whose completion has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl<L: ListTarget, D: DetailTarget> Dashboard<L, D> {
    /// Page load: start all three list loads at once
    pub fn start(&mut self) {
        log::info!("Loading MX, SPF and DKIM groups");
        for category in Category::ALL {
            self.reload(category);
        }
    }

    /// Reload the list of one category
    pub fn reload(&mut self, category: Category) -> RequestId {
        let id = self.pipelines[category.index()].load_list(&self.fetcher, &self.events_tx);
        self.in_flight += 1;
        id
    }

    /// Route a widget activation to the pipeline of its category
    pub fn select(&mut self, event: Option<SelectionEvent>) -> PanelResult<RequestId> {
        let Some(event) = event else {
            log::debug!("Ignoring selection without a group");
            return Err(PanelError::MissingSelectionContext);
        };

        let id = self.pipelines[event.category.index()].on_selection(
            Some(&event),
            &self.fetcher,
            &self.events_tx,
        )?;
        self.in_flight += 1;
        Ok(id)
    }

    /// Wait for the next completion
    pub async fn next_event(&mut self) -> Option<PipelineEvent> {
        // events_tx lives in self, so the channel never closes while we wait
        self.events_rx.recv().await
    }

    /// Next completion if one is already queued
    pub fn try_next_event(&mut self) -> Option<PipelineEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Render a completion into the pipeline it belongs to
    pub fn apply(&mut self, event: PipelineEvent) -> Delivery {
        self.in_flight = self.in_flight.saturating_sub(1);
        let category = event.context().category;
        self.pipelines[category.index()].deliver(event)
    }

    /// Apply completions until nothing is in flight
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.next_event().await {
                Some(event) => {
                    self.apply(event);
                }
                None => break,
            }
        }
    }
}
