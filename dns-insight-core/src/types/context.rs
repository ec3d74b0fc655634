//! In-flight request context

use std::fmt;

use super::Category;

/// Request sequence number, monotonically increasing per category and phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which half of a pipeline issued a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Aggregate listing
    List,
    /// Records of one selected group
    Detail { group_id: String },
}

/// Context threaded through a fetch so the response lands in the right pipeline.
///
/// The fetch client never inspects it; it is handed back unmodified to
/// whichever continuation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineContext {
    pub category: Category,
    pub phase: Phase,
    pub request_id: RequestId,
}

impl PipelineContext {
    /// Context for a list-mode request
    pub fn list(category: Category, request_id: RequestId) -> Self {
        Self {
            category,
            phase: Phase::List,
            request_id,
        }
    }

    /// Context for a detail-mode request
    pub fn detail(category: Category, group_id: impl Into<String>, request_id: RequestId) -> Self {
        Self {
            category,
            phase: Phase::Detail {
                group_id: group_id.into(),
            },
            request_id,
        }
    }

    /// Whether this context belongs to a list request
    pub fn is_list(&self) -> bool {
        matches!(self.phase, Phase::List)
    }
}

impl fmt::Display for PipelineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.phase {
            Phase::List => write!(f, "{} list {}", self.category, self.request_id),
            Phase::Detail { group_id } => {
                write!(f, "{} detail '{group_id}' {}", self.category, self.request_id)
            }
        }
    }
}
