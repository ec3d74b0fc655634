//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::Category;

/// Panel error type
///
/// Every failure is local to one category pipeline; the owning pipeline renders
/// it into the affected target and the other categories keep running.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PanelError {
    /// Transport failure, timeout or non-success HTTP status
    #[error("Network failure for {path}: {detail}")]
    NetworkFailure { path: String, detail: String },

    /// Body is not JSON or does not match the schema of the endpoint mode
    #[error("Malformed response from {path}: {detail}")]
    MalformedResponse { path: String, detail: String },

    /// Selection event without an activated item (e.g. deselection)
    #[error("Selection event carries no activated item")]
    MissingSelectionContext,

    /// Selection routed to a pipeline owned by another category
    #[error("Selection for {actual} routed to the {expected} pipeline")]
    CategoryMismatch {
        expected: Category,
        actual: Category,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unparseable category name or selection argument
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl PanelError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingSelectionContext | Self::InvalidConfig(_) | Self::ValidationError(_) => {
                true
            }
            Self::NetworkFailure { .. }
            | Self::MalformedResponse { .. }
            | Self::CategoryMismatch { .. } => false,
        }
    }
}

/// Panel Result type alias
pub type PanelResult<T> = std::result::Result<T, PanelError>;
