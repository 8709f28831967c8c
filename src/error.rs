//! Error taxonomy for the intent lifecycle.
//!
//! Every variant maps to a well-defined non-terminal state: validation and
//! encoding errors keep the instance in `Draft`, signing and submission
//! errors keep the previous stage's artifacts intact for retry, and status
//! fetch errors leave the instance stalled with its tracking id.

use thiserror::Error;

use crate::lifecycle::state::{Phase, Stage};

/// Errors surfaced by the intent lifecycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntentError {
    /// Required draft fields are missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Type-specific parsing of draft fields failed.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// The external signer errored or the user cancelled.
    #[error("signing rejected: {0}")]
    SigningRejected(String),

    /// Transport failure or backend rejection during submission.
    #[error("submission failed: {0}")]
    SubmissionFailed(String),

    /// Transport failure while fetching intent status.
    #[error("status fetch failed: {0}")]
    StatusFetch(String),

    /// Another call for this stage is already in flight on the instance.
    #[error("a {stage} call is already in flight")]
    Busy { stage: Stage },

    /// The trigger is not valid in the instance's current phase.
    #[error("{trigger} is not a valid trigger in phase {phase}")]
    InvalidPhase { phase: Phase, trigger: Stage },
}

impl IntentError {
    /// Whether the user may retry the same stage without rebuilding
    /// earlier artifacts.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            IntentError::SigningRejected(_)
                | IntentError::SubmissionFailed(_)
                | IntentError::StatusFetch(_)
        )
    }
}

/// Result type for lifecycle operations.
pub type IntentResult<T> = Result<T, IntentError>;
