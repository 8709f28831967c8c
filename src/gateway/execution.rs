//! Execution gateway: signed operation in, tracking id out.

use std::sync::Arc;

use crate::error::{IntentError, IntentResult};
use crate::gateway::capabilities::ExecutorCapability;
use crate::gateway::types::TrackingId;
use crate::intent::SignedOperation;

/// Single-attempt pass-through to the executor with error normalization.
///
/// Resubmission after a failure reuses the identical signed payload; the
/// gateway itself never retries.
#[derive(Clone)]
pub struct ExecutionGateway {
    executor: Arc<dyn ExecutorCapability>,
}

impl ExecutionGateway {
    pub fn new(executor: Arc<dyn ExecutorCapability>) -> Self {
        Self { executor }
    }

    pub async fn execute(&self, op: &SignedOperation) -> IntentResult<TrackingId> {
        match self.executor.execute(op).await {
            Ok(tracking_id) => {
                tracing::info!(
                    kind = %op.operation.kind,
                    tracking_id = %tracking_id,
                    "operation submitted"
                );
                Ok(tracking_id)
            }
            Err(e) => {
                tracing::warn!(kind = %op.operation.kind, error = %e, "submission failed");
                Err(IntentError::SubmissionFailed(e.to_string()))
            }
        }
    }
}
