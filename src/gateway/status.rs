//! Pull-based status poller.
//!
//! Polling happens only on explicit invocation: once automatically right
//! after submission, then manually on user-triggered refresh. There is no
//! interval timer anywhere in the core.

use std::sync::Arc;

use crate::error::{IntentError, IntentResult};
use crate::gateway::capabilities::StatusCapability;
use crate::gateway::types::{IntentStatusRecord, TrackingId};
use crate::intent::IntentKind;
use crate::observability::metrics;

/// Result of a single status fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The backend reported a status record for the intent.
    Found(IntentStatusRecord),
    /// The backend has not indexed the intent yet. Transient: keep the
    /// current state and allow another fetch.
    NotFound,
}

/// One-shot status fetcher over the status lookup capability.
#[derive(Clone)]
pub struct StatusPoller {
    status: Arc<dyn StatusCapability>,
}

impl StatusPoller {
    pub fn new(status: Arc<dyn StatusCapability>) -> Self {
        Self { status }
    }

    /// Fetch the current status of a submitted intent.
    ///
    /// The capability may return several records; only the first is used.
    pub async fn fetch(
        &self,
        tracking_id: &TrackingId,
        kind: IntentKind,
    ) -> IntentResult<StatusOutcome> {
        let records = self
            .status
            .fetch_status(tracking_id, kind)
            .await
            .map_err(|e| {
                tracing::warn!(tracking_id = %tracking_id, error = %e, "status fetch failed");
                metrics::record_status_fetch("error");
                IntentError::StatusFetch(e.to_string())
            })?;

        match records.into_iter().next() {
            Some(record) => {
                tracing::debug!(
                    tracking_id = %tracking_id,
                    status = %record.status,
                    "status fetched"
                );
                metrics::record_status_fetch("found");
                Ok(StatusOutcome::Found(record))
            }
            None => {
                tracing::debug!(tracking_id = %tracking_id, "intent not indexed yet");
                metrics::record_status_fetch("not_found");
                Ok(StatusOutcome::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::types::{GatewayError, IntentStatus};
    use async_trait::async_trait;

    struct ScriptedStatus(Vec<IntentStatusRecord>);

    #[async_trait]
    impl StatusCapability for ScriptedStatus {
        async fn fetch_status(
            &self,
            _: &TrackingId,
            _: IntentKind,
        ) -> Result<Vec<IntentStatusRecord>, GatewayError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenStatus;

    #[async_trait]
    impl StatusCapability for BrokenStatus {
        async fn fetch_status(
            &self,
            _: &TrackingId,
            _: IntentKind,
        ) -> Result<Vec<IntentStatusRecord>, GatewayError> {
            Err(GatewayError::Transport("connection refused".to_string()))
        }
    }

    fn record(id: &str, status: &str) -> IntentStatusRecord {
        IntentStatusRecord {
            intent_id: id.to_string(),
            intent_type: IntentKind::RawTransaction,
            status: IntentStatus(status.to_string()),
            downstream_transaction_hash: Vec::new(),
            network_name: None,
        }
    }

    #[tokio::test]
    async fn test_first_record_wins() {
        let poller = StatusPoller::new(Arc::new(ScriptedStatus(vec![
            record("job-1", "PENDING"),
            record("job-1", "SUCCESSFUL"),
        ])));
        let outcome = poller
            .fetch(&TrackingId::from("job-1"), IntentKind::RawTransaction)
            .await
            .unwrap();
        assert_eq!(outcome, StatusOutcome::Found(record("job-1", "PENDING")));
    }

    #[tokio::test]
    async fn test_empty_response_is_not_found_not_error() {
        let poller = StatusPoller::new(Arc::new(ScriptedStatus(Vec::new())));
        let outcome = poller
            .fetch(&TrackingId::from("job-1"), IntentKind::RawTransaction)
            .await
            .unwrap();
        assert_eq!(outcome, StatusOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_transport_error_is_distinguished() {
        let poller = StatusPoller::new(Arc::new(BrokenStatus));
        let err = poller
            .fetch(&TrackingId::from("job-1"), IntentKind::RawTransaction)
            .await
            .unwrap_err();
        assert!(matches!(err, IntentError::StatusFetch(_)));
    }
}
