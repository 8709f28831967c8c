//! Wire-shaped types and error definitions for the capability layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intent::IntentKind;

/// Backend-issued handle identifying a submitted intent.
///
/// The sole key for all subsequent status queries; must exist before any
/// polling occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(pub String);

impl TrackingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TrackingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TrackingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised by capability providers before normalization.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The provider rejected the operation (includes user cancellation).
    #[error("rejected: {0}")]
    Rejected(String),

    /// Transport-level failure reaching the provider.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success response.
    #[error("backend error: {0}")]
    Backend(String),

    /// The response could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Intent status as reported by the order-status service.
///
/// The vocabulary is backend-defined and open-ended, so the value is kept
/// as the raw string; only the success sentinel is interpreted client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentStatus(pub String);

impl IntentStatus {
    pub const SUCCESSFUL: &'static str = "SUCCESSFUL";

    pub fn successful() -> Self {
        Self(Self::SUCCESSFUL.to_string())
    }

    /// The only terminal state the client recognizes.
    pub fn is_successful(&self) -> bool {
        self.0 == Self::SUCCESSFUL
    }
}

impl std::fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last-fetched snapshot of a submitted intent's status.
///
/// Mutable across polls: the same intent id may report a different status
/// and hash list on each fetch. Only the latest snapshot is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentStatusRecord {
    pub intent_id: String,
    pub intent_type: IntentKind,
    pub status: IntentStatus,
    #[serde(default)]
    pub downstream_transaction_hash: Vec<String>,
    #[serde(default)]
    pub network_name: Option<String>,
}

impl IntentStatusRecord {
    /// First downstream chain transaction hash, if the backend reported one.
    pub fn first_hash(&self) -> Option<&str> {
        self.downstream_transaction_hash.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_sentinel() {
        assert!(IntentStatus::successful().is_successful());
        assert!(!IntentStatus("PENDING".into()).is_successful());
        assert!(!IntentStatus("FAILED".into()).is_successful());
        // The sentinel is case-sensitive; the backend vocabulary is exact.
        assert!(!IntentStatus("successful".into()).is_successful());
    }

    #[test]
    fn test_record_wire_shape() {
        let json = r#"{
            "intentId": "job-123",
            "intentType": "RAW_TRANSACTION",
            "status": "SUCCESSFUL",
            "downstreamTransactionHash": ["0xabc"],
            "networkName": "Polygon"
        }"#;
        let record: IntentStatusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.intent_id, "job-123");
        assert_eq!(record.intent_type, IntentKind::RawTransaction);
        assert_eq!(record.first_hash(), Some("0xabc"));

        let round = serde_json::to_value(&record).unwrap();
        assert_eq!(round["intentId"], "job-123");
        assert_eq!(round["downstreamTransactionHash"][0], "0xabc");
    }

    #[test]
    fn test_record_tolerates_missing_hashes() {
        let json = r#"{"intentId": "j", "intentType": "NFT_TRANSFER", "status": "PENDING"}"#;
        let record: IntentStatusRecord = serde_json::from_str(json).unwrap();
        assert!(record.first_hash().is_none());
        assert!(record.network_name.is_none());
    }
}
