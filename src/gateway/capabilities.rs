//! Opaque capability traits provided by the surrounding application.
//!
//! The core never reads ambient state; everything external arrives through
//! this bundle. Implementations decide transport, authentication and
//! timeout policy. The core only distinguishes succeeded, failed and
//! not-yet-known outcomes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{AccountDescriptor, NetworkDescriptor};
use crate::gateway::types::{GatewayError, IntentStatusRecord, TrackingId};
use crate::intent::{IntentKind, SignedOperation, UnsignedOperation};

/// External signer for unsigned operations. May reject.
#[async_trait]
pub trait SignerCapability: Send + Sync {
    async fn sign(&self, op: &UnsignedOperation) -> Result<SignedOperation, GatewayError>;
}

/// Submits signed operations for execution, returning a tracking id.
#[async_trait]
pub trait ExecutorCapability: Send + Sync {
    async fn execute(&self, op: &SignedOperation) -> Result<TrackingId, GatewayError>;
}

/// Order-status lookup. Returns zero or more records; zero means the
/// backend has not indexed the intent yet.
#[async_trait]
pub trait StatusCapability: Send + Sync {
    async fn fetch_status(
        &self,
        tracking_id: &TrackingId,
        kind: IntentKind,
    ) -> Result<Vec<IntentStatusRecord>, GatewayError>;
}

/// Network and account lookup used to build the chain catalog.
#[async_trait]
pub trait CatalogCapability: Send + Sync {
    async fn fetch_networks(&self) -> Result<Vec<NetworkDescriptor>, GatewayError>;
    async fn fetch_accounts(&self) -> Result<Vec<AccountDescriptor>, GatewayError>;
}

/// The capability bundle handed to each lifecycle instance.
#[derive(Clone)]
pub struct CapabilityBundle {
    pub signer: Arc<dyn SignerCapability>,
    pub executor: Arc<dyn ExecutorCapability>,
    pub status: Arc<dyn StatusCapability>,
}
