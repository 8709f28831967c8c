//! Gateways between the lifecycle and the external capability providers.
//!
//! # Data Flow
//! ```text
//! UnsignedOperation → signing.rs   (SignerCapability)   → SignedOperation
//! SignedOperation   → execution.rs (ExecutorCapability) → TrackingId
//! TrackingId        → status.rs    (StatusCapability)   → IntentStatusRecord
//! ```
//!
//! # Design Decisions
//! - Gateways are single-attempt pass-throughs; retry policy belongs to the
//!   orchestrator, which re-invokes with the identical cached payload
//! - Capability errors are normalized into the lifecycle error taxonomy,
//!   tagged with the stage they occurred in
//! - Zero status records is a legitimate transient outcome, distinct from
//!   a transport error

pub mod capabilities;
pub mod execution;
pub mod http;
pub mod signing;
pub mod status;
pub mod types;

pub use capabilities::{
    CapabilityBundle, CatalogCapability, ExecutorCapability, SignerCapability, StatusCapability,
};
pub use execution::ExecutionGateway;
pub use signing::SigningGateway;
pub use status::{StatusOutcome, StatusPoller};
pub use types::{GatewayError, IntentStatus, IntentStatusRecord, TrackingId};
