//! Wallet transaction-intent lifecycle library.
//!
//! # Architecture Overview
//!
//! ```text
//! user input
//!     → intent (drafts + per-kind encoders)     IntentDraft → UnsignedOperation
//!     → gateway::signing                        UnsignedOperation → SignedOperation
//!     → gateway::execution                      SignedOperation → TrackingId
//!     → gateway::status (pull-based poller)     TrackingId → IntentStatusRecord
//!     → lifecycle (orchestrator state machine)  records every stage result
//! ```
//!
//! The orchestrator owns the current phase and the 1:1:1:1 artifact chain
//! (draft, unsigned, signed, tracking id). Stage transitions are strictly
//! sequential per instance; independent instances share no state.
//!
//! Signer, executor, status lookup and network catalog are opaque
//! capabilities (see [`gateway::capabilities`]); the sandbox module ships an
//! in-memory provider for demos and tests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod explorer;
pub mod gateway;
pub mod intent;
pub mod lifecycle;
pub mod observability;
pub mod sandbox;

pub use config::schema::SdkConfig;
pub use error::{IntentError, IntentResult};
pub use intent::{IntentDraft, IntentKind};
pub use lifecycle::LifecycleOrchestrator;
