//! Lifecycle orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! IntentDraft
//!     → state.rs (phase machine + artifact chain)
//!     → orchestrator.rs (stage transitions, in-flight guard, stale guard)
//! ```
//!
//! # Design Decisions
//! - One orchestrator per user-initiated transaction; instances share no
//!   mutable state
//! - Stage transitions are strictly sequential: stage N+1 cannot begin
//!   before stage N's asynchronous call resolves
//! - Reset never cancels an in-flight request; a late result is dropped
//!   via a per-instance generation counter

pub mod orchestrator;
pub mod state;

pub use orchestrator::LifecycleOrchestrator;
pub use state::{LifecycleSnapshot, Phase, Resolution, Stage};
