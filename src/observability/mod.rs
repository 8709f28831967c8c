//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`; initialization is the binary's job,
//!   the library only emits events
//! - Metrics are cheap counter increments, exposed through a Prometheus
//!   endpoint when the binary enables it

pub mod logging;
pub mod metrics;
