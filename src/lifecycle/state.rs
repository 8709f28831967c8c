//! Phase machine state and artifact chain.

use crate::error::IntentError;
use crate::gateway::types::{IntentStatusRecord, TrackingId};
use crate::intent::{IntentDraft, SignedOperation, UnsignedOperation};

/// Terminal resolution of a lifecycle instance.
///
/// Only `Success` is ever produced by status evaluation: the status
/// vocabulary is backend-defined and open-ended, so every non-success
/// status stalls the instance for manual refresh instead of failing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Success,
    Failed,
}

/// Lifecycle phase of a transaction intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Collecting user input; no artifacts exist yet.
    #[default]
    Draft,
    /// An unsigned operation has been built.
    Built,
    /// The operation has been signed.
    Signed,
    /// Submitted for execution; tracking id stored.
    Submitted,
    /// A status fetch is in flight.
    Polling,
    /// Awaiting manual refresh: last status was non-terminal, not yet
    /// indexed, or the fetch failed.
    Stalled,
    /// Terminal.
    Resolved(Resolution),
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Resolved(_))
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Draft => "draft",
            Phase::Built => "built",
            Phase::Signed => "signed",
            Phase::Submitted => "submitted",
            Phase::Polling => "polling",
            Phase::Stalled => "stalled",
            Phase::Resolved(Resolution::Success) => "resolved(success)",
            Phase::Resolved(Resolution::Failed) => "resolved(failed)",
        };
        f.write_str(label)
    }
}

/// Stage a trigger acts on, used for error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Build,
    Sign,
    Execute,
    Poll,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Stage::Build => "build",
            Stage::Sign => "sign",
            Stage::Execute => "execute",
            Stage::Poll => "poll",
        };
        f.write_str(label)
    }
}

/// Mutable per-instance state guarded by the orchestrator's mutex.
///
/// Exactly one draft, unsigned operation, signed operation and tracking id
/// exist at a time; each is produced by the stage before it and cleared
/// together on reset.
#[derive(Debug, Default)]
pub(crate) struct InstanceState {
    pub phase: Phase,
    pub draft: Option<IntentDraft>,
    pub unsigned: Option<UnsignedOperation>,
    pub signed: Option<SignedOperation>,
    pub tracking_id: Option<TrackingId>,
    pub record: Option<IntentStatusRecord>,
    pub last_error: Option<IntentError>,
    /// Bumped on reset; stage results committing against an older
    /// generation are dropped.
    pub generation: u64,
    /// Stage currently awaiting an asynchronous result, if any.
    pub in_flight: Option<Stage>,
}

impl InstanceState {
    /// Discard every artifact and return to `Draft`.
    pub fn clear(&mut self) {
        self.phase = Phase::Draft;
        self.draft = None;
        self.unsigned = None;
        self.signed = None;
        self.tracking_id = None;
        self.record = None;
        self.last_error = None;
        self.in_flight = None;
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        LifecycleSnapshot {
            phase: self.phase,
            unsigned: self.unsigned.clone(),
            signed: self.signed.clone(),
            tracking_id: self.tracking_id.clone(),
            record: self.record.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Read-only projection of an instance's current state, for display.
#[derive(Debug, Clone)]
pub struct LifecycleSnapshot {
    pub phase: Phase,
    pub unsigned: Option<UnsignedOperation>,
    pub signed: Option<SignedOperation>,
    pub tracking_id: Option<TrackingId>,
    pub record: Option<IntentStatusRecord>,
    pub last_error: Option<IntentError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_draft() {
        assert_eq!(Phase::default(), Phase::Draft);
        assert!(!Phase::Draft.is_terminal());
        assert!(Phase::Resolved(Resolution::Success).is_terminal());
        assert!(!Phase::Stalled.is_terminal());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Stalled.to_string(), "stalled");
        assert_eq!(
            Phase::Resolved(Resolution::Success).to_string(),
            "resolved(success)"
        );
    }

    #[test]
    fn test_clear_discards_artifacts_but_keeps_generation() {
        let mut state = InstanceState {
            generation: 7,
            phase: Phase::Stalled,
            tracking_id: Some("job-1".into()),
            in_flight: Some(Stage::Poll),
            ..Default::default()
        };
        state.clear();
        assert_eq!(state.phase, Phase::Draft);
        assert!(state.tracking_id.is_none());
        assert!(state.in_flight.is_none());
        assert_eq!(state.generation, 7);
    }
}
