//! The per-intent lifecycle state machine.
//!
//! # Responsibilities
//! - Drive draft → built → signed → submitted → polled transitions
//! - Record every stage's result for display and recovery
//! - Enforce at most one in-flight call per instance
//! - Drop results that resolve after a reset (stale-response guard)
//!
//! # Design Decisions
//! - Failures return the instance to a well-defined non-terminal state
//!   with the last-known-good artifacts intact; retries reuse the cached
//!   payload without rebuilding earlier stages
//! - Only the `SUCCESSFUL` status sentinel is terminal; any other status
//!   (and an unindexed intent) stalls the instance for manual refresh,
//!   with no retry limit
//! - The state mutex is held only across synchronous sections, never
//!   across an await

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{IntentError, IntentResult};
use crate::gateway::capabilities::CapabilityBundle;
use crate::gateway::execution::ExecutionGateway;
use crate::gateway::signing::SigningGateway;
use crate::gateway::status::{StatusOutcome, StatusPoller};
use crate::gateway::types::TrackingId;
use crate::intent::{IntentBuilder, IntentDraft, IntentKind, SignedOperation, UnsignedOperation};
use crate::lifecycle::state::{InstanceState, LifecycleSnapshot, Phase, Resolution, Stage};
use crate::observability::metrics;

/// State machine tying builder, gateways and poller together for a single
/// user-initiated transaction.
pub struct LifecycleOrchestrator {
    builder: Arc<dyn IntentBuilder>,
    signing: SigningGateway,
    execution: ExecutionGateway,
    poller: StatusPoller,
    state: Mutex<InstanceState>,
}

impl LifecycleOrchestrator {
    /// Create an instance for one transaction kind, wired to the given
    /// capability bundle.
    pub fn new(builder: Arc<dyn IntentBuilder>, capabilities: CapabilityBundle) -> Self {
        Self {
            builder,
            signing: SigningGateway::new(capabilities.signer),
            execution: ExecutionGateway::new(capabilities.executor),
            poller: StatusPoller::new(capabilities.status),
            state: Mutex::new(InstanceState::default()),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    /// Read-only projection of the instance for display.
    pub fn snapshot(&self) -> LifecycleSnapshot {
        self.lock().snapshot()
    }

    /// Validate and encode a draft. Valid only in `Draft`; on failure the
    /// instance stays in `Draft` for the user to correct input.
    pub fn submit_draft(&self, draft: IntentDraft) -> IntentResult<UnsignedOperation> {
        let mut state = self.lock();
        if let Some(stage) = state.in_flight {
            return Err(IntentError::Busy { stage });
        }
        if state.phase != Phase::Draft {
            return Err(IntentError::InvalidPhase {
                phase: state.phase,
                trigger: Stage::Build,
            });
        }

        match self.builder.build(&draft) {
            Ok(unsigned) => {
                tracing::info!(kind = %unsigned.kind, caip_id = %unsigned.caip_id, "intent built");
                metrics::record_stage("build", true);
                // A new draft starts a new generation, like reset does.
                state.generation = state.generation.wrapping_add(1);
                state.draft = Some(draft);
                state.unsigned = Some(unsigned.clone());
                state.phase = Phase::Built;
                state.last_error = None;
                Ok(unsigned)
            }
            Err(e) => {
                tracing::debug!(error = %e, "draft rejected");
                metrics::record_stage("build", false);
                state.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Send the built operation to the signer. Valid only in `Built`; on
    /// rejection the instance stays `Built` and may retry.
    pub async fn confirm_sign(&self) -> IntentResult<SignedOperation> {
        let (unsigned, generation) = {
            let mut state = self.lock();
            let unsigned = Self::stage_payload(&state, Stage::Sign, Phase::Built, |s| {
                s.unsigned.clone()
            })?;
            state.in_flight = Some(Stage::Sign);
            (unsigned, state.generation)
        };

        let result = self.signing.sign(&unsigned).await;
        metrics::record_stage("sign", result.is_ok());

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!("stale sign result ignored after reset");
            return Err(IntentError::InvalidPhase {
                phase: state.phase,
                trigger: Stage::Sign,
            });
        }
        state.in_flight = None;
        match result {
            Ok(signed) => {
                state.signed = Some(signed.clone());
                state.phase = Phase::Signed;
                state.last_error = None;
                Ok(signed)
            }
            Err(e) => {
                state.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Submit the signed operation for execution, then fetch its status
    /// once. Valid only in `Signed`.
    ///
    /// A submission failure keeps the instance `Signed` with the signed
    /// payload intact for an idempotent retry. A failure of the automatic
    /// status fetch is not a submission failure: the instance stalls
    /// holding its tracking id.
    pub async fn confirm_execute(&self) -> IntentResult<TrackingId> {
        let (signed, generation) = {
            let mut state = self.lock();
            let signed = Self::stage_payload(&state, Stage::Execute, Phase::Signed, |s| {
                s.signed.clone()
            })?;
            state.in_flight = Some(Stage::Execute);
            (signed, state.generation)
        };

        let kind = signed.operation.kind;
        let result = self.execution.execute(&signed).await;
        metrics::record_stage("execute", result.is_ok());

        let tracking_id = {
            let mut state = self.lock();
            if state.generation != generation {
                tracing::debug!("stale execute result ignored after reset");
                return Err(IntentError::InvalidPhase {
                    phase: state.phase,
                    trigger: Stage::Execute,
                });
            }
            state.in_flight = None;
            match result {
                Ok(tracking_id) => {
                    state.tracking_id = Some(tracking_id.clone());
                    state.phase = Phase::Submitted;
                    state.last_error = None;
                    // Begin the automatic one-shot poll under the same lock
                    // so no other trigger can slip in between.
                    state.in_flight = Some(Stage::Poll);
                    state.phase = Phase::Polling;
                    tracking_id
                }
                Err(e) => {
                    state.last_error = Some(e.clone());
                    return Err(e);
                }
            }
        };

        if let Err(e) = self.finish_poll(&tracking_id, kind, generation).await {
            tracing::debug!(error = %e, "automatic status fetch failed; stalled");
        }
        Ok(tracking_id)
    }

    /// Manually re-fetch the intent's status. Valid only while `Stalled`.
    ///
    /// A fetch error keeps the instance stalled and preserves the prior
    /// status record; refresh may be retried indefinitely.
    pub async fn refresh(&self) -> IntentResult<Phase> {
        let (tracking_id, kind, generation) = {
            let mut state = self.lock();
            if let Some(stage) = state.in_flight {
                return Err(IntentError::Busy { stage });
            }
            if state.phase != Phase::Stalled {
                return Err(IntentError::InvalidPhase {
                    phase: state.phase,
                    trigger: Stage::Poll,
                });
            }
            let (Some(tracking_id), Some(unsigned)) =
                (state.tracking_id.clone(), state.unsigned.as_ref())
            else {
                return Err(IntentError::InvalidPhase {
                    phase: state.phase,
                    trigger: Stage::Poll,
                });
            };
            let kind = unsigned.kind;
            state.in_flight = Some(Stage::Poll);
            state.phase = Phase::Polling;
            (tracking_id, kind, state.generation)
        };

        self.finish_poll(&tracking_id, kind, generation).await
    }

    /// Discard all artifacts and return to `Draft`.
    ///
    /// Does not cancel requests already sent; their late results are
    /// dropped by the generation guard.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.generation = state.generation.wrapping_add(1);
        state.clear();
        tracing::debug!(generation = state.generation, "lifecycle reset");
    }

    /// Run one status fetch whose in-flight slot was already claimed, then
    /// evaluate the outcome.
    async fn finish_poll(
        &self,
        tracking_id: &TrackingId,
        kind: IntentKind,
        generation: u64,
    ) -> IntentResult<Phase> {
        let outcome = self.poller.fetch(tracking_id, kind).await;

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!("stale status result ignored after reset");
            return Err(IntentError::InvalidPhase {
                phase: state.phase,
                trigger: Stage::Poll,
            });
        }
        state.in_flight = None;
        match outcome {
            Ok(StatusOutcome::Found(record)) => {
                let phase = if record.status.is_successful() {
                    Phase::Resolved(Resolution::Success)
                } else {
                    Phase::Stalled
                };
                tracing::info!(
                    tracking_id = %tracking_id,
                    status = %record.status,
                    phase = %phase,
                    "intent status evaluated"
                );
                state.record = Some(record);
                state.phase = phase;
                state.last_error = None;
                Ok(phase)
            }
            Ok(StatusOutcome::NotFound) => {
                // Not indexed yet; keep whatever record we had.
                state.phase = Phase::Stalled;
                Ok(Phase::Stalled)
            }
            Err(e) => {
                state.phase = Phase::Stalled;
                state.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Guard a stage trigger: no call in flight, expected phase, payload
    /// present. A phase that lost its payload is treated as an invalid
    /// trigger; by construction it cannot happen.
    fn stage_payload<T>(
        state: &InstanceState,
        trigger: Stage,
        expected: Phase,
        payload: impl Fn(&InstanceState) -> Option<T>,
    ) -> IntentResult<T> {
        if let Some(stage) = state.in_flight {
            return Err(IntentError::Busy { stage });
        }
        if state.phase != expected {
            return Err(IntentError::InvalidPhase {
                phase: state.phase,
                trigger,
            });
        }
        payload(state).ok_or(IntentError::InvalidPhase {
            phase: state.phase,
            trigger,
        })
    }

    /// Lock the instance state, recovering from a poisoned mutex: state is
    /// plain data and remains consistent even if a panic interrupted a
    /// holder.
    fn lock(&self) -> MutexGuard<'_, InstanceState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
