//! Shared capability fakes for integration testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use intent_flow::gateway::{
    CapabilityBundle, ExecutorCapability, GatewayError, IntentStatus, IntentStatusRecord,
    SignerCapability, StatusCapability, TrackingId,
};
use intent_flow::intent::{
    AptosCallDraft, IntentDraft, IntentKind, SignedOperation, UnsignedOperation,
};

/// Signer that always succeeds with a fixed signature.
pub struct StaticSigner;

#[async_trait]
impl SignerCapability for StaticSigner {
    async fn sign(&self, op: &UnsignedOperation) -> Result<SignedOperation, GatewayError> {
        Ok(SignedOperation {
            operation: op.clone(),
            signature: "0xsignature".to_string(),
        })
    }
}

/// Signer that blocks until a permit is released, for in-flight and
/// stale-response tests.
pub struct GateSigner {
    permits: Arc<Semaphore>,
}

impl GateSigner {
    /// Returns the signer and a handle; call `add_permits(1)` on the
    /// handle to let one pending sign call complete.
    pub fn new() -> (Self, Arc<Semaphore>) {
        let permits = Arc::new(Semaphore::new(0));
        (Self { permits: permits.clone() }, permits)
    }
}

#[async_trait]
impl SignerCapability for GateSigner {
    async fn sign(&self, op: &UnsignedOperation) -> Result<SignedOperation, GatewayError> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| GatewayError::Rejected(e.to_string()))?;
        permit.forget();
        Ok(SignedOperation {
            operation: op.clone(),
            signature: "0xgated".to_string(),
        })
    }
}

/// Executor that replays a script of results and records every payload
/// it was handed.
pub struct ScriptedExecutor {
    script: Mutex<VecDeque<Result<TrackingId, GatewayError>>>,
    pub seen: Mutex<Vec<SignedOperation>>,
}

impl ScriptedExecutor {
    pub fn new(script: Vec<Result<TrackingId, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ExecutorCapability for ScriptedExecutor {
    async fn execute(&self, op: &SignedOperation) -> Result<TrackingId, GatewayError> {
        self.seen.lock().unwrap().push(op.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(TrackingId::from("job-123")))
    }
}

/// Status capability replaying a script of responses; once the script is
/// exhausted it reports an unindexed intent.
pub struct ScriptedStatus {
    script: Mutex<VecDeque<Result<Vec<IntentStatusRecord>, GatewayError>>>,
}

impl ScriptedStatus {
    pub fn new(script: Vec<Result<Vec<IntentStatusRecord>, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
        })
    }
}

#[async_trait]
impl StatusCapability for ScriptedStatus {
    async fn fetch_status(
        &self,
        _: &TrackingId,
        _: IntentKind,
    ) -> Result<Vec<IntentStatusRecord>, GatewayError> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Vec::new()))
    }
}

/// Bundle arbitrary capability fakes.
pub fn bundle(
    signer: Arc<dyn SignerCapability>,
    executor: Arc<dyn ExecutorCapability>,
    status: Arc<dyn StatusCapability>,
) -> CapabilityBundle {
    CapabilityBundle { signer, executor, status }
}

/// The reference draft used across scenarios.
pub fn aptos_draft() -> IntentDraft {
    IntentDraft::AptosCall(AptosCallDraft {
        caip_id: "chain:1".to_string(),
        function: "mod::fn".to_string(),
        type_arguments: String::new(),
        function_arguments: "1,2".to_string(),
    })
}

/// Build a status record the way the backend reports them.
pub fn record(intent_id: &str, status: &str, hashes: &[&str]) -> IntentStatusRecord {
    IntentStatusRecord {
        intent_id: intent_id.to_string(),
        intent_type: IntentKind::RawTransaction,
        status: IntentStatus(status.to_string()),
        downstream_transaction_hash: hashes.iter().map(|h| h.to_string()).collect(),
        network_name: None,
    }
}
