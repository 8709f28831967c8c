//! In-memory capability provider for demos and tests.
//!
//! Signs by attaching a synthetic signature, issues UUID tracking ids and
//! walks every submitted job from `PENDING` to `SUCCESSFUL` after a
//! configurable number of status fetches. No network, no persistence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::{AccountDescriptor, NetworkDescriptor};
use crate::gateway::capabilities::{
    CapabilityBundle, CatalogCapability, ExecutorCapability, SignerCapability, StatusCapability,
};
use crate::gateway::types::{GatewayError, IntentStatus, IntentStatusRecord, TrackingId};
use crate::intent::{IntentKind, SignedOperation, UnsignedOperation};

struct Job {
    kind: IntentKind,
    fetches: u32,
    hash: String,
}

/// Deterministic sandbox backing all four capabilities.
pub struct SandboxProvider {
    jobs: Mutex<HashMap<String, Job>>,
    networks: Vec<NetworkDescriptor>,
    accounts: Vec<AccountDescriptor>,
    /// Number of fetches that report `PENDING` before a job settles.
    settle_after: u32,
}

impl SandboxProvider {
    pub fn new() -> Arc<Self> {
        Self::with_settle_after(1)
    }

    pub fn with_settle_after(settle_after: u32) -> Arc<Self> {
        let networks = vec![
            network("1", "eip155:1", "Ethereum", false),
            network("137", "eip155:137", "Polygon", true),
            network("mainnet", "aptos:mainnet", "Aptos", false),
            network("testnet", "aptos:testnet", "Aptos Testnet", true),
        ];
        let accounts = vec![
            account("eip155:137", "Polygon", "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            account("aptos:testnet", "Aptos Testnet", "0x1f2a"),
        ];
        Arc::new(Self {
            jobs: Mutex::new(HashMap::new()),
            networks,
            accounts,
            settle_after,
        })
    }

    /// Capability bundle view of this provider.
    pub fn bundle(self: &Arc<Self>) -> CapabilityBundle {
        CapabilityBundle {
            signer: self.clone(),
            executor: self.clone(),
            status: self.clone(),
        }
    }

    fn lock_jobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, Job>> {
        self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn network(
    chain_id: &str,
    caip_id: &str,
    name: &str,
    sponsorship_enabled: bool,
) -> NetworkDescriptor {
    NetworkDescriptor {
        chain_id: chain_id.to_string(),
        caip_id: caip_id.to_string(),
        network_name: name.to_string(),
        sponsorship_enabled,
    }
}

fn account(caip_id: &str, network_name: &str, address: &str) -> AccountDescriptor {
    AccountDescriptor {
        caip_id: caip_id.to_string(),
        network_name: network_name.to_string(),
        address: address.to_string(),
    }
}

#[async_trait]
impl SignerCapability for SandboxProvider {
    async fn sign(&self, op: &UnsignedOperation) -> Result<SignedOperation, GatewayError> {
        Ok(SignedOperation {
            operation: op.clone(),
            signature: format!("0x{}", Uuid::new_v4().simple()),
        })
    }
}

#[async_trait]
impl ExecutorCapability for SandboxProvider {
    async fn execute(&self, op: &SignedOperation) -> Result<TrackingId, GatewayError> {
        let id = Uuid::new_v4().to_string();
        self.lock_jobs().insert(
            id.clone(),
            Job {
                kind: op.operation.kind,
                fetches: 0,
                hash: format!("0x{}", Uuid::new_v4().simple()),
            },
        );
        Ok(TrackingId(id))
    }
}

#[async_trait]
impl StatusCapability for SandboxProvider {
    async fn fetch_status(
        &self,
        tracking_id: &TrackingId,
        _kind: IntentKind,
    ) -> Result<Vec<IntentStatusRecord>, GatewayError> {
        let mut jobs = self.lock_jobs();
        let Some(job) = jobs.get_mut(tracking_id.as_str()) else {
            // Unknown id: not indexed, not an error.
            return Ok(Vec::new());
        };
        job.fetches += 1;

        let settled = job.fetches > self.settle_after;
        Ok(vec![IntentStatusRecord {
            intent_id: tracking_id.as_str().to_string(),
            intent_type: job.kind,
            status: if settled {
                IntentStatus::successful()
            } else {
                IntentStatus("PENDING".to_string())
            },
            downstream_transaction_hash: if settled { vec![job.hash.clone()] } else { Vec::new() },
            network_name: None,
        }])
    }
}

#[async_trait]
impl CatalogCapability for SandboxProvider {
    async fn fetch_networks(&self) -> Result<Vec<NetworkDescriptor>, GatewayError> {
        Ok(self.networks.clone())
    }

    async fn fetch_accounts(&self) -> Result<Vec<AccountDescriptor>, GatewayError> {
        Ok(self.accounts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unsigned() -> UnsignedOperation {
        UnsignedOperation {
            kind: IntentKind::RawTransaction,
            caip_id: "eip155:137".into(),
            payload: json!({}),
        }
    }

    #[tokio::test]
    async fn test_jobs_settle_after_configured_fetches() {
        let sandbox = SandboxProvider::with_settle_after(2);
        let signed = sandbox.sign(&unsigned()).await.unwrap();
        let id = sandbox.execute(&signed).await.unwrap();

        for _ in 0..2 {
            let records = sandbox
                .fetch_status(&id, IntentKind::RawTransaction)
                .await
                .unwrap();
            assert_eq!(records[0].status, IntentStatus("PENDING".into()));
            assert!(records[0].first_hash().is_none());
        }

        let records = sandbox
            .fetch_status(&id, IntentKind::RawTransaction)
            .await
            .unwrap();
        assert!(records[0].status.is_successful());
        assert!(records[0].first_hash().is_some());
    }

    #[tokio::test]
    async fn test_unknown_job_is_not_indexed() {
        let sandbox = SandboxProvider::new();
        let records = sandbox
            .fetch_status(&TrackingId::from("missing"), IntentKind::NftTransfer)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_contains_both_namespaces() {
        let sandbox = SandboxProvider::new();
        let networks = sandbox.fetch_networks().await.unwrap();
        assert!(networks.iter().any(|n| n.namespace() == "eip155"));
        assert!(networks.iter().any(|n| n.namespace() == "aptos"));
    }
}
