//! Signing gateway: unsigned operation in, signed operation out.

use std::sync::Arc;

use crate::error::{IntentError, IntentResult};
use crate::gateway::capabilities::SignerCapability;
use crate::intent::{SignedOperation, UnsignedOperation};

/// Single-attempt pass-through to the external signer with error
/// normalization. Retry is the orchestrator's decision.
#[derive(Clone)]
pub struct SigningGateway {
    signer: Arc<dyn SignerCapability>,
}

impl SigningGateway {
    pub fn new(signer: Arc<dyn SignerCapability>) -> Self {
        Self { signer }
    }

    pub async fn sign(&self, op: &UnsignedOperation) -> IntentResult<SignedOperation> {
        match self.signer.sign(op).await {
            Ok(signed) => {
                tracing::info!(kind = %op.kind, caip_id = %op.caip_id, "operation signed");
                Ok(signed)
            }
            Err(e) => {
                tracing::warn!(kind = %op.kind, error = %e, "signer rejected operation");
                Err(IntentError::SigningRejected(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::types::GatewayError;
    use crate::intent::IntentKind;
    use async_trait::async_trait;

    struct EchoSigner;

    #[async_trait]
    impl SignerCapability for EchoSigner {
        async fn sign(&self, op: &UnsignedOperation) -> Result<SignedOperation, GatewayError> {
            Ok(SignedOperation {
                operation: op.clone(),
                signature: "0xsig".to_string(),
            })
        }
    }

    struct CancellingSigner;

    #[async_trait]
    impl SignerCapability for CancellingSigner {
        async fn sign(&self, _: &UnsignedOperation) -> Result<SignedOperation, GatewayError> {
            Err(GatewayError::Rejected("user cancelled".to_string()))
        }
    }

    fn op() -> UnsignedOperation {
        UnsignedOperation {
            kind: IntentKind::RawTransaction,
            caip_id: "eip155:1".into(),
            payload: serde_json::json!({}),
        }
    }

    #[tokio::test]
    async fn test_sign_passes_operation_through() {
        let gateway = SigningGateway::new(Arc::new(EchoSigner));
        let signed = gateway.sign(&op()).await.unwrap();
        assert_eq!(signed.operation, op());
        assert_eq!(signed.signature, "0xsig");
    }

    #[tokio::test]
    async fn test_rejection_is_normalized() {
        let gateway = SigningGateway::new(Arc::new(CancellingSigner));
        let err = gateway.sign(&op()).await.unwrap_err();
        assert!(matches!(
            err,
            IntentError::SigningRejected(msg) if msg.contains("user cancelled")
        ));
    }
}
