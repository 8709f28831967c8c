//! Raw EVM call encoder.

use alloy::primitives::{Address, Bytes, U256};
use serde_json::json;

use crate::error::{IntentError, IntentResult};
use crate::intent::types::{IntentDraft, IntentKind, UnsignedOperation};
use crate::intent::{kind_mismatch, require, IntentBuilder};

/// Encodes [`crate::intent::EvmCallDraft`] drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmCallEncoder;

impl IntentBuilder for EvmCallEncoder {
    fn kind(&self) -> IntentKind {
        IntentKind::RawTransaction
    }

    fn build(&self, draft: &IntentDraft) -> IntentResult<UnsignedOperation> {
        let IntentDraft::EvmCall(draft) = draft else {
            return Err(kind_mismatch("raw EVM call", draft));
        };

        let caip_id = require("network", &draft.caip_id)?;
        let from = parse_address("from", require("from", &draft.from)?)?;
        let to = parse_address("to", require("to", &draft.to)?)?;

        let value = match draft.value.trim() {
            "" => U256::ZERO,
            raw => raw.parse::<U256>().map_err(|e| {
                IntentError::Encoding(format!("value '{raw}' is not a valid amount: {e}"))
            })?,
        };

        let data = match draft.data.trim() {
            "" => Bytes::new(),
            raw => raw.parse::<Bytes>().map_err(|e| {
                IntentError::Encoding(format!("data '{raw}' is not valid hex: {e}"))
            })?,
        };

        Ok(UnsignedOperation {
            kind: self.kind(),
            caip_id: caip_id.to_string(),
            payload: json!({
                "caip2Id": caip_id,
                "transaction": {
                    "from": from.to_string(),
                    "to": to.to_string(),
                    "value": value.to_string(),
                    "data": data.to_string(),
                },
            }),
        })
    }
}

fn parse_address(field: &str, raw: &str) -> IntentResult<Address> {
    raw.parse::<Address>().map_err(|e| {
        IntentError::Encoding(format!("{field} '{raw}' is not a valid address: {e}"))
    })
}
