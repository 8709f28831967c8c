//! Raw Aptos entry-function call encoder.

use serde_json::json;

use crate::error::{IntentError, IntentResult};
use crate::intent::types::{
    parse_argument_list, IntentDraft, IntentKind, UnsignedOperation,
};
use crate::intent::{kind_mismatch, require, IntentBuilder};

/// Encodes [`crate::intent::AptosCallDraft`] drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AptosCallEncoder;

impl IntentBuilder for AptosCallEncoder {
    fn kind(&self) -> IntentKind {
        IntentKind::RawTransaction
    }

    fn build(&self, draft: &IntentDraft) -> IntentResult<UnsignedOperation> {
        let IntentDraft::AptosCall(draft) = draft else {
            return Err(kind_mismatch("raw Aptos call", draft));
        };

        let caip_id = require("network", &draft.caip_id)?;
        let function = require("function", &draft.function)?;

        // Entry functions are qualified: at least `module::function`.
        let segments: Vec<&str> = function.split("::").collect();
        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(IntentError::Encoding(format!(
                "function '{function}' must be qualified like module::function"
            )));
        }

        let type_arguments = parse_argument_list(&draft.type_arguments);
        let function_arguments = parse_argument_list(&draft.function_arguments);

        Ok(UnsignedOperation {
            kind: self.kind(),
            caip_id: caip_id.to_string(),
            payload: json!({
                "caip2Id": caip_id,
                "transactions": [{
                    "function": function,
                    "typeArguments": type_arguments,
                    "functionArguments": function_arguments,
                }],
            }),
        })
    }
}
