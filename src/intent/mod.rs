//! Intent drafts and per-kind encoders.
//!
//! # Data Flow
//! ```text
//! user-entered fields
//!     → IntentDraft (kind-specific variant, mutable until submitted)
//!     → encoder (validate + encode, pure)
//!     → UnsignedOperation (immutable, consumed only by the signing gateway)
//! ```
//!
//! # Design Decisions
//! - One encoder per transaction kind behind a single trait; the
//!   orchestrator never inspects which encoder is plugged in
//! - Encoding is a pure transform: same draft, same operation shape
//! - Missing fields are validation errors; malformed field syntax is an
//!   encoding error

pub mod aptos;
pub mod evm;
pub mod nft;
pub mod types;

use std::sync::Arc;

pub use aptos::AptosCallEncoder;
pub use evm::EvmCallEncoder;
pub use nft::{NftMintEncoder, NftTransferEncoder};
pub use types::{
    parse_argument_list, AptosCallDraft, EvmCallDraft, IntentDraft, IntentKind, NftMintDraft,
    NftTransferDraft, SignedOperation, UnsignedOperation,
};

use crate::error::{IntentError, IntentResult};

/// Converts a validated draft into a chain-specific unsigned operation.
///
/// Implementations must be pure: no side effects, deterministic output.
pub trait IntentBuilder: Send + Sync {
    /// The backend intent-type label this encoder produces.
    fn kind(&self) -> IntentKind;

    /// Validate the draft and encode it into an unsigned operation.
    fn build(&self, draft: &IntentDraft) -> IntentResult<UnsignedOperation>;
}

/// Select the encoder matching a draft's variant.
pub fn encoder_for(draft: &IntentDraft) -> Arc<dyn IntentBuilder> {
    match draft {
        IntentDraft::EvmCall(_) => Arc::new(EvmCallEncoder),
        IntentDraft::AptosCall(_) => Arc::new(AptosCallEncoder),
        IntentDraft::NftTransfer(_) => Arc::new(NftTransferEncoder),
        IntentDraft::NftMint(_) => Arc::new(NftMintEncoder),
    }
}

/// Reject an empty or whitespace-only required field.
pub(crate) fn require<'a>(field: &str, value: &'a str) -> IntentResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(IntentError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Reject a draft handed to an encoder of a different kind.
pub(crate) fn kind_mismatch(expected: &str, draft: &IntentDraft) -> IntentError {
    IntentError::Validation(format!(
        "expected a {expected} draft, got {}",
        draft.kind()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_trims_and_rejects_empty() {
        assert_eq!(require("field", "  value  ").unwrap(), "value");
        assert!(matches!(
            require("recipient", "   "),
            Err(IntentError::Validation(msg)) if msg.contains("recipient")
        ));
    }

    #[test]
    fn test_encoder_selection_matches_draft_kind() {
        let draft = IntentDraft::AptosCall(AptosCallDraft {
            caip_id: "aptos:testnet".into(),
            function: "0x1::coin::transfer".into(),
            type_arguments: String::new(),
            function_arguments: String::new(),
        });
        assert_eq!(encoder_for(&draft).kind(), IntentKind::RawTransaction);

        let draft = IntentDraft::NftMint(NftMintDraft {
            caip_id: "eip155:137".into(),
            name: "c".into(),
            description: String::new(),
            metadata_uri: "https://example.com/meta.json".into(),
            symbol: "C".into(),
            nft_type: "721".into(),
        });
        assert_eq!(
            encoder_for(&draft).kind(),
            IntentKind::NftCreateCollection
        );
    }
}
