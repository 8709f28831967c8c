//! Draft, operation and kind definitions shared by all encoders.

use serde::{Deserialize, Serialize};

/// Backend intent-type labels.
///
/// Raw EVM and raw Aptos calls share the same backend label; the payload
/// shape distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentKind {
    #[serde(rename = "RAW_TRANSACTION")]
    RawTransaction,
    #[serde(rename = "NFT_TRANSFER")]
    NftTransfer,
    #[serde(rename = "NFT_CREATE_COLLECTION")]
    NftCreateCollection,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::RawTransaction => "RAW_TRANSACTION",
            IntentKind::NftTransfer => "NFT_TRANSFER",
            IntentKind::NftCreateCollection => "NFT_CREATE_COLLECTION",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-entered, kind-specific fields plus the selected network.
///
/// Mutable until submitted to the orchestrator; discarded on reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentDraft {
    EvmCall(EvmCallDraft),
    AptosCall(AptosCallDraft),
    NftTransfer(NftTransferDraft),
    NftMint(NftMintDraft),
}

impl IntentDraft {
    /// Backend label for the draft's transaction kind.
    pub fn kind(&self) -> IntentKind {
        match self {
            IntentDraft::EvmCall(_) | IntentDraft::AptosCall(_) => IntentKind::RawTransaction,
            IntentDraft::NftTransfer(_) => IntentKind::NftTransfer,
            IntentDraft::NftMint(_) => IntentKind::NftCreateCollection,
        }
    }

    /// CAIP-2 id of the selected network.
    pub fn caip_id(&self) -> &str {
        match self {
            IntentDraft::EvmCall(d) => &d.caip_id,
            IntentDraft::AptosCall(d) => &d.caip_id,
            IntentDraft::NftTransfer(d) => &d.caip_id,
            IntentDraft::NftMint(d) => &d.caip_id,
        }
    }
}

/// Raw EVM call parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvmCallDraft {
    pub caip_id: String,
    pub from: String,
    pub to: String,
    /// Native token amount in wei, decimal. Empty means zero.
    pub value: String,
    /// Optional hex-encoded call data.
    pub data: String,
}

/// Raw Aptos entry-function call parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AptosCallDraft {
    pub caip_id: String,
    /// Fully qualified entry function, e.g. `0x1::coin::transfer`.
    pub function: String,
    /// Comma-separated type arguments.
    pub type_arguments: String,
    /// Comma-separated function arguments.
    pub function_arguments: String,
}

/// NFT transfer parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftTransferDraft {
    pub caip_id: String,
    pub collection_address: String,
    pub nft_id: String,
    pub recipient: String,
    /// Token amount, relevant for 1155 collections. Empty means one.
    pub amount: String,
    /// Token standard: `721` or `1155`.
    pub nft_type: String,
}

/// NFT collection creation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftMintDraft {
    pub caip_id: String,
    pub name: String,
    pub description: String,
    pub metadata_uri: String,
    pub symbol: String,
    /// Token standard: `721` or `1155`.
    pub nft_type: String,
}

/// Chain-specific payload produced by an encoder.
///
/// Immutable once produced; only the signing gateway consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedOperation {
    pub kind: IntentKind,
    pub caip_id: String,
    /// Encoder-specific structured payload, mirrored from the backend's
    /// wire vocabulary.
    pub payload: serde_json::Value,
}

/// A signed operation ready for submission.
///
/// Immutable; only the execution gateway consumes it. May be resubmitted
/// unchanged after a failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedOperation {
    pub operation: UnsignedOperation,
    pub signature: String,
}

/// Split a comma-separated argument list: trim tokens, drop empty ones.
///
/// An all-empty input is a valid zero-argument list, never an error.
pub fn parse_argument_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
