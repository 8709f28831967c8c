//! NFT transfer and collection-creation encoders.

use alloy::primitives::Address;
use serde_json::json;
use url::Url;

use crate::error::{IntentError, IntentResult};
use crate::intent::types::{IntentDraft, IntentKind, UnsignedOperation};
use crate::intent::{kind_mismatch, require, IntentBuilder};

/// Encodes [`crate::intent::NftTransferDraft`] drafts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NftTransferEncoder;

impl IntentBuilder for NftTransferEncoder {
    fn kind(&self) -> IntentKind {
        IntentKind::NftTransfer
    }

    fn build(&self, draft: &IntentDraft) -> IntentResult<UnsignedOperation> {
        let IntentDraft::NftTransfer(draft) = draft else {
            return Err(kind_mismatch("NFT transfer", draft));
        };

        let caip_id = require("network", &draft.caip_id)?;
        let collection = require("collection address", &draft.collection_address)?;
        let nft_id = require("NFT id", &draft.nft_id)?;
        let recipient = require("recipient", &draft.recipient)?;
        let nft_type = parse_nft_type(&draft.nft_type)?;

        // Address syntax is only checkable on EVM networks.
        if caip_id.starts_with("eip155:") {
            check_evm_address("collection address", collection)?;
            check_evm_address("recipient", recipient)?;
        }

        let amount = match draft.amount.trim() {
            "" => 1u64,
            raw => raw.parse::<u64>().map_err(|e| {
                IntentError::Encoding(format!("amount '{raw}' is not a valid count: {e}"))
            })?,
        };

        Ok(UnsignedOperation {
            kind: self.kind(),
            caip_id: caip_id.to_string(),
            payload: json!({
                "caip2Id": caip_id,
                "collectionAddress": collection,
                "nftId": nft_id,
                "recipientWalletAddress": recipient,
                "amount": amount,
                "nftType": nft_type,
            }),
        })
    }
}

/// Encodes [`crate::intent::NftMintDraft`] drafts (collection creation).
#[derive(Debug, Clone, Copy, Default)]
pub struct NftMintEncoder;

impl IntentBuilder for NftMintEncoder {
    fn kind(&self) -> IntentKind {
        IntentKind::NftCreateCollection
    }

    fn build(&self, draft: &IntentDraft) -> IntentResult<UnsignedOperation> {
        let IntentDraft::NftMint(draft) = draft else {
            return Err(kind_mismatch("NFT collection creation", draft));
        };

        let caip_id = require("network", &draft.caip_id)?;
        let name = require("collection name", &draft.name)?;
        let symbol = require("symbol", &draft.symbol)?;
        let metadata_uri = require("metadata URI", &draft.metadata_uri)?;
        let nft_type = parse_nft_type(&draft.nft_type)?;

        Url::parse(metadata_uri).map_err(|e| {
            IntentError::Encoding(format!("metadata URI '{metadata_uri}' is invalid: {e}"))
        })?;

        Ok(UnsignedOperation {
            kind: self.kind(),
            caip_id: caip_id.to_string(),
            payload: json!({
                "caip2Id": caip_id,
                "name": name,
                "description": draft.description.trim(),
                "metadataUri": metadata_uri,
                "symbol": symbol,
                "type": nft_type,
            }),
        })
    }
}

/// Accepted token standards, with or without the ERC prefix.
fn parse_nft_type(raw: &str) -> IntentResult<&'static str> {
    match raw.trim() {
        "" => Err(IntentError::Validation("NFT type is required".to_string())),
        "721" | "ERC721" => Ok("721"),
        "1155" | "ERC1155" => Ok("1155"),
        other => Err(IntentError::Encoding(format!(
            "NFT type '{other}' is not supported (expected 721 or 1155)"
        ))),
    }
}

fn check_evm_address(field: &str, raw: &str) -> IntentResult<()> {
    raw.parse::<Address>().map_err(|e| {
        IntentError::Encoding(format!("{field} '{raw}' is not a valid address: {e}"))
    })?;
    Ok(())
}
