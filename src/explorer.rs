//! Explorer URL resolution for resolved intents.
//!
//! Pure projection of a status record onto a human-viewable transaction
//! link; the explorer mapping is keyed by the network's CAIP-2 namespace.

use url::Url;

use crate::catalog::NetworkDescriptor;
use crate::gateway::types::IntentStatusRecord;

/// Map a status record to a block-explorer link for its first downstream
/// transaction hash. Returns `None` when no hash was reported or the
/// namespace has no known explorer.
pub fn explorer_url(record: &IntentStatusRecord, network: &NetworkDescriptor) -> Option<Url> {
    let hash = record.first_hash()?;
    let raw = match network.namespace() {
        "eip155" => format!("https://etherscan.io/tx/{hash}"),
        "aptos" => format!("https://explorer.aptoslabs.com/txn/{hash}"),
        "solana" => format!("https://solscan.io/tx/{hash}"),
        _ => return None,
    };
    Url::parse(&raw).ok()
}
