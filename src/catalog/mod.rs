//! Network and account catalog.
//!
//! An immutable snapshot of the networks and accounts the wallet SDK
//! reports, fetched once per session. Pure lookup and filtering; nothing
//! here mutates after construction.

use serde::{Deserialize, Serialize};

use crate::gateway::capabilities::CatalogCapability;
use crate::gateway::types::GatewayError;

/// A network the wallet can operate on, keyed by its unique CAIP-2 id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub chain_id: String,
    pub caip_id: String,
    pub network_name: String,
    /// Whether gas fees can be sponsored on this network.
    pub sponsorship_enabled: bool,
}

impl NetworkDescriptor {
    /// CAIP-2 namespace, e.g. `eip155` or `aptos`.
    pub fn namespace(&self) -> &str {
        self.caip_id.split(':').next().unwrap_or_default()
    }
}

/// A wallet account on a specific network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDescriptor {
    pub caip_id: String,
    pub network_name: String,
    pub address: String,
}

/// Session snapshot of available networks and accounts.
#[derive(Debug, Clone, Default)]
pub struct ChainCatalog {
    networks: Vec<NetworkDescriptor>,
    accounts: Vec<AccountDescriptor>,
}

impl ChainCatalog {
    pub fn new(networks: Vec<NetworkDescriptor>, accounts: Vec<AccountDescriptor>) -> Self {
        Self { networks, accounts }
    }

    /// Fetch both lists from the lookup capability.
    pub async fn load(capability: &dyn CatalogCapability) -> Result<Self, GatewayError> {
        let networks = capability.fetch_networks().await?;
        let accounts = capability.fetch_accounts().await?;
        tracing::info!(
            networks = networks.len(),
            accounts = accounts.len(),
            "chain catalog loaded"
        );
        Ok(Self::new(networks, accounts))
    }

    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    pub fn accounts(&self) -> &[AccountDescriptor] {
        &self.accounts
    }

    /// Look up a network by its CAIP-2 id.
    pub fn find(&self, caip_id: &str) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|n| n.caip_id == caip_id)
    }

    /// Networks in a CAIP-2 namespace, e.g. all `aptos:*` networks.
    pub fn networks_in_namespace(&self, namespace: &str) -> Vec<&NetworkDescriptor> {
        self.networks
            .iter()
            .filter(|n| n.namespace() == namespace)
            .collect()
    }

    /// Whether fee sponsorship is available on the given network.
    /// Unknown networks report no sponsorship.
    pub fn sponsorship_enabled(&self, caip_id: &str) -> bool {
        self.find(caip_id).is_some_and(|n| n.sponsorship_enabled)
    }

    /// The wallet account on the given network, if any.
    pub fn account_on(&self, caip_id: &str) -> Option<&AccountDescriptor> {
        self.accounts.iter().find(|a| a.caip_id == caip_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(caip_id: &str, name: &str, sponsored: bool) -> NetworkDescriptor {
        NetworkDescriptor {
            chain_id: caip_id.split(':').nth(1).unwrap_or_default().to_string(),
            caip_id: caip_id.to_string(),
            network_name: name.to_string(),
            sponsorship_enabled: sponsored,
        }
    }

    fn catalog() -> ChainCatalog {
        ChainCatalog::new(
            vec![
                network("eip155:1", "Ethereum", false),
                network("eip155:137", "Polygon", true),
                network("aptos:mainnet", "Aptos", true),
            ],
            vec![AccountDescriptor {
                caip_id: "eip155:137".into(),
                network_name: "Polygon".into(),
                address: "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".into(),
            }],
        )
    }

    #[test]
    fn test_find_by_caip_id() {
        let catalog = catalog();
        assert_eq!(catalog.find("eip155:137").unwrap().network_name, "Polygon");
        assert!(catalog.find("solana:mainnet").is_none());
    }

    #[test]
    fn test_namespace_filter() {
        let catalog = catalog();
        let evm = catalog.networks_in_namespace("eip155");
        assert_eq!(evm.len(), 2);
        assert_eq!(catalog.networks_in_namespace("aptos").len(), 1);
        assert!(catalog.networks_in_namespace("near").is_empty());
    }

    #[test]
    fn test_sponsorship_lookup() {
        let catalog = catalog();
        assert!(catalog.sponsorship_enabled("eip155:137"));
        assert!(!catalog.sponsorship_enabled("eip155:1"));
        assert!(!catalog.sponsorship_enabled("unknown:0"));
    }

    #[test]
    fn test_account_lookup() {
        let catalog = catalog();
        assert!(catalog.account_on("eip155:137").is_some());
        assert!(catalog.account_on("aptos:mainnet").is_none());
    }
}
