//! Cluster-scoped token registry.
//!
//! The registry is the only label source whose contents depend on the
//! cluster. It is populated by the host (for example from a fetched token
//! list) before label resolution runs; lookups themselves never block.

use crate::address::{Address, AddressExt};
use crate::cluster::Cluster;
use crate::error::ExplorerError;
use serde::Deserialize;
use std::collections::HashMap;

/// Synchronous lookup of token display names.
pub trait TokenRegistry: Send + Sync {
    fn token_name(&self, address: &Address, cluster: Cluster) -> Option<&str>;
}

/// Registry with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTokens;

impl TokenRegistry for NoTokens {
    fn token_name(&self, _address: &Address, _cluster: Cluster) -> Option<&str> {
        None
    }
}

/// A single token-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub decimals: u8,
}

#[derive(Deserialize)]
struct TokenListFile {
    tokens: Vec<TokenInfo>,
}

/// Token registry built from the standard Solana token-list JSON.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: HashMap<(Cluster, Address), TokenInfo>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a token list document (`{"tokens": [...]}`).
    ///
    /// Entries on unknown chains or with invalid addresses are skipped.
    pub fn from_json(json: &str) -> Result<Self, ExplorerError> {
        let file: TokenListFile = serde_json::from_str(json)
            .map_err(|e| ExplorerError::InvalidTokenList(e.to_string()))?;

        let mut list = TokenList::new();
        for info in file.tokens {
            let Some(cluster) = Cluster::from_chain_id(info.chain_id) else {
                log::warn!(
                    "skipping token {} on unknown chain id {}",
                    info.symbol,
                    info.chain_id
                );
                continue;
            };
            match Address::from_base58(&info.address) {
                Ok(address) => list.insert(cluster, address, info),
                Err(e) => log::warn!("skipping token {}: {}", info.symbol, e),
            }
        }
        Ok(list)
    }

    pub fn insert(&mut self, cluster: Cluster, address: Address, info: TokenInfo) {
        self.tokens.insert((cluster, address), info);
    }

    pub fn get(&self, address: &Address, cluster: Cluster) -> Option<&TokenInfo> {
        self.tokens.get(&(cluster, *address))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenRegistry for TokenList {
    fn token_name(&self, address: &Address, cluster: Cluster) -> Option<&str> {
        self.get(address, cluster).map(|info| info.name.as_str())
    }
}
