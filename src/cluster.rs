//! Cluster (network environment) selection for cluster-scoped lookups.

use crate::error::ExplorerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named Solana network environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    MainnetBeta,
    Testnet,
    Devnet,
    /// A user-supplied RPC endpoint. No token registry data is scoped to it.
    Custom,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
            Cluster::Custom => "custom",
        }
    }

    /// Token-list `chainId` for this cluster.
    pub fn chain_id(&self) -> Option<u64> {
        match self {
            Cluster::MainnetBeta => Some(101),
            Cluster::Testnet => Some(102),
            Cluster::Devnet => Some(103),
            Cluster::Custom => None,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Cluster> {
        match chain_id {
            101 => Some(Cluster::MainnetBeta),
            102 => Some(Cluster::Testnet),
            103 => Some(Cluster::Devnet),
            _ => None,
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            "custom" => Ok(Cluster::Custom),
            other => Err(ExplorerError::InvalidCluster(other.to_string())),
        }
    }
}
