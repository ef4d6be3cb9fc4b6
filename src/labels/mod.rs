//! Address labels for display.
//!
//! Resolution order, first match wins:
//! 1. well-known program IDs
//! 2. loader IDs
//! 3. enumerated sysvar IDs
//! 4. the reserved sysvar address range (generic `"Sysvar"`)
//! 5. the cluster-scoped token registry
//!
//! Labels never participate in address equality or ordering.

mod tables;
mod token_registry;

pub use tables::*;
pub use token_registry::{NoTokens, TokenInfo, TokenList, TokenRegistry};

use crate::address::Address;
use crate::cluster::Cluster;

/// Resolve the display label for an address, if any table knows it.
pub fn resolve_label<'a>(
    address: &Address,
    cluster: Cluster,
    tokens: &'a dyn TokenRegistry,
) -> Option<&'a str> {
    let label: Option<&'a str> = static_label(address);
    label.or_else(|| tokens.token_name(address, cluster))
}

/// Label from the cluster-independent tables only (steps 1-4).
pub fn static_label(address: &Address) -> Option<&'static str> {
    PROGRAM_LABELS
        .get(address)
        .or_else(|| LOADER_LABELS.get(address))
        .or_else(|| SYSVAR_LABELS.get(address))
        .copied()
        .or_else(|| tables::is_sysvar_family(address).then_some(SYSVAR_FAMILY_LABEL))
}

/// The label if one resolves, otherwise the base58 address.
pub fn display_address(address: &Address, cluster: Cluster, tokens: &dyn TokenRegistry) -> String {
    resolve_label(address, cluster, tokens)
        .map(str::to_string)
        .unwrap_or_else(|| address.to_string())
}

/// Label context bundled for repeated lookups against one cluster.
#[derive(Clone, Copy)]
pub struct Labeler<'a> {
    pub cluster: Cluster,
    pub tokens: &'a dyn TokenRegistry,
}

impl<'a> Labeler<'a> {
    pub fn new(cluster: Cluster, tokens: &'a dyn TokenRegistry) -> Self {
        Labeler { cluster, tokens }
    }

    pub fn label(&self, address: &Address) -> Option<&'a str> {
        resolve_label(address, self.cluster, self.tokens)
    }

    pub fn display(&self, address: &Address) -> String {
        display_address(address, self.cluster, self.tokens)
    }
}
