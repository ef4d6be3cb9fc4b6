//! WASM bindings for address labels and transaction inspection.

use super::explorer::{loaded_from_js, to_js, DEFAULT_DECODERS};
use crate::address::{Address, AddressExt};
use crate::cluster::Cluster;
use crate::compact::compact_transaction_with_loaded;
use crate::error::ExplorerError;
use crate::inspect::inspect_transaction;
use crate::labels::{Labeler, TokenList};
use crate::versioned::VersionedTransactionExt;
use solana_transaction::versioned::VersionedTransaction;
use std::str::FromStr;
use wasm_bindgen::prelude::*;

/// Label context for one cluster, with an optional token list.
#[wasm_bindgen]
pub struct WasmLabeler {
    cluster: Cluster,
    tokens: TokenList,
}

#[wasm_bindgen]
impl WasmLabeler {
    /// @param cluster - "mainnet-beta", "testnet", "devnet" or "custom"
    /// @param tokenListJson - Optional token list in the solana-labs token-list format
    #[wasm_bindgen(constructor)]
    pub fn new(
        cluster: &str,
        token_list_json: Option<String>,
    ) -> Result<WasmLabeler, ExplorerError> {
        let cluster = Cluster::from_str(cluster)?;
        let tokens = match token_list_json {
            Some(json) => TokenList::from_json(&json)?,
            None => TokenList::new(),
        };
        Ok(WasmLabeler { cluster, tokens })
    }

    #[wasm_bindgen(getter)]
    pub fn cluster(&self) -> String {
        self.cluster.to_string()
    }

    /// Label for a base58 address, or `undefined` when no table knows it.
    #[wasm_bindgen]
    pub fn label(&self, address: &str) -> Result<Option<String>, ExplorerError> {
        let address = Address::from_base58(address)?;
        Ok(self.labeler().label(&address).map(str::to_string))
    }

    /// Label if present, otherwise the base58 address.
    #[wasm_bindgen(js_name = displayAddress)]
    pub fn display_address(&self, address: &str) -> Result<String, ExplorerError> {
        let address = Address::from_base58(address)?;
        Ok(self.labeler().display(&address))
    }

    /// Expand, label, and decode raw wire bytes.
    ///
    /// @param loaded - Optional `{ writable, readonly }` lookup-table addresses
    #[wasm_bindgen(js_name = inspectTransaction)]
    pub fn inspect_transaction(
        &self,
        bytes: &[u8],
        loaded: JsValue,
    ) -> Result<JsValue, ExplorerError> {
        let tx = VersionedTransaction::from_bytes(bytes)?;
        let parsed = compact_transaction_with_loaded(&tx, &loaded_from_js(loaded)?);
        to_js(&inspect_transaction(&parsed, &self.labeler(), &DEFAULT_DECODERS))
    }
}

impl WasmLabeler {
    fn labeler(&self) -> Labeler<'_> {
        Labeler::new(self.cluster, &self.tokens)
    }
}
