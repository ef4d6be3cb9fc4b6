//! WASM bindings for Solana addresses.
//!
//! Wraps `solana_address::Address` for JavaScript.

use crate::address::{Address, AddressExt};
use crate::error::ExplorerError;
use crate::labels::static_label;
use wasm_bindgen::prelude::*;

/// WASM wrapper for a Solana address.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WasmAddress {
    inner: Address,
}

#[wasm_bindgen]
impl WasmAddress {
    /// Create an address from a base58 string.
    #[wasm_bindgen(js_name = fromBase58)]
    pub fn from_base58(address: &str) -> Result<WasmAddress, ExplorerError> {
        Address::from_base58(address).map(|inner| WasmAddress { inner })
    }

    /// Create an address from raw bytes (32 bytes).
    #[wasm_bindgen(js_name = fromBytes)]
    pub fn from_bytes(bytes: &[u8]) -> Result<WasmAddress, ExplorerError> {
        Address::from_bytes_checked(bytes).map(|inner| WasmAddress { inner })
    }

    #[wasm_bindgen(js_name = toBase58)]
    pub fn to_base58(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(js_name = toBytes)]
    pub fn to_bytes(&self) -> js_sys::Uint8Array {
        let bytes: &[u8] = self.inner.as_ref();
        js_sys::Uint8Array::from(bytes)
    }

    /// Byte equality; labels play no part.
    #[wasm_bindgen]
    pub fn equals(&self, other: &WasmAddress) -> bool {
        self.inner == other.inner
    }

    /// Cluster-independent label (programs, loaders, sysvars).
    #[wasm_bindgen(js_name = staticLabel)]
    pub fn static_label(&self) -> Option<String> {
        static_label(&self.inner).map(str::to_string)
    }
}
