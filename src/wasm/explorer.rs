//! WASM bindings for transaction expansion and instruction decoding.
//!
//! Results cross the boundary as plain JS objects via `serde-wasm-bindgen`.
//! Absent results (unresolvable instruction, unknown program) are returned as
//! `undefined` rather than thrown.

use crate::address::{Address, AddressExt};
use crate::compact::compact_transaction_with_loaded;
use crate::decoders::DecoderRegistry;
use crate::error::ExplorerError;
use crate::expand::{expand_instruction, expand_transaction};
use crate::message::{EncodedTransaction, ExpandedInstruction, LoadedAccountKeys};
use crate::versioned::VersionedTransactionExt;
use serde::Serialize;
use solana_message::v0::LoadedAddresses;
use solana_transaction::versioned::VersionedTransaction;
use std::sync::LazyLock;
use wasm_bindgen::prelude::*;

pub(crate) static DEFAULT_DECODERS: LazyLock<DecoderRegistry> =
    LazyLock::new(DecoderRegistry::with_defaults);

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, ExplorerError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| ExplorerError::StringError(format!("Serialization error: {}", e)))
}

/// Read the optional `{ writable, readonly }` lookup-table addresses a host
/// passes alongside wire bytes. `undefined` and `null` mean none.
pub(crate) fn loaded_from_js(loaded: JsValue) -> Result<LoadedAddresses, ExplorerError> {
    if loaded.is_undefined() || loaded.is_null() {
        return Ok(LoadedAddresses::default());
    }
    let keys: LoadedAccountKeys = serde_wasm_bindgen::from_value(loaded)
        .map_err(|e| ExplorerError::InvalidEncoding(format!("loaded addresses: {}", e)))?;
    Ok(keys.into())
}

/// Namespace for transaction normalization operations.
#[wasm_bindgen]
pub struct ExplorerNamespace;

#[wasm_bindgen]
impl ExplorerNamespace {
    /// Expand raw wire bytes (legacy or v0) into a parsed transaction.
    ///
    /// @param bytes - The raw transaction bytes (wire format)
    /// @param loaded - Optional `{ writable, readonly }` base58 addresses
    /// loaded from the transaction's lookup tables (RPC `meta.loadedAddresses`)
    /// @returns `{ signatures, message: { accountKeys, instructions, recentBlockhash } }`
    #[wasm_bindgen(js_name = parseTransaction)]
    pub fn parse_transaction(bytes: &[u8], loaded: JsValue) -> Result<JsValue, ExplorerError> {
        let tx = VersionedTransaction::from_bytes(bytes)?;
        let loaded = loaded_from_js(loaded)?;
        to_js(&compact_transaction_with_loaded(&tx, &loaded))
    }

    /// Expand one instruction of an RPC-shaped transaction.
    ///
    /// @param txJson - Transaction JSON (`{ signatures, message }`)
    /// @param index - Instruction index within the message
    /// @returns The expanded instruction, or `undefined` when it cannot be resolved
    #[wasm_bindgen(js_name = expandInstruction)]
    pub fn expand_instruction(tx_json: &str, index: usize) -> Result<JsValue, ExplorerError> {
        let tx = EncodedTransaction::from_json(tx_json)?;
        match expand_instruction(&tx.message, index) {
            Some(expanded) => to_js(&expanded),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Expand every instruction of an RPC-shaped transaction.
    #[wasm_bindgen(js_name = expandTransaction)]
    pub fn expand_transaction(tx_json: &str) -> Result<JsValue, ExplorerError> {
        let tx = EncodedTransaction::from_json(tx_json)?;
        to_js(&expand_transaction(&tx))
    }

    /// Decode instruction data with the built-in decoders.
    ///
    /// @param programId - Program address (base58)
    /// @param data - Raw instruction data
    /// @returns `{ code, name }`, or `undefined` for programs without a decoder
    /// or data too short to decode
    #[wasm_bindgen(js_name = decodeInstruction)]
    pub fn decode_instruction(program_id: &str, data: &[u8]) -> Result<JsValue, ExplorerError> {
        let instruction = ExpandedInstruction {
            program_id: Address::from_base58(program_id)?,
            accounts: vec![],
            data: data.to_vec(),
        };
        match DEFAULT_DECODERS.decode(&instruction) {
            Ok(operation) => to_js(&operation),
            Err(e) => {
                log::debug!("decodeInstruction: {}", e);
                Ok(JsValue::UNDEFINED)
            }
        }
    }
}
