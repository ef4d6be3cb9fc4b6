//! Wire decoding for legacy and versioned (MessageV0) transactions.
//!
//! The wire format and its (de)serialization belong to the Solana SDK
//! crates; this module only adds the text encodings the explorer receives
//! transactions in.
//!
//! Both legacy and V0 (lookup-table) transactions decode into
//! `VersionedTransaction`.

use crate::error::ExplorerError;
use base64::prelude::*;
use solana_transaction::versioned::VersionedTransaction;

/// Extension trait for VersionedTransaction to decode explorer inputs.
pub trait VersionedTransactionExt {
    /// Deserialize a transaction from raw bytes (handles both legacy and versioned).
    fn from_bytes(bytes: &[u8]) -> Result<VersionedTransaction, ExplorerError>;

    /// Deserialize a transaction from standard base64.
    fn from_base64(encoded: &str) -> Result<VersionedTransaction, ExplorerError>;

    /// Deserialize a transaction from base58.
    fn from_base58(encoded: &str) -> Result<VersionedTransaction, ExplorerError>;

    /// Signatures as base58 strings, in signer order.
    fn signature_strings(&self) -> Vec<String>;
}

impl VersionedTransactionExt for VersionedTransaction {
    fn from_bytes(bytes: &[u8]) -> Result<VersionedTransaction, ExplorerError> {
        bincode::deserialize(bytes).map_err(|e| {
            ExplorerError::InvalidTransaction(format!(
                "Failed to deserialize versioned transaction: {}",
                e
            ))
        })
    }

    fn from_base64(encoded: &str) -> Result<VersionedTransaction, ExplorerError> {
        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| ExplorerError::InvalidEncoding(format!("base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    fn from_base58(encoded: &str) -> Result<VersionedTransaction, ExplorerError> {
        let bytes = bs58::decode(encoded)
            .into_vec()
            .map_err(|e| ExplorerError::InvalidEncoding(format!("base58: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    fn signature_strings(&self) -> Vec<String> {
        self.signatures.iter().map(|s| s.to_string()).collect()
    }
}
