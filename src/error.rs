use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-solana-explorer operations.
///
/// Only host-facing conversions fail with this type. Unresolvable account
/// references and unknown programs are modeled as absent values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    /// Invalid base58 address or wrong key length
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Transaction bytes or structure that cannot be normalized
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    /// Bad base58/base64/JSON input
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
    /// Token list JSON that does not match the token-list schema
    #[error("Invalid token list: {0}")]
    InvalidTokenList(String),
    /// Unrecognized cluster name
    #[error("Invalid cluster: {0}")]
    InvalidCluster(String),
    /// Failure converting a result into a JS value
    #[error("{0}")]
    StringError(String),
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        ExplorerError::InvalidEncoding(err.to_string())
    }
}

// Required for wasm_bindgen to convert errors to JavaScript exceptions
impl From<ExplorerError> for JsValue {
    fn from(err: ExplorerError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
