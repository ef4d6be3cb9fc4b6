//! wasm-solana-explorer: transaction normalization and labeling for a Solana
//! block explorer, with WASM bindings.
//!
//! Transactions arrive either as wire bytes or as RPC JSON in which
//! instructions reference accounts by position. This crate expands them into
//! a representation where every account reference is resolved and carries
//! its signer/writable flags, attaches human-readable labels to well-known
//! addresses, and decodes instruction data for selected programs.
//!
//! # Architecture
//!
//! 1. **Core** (`labels`, `expand`, `compact`, `decoders`, `inspect`) - pure
//!    Rust over `solana_address::Address` and the Solana message types
//! 2. **WASM bindings** (`wasm/`) - thin wrappers that expose the core to
//!    JavaScript
//!
//! # Usage from Rust
//!
//! ```rust
//! use wasm_solana_explorer::{resolve_label, Address, AddressExt, Cluster, NoTokens};
//!
//! let system = Address::from_base58("11111111111111111111111111111111").unwrap();
//! assert_eq!(
//!     resolve_label(&system, Cluster::MainnetBeta, &NoTokens),
//!     Some("System Program")
//! );
//! ```

pub mod address;
pub mod cluster;
pub mod compact;
pub mod decoders;
mod error;
pub mod expand;
pub mod inspect;
pub mod labels;
pub mod message;
pub mod versioned;
pub mod wasm;

// Re-export core types at crate root
pub use address::{Address, AddressExt};
pub use cluster::Cluster;
pub use compact::{compact_transaction, compact_transaction_with_loaded};
pub use decoders::{DecodeError, DecodedOperation, DecoderRegistry, InstructionDecoder};
pub use error::ExplorerError;
pub use expand::{compile_instruction, expand_instruction, expand_transaction};
pub use inspect::{inspect_transaction, TransactionView};
pub use labels::{
    display_address, resolve_label, Labeler, NoTokens, TokenInfo, TokenList, TokenRegistry,
};
pub use message::{
    AccountRef, CompactInstruction, EncodedTransaction, ExpandedInstruction, LoadedAccountKeys,
    ParsedTransaction,
};
pub use versioned::VersionedTransactionExt;

// Re-export WASM types
pub use wasm::{ExplorerNamespace, WasmAddress, WasmLabeler};
