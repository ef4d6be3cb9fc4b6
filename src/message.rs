//! Transaction shapes exchanged with the explorer.
//!
//! Two families of types live here:
//!
//! - **Input** (`EncodedTransaction`, `Message`, `MessageInstruction`): a
//!   transaction as an RPC node or upstream parser hands it over. Instructions
//!   reference accounts by position (`Compiled`), by key (`PartiallyDecoded`),
//!   or were already decoded upstream (`Decoded`).
//! - **Output** (`ParsedTransaction`, `ExpandedInstruction`): every account
//!   reference resolved to an [`AccountRef`] with its signer/writable flags.
//!
//! JSON field names follow the RPC `jsonParsed` encoding.

use crate::address::{serde_base58, Address};
use crate::error::ExplorerError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solana_message::compiled_instruction::CompiledInstruction;
use solana_message::v0::LoadedAddresses;

// =============================================================================
// Accounts
// =============================================================================

/// Where an account key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountSource {
    Transaction,
    LookupTable,
}

/// An account key with its signer/writable flags.
///
/// Flags are taken from the message's compiled ordering; they are never
/// recomputed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    #[serde(with = "serde_base58")]
    pub pubkey: Address,
    #[serde(alias = "signer")]
    pub is_signer: bool,
    #[serde(alias = "writable")]
    pub is_writable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<AccountSource>,
}

impl AccountRef {
    pub fn new(pubkey: Address, is_signer: bool, is_writable: bool) -> Self {
        AccountRef {
            pubkey,
            is_signer,
            is_writable,
            source: None,
        }
    }

    pub fn with_source(mut self, source: AccountSource) -> Self {
        self.source = Some(source);
        self
    }
}

// =============================================================================
// Input instructions
// =============================================================================

/// Wire-style instruction: accounts and program id are positions into the
/// message's account keys, data is base58.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactInstruction {
    pub program_id_index: u8,
    pub accounts: Vec<u8>,
    pub data: String,
}

impl From<&CompiledInstruction> for CompactInstruction {
    fn from(instruction: &CompiledInstruction) -> Self {
        CompactInstruction {
            program_id_index: instruction.program_id_index,
            accounts: instruction.accounts.clone(),
            data: bs58::encode(&instruction.data).into_string(),
        }
    }
}

/// RPC shape for instructions the node could not parse: accounts are given
/// as keys, data is base58.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartiallyDecodedInstruction {
    #[serde(with = "serde_base58")]
    pub program_id: Address,
    #[serde(with = "serde_base58::vec")]
    pub accounts: Vec<Address>,
    pub data: String,
}

/// An instruction an upstream parser already understood. Passed through
/// as-is; never expanded or re-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlreadyDecodedInstruction {
    pub program: String,
    #[serde(with = "serde_base58")]
    pub program_id: Address,
    pub parsed: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_height: Option<u32>,
}

/// One instruction of an input message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageInstruction {
    Decoded(AlreadyDecodedInstruction),
    PartiallyDecoded(PartiallyDecodedInstruction),
    Compiled(CompactInstruction),
}

/// An input message: account keys in compiled order plus instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub account_keys: Vec<AccountRef>,
    pub instructions: Vec<MessageInstruction>,
    pub recent_blockhash: String,
}

impl Message {
    /// Account at a compiled position.
    pub fn account_at(&self, index: u8) -> Option<&AccountRef> {
        self.account_keys.get(index as usize)
    }

    /// Account whose key is byte-identical to `pubkey`.
    pub fn find_account(&self, pubkey: &Address) -> Option<&AccountRef> {
        self.account_keys.iter().find(|account| account.pubkey == *pubkey)
    }
}

/// An input transaction in RPC JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedTransaction {
    pub signatures: Vec<String>,
    pub message: Message,
}

impl EncodedTransaction {
    pub fn from_json(json: &str) -> Result<Self, ExplorerError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Addresses loaded from a V0 transaction's lookup tables, in the RPC
/// `meta.loadedAddresses` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedAccountKeys {
    #[serde(default, with = "serde_base58::vec")]
    pub writable: Vec<Address>,
    #[serde(default, with = "serde_base58::vec")]
    pub readonly: Vec<Address>,
}

impl From<LoadedAccountKeys> for LoadedAddresses {
    fn from(keys: LoadedAccountKeys) -> Self {
        LoadedAddresses {
            writable: keys.writable,
            readonly: keys.readonly,
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// An instruction with its program id and every account resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedInstruction {
    #[serde(with = "serde_base58")]
    pub program_id: Address,
    pub accounts: Vec<AccountRef>,
    pub data: Vec<u8>,
}

/// One instruction of a parsed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParsedInstruction {
    Expanded(ExpandedInstruction),
    /// Passed through unchanged from the input.
    Decoded(AlreadyDecodedInstruction),
    /// Input instruction whose references did not resolve; kept verbatim so
    /// the caller can fall back to raw display.
    Unresolved(MessageInstruction),
}

impl ParsedInstruction {
    pub fn as_expanded(&self) -> Option<&ExpandedInstruction> {
        match self {
            ParsedInstruction::Expanded(instruction) => Some(instruction),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    pub account_keys: Vec<AccountRef>,
    pub instructions: Vec<ParsedInstruction>,
    pub recent_blockhash: String,
}

/// A fully expanded transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransaction {
    /// Base58 signatures, in signer order.
    pub signatures: Vec<String>,
    pub message: ParsedMessage,
}
