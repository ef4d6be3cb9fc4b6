//! Expansion of a wire transaction into a [`ParsedTransaction`].
//!
//! Account order and signer/writable flags are read from the SDK message
//! types (`legacy::Message`, `v0::LoadedMessage`), so program-id demotion and
//! reserved-key rules match what the runtime and RPC report:
//!
//! ```text
//! [ static keys (header order) ][ loaded writable ][ loaded readonly ]
//! ```

use crate::message::{
    AccountRef, AccountSource, CompactInstruction, ExpandedInstruction, MessageInstruction,
    ParsedInstruction, ParsedMessage, ParsedTransaction,
};
use crate::versioned::VersionedTransactionExt;
use solana_message::compiled_instruction::CompiledInstruction;
use solana_message::v0::{LoadedAddresses, LoadedMessage};
use solana_message::{legacy, v0, VersionedMessage};
use solana_transaction::versioned::VersionedTransaction;
use std::collections::HashSet;

/// Expand a transaction using only the keys stored in its message.
///
/// Instructions of a V0 transaction that touch lookup-table accounts come
/// back as [`ParsedInstruction::Unresolved`]; use
/// [`compact_transaction_with_loaded`] to resolve them.
pub fn compact_transaction(tx: &VersionedTransaction) -> ParsedTransaction {
    compact_transaction_with_loaded(tx, &LoadedAddresses::default())
}

/// Expand a transaction, appending addresses already loaded from its lookup
/// tables after the static keys.
///
/// Every wire instruction yields one output instruction. An instruction
/// referencing a position beyond the known keys is kept in compact form as
/// [`ParsedInstruction::Unresolved`].
pub fn compact_transaction_with_loaded(
    tx: &VersionedTransaction,
    loaded: &LoadedAddresses,
) -> ParsedTransaction {
    let (account_keys, instructions, recent_blockhash) = match &tx.message {
        VersionedMessage::Legacy(msg) => {
            if !loaded.writable.is_empty() || !loaded.readonly.is_empty() {
                log::debug!("ignoring loaded addresses for a legacy transaction");
            }
            (
                legacy_account_refs(msg),
                &msg.instructions,
                msg.recent_blockhash.to_string(),
            )
        }
        VersionedMessage::V0(msg) => (
            v0_account_refs(msg, loaded),
            &msg.instructions,
            msg.recent_blockhash.to_string(),
        ),
    };

    let instructions = instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| match expand_compiled(instruction, &account_keys) {
            Some(expanded) => ParsedInstruction::Expanded(expanded),
            None => {
                log::debug!(
                    "instruction {} references an account beyond the {} known keys",
                    index,
                    account_keys.len()
                );
                ParsedInstruction::Unresolved(MessageInstruction::Compiled(
                    CompactInstruction::from(instruction),
                ))
            }
        })
        .collect();

    ParsedTransaction {
        signatures: tx.signature_strings(),
        message: ParsedMessage {
            account_keys,
            instructions,
            recent_blockhash,
        },
    }
}

fn legacy_account_refs(msg: &legacy::Message) -> Vec<AccountRef> {
    msg.account_keys
        .iter()
        .enumerate()
        .map(|(index, key)| {
            AccountRef::new(*key, msg.is_signer(index), msg.is_maybe_writable(index, None))
        })
        .collect()
}

/// Static keys then loaded keys, flagged by `LoadedMessage`. The `source` tag
/// is only set when the message uses lookup tables.
fn v0_account_refs(msg: &v0::Message, loaded: &LoadedAddresses) -> Vec<AccountRef> {
    let uses_lookup_tables = !msg.address_table_lookups.is_empty();
    let empty = LoadedAddresses::default();
    let loaded = if uses_lookup_tables {
        loaded
    } else {
        if !loaded.writable.is_empty() || !loaded.readonly.is_empty() {
            log::debug!("ignoring loaded addresses for a transaction without lookup tables");
        }
        &empty
    };

    let reserved = HashSet::new();
    let message = LoadedMessage::new_borrowed(msg, loaded, &reserved);
    let num_static = msg.account_keys.len();

    message
        .account_keys()
        .iter()
        .enumerate()
        .map(|(index, key)| {
            let account =
                AccountRef::new(*key, message.is_signer(index), message.is_writable(index));
            match (uses_lookup_tables, index < num_static) {
                (false, _) => account,
                (true, true) => account.with_source(AccountSource::Transaction),
                (true, false) => account.with_source(AccountSource::LookupTable),
            }
        })
        .collect()
}

fn expand_compiled(
    instruction: &CompiledInstruction,
    account_keys: &[AccountRef],
) -> Option<ExpandedInstruction> {
    let program = account_keys.get(instruction.program_id_index as usize)?;
    let accounts = instruction
        .accounts
        .iter()
        .map(|&index| account_keys.get(index as usize).cloned())
        .collect::<Option<Vec<_>>>()?;

    Some(ExpandedInstruction {
        program_id: program.pubkey,
        accounts,
        data: instruction.data.clone(),
    })
}
