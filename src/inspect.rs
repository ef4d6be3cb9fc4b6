//! Display view of a parsed transaction.
//!
//! Combines labels and decoders over a [`ParsedTransaction`]. Every address
//! gets a display string (its label, or base58 when no table knows it), and
//! every expanded instruction gets a decoded operation when a decoder for
//! its program is registered.

use crate::address::Address;
use crate::decoders::{DecodeError, DecodedOperation, DecoderRegistry};
use crate::labels::Labeler;
use crate::message::{
    AccountRef, AccountSource, AlreadyDecodedInstruction, ExpandedInstruction, MessageInstruction,
    ParsedInstruction, ParsedTransaction,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Label if present, otherwise the base58 address.
    pub display: String,
}

impl AddressView {
    fn new(address: &Address, labeler: &Labeler) -> Self {
        let label = labeler.label(address).map(str::to_string);
        let address = address.to_string();
        let display = label.clone().unwrap_or_else(|| address.clone());
        AddressView {
            address,
            label,
            display,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[serde(flatten)]
    pub address: AddressView,
    pub is_signer: bool,
    pub is_writable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<AccountSource>,
}

impl AccountView {
    fn new(account: &AccountRef, labeler: &Labeler) -> Self {
        AccountView {
            address: AddressView::new(&account.pubkey, labeler),
            is_signer: account.is_signer,
            is_writable: account.is_writable,
            source: account.source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum InstructionView {
    #[serde(rename_all = "camelCase")]
    Expanded {
        program: AddressView,
        /// `None` when no decoder handles the program or the data is too
        /// short for it.
        operation: Option<DecodedOperation>,
        accounts: Vec<AccountView>,
        /// Raw instruction data, base58.
        data: String,
    },
    /// Decoded upstream; `parsed` is passed through untouched.
    #[serde(rename_all = "camelCase")]
    Decoded {
        program: AddressView,
        parser: String,
        parsed: Value,
    },
    #[serde(rename_all = "camelCase")]
    Unresolved { instruction: MessageInstruction },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub signatures: Vec<String>,
    pub recent_blockhash: String,
    pub accounts: Vec<AccountView>,
    pub instructions: Vec<InstructionView>,
}

/// Build the display view of `parsed`.
pub fn inspect_transaction(
    parsed: &ParsedTransaction,
    labeler: &Labeler,
    decoders: &DecoderRegistry,
) -> TransactionView {
    let instructions = parsed
        .message
        .instructions
        .iter()
        .map(|instruction| match instruction {
            ParsedInstruction::Expanded(expanded) => inspect_expanded(expanded, labeler, decoders),
            ParsedInstruction::Decoded(decoded) => inspect_decoded(decoded, labeler),
            ParsedInstruction::Unresolved(raw) => InstructionView::Unresolved {
                instruction: raw.clone(),
            },
        })
        .collect();

    TransactionView {
        signatures: parsed.signatures.clone(),
        recent_blockhash: parsed.message.recent_blockhash.clone(),
        accounts: parsed
            .message
            .account_keys
            .iter()
            .map(|account| AccountView::new(account, labeler))
            .collect(),
        instructions,
    }
}

fn inspect_expanded(
    instruction: &ExpandedInstruction,
    labeler: &Labeler,
    decoders: &DecoderRegistry,
) -> InstructionView {
    let operation = match decoders.decode(instruction) {
        Ok(operation) => Some(operation),
        Err(DecodeError::UnknownProgram(_)) => None,
        Err(e) => {
            log::debug!("{}: {}", instruction.program_id, e);
            None
        }
    };

    InstructionView::Expanded {
        program: AddressView::new(&instruction.program_id, labeler),
        operation,
        accounts: instruction
            .accounts
            .iter()
            .map(|account| AccountView::new(account, labeler))
            .collect(),
        data: bs58::encode(&instruction.data).into_string(),
    }
}

fn inspect_decoded(instruction: &AlreadyDecodedInstruction, labeler: &Labeler) -> InstructionView {
    InstructionView::Decoded {
        program: AddressView::new(&instruction.program_id, labeler),
        parser: instruction.program.clone(),
        parsed: instruction.parsed.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressExt;
    use crate::cluster::Cluster;
    use crate::compact::compact_transaction;
    use crate::expand::expand_transaction;
    use crate::labels::{NoTokens, SERUM_V3_PROGRAM_ID};
    use crate::message::{CompactInstruction, EncodedTransaction, Message};
    use crate::versioned::VersionedTransactionExt;
    use serde_json::json;
    use solana_transaction::versioned::VersionedTransaction;

    const TRANSFER_TX_BASE64: &str = "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABAAEDFVMqpim7tqEi2XL8R6KKkP0DYJvY3eiRXLlL1P9EjYgXKQC+k0FKnqyC4AZGJR7OhJXfpPP3NHOhS8t/6G7bLAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA/1c7Oaj3RbyLIjU0/ZPpsmVfVUWAzc8g36fK5g6A0JoBAgIAAQwCAAAAoIYBAAAAAAA=";

    const PAYER: &str = "2SF7eZXkyQeWkdF1Kh7i3zrGHsSCFdqVTwE8Ef9LFgCo";

    #[test]
    fn test_inspect_transfer() {
        let tx = VersionedTransaction::from_base64(TRANSFER_TX_BASE64).unwrap();
        let parsed = compact_transaction(&tx);
        let labeler = Labeler::new(Cluster::MainnetBeta, &NoTokens);
        let view = inspect_transaction(&parsed, &labeler, &DecoderRegistry::with_defaults());

        assert_eq!(view.accounts[0].address.display, PAYER);
        assert_eq!(view.accounts[0].address.label, None);
        assert_eq!(view.accounts[2].address.display, "System Program");

        let InstructionView::Expanded {
            program,
            operation,
            accounts,
            data,
        } = &view.instructions[0]
        else {
            panic!("expected expanded instruction");
        };
        assert_eq!(program.label.as_deref(), Some("System Program"));
        assert_eq!(operation.unwrap().name, "Transfer");
        assert!(accounts[0].is_signer && accounts[0].is_writable);
        assert_eq!(
            bs58::decode(data).into_vec().unwrap(),
            vec![2, 0, 0, 0, 160, 134, 1, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_undecodable_and_unregistered() {
        let payer = Address::from_base58(PAYER).unwrap();
        let serum = Address::from_base58(SERUM_V3_PROGRAM_ID).unwrap();
        let raw = |program_id_index: u8, data: &[u8]| {
            MessageInstruction::Compiled(CompactInstruction {
                program_id_index,
                accounts: vec![0],
                data: bs58::encode(data).into_string(),
            })
        };
        let tx = EncodedTransaction {
            signatures: vec![],
            message: Message {
                account_keys: vec![
                    AccountRef::new(payer, true, true),
                    AccountRef::new(serum, false, false),
                ],
                instructions: vec![raw(1, &[0, 1]), raw(0, &[1, 2, 3]), raw(7, &[])],
                recent_blockhash: String::new(),
            },
        };

        let labeler = Labeler::new(Cluster::Devnet, &NoTokens);
        let view = inspect_transaction(
            &expand_transaction(&tx),
            &labeler,
            &DecoderRegistry::with_defaults(),
        );

        // too short for the Serum layout
        let InstructionView::Expanded { program, operation, .. } = &view.instructions[0] else {
            panic!("expected expanded instruction");
        };
        assert_eq!(program.display, "Serum Program v3");
        assert_eq!(*operation, None);

        // no decoder for a wallet address
        let InstructionView::Expanded { program, operation, .. } = &view.instructions[1] else {
            panic!("expected expanded instruction");
        };
        assert_eq!(program.display, PAYER);
        assert_eq!(*operation, None);

        assert!(matches!(
            view.instructions[2],
            InstructionView::Unresolved { .. }
        ));
    }

    #[test]
    fn test_decoded_passes_through() {
        let parsed_json = json!({"type": "transfer", "info": {"lamports": 5}});
        let tx = EncodedTransaction {
            signatures: vec!["sig".to_string()],
            message: Message {
                account_keys: vec![],
                instructions: vec![MessageInstruction::Decoded(AlreadyDecodedInstruction {
                    program: "system".to_string(),
                    program_id: Address::from_bytes_checked(&[0u8; 32]).unwrap(),
                    parsed: parsed_json.clone(),
                    stack_height: None,
                })],
                recent_blockhash: String::new(),
            },
        };

        let labeler = Labeler::new(Cluster::MainnetBeta, &NoTokens);
        let view = inspect_transaction(
            &expand_transaction(&tx),
            &labeler,
            &DecoderRegistry::with_defaults(),
        );
        assert_eq!(
            view.instructions[0],
            InstructionView::Decoded {
                program: AddressView {
                    address: "11111111111111111111111111111111".to_string(),
                    label: Some("System Program".to_string()),
                    display: "System Program".to_string(),
                },
                parser: "system".to_string(),
                parsed: parsed_json,
            }
        );
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let tx = VersionedTransaction::from_base64(TRANSFER_TX_BASE64).unwrap();
        let parsed = compact_transaction(&tx);
        let labeler = Labeler::new(Cluster::MainnetBeta, &NoTokens);
        let view = inspect_transaction(&parsed, &labeler, &DecoderRegistry::with_defaults());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["accounts"][0]["isSigner"], true);
        assert_eq!(json["accounts"][0]["address"], PAYER);
        assert_eq!(json["instructions"][0]["kind"], "expanded");
        assert_eq!(json["instructions"][0]["operation"]["name"], "Transfer");
        assert_eq!(
            json["recentBlockhash"],
            "JBk7RejDBEsFgbR2iR6FV87xCnZXCwazw8MfLZYVk8nM"
        );
    }
}
