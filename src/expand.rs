//! Compact ↔ expanded instruction conversion.
//!
//! Expansion either resolves every reference or returns `None`; a partially
//! expanded instruction is never produced.

use crate::address::Address;
use crate::message::{
    AccountRef, CompactInstruction, EncodedTransaction, ExpandedInstruction, Message,
    MessageInstruction, ParsedInstruction, ParsedMessage, ParsedTransaction,
};

/// Expand the instruction at `index` of `message`.
///
/// Returns `None` when the index is out of range, the instruction was already
/// decoded upstream, any account or program reference does not resolve, or
/// the data is not valid base58.
pub fn expand_instruction(message: &Message, index: usize) -> Option<ExpandedInstruction> {
    let Some(instruction) = message.instructions.get(index) else {
        log::debug!("instruction {} out of range", index);
        return None;
    };
    expand(message, instruction, index)
}

fn expand(
    message: &Message,
    instruction: &MessageInstruction,
    index: usize,
) -> Option<ExpandedInstruction> {
    let (program_id, accounts, data) = match instruction {
        MessageInstruction::Decoded(_) => {
            log::debug!("instruction {} already decoded upstream", index);
            return None;
        }
        MessageInstruction::Compiled(compact) => {
            let Some(program) = message.account_at(compact.program_id_index) else {
                log::debug!(
                    "instruction {}: program id index {} out of range",
                    index,
                    compact.program_id_index
                );
                return None;
            };
            let accounts = compact
                .accounts
                .iter()
                .map(|&position| message.account_at(position).cloned())
                .collect::<Option<Vec<AccountRef>>>();
            (program.pubkey, accounts, &compact.data)
        }
        MessageInstruction::PartiallyDecoded(partial) => {
            let accounts = partial
                .accounts
                .iter()
                .map(|key| message.find_account(key).cloned())
                .collect::<Option<Vec<AccountRef>>>();
            (partial.program_id, accounts, &partial.data)
        }
    };

    let Some(accounts) = accounts else {
        log::debug!("instruction {}: unresolved account reference", index);
        return None;
    };
    let data = match bs58::decode(data).into_vec() {
        Ok(data) => data,
        Err(e) => {
            log::debug!("instruction {}: invalid base58 data: {}", index, e);
            return None;
        }
    };

    Some(ExpandedInstruction {
        program_id,
        accounts,
        data,
    })
}

/// Re-encode an expanded instruction against `account_keys`.
///
/// Keys are located by identity, so the result is only meaningful for the
/// same account-key sequence the instruction was expanded from. Returns
/// `None` when a key is missing, appears more than once (its position would
/// be ambiguous), or sits beyond position 255.
pub fn compile_instruction(
    instruction: &ExpandedInstruction,
    account_keys: &[AccountRef],
) -> Option<CompactInstruction> {
    let position_of = |key: &Address| {
        let mut matches = account_keys
            .iter()
            .enumerate()
            .filter(|(_, account)| account.pubkey == *key)
            .map(|(position, _)| position);
        let position = matches.next()?;
        if matches.next().is_some() {
            log::debug!("{} appears more than once in the account keys", key);
            return None;
        }
        u8::try_from(position).ok()
    };

    let program_id_index = position_of(&instruction.program_id)?;
    let accounts = instruction
        .accounts
        .iter()
        .map(|account| position_of(&account.pubkey))
        .collect::<Option<Vec<u8>>>()?;

    Some(CompactInstruction {
        program_id_index,
        accounts,
        data: bs58::encode(&instruction.data).into_string(),
    })
}

/// Expand every instruction of an RPC-shaped transaction.
///
/// Already-decoded instructions pass through unchanged; instructions that do
/// not resolve are kept verbatim as [`ParsedInstruction::Unresolved`].
pub fn expand_transaction(tx: &EncodedTransaction) -> ParsedTransaction {
    let instructions = tx
        .message
        .instructions
        .iter()
        .enumerate()
        .map(|(index, instruction)| match instruction {
            MessageInstruction::Decoded(decoded) => ParsedInstruction::Decoded(decoded.clone()),
            _ => match expand(&tx.message, instruction, index) {
                Some(expanded) => ParsedInstruction::Expanded(expanded),
                None => ParsedInstruction::Unresolved(instruction.clone()),
            },
        })
        .collect();

    ParsedTransaction {
        signatures: tx.signatures.clone(),
        message: ParsedMessage {
            account_keys: tx.message.account_keys.clone(),
            instructions,
            recent_blockhash: tx.message.recent_blockhash.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressExt;
    use crate::message::{AlreadyDecodedInstruction, PartiallyDecodedInstruction};
    use rstest::rstest;
    use serde_json::json;

    fn key(byte: u8) -> Address {
        Address::from_bytes_checked(&[byte; 32]).unwrap()
    }

    fn account_keys() -> Vec<AccountRef> {
        vec![
            AccountRef::new(key(1), true, true),
            AccountRef::new(key(2), true, false),
            AccountRef::new(key(3), false, true),
            AccountRef::new(key(4), false, false),
        ]
    }

    fn message(instructions: Vec<MessageInstruction>) -> Message {
        Message {
            account_keys: account_keys(),
            instructions,
            recent_blockhash: "EkSnNWid2cvwEVnVx9aBqawnmiCNiDgp3gUdkDPTKN1N".to_string(),
        }
    }

    fn compact(program_id_index: u8, accounts: Vec<u8>, data: &[u8]) -> CompactInstruction {
        CompactInstruction {
            program_id_index,
            accounts,
            data: bs58::encode(data).into_string(),
        }
    }

    fn decoded() -> AlreadyDecodedInstruction {
        AlreadyDecodedInstruction {
            program: "spl-memo".to_string(),
            program_id: key(4),
            parsed: json!("hello"),
            stack_height: None,
        }
    }

    #[test]
    fn test_expand_compiled() {
        let msg = message(vec![MessageInstruction::Compiled(compact(
            3,
            vec![0, 2],
            &[2, 0, 0, 0, 160, 134, 1, 0, 0, 0, 0, 0],
        ))]);

        let expanded = expand_instruction(&msg, 0).unwrap();
        assert_eq!(expanded.program_id, key(4));
        assert_eq!(expanded.accounts, vec![account_keys()[0].clone(), account_keys()[2].clone()]);
        assert_eq!(expanded.data, vec![2, 0, 0, 0, 160, 134, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_expand_carries_flags() {
        let msg = message(vec![MessageInstruction::Compiled(compact(3, vec![1, 3], &[]))]);
        let expanded = expand_instruction(&msg, 0).unwrap();
        assert!(expanded.accounts[0].is_signer && !expanded.accounts[0].is_writable);
        assert!(!expanded.accounts[1].is_signer && !expanded.accounts[1].is_writable);
    }

    #[test]
    fn test_expand_partially_decoded_by_identity() {
        let msg = message(vec![MessageInstruction::PartiallyDecoded(
            PartiallyDecodedInstruction {
                program_id: key(4),
                accounts: vec![key(3), key(1)],
                data: bs58::encode([7u8, 8]).into_string(),
            },
        )]);

        let expanded = expand_instruction(&msg, 0).unwrap();
        assert_eq!(expanded.accounts[0].pubkey, key(3));
        assert!(expanded.accounts[0].is_writable);
        assert_eq!(expanded.accounts[1].pubkey, key(1));
        assert!(expanded.accounts[1].is_signer);
        assert_eq!(expanded.data, vec![7, 8]);
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let msg = message(vec![MessageInstruction::PartiallyDecoded(
            PartiallyDecodedInstruction {
                program_id: key(4),
                accounts: vec![key(1), key(99)],
                data: String::new(),
            },
        )]);
        assert_eq!(expand_instruction(&msg, 0), None);
    }

    #[rstest]
    #[case::account_index(compact(3, vec![0, 4], &[1]))]
    #[case::far_account_index(compact(3, vec![255], &[1]))]
    #[case::program_id_index(compact(9, vec![0], &[1]))]
    fn test_out_of_range_reference_is_absent(#[case] instruction: CompactInstruction) {
        let msg = message(vec![MessageInstruction::Compiled(instruction)]);
        assert_eq!(expand_instruction(&msg, 0), None);
    }

    #[test]
    fn test_invalid_data_is_absent() {
        let mut instruction = compact(3, vec![0], &[]);
        instruction.data = "0OIl".to_string();
        let msg = message(vec![MessageInstruction::Compiled(instruction)]);
        assert_eq!(expand_instruction(&msg, 0), None);
    }

    #[test]
    fn test_instruction_index_out_of_range() {
        let msg = message(vec![]);
        assert_eq!(expand_instruction(&msg, 0), None);
    }

    #[test]
    fn test_already_decoded_is_absent() {
        let msg = message(vec![MessageInstruction::Decoded(decoded())]);
        assert_eq!(expand_instruction(&msg, 0), None);
    }

    #[rstest]
    #[case(compact(3, vec![0, 1, 2], &[2, 0, 0, 0, 64, 66, 15, 0, 0, 0, 0, 0]))]
    #[case(compact(0, vec![], &[]))]
    #[case(compact(2, vec![3, 3, 0], &[0xff; 40]))]
    #[case(compact(1, vec![2, 0, 1, 3], &[0, 0, 0, 0, 1]))]
    fn test_roundtrip(#[case] original: CompactInstruction) {
        let msg = message(vec![MessageInstruction::Compiled(original.clone())]);
        let expanded = expand_instruction(&msg, 0).unwrap();
        let recompiled = compile_instruction(&expanded, &msg.account_keys).unwrap();
        assert_eq!(recompiled, original);
    }

    #[test]
    fn test_compile_against_other_keys_fails() {
        let msg = message(vec![MessageInstruction::Compiled(compact(3, vec![0], &[1]))]);
        let expanded = expand_instruction(&msg, 0).unwrap();
        let other_keys = vec![AccountRef::new(key(50), true, true)];
        assert_eq!(compile_instruction(&expanded, &other_keys), None);
    }

    #[test]
    fn test_compile_with_duplicate_key_is_absent() {
        let keys = vec![
            AccountRef::new(key(1), true, true),
            AccountRef::new(key(2), false, false),
            AccountRef::new(key(1), true, true),
        ];
        let msg = Message {
            account_keys: keys.clone(),
            instructions: vec![MessageInstruction::Compiled(compact(1, vec![2], &[1]))],
            recent_blockhash: String::new(),
        };

        let expanded = expand_instruction(&msg, 0).unwrap();
        assert_eq!(compile_instruction(&expanded, &keys), None);
    }

    #[test]
    fn test_expand_transaction_passes_decoded_through() {
        let unresolved = MessageInstruction::Compiled(compact(3, vec![8], &[1]));
        let tx = EncodedTransaction {
            signatures: vec!["sig".to_string()],
            message: message(vec![
                MessageInstruction::Decoded(decoded()),
                MessageInstruction::Compiled(compact(3, vec![0], &[5])),
                unresolved.clone(),
            ]),
        };

        let parsed = expand_transaction(&tx);
        assert_eq!(parsed.signatures, vec!["sig".to_string()]);
        assert_eq!(parsed.message.account_keys, account_keys());
        assert_eq!(parsed.message.recent_blockhash, tx.message.recent_blockhash);
        assert_eq!(
            parsed.message.instructions[0],
            ParsedInstruction::Decoded(decoded())
        );
        assert_eq!(
            parsed.message.instructions[1].as_expanded().unwrap().data,
            vec![5]
        );
        assert_eq!(
            parsed.message.instructions[2],
            ParsedInstruction::Unresolved(unresolved)
        );
    }
}
