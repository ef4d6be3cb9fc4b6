//! SPL Token and Token-2022 instructions (1-byte tag).
//!
//! Both programs share the base instruction set. Token-2022 extension
//! instructions use tags past the end of the table and decode as unknown.

use super::{parse_ids, read_tag, DecodeError, DecodedOperation, InstructionDecoder};
use crate::address::Address;
use crate::labels::{TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::message::ExpandedInstruction;

const TOKEN_INSTRUCTIONS: &[&str] = &[
    "Initialize Mint",
    "Initialize Account",
    "Initialize Multisig",
    "Transfer",
    "Approve",
    "Revoke",
    "Set Authority",
    "Mint To",
    "Burn",
    "Close Account",
    "Freeze Account",
    "Thaw Account",
    "Transfer Checked",
    "Approve Checked",
    "Mint To Checked",
    "Burn Checked",
    "Initialize Account 2",
    "Sync Native",
    "Initialize Account 3",
    "Initialize Multisig 2",
    "Initialize Mint 2",
    "Get Account Data Size",
    "Initialize Immutable Owner",
    "Amount To Ui Amount",
    "Ui Amount To Amount",
];

pub struct TokenDecoder;

impl InstructionDecoder for TokenDecoder {
    fn program_ids(&self) -> Vec<Address> {
        parse_ids(&[TOKEN_PROGRAM_ID, TOKEN_2022_PROGRAM_ID])
    }

    fn program_name(&self) -> &'static str {
        "Token Program"
    }

    fn decode(&self, instruction: &ExpandedInstruction) -> Result<DecodedOperation, DecodeError> {
        let code = read_tag(&instruction.data, 0, 1)?;
        Ok(DecodedOperation::from_table(code, TOKEN_INSTRUCTIONS))
    }
}
