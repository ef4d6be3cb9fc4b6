//! Stake program instructions (bincode enum, 4-byte little-endian tag).

use super::{parse_ids, read_tag, DecodeError, DecodedOperation, InstructionDecoder};
use crate::address::Address;
use crate::labels::STAKE_PROGRAM_ID;
use crate::message::ExpandedInstruction;

const STAKE_INSTRUCTIONS: &[&str] = &[
    "Initialize",
    "Authorize",
    "Delegate Stake",
    "Split",
    "Withdraw",
    "Deactivate",
    "Set Lockup",
    "Merge",
    "Authorize With Seed",
    "Initialize Checked",
    "Authorize Checked",
    "Authorize Checked With Seed",
    "Set Lockup Checked",
    "Get Minimum Delegation",
    "Deactivate Delinquent",
    "Redelegate",
    "Move Stake",
    "Move Lamports",
];

pub struct StakeDecoder;

impl InstructionDecoder for StakeDecoder {
    fn program_ids(&self) -> Vec<Address> {
        parse_ids(&[STAKE_PROGRAM_ID])
    }

    fn program_name(&self) -> &'static str {
        "Stake Program"
    }

    fn decode(&self, instruction: &ExpandedInstruction) -> Result<DecodedOperation, DecodeError> {
        let code = read_tag(&instruction.data, 0, 4)?;
        Ok(DecodedOperation::from_table(code, STAKE_INSTRUCTIONS))
    }
}
