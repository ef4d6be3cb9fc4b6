//! Compute Budget program instructions (borsh enum, 1-byte tag).

use super::{parse_ids, read_tag, DecodeError, DecodedOperation, InstructionDecoder};
use crate::address::Address;
use crate::labels::COMPUTE_BUDGET_PROGRAM_ID;
use crate::message::ExpandedInstruction;

const COMPUTE_BUDGET_INSTRUCTIONS: &[&str] = &[
    // tag 0 was RequestUnits, removed from the program
    "Request Units (deprecated)",
    "Request Heap Frame",
    "Set Compute Unit Limit",
    "Set Compute Unit Price",
    "Set Loaded Accounts Data Size Limit",
];

pub struct ComputeBudgetDecoder;

impl InstructionDecoder for ComputeBudgetDecoder {
    fn program_ids(&self) -> Vec<Address> {
        parse_ids(&[COMPUTE_BUDGET_PROGRAM_ID])
    }

    fn program_name(&self) -> &'static str {
        "Compute Budget Program"
    }

    fn decode(&self, instruction: &ExpandedInstruction) -> Result<DecodedOperation, DecodeError> {
        let code = read_tag(&instruction.data, 0, 1)?;
        Ok(DecodedOperation::from_table(code, COMPUTE_BUDGET_INSTRUCTIONS))
    }
}
