//! Serum DEX market instructions.
//!
//! Instruction data starts with a one-byte version tag, followed by the
//! instruction code as a little-endian `u32`.

use super::{parse_ids, read_tag, DecodeError, DecodedOperation, InstructionDecoder};
use crate::address::Address;
use crate::labels::{SERUM_V1_PROGRAM_ID, SERUM_V2_PROGRAM_ID, SERUM_V3_PROGRAM_ID};
use crate::message::ExpandedInstruction;

const SERUM_INSTRUCTIONS: &[&str] = &[
    "Initialize Market",
    "New Order",
    "Match Orders",
    "Consume Events",
    "Cancel Order",
    "Settle Funds",
    "Cancel Order By Client Id",
    "Disable Market",
    "Sweep Fees",
    "New Order v2",
    "New Order v3",
    "Cancel Order v2",
    "Cancel Order By Client Id v2",
    "Send Take",
    "Close Open Orders",
    "Init Open Orders",
    "Prune",
    "Consume Events Permissioned",
];

pub struct SerumDecoder;

impl InstructionDecoder for SerumDecoder {
    fn program_ids(&self) -> Vec<Address> {
        parse_ids(&[SERUM_V1_PROGRAM_ID, SERUM_V2_PROGRAM_ID, SERUM_V3_PROGRAM_ID])
    }

    fn program_name(&self) -> &'static str {
        "Serum Program"
    }

    fn decode(&self, instruction: &ExpandedInstruction) -> Result<DecodedOperation, DecodeError> {
        // byte 0 is the layout version; it does not change the code table
        let code = read_tag(&instruction.data, 1, 4)?;
        Ok(DecodedOperation::from_table(code, SERUM_INSTRUCTIONS))
    }
}
