//! System program instructions (bincode enum, 4-byte little-endian tag).

use super::{parse_ids, read_tag, DecodeError, DecodedOperation, InstructionDecoder};
use crate::address::Address;
use crate::labels::SYSTEM_PROGRAM_ID;
use crate::message::ExpandedInstruction;

const SYSTEM_INSTRUCTIONS: &[&str] = &[
    "Create Account",
    "Assign",
    "Transfer",
    "Create Account With Seed",
    "Advance Nonce Account",
    "Withdraw Nonce Account",
    "Initialize Nonce Account",
    "Authorize Nonce Account",
    "Allocate",
    "Allocate With Seed",
    "Assign With Seed",
    "Transfer With Seed",
    "Upgrade Nonce Account",
];

pub struct SystemDecoder;

impl InstructionDecoder for SystemDecoder {
    fn program_ids(&self) -> Vec<Address> {
        parse_ids(&[SYSTEM_PROGRAM_ID])
    }

    fn program_name(&self) -> &'static str {
        "System Program"
    }

    fn decode(&self, instruction: &ExpandedInstruction) -> Result<DecodedOperation, DecodeError> {
        let code = read_tag(&instruction.data, 0, 4)?;
        Ok(DecodedOperation::from_table(code, SYSTEM_INSTRUCTIONS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::test_support::instruction;
    use solana_system_interface::instruction::SystemInstruction;

    fn decode(ix: &SystemInstruction) -> DecodedOperation {
        let data = bincode::serialize(ix).unwrap();
        SystemDecoder
            .decode(&instruction(SYSTEM_PROGRAM_ID, data))
            .unwrap()
    }

    #[test]
    fn test_transfer() {
        let op = decode(&SystemInstruction::Transfer { lamports: 100_000 });
        assert_eq!(op.code, 2);
        assert_eq!(op.name, "Transfer");
    }

    #[test]
    fn test_nonce_instructions() {
        assert_eq!(
            decode(&SystemInstruction::AdvanceNonceAccount).name,
            "Advance Nonce Account"
        );
        assert_eq!(
            decode(&SystemInstruction::UpgradeNonceAccount).name,
            "Upgrade Nonce Account"
        );
        assert_eq!(decode(&SystemInstruction::Allocate { space: 8 }).name, "Allocate");
    }

    #[test]
    fn test_wire_transfer_data() {
        // data of the unsigned web3.js transfer fixture
        let op = SystemDecoder
            .decode(&instruction(
                SYSTEM_PROGRAM_ID,
                vec![2, 0, 0, 0, 160, 134, 1, 0, 0, 0, 0, 0],
            ))
            .unwrap();
        assert_eq!(op.name, "Transfer");
    }

    #[test]
    fn test_unknown_and_short() {
        let op = SystemDecoder
            .decode(&instruction(SYSTEM_PROGRAM_ID, vec![13, 0, 0, 0]))
            .unwrap();
        assert_eq!(op.name, "Unknown");
        assert!(matches!(
            SystemDecoder.decode(&instruction(SYSTEM_PROGRAM_ID, vec![2, 0])),
            Err(DecodeError::DataTooShort { needed: 4, actual: 2 })
        ));
    }
}
