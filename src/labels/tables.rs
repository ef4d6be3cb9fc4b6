//! Static address → name tables.
//!
//! Program IDs are kept as base58 strings (as they appear in explorers and
//! docs) and parsed once into byte-keyed maps.

use crate::address::Address;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Program IDs as base58 strings.
pub const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";
pub const CONFIG_PROGRAM_ID: &str = "Config1111111111111111111111111111111111111";
pub const STAKE_PROGRAM_ID: &str = "Stake11111111111111111111111111111111111111";
pub const VOTE_PROGRAM_ID: &str = "Vote111111111111111111111111111111111111111";
pub const BUDGET_PROGRAM_ID: &str = "Budget1111111111111111111111111111111111111";
pub const EXCHANGE_PROGRAM_ID: &str = "Exchange11111111111111111111111111111111111";
pub const STORAGE_PROGRAM_ID: &str = "Storage111111111111111111111111111111111111";
pub const VEST_PROGRAM_ID: &str = "Vest111111111111111111111111111111111111111";
pub const COMPUTE_BUDGET_PROGRAM_ID: &str = "ComputeBudget111111111111111111111111111111";
pub const ADDRESS_LOOKUP_TABLE_PROGRAM_ID: &str = "AddressLookupTab1e1111111111111111111111111";
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
pub const TOKEN_2022_PROGRAM_ID: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";
pub const ATA_PROGRAM_ID: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";
pub const MEMO_PROGRAM_ID: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";
pub const MEMO_V1_PROGRAM_ID: &str = "Memo1UhkJRfHyvLMcVucJwxXeuD728EqVDDwQDxFMNo";
pub const ED25519_PROGRAM_ID: &str = "Ed25519SigVerify111111111111111111111111111";
pub const SECP256K1_PROGRAM_ID: &str = "KeccakSecp256k11111111111111111111111111111";
pub const SERUM_V1_PROGRAM_ID: &str = "4ckmDgGdxQoPDLUkDT3vHgSAkzA3QRdNq5ywwY4sUSJn";
pub const SERUM_V2_PROGRAM_ID: &str = "EUqojwWA2rd19FZrzeBncJsm38Jm1hEhE3zsmX3bRc2o";
pub const SERUM_V3_PROGRAM_ID: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";
pub const STAKE_POOL_PROGRAM_ID: &str = "SPoo1Ku8WFXoNDMHPsrGSTSG1Y47rzgn41SLUNakuHy";

/// Loader IDs.
pub const NATIVE_LOADER_ID: &str = "NativeLoader1111111111111111111111111111111";
pub const BPF_LOADER_DEPRECATED_ID: &str = "BPFLoader1111111111111111111111111111111111";
pub const BPF_LOADER_ID: &str = "BPFLoader2111111111111111111111111111111111";
pub const BPF_LOADER_UPGRADEABLE_ID: &str = "BPFLoaderUpgradeab1e11111111111111111111111";
pub const LOADER_V4_ID: &str = "LoaderV411111111111111111111111111111111111";
pub const MOVE_LOADER_ID: &str = "MoveLdr111111111111111111111111111111111111";

/// Sysvar IDs.
pub const SYSVAR_CLOCK: &str = "SysvarC1ock11111111111111111111111111111111";
pub const SYSVAR_EPOCH_SCHEDULE: &str = "SysvarEpochSchedu1e111111111111111111111111";
pub const SYSVAR_FEES: &str = "SysvarFees111111111111111111111111111111111";
pub const SYSVAR_INSTRUCTIONS: &str = "Sysvar1nstructions1111111111111111111111111";
pub const SYSVAR_RECENT_BLOCKHASHES: &str = "SysvarRecentB1ockHashes11111111111111111111";
pub const SYSVAR_RENT: &str = "SysvarRent111111111111111111111111111111111";
pub const SYSVAR_REWARDS: &str = "SysvarRewards111111111111111111111111111111";
pub const SYSVAR_SLOT_HASHES: &str = "SysvarS1otHashes111111111111111111111111111";
pub const SYSVAR_SLOT_HISTORY: &str = "SysvarS1otHistory11111111111111111111111111";
pub const SYSVAR_STAKE_HISTORY: &str = "SysvarStakeHistory1111111111111111111111111";
pub const SYSVAR_EPOCH_REWARDS: &str = "SysvarEpochRewards1111111111111111111111111";
pub const SYSVAR_LAST_RESTART_SLOT: &str = "SysvarLastRestartS1ot1111111111111111111111";

pub(crate) const PROGRAM_NAMES: &[(&str, &str)] = &[
    (SYSTEM_PROGRAM_ID, "System Program"),
    (CONFIG_PROGRAM_ID, "Config Program"),
    (STAKE_PROGRAM_ID, "Stake Program"),
    (VOTE_PROGRAM_ID, "Vote Program"),
    (BUDGET_PROGRAM_ID, "Budget Program"),
    (EXCHANGE_PROGRAM_ID, "Exchange Program"),
    (STORAGE_PROGRAM_ID, "Storage Program"),
    (VEST_PROGRAM_ID, "Vest Program"),
    (COMPUTE_BUDGET_PROGRAM_ID, "Compute Budget Program"),
    (ADDRESS_LOOKUP_TABLE_PROGRAM_ID, "Address Lookup Table Program"),
    (TOKEN_PROGRAM_ID, "Token Program"),
    (TOKEN_2022_PROGRAM_ID, "Token-2022 Program"),
    (ATA_PROGRAM_ID, "Associated Token Program"),
    (MEMO_PROGRAM_ID, "Memo Program"),
    (MEMO_V1_PROGRAM_ID, "Memo Program v1"),
    (ED25519_PROGRAM_ID, "Ed25519 SigVerify Precompile"),
    (SECP256K1_PROGRAM_ID, "Secp256k1 SigVerify Precompile"),
    (SERUM_V1_PROGRAM_ID, "Serum Program v1"),
    (SERUM_V2_PROGRAM_ID, "Serum Program v2"),
    (SERUM_V3_PROGRAM_ID, "Serum Program v3"),
    (STAKE_POOL_PROGRAM_ID, "Stake Pool Program"),
];

pub(crate) const LOADER_NAMES: &[(&str, &str)] = &[
    (NATIVE_LOADER_ID, "Native Loader"),
    (BPF_LOADER_DEPRECATED_ID, "BPF Loader"),
    (BPF_LOADER_ID, "BPF Loader 2"),
    (BPF_LOADER_UPGRADEABLE_ID, "BPF Upgradeable Loader"),
    (LOADER_V4_ID, "Loader v4"),
    (MOVE_LOADER_ID, "Move Loader"),
];

pub(crate) const SYSVAR_NAMES: &[(&str, &str)] = &[
    (SYSVAR_CLOCK, "Clock Sysvar"),
    (SYSVAR_EPOCH_SCHEDULE, "Epoch Schedule Sysvar"),
    (SYSVAR_FEES, "Fees Sysvar"),
    (SYSVAR_INSTRUCTIONS, "Instructions Sysvar"),
    (SYSVAR_RECENT_BLOCKHASHES, "Recent Blockhashes Sysvar"),
    (SYSVAR_RENT, "Rent Sysvar"),
    (SYSVAR_REWARDS, "Rewards Sysvar"),
    (SYSVAR_SLOT_HASHES, "Slot Hashes Sysvar"),
    (SYSVAR_SLOT_HISTORY, "Slot History Sysvar"),
    (SYSVAR_STAKE_HISTORY, "Stake History Sysvar"),
    (SYSVAR_EPOCH_REWARDS, "Epoch Rewards Sysvar"),
    (SYSVAR_LAST_RESTART_SLOT, "Last Restart Slot Sysvar"),
];

/// Label for addresses in the reserved sysvar range that are not listed above.
pub const SYSVAR_FAMILY_LABEL: &str = "Sysvar";

/// Lowest raw address whose base58 form starts with `Sysvar`
/// (`Sysvar` followed by 37 `1`s).
pub(crate) const SYSVAR_RANGE_START: [u8; 32] = [
    6, 167, 213, 23, 24, 117, 247, 41, 199, 61, 147, 64, 143, 33, 97, 32, 6, 126, 216, 140, 118,
    224, 140, 40, 127, 193, 148, 96, 0, 0, 0, 0,
];

/// Highest raw address whose base58 form starts with `Sysvar`
/// (`Sysvar` followed by 37 `z`s).
pub(crate) const SYSVAR_RANGE_END: [u8; 32] = [
    6, 167, 213, 23, 26, 35, 26, 105, 186, 119, 81, 235, 147, 83, 97, 17, 116, 233, 131, 136, 73,
    181, 72, 51, 176, 8, 217, 255, 255, 255, 255, 255,
];

fn build(table: &[(&'static str, &'static str)]) -> HashMap<Address, &'static str> {
    table
        .iter()
        .filter_map(|(id, name)| Address::from_str(id).ok().map(|address| (address, *name)))
        .collect()
}

pub(crate) static PROGRAM_LABELS: LazyLock<HashMap<Address, &'static str>> =
    LazyLock::new(|| build(PROGRAM_NAMES));

pub(crate) static LOADER_LABELS: LazyLock<HashMap<Address, &'static str>> =
    LazyLock::new(|| build(LOADER_NAMES));

pub(crate) static SYSVAR_LABELS: LazyLock<HashMap<Address, &'static str>> =
    LazyLock::new(|| build(SYSVAR_NAMES));

/// Whether the address falls in the reserved sysvar address range.
pub(crate) fn is_sysvar_family(address: &Address) -> bool {
    let bytes: &[u8] = address.as_ref();
    bytes >= &SYSVAR_RANGE_START[..] && bytes <= &SYSVAR_RANGE_END[..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_table_entries_parse() {
        assert_eq!(PROGRAM_LABELS.len(), PROGRAM_NAMES.len());
        assert_eq!(LOADER_LABELS.len(), LOADER_NAMES.len());
        assert_eq!(SYSVAR_LABELS.len(), SYSVAR_NAMES.len());
    }

    #[test]
    fn test_every_listed_sysvar_is_in_family_range() {
        for address in SYSVAR_LABELS.keys() {
            assert!(is_sysvar_family(address), "{} outside sysvar range", address);
        }
    }

    #[test]
    fn test_sysvar_owner_is_in_family_range() {
        let owner = Address::from_str("Sysvar1111111111111111111111111111111111111").unwrap();
        assert!(is_sysvar_family(&owner));
        assert!(!SYSVAR_LABELS.contains_key(&owner));
    }

    #[test]
    fn test_programs_are_not_in_family_range() {
        for address in PROGRAM_LABELS.keys().chain(LOADER_LABELS.keys()) {
            assert!(!is_sysvar_family(address), "{} inside sysvar range", address);
        }
    }
}
