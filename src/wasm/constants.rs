//! Program ID constants exported via WASM.
//!
//! Lets JavaScript reference the programs the explorer decodes without
//! importing @solana/web3.js.

use wasm_bindgen::prelude::*;

use crate::labels::{
    COMPUTE_BUDGET_PROGRAM_ID, SERUM_V1_PROGRAM_ID, SERUM_V2_PROGRAM_ID, SERUM_V3_PROGRAM_ID,
    STAKE_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

/// System Program ID
#[wasm_bindgen(js_name = systemProgramId)]
pub fn system_program_id() -> String {
    SYSTEM_PROGRAM_ID.to_string()
}

/// Stake Program ID
#[wasm_bindgen(js_name = stakeProgramId)]
pub fn stake_program_id() -> String {
    STAKE_PROGRAM_ID.to_string()
}

/// Compute Budget Program ID
#[wasm_bindgen(js_name = computeBudgetProgramId)]
pub fn compute_budget_program_id() -> String {
    COMPUTE_BUDGET_PROGRAM_ID.to_string()
}

/// Token Program ID (SPL Token)
#[wasm_bindgen(js_name = tokenProgramId)]
pub fn token_program_id() -> String {
    TOKEN_PROGRAM_ID.to_string()
}

/// Token-2022 Program ID
#[wasm_bindgen(js_name = token2022ProgramId)]
pub fn token_2022_program_id() -> String {
    TOKEN_2022_PROGRAM_ID.to_string()
}

/// Serum DEX program IDs, oldest first (v1, v2, v3)
#[wasm_bindgen(js_name = serumProgramIds)]
pub fn serum_program_ids() -> Vec<String> {
    [SERUM_V1_PROGRAM_ID, SERUM_V2_PROGRAM_ID, SERUM_V3_PROGRAM_ID]
        .iter()
        .map(|id| id.to_string())
        .collect()
}
