//! Per-program instruction decoders.
//!
//! A decoder turns the raw data of an [`ExpandedInstruction`] into a numeric
//! operation code and a human-readable name. Decoders are looked up by
//! program address in a [`DecoderRegistry`]; programs without a decoder are
//! shown with raw data by the caller.

mod compute_budget;
mod serum;
mod stake;
mod system;
mod token;

pub use compute_budget::ComputeBudgetDecoder;
pub use serum::SerumDecoder;
pub use stake::StakeDecoder;
pub use system::SystemDecoder;
pub use token::TokenDecoder;

use crate::address::Address;
use crate::message::ExpandedInstruction;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Name reported for codes a decoder has no entry for.
pub const UNKNOWN_OPERATION: &str = "Unknown";

/// Result of decoding one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedOperation {
    pub code: u32,
    pub name: &'static str,
}

impl DecodedOperation {
    /// Look `code` up in a table indexed by code.
    pub fn from_table(code: u32, names: &'static [&'static str]) -> Self {
        let name = usize::try_from(code)
            .ok()
            .and_then(|index| names.get(index))
            .copied()
            .unwrap_or(UNKNOWN_OPERATION);
        DecodedOperation { code, name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("No decoder registered for program {0}")]
    UnknownProgram(String),
    #[error("Instruction data too short: need {needed} bytes, got {actual}")]
    DataTooShort { needed: usize, actual: usize },
}

/// Decoder for one program family.
pub trait InstructionDecoder: Send + Sync {
    /// Program addresses this decoder handles.
    fn program_ids(&self) -> Vec<Address>;

    /// Human-readable program name (e.g. "Serum Program").
    fn program_name(&self) -> &'static str;

    fn decode(&self, instruction: &ExpandedInstruction) -> Result<DecodedOperation, DecodeError>;
}

/// Read a little-endian tag of `width` bytes (1 or 4) starting at `offset`.
pub(crate) fn read_tag(data: &[u8], offset: usize, width: usize) -> Result<u32, DecodeError> {
    let needed = offset + width;
    let bytes = data.get(offset..needed).ok_or(DecodeError::DataTooShort {
        needed,
        actual: data.len(),
    })?;
    Ok(bytes
        .iter()
        .rev()
        .fold(0u32, |tag, &byte| (tag << 8) | u32::from(byte)))
}

pub(crate) fn parse_ids(ids: &[&str]) -> Vec<Address> {
    ids.iter().filter_map(|id| Address::from_str(id).ok()).collect()
}

/// Program address → decoder lookup.
#[derive(Clone, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<Address, Arc<dyn InstructionDecoder>>,
}

impl DecoderRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in decoder.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SerumDecoder);
        registry.register(SystemDecoder);
        registry.register(StakeDecoder);
        registry.register(ComputeBudgetDecoder);
        registry.register(TokenDecoder);
        registry
    }

    /// Add a decoder under each of its program ids. Entries for other
    /// programs are left as they are.
    pub fn register(&mut self, decoder: impl InstructionDecoder + 'static) {
        let decoder: Arc<dyn InstructionDecoder> = Arc::new(decoder);
        for program_id in decoder.program_ids() {
            if self.decoders.contains_key(&program_id) {
                log::debug!("replacing decoder for {}", program_id);
            }
            self.decoders.insert(program_id, Arc::clone(&decoder));
        }
    }

    pub fn get(&self, program_id: &Address) -> Option<&dyn InstructionDecoder> {
        self.decoders.get(program_id).map(|decoder| decoder.as_ref())
    }

    pub fn program_name(&self, program_id: &Address) -> Option<&'static str> {
        self.get(program_id).map(|decoder| decoder.program_name())
    }

    pub fn decode(
        &self,
        instruction: &ExpandedInstruction,
    ) -> Result<DecodedOperation, DecodeError> {
        let Some(decoder) = self.get(&instruction.program_id) else {
            return Err(DecodeError::UnknownProgram(instruction.program_id.to_string()));
        };
        log::trace!(
            "decoding {} instruction ({} bytes)",
            decoder.program_name(),
            instruction.data.len()
        );
        decoder.decode(instruction)
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("programs", &self.decoders.len())
            .finish()
    }
}
