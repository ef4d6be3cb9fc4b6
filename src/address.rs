//! Solana address (public key) helpers.
//!
//! Wraps `solana_address::Address`. Two addresses are equal when their
//! 32 bytes are equal; the base58 string is for display only.

use crate::error::ExplorerError;
use std::str::FromStr;

/// Re-export the underlying Solana Address type.
pub use solana_address::Address;

/// Extension trait for Address to add explorer-friendly error handling.
pub trait AddressExt {
    fn from_base58(address: &str) -> Result<Address, ExplorerError>;
    fn from_bytes_checked(bytes: &[u8]) -> Result<Address, ExplorerError>;
}

impl AddressExt for Address {
    /// Create an Address from a base58 string.
    fn from_base58(address: &str) -> Result<Address, ExplorerError> {
        Address::from_str(address)
            .map_err(|e| ExplorerError::InvalidAddress(format!("{}: {}", address, e)))
    }

    /// Create an Address from a byte slice with length validation.
    fn from_bytes_checked(bytes: &[u8]) -> Result<Address, ExplorerError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            ExplorerError::InvalidAddress(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Address::from(array))
    }
}

/// Serde adapters that read and write addresses as base58 strings.
pub(crate) mod serde_base58 {
    use super::{Address, AddressExt};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(address)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_base58(&s).map_err(D::Error::custom)
    }

    pub mod vec {
        use super::{Address, AddressExt};
        use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            addresses: &[Address],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(addresses.len()))?;
            for address in addresses {
                seq.serialize_element(&address.to_string())?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Address>, D::Error> {
            Vec::<String>::deserialize(deserializer)?
                .iter()
                .map(|s| Address::from_base58(s).map_err(D::Error::custom))
                .collect()
        }
    }
}
