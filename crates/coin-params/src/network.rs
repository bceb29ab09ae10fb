//! Network identity types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    /// Mainnet
    Mainnet,
    /// Testnet
    Testnet,
    /// Regtest (local development)
    Regtest,
}

impl NetworkType {
    /// Short chain name as used in coin configuration files
    pub const fn chain_name(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "main",
            NetworkType::Testnet => "test",
            NetworkType::Regtest => "regtest",
        }
    }
}

impl FromStr for NetworkType {
    type Err = Error;

    /// Strict parse; unlike the coin selectors, unknown names are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" | "mainnet" => Ok(NetworkType::Mainnet),
            "test" | "testnet" => Ok(NetworkType::Testnet),
            "regtest" => Ok(NetworkType::Regtest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.chain_name())
    }
}

/// Peer-protocol magic value prefixing every P2P message.
///
/// Stored as the numeric value; the wire form is little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NetworkMagic(pub u32);

impl NetworkMagic {
    /// Wrap a raw magic value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Numeric value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Bytes as they appear at the start of a P2P message
    pub const fn to_wire_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Read a magic value from the first four bytes of a P2P message
    pub const fn from_wire_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }
}

impl From<u32> for NetworkMagic {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for NetworkMagic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
