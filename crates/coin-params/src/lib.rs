//! Network parameters for Bitcoin-like coins
//!
//! This crate provides the parameter-set type shared by every coin definition,
//! the Bitcoin templates coin definitions are derived from, and the network
//! registry that guarantees each network identity is claimed only once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod network;
pub mod params;
pub mod registry;

pub use network::{NetworkMagic, NetworkType};
pub use params::ChainParams;
pub use registry::NetworkRegistry;

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    /// Network magic already claimed by another parameter set
    #[error("Duplicate network: magic {0} is already registered")]
    DuplicateNetwork(NetworkMagic),

    /// Bech32 prefix already claimed by another parameter set
    #[error("Duplicate bech32 prefix: {0} is already registered")]
    DuplicateHrp(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
