//! Bitcoin-like coin support for the indexer
//!
//! This crate implements the parser shared by every coin that follows
//! Bitcoin's address and output-script conventions: address descriptors,
//! base58check and bech32/bech32m address handling, and the coin
//! configuration record parsers are created with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod config;
pub mod error;
pub mod parser;
pub mod script;

pub use address::AddressDescriptor;
pub use config::{AddressFormat, Configuration, DEFAULT_MINIMUM_COINBASE_CONFIRMATIONS};
pub use error::{Error, ErrorCategory, Result};
pub use parser::{BitcoinLikeParser, BlockChainParser};
pub use script::ScriptType;
