//! Sinovate coin definition
//!
//! Sinovate follows Bitcoin's address and script conventions; only its network
//! magic, address version bytes and bech32 prefix differ. This crate supplies
//! those constants and binds them to the generic Bitcoin-like parser.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod params;
pub mod parser;

pub use params::{
    get_chain_params, get_chain_params_in, try_get_chain_params_in, MAIN_NET_PARAMS,
    MAINNET_MAGIC, REGTEST_MAGIC, TESTNET_MAGIC, TEST_NET_PARAMS,
};
pub use parser::{new_sinovate_parser, SinovateParser};
