//! Coin configuration
//!
//! Mirrors the JSON coin configuration the indexer is started with. The parser
//! reads `address_format` and `minimum_coinbase_confirmations`; the remaining
//! fields carry host settings through unchanged. Unknown keys are ignored.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of confirmations before a coinbase output is spendable
pub const DEFAULT_MINIMUM_COINBASE_CONFIRMATIONS: u32 = 100;

/// Address rendering requested by the coin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFormat {
    /// Base58 and bech32 addresses
    #[default]
    Legacy,
    /// CashAddr (Bitcoin Cash family only)
    Cashaddr,
}

/// Generic coin configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Coin name, e.g. "Sinovate"
    pub coin_name: String,
    /// Ticker, e.g. "SIN"
    pub coin_shortcut: String,
    /// Display label
    pub coin_label: String,
    /// Backend RPC endpoint
    pub rpc_url: String,
    /// Backend RPC user
    pub rpc_user: String,
    /// Backend RPC password
    pub rpc_pass: String,
    /// Backend RPC timeout in seconds
    pub rpc_timeout: u32,
    /// Whether blocks are parsed locally instead of fetched decoded
    pub parse: bool,
    /// Backend subversion string
    pub subversion: String,
    /// Address rendering
    pub address_format: AddressFormat,
    /// Confirmations before a coinbase output is spendable
    pub minimum_coinbase_confirmations: u32,
    /// Number of blocks whose address lists are kept for rollback
    pub block_addresses_to_keep: u32,
    /// Extended public key version for legacy xpubs
    pub xpub_magic: u32,
    /// Extended public key version for P2SH-wrapped segwit xpubs
    pub xpub_magic_segwit_p2sh: u32,
    /// Extended public key version for native segwit xpubs
    pub xpub_magic_segwit_native: u32,
    /// SLIP-44 coin type
    pub slip44: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            coin_name: String::new(),
            coin_shortcut: String::new(),
            coin_label: String::new(),
            rpc_url: String::new(),
            rpc_user: String::new(),
            rpc_pass: String::new(),
            rpc_timeout: 25,
            parse: false,
            subversion: String::new(),
            address_format: AddressFormat::Legacy,
            minimum_coinbase_confirmations: DEFAULT_MINIMUM_COINBASE_CONFIRMATIONS,
            block_addresses_to_keep: 300,
            xpub_magic: 0,
            xpub_magic_segwit_p2sh: 0,
            xpub_magic_segwit_native: 0,
            slip44: 0,
        }
    }
}

impl Configuration {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Configuration = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded coin configuration from {}", path.display());
        Self::from_json(&json)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.address_format == AddressFormat::Cashaddr {
            return Err(Error::Config(
                "cashaddr address format is not supported by Bitcoin-like parsers".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.minimum_coinbase_confirmations, 100);
        assert_eq!(config.address_format, AddressFormat::Legacy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Configuration::from_json(
            r#"{
                "coin_name": "Sinovate",
                "coin_shortcut": "SIN",
                "rpc_url": "http://127.0.0.1:20971",
                "parse": true,
                "slip44": 387,
                "unrelated_key": [1, 2, 3]
            }"#,
        )
        .unwrap();

        assert_eq!(config.coin_name, "Sinovate");
        assert_eq!(config.coin_shortcut, "SIN");
        assert!(config.parse);
        assert_eq!(config.slip44, 387);
        assert_eq!(config.rpc_timeout, 25);
        assert_eq!(config.minimum_coinbase_confirmations, 100);
    }

    #[test]
    fn test_from_json_rejects_cashaddr() {
        let result = Configuration::from_json(r#"{"address_format": "cashaddr"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        let result = Configuration::from_json("{ not json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"coin_name": "Sinovate", "minimum_coinbase_confirmations": 20}}"#)
            .unwrap();

        let config = Configuration::from_file(file.path()).unwrap();
        assert_eq!(config.coin_name, "Sinovate");
        assert_eq!(config.minimum_coinbase_confirmations, 20);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Configuration::from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
