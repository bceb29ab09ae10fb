//! Generic Bitcoin-like parser
//!
//! Coin definitions compose this parser with their own parameter set instead
//! of reimplementing address handling.

use crate::address::{self, AddressDescriptor};
use crate::config::{Configuration, DEFAULT_MINIMUM_COINBASE_CONFIRMATIONS};
use crate::Result;
use coin_params::ChainParams;

/// Interface the indexer uses uniformly for every supported coin
pub trait BlockChainParser: Send + Sync {
    /// Parameter set the parser is bound to
    fn params(&self) -> &ChainParams;

    /// Convert an address to its descriptor
    fn get_addr_desc_from_address(&self, address: &str) -> Result<AddressDescriptor>;

    /// Convert an output script to its descriptor
    fn get_addr_desc_from_script(&self, script: &[u8]) -> AddressDescriptor {
        AddressDescriptor::new(script.to_vec())
    }

    /// Addresses a descriptor pays to, and whether they are searchable
    fn get_addresses_from_addr_desc(
        &self,
        descriptor: &AddressDescriptor,
    ) -> Result<(Vec<String>, bool)>;

    /// Output script of a descriptor
    fn get_script_from_addr_desc(&self, descriptor: &AddressDescriptor) -> Result<Vec<u8>> {
        Ok(descriptor.as_bytes().to_vec())
    }

    /// Confirmations before a coinbase output is spendable
    fn minimum_coinbase_confirmations(&self) -> u32;
}

/// Parser for coins following Bitcoin's address and script conventions
#[derive(Debug, Clone)]
pub struct BitcoinLikeParser {
    params: &'static ChainParams,
    config: Configuration,
}

impl BitcoinLikeParser {
    /// Bind a parser to a parameter set and configuration
    ///
    /// A zero `minimum_coinbase_confirmations` means unset and is replaced by
    /// [`DEFAULT_MINIMUM_COINBASE_CONFIRMATIONS`].
    pub fn new(params: &'static ChainParams, mut config: Configuration) -> Self {
        if config.minimum_coinbase_confirmations == 0 {
            config.minimum_coinbase_confirmations = DEFAULT_MINIMUM_COINBASE_CONFIRMATIONS;
        }
        tracing::debug!(
            "Creating Bitcoin-like parser for {} ({})",
            params.name,
            params.net
        );
        Self { params, config }
    }

    /// Configuration the parser was created with
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

impl BlockChainParser for BitcoinLikeParser {
    fn params(&self) -> &ChainParams {
        self.params
    }

    fn get_addr_desc_from_address(&self, address: &str) -> Result<AddressDescriptor> {
        address::address_to_descriptor(address, self.params)
    }

    fn get_addresses_from_addr_desc(
        &self,
        descriptor: &AddressDescriptor,
    ) -> Result<(Vec<String>, bool)> {
        address::descriptor_to_addresses(descriptor, self.params)
    }

    fn minimum_coinbase_confirmations(&self) -> u32 {
        self.config.minimum_coinbase_confirmations
    }
}
