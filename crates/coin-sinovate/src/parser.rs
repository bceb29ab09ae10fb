//! Sinovate parser handle

use coin_btc::{AddressDescriptor, BitcoinLikeParser, BlockChainParser, Configuration, Result};
use coin_params::ChainParams;

/// Sinovate parser: the Bitcoin-like parser bound to a Sinovate parameter set
#[derive(Debug, Clone)]
pub struct SinovateParser {
    base: BitcoinLikeParser,
}

impl SinovateParser {
    /// Create a parser for `params`. Construction performs no validation.
    pub fn new(params: &'static ChainParams, config: Configuration) -> Self {
        Self {
            base: BitcoinLikeParser::new(params, config),
        }
    }

    /// Underlying generic parser
    pub fn base(&self) -> &BitcoinLikeParser {
        &self.base
    }
}

/// Create a Sinovate parser
pub fn new_sinovate_parser(params: &'static ChainParams, config: Configuration) -> SinovateParser {
    SinovateParser::new(params, config)
}

impl BlockChainParser for SinovateParser {
    fn params(&self) -> &ChainParams {
        self.base.params()
    }

    fn get_addr_desc_from_address(&self, address: &str) -> Result<AddressDescriptor> {
        self.base.get_addr_desc_from_address(address)
    }

    fn get_addr_desc_from_script(&self, script: &[u8]) -> AddressDescriptor {
        self.base.get_addr_desc_from_script(script)
    }

    fn get_addresses_from_addr_desc(
        &self,
        descriptor: &AddressDescriptor,
    ) -> Result<(Vec<String>, bool)> {
        self.base.get_addresses_from_addr_desc(descriptor)
    }

    fn get_script_from_addr_desc(&self, descriptor: &AddressDescriptor) -> Result<Vec<u8>> {
        self.base.get_script_from_addr_desc(descriptor)
    }

    fn minimum_coinbase_confirmations(&self) -> u32 {
        self.base.minimum_coinbase_confirmations()
    }
}
