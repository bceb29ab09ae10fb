//! Chain parameter sets
//!
//! Coin definitions derive their parameter sets from the Bitcoin templates
//! below with struct-update syntax, overriding only what differs.

use crate::network::{NetworkMagic, NetworkType};
use serde::Serialize;

/// Network-identifying constants a parser is configured with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainParams {
    /// Human-readable name
    pub name: &'static str,
    /// Network type
    pub network_type: NetworkType,
    /// Peer-protocol magic
    pub net: NetworkMagic,
    /// Default P2P port
    pub default_port: u16,
    /// Version bytes of pay-to-pubkey-hash addresses
    pub pubkey_hash_addr_id: &'static [u8],
    /// Version bytes of pay-to-script-hash addresses
    pub script_hash_addr_id: &'static [u8],
    /// WIF private key version byte
    pub private_key_id: u8,
    /// Bech32 human-readable prefix of segwit and taproot addresses
    pub bech32_hrp_segwit: &'static str,
    /// BIP-32 extended public key version
    pub hd_public_key_id: [u8; 4],
    /// BIP-32 extended private key version
    pub hd_private_key_id: [u8; 4],
    /// BIP-44 coin type
    pub hd_coin_type: u32,
}

impl ChainParams {
    /// True when `version` starts a pay-to-pubkey-hash address on this network
    pub fn is_pubkey_hash_addr_id(&self, version: &[u8]) -> bool {
        self.pubkey_hash_addr_id == version
    }

    /// True when `version` starts a pay-to-script-hash address on this network
    pub fn is_script_hash_addr_id(&self, version: &[u8]) -> bool {
        self.script_hash_addr_id == version
    }
}

/// Bitcoin mainnet template
pub const BITCOIN_MAIN_NET_PARAMS: ChainParams = ChainParams {
    name: "mainnet",
    network_type: NetworkType::Mainnet,
    net: NetworkMagic::new(0xd9b4bef9),
    default_port: 8333,
    pubkey_hash_addr_id: &[0x00],
    script_hash_addr_id: &[0x05],
    private_key_id: 0x80,
    bech32_hrp_segwit: "bc",
    hd_public_key_id: [0x04, 0x88, 0xb2, 0x1e],
    hd_private_key_id: [0x04, 0x88, 0xad, 0xe4],
    hd_coin_type: 0,
};

/// Bitcoin testnet3 template
pub const BITCOIN_TEST_NET3_PARAMS: ChainParams = ChainParams {
    name: "testnet3",
    network_type: NetworkType::Testnet,
    net: NetworkMagic::new(0x0709110b),
    default_port: 18333,
    pubkey_hash_addr_id: &[0x6f],
    script_hash_addr_id: &[0xc4],
    private_key_id: 0xef,
    bech32_hrp_segwit: "tb",
    hd_public_key_id: [0x04, 0x35, 0x87, 0xcf],
    hd_private_key_id: [0x04, 0x35, 0x83, 0x94],
    hd_coin_type: 1,
};

/// Bitcoin regression-test template
pub const BITCOIN_REG_TEST_PARAMS: ChainParams = ChainParams {
    name: "regtest",
    network_type: NetworkType::Regtest,
    net: NetworkMagic::new(0xdab5bffa),
    default_port: 18444,
    bech32_hrp_segwit: "bcrt",
    ..BITCOIN_TEST_NET3_PARAMS
};

/// Bitcoin template for a network type
pub const fn bitcoin_template(network_type: NetworkType) -> ChainParams {
    match network_type {
        NetworkType::Mainnet => BITCOIN_MAIN_NET_PARAMS,
        NetworkType::Testnet => BITCOIN_TEST_NET3_PARAMS,
        NetworkType::Regtest => BITCOIN_REG_TEST_PARAMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitcoin_templates() {
        assert_eq!(BITCOIN_MAIN_NET_PARAMS.net.as_u32(), 0xd9b4bef9);
        assert_eq!(BITCOIN_MAIN_NET_PARAMS.bech32_hrp_segwit, "bc");
        assert_eq!(BITCOIN_TEST_NET3_PARAMS.pubkey_hash_addr_id, &[0x6f]);
        assert_eq!(BITCOIN_REG_TEST_PARAMS.script_hash_addr_id, &[0xc4]);
        assert_eq!(BITCOIN_REG_TEST_PARAMS.hd_coin_type, 1);
    }

    #[test]
    fn test_template_by_type() {
        assert_eq!(bitcoin_template(NetworkType::Testnet), BITCOIN_TEST_NET3_PARAMS);
        assert_eq!(bitcoin_template(NetworkType::Regtest).name, "regtest");
    }

    #[test]
    fn test_version_checks() {
        let params = BITCOIN_MAIN_NET_PARAMS;
        assert!(params.is_pubkey_hash_addr_id(&[0x00]));
        assert!(!params.is_pubkey_hash_addr_id(&[0x05]));
        assert!(params.is_script_hash_addr_id(&[0x05]));
        assert!(!params.is_script_hash_addr_id(&[0x05, 0x00]));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(&BITCOIN_MAIN_NET_PARAMS).unwrap();
        assert_eq!(json["bech32_hrp_segwit"], "bc");
        assert_eq!(json["network_type"], "Mainnet");
        assert_eq!(json["pubkey_hash_addr_id"][0], 0);
    }
}
