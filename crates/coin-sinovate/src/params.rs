//! Sinovate network parameters

use coin_params::params::{BITCOIN_MAIN_NET_PARAMS, BITCOIN_TEST_NET3_PARAMS};
use coin_params::{ChainParams, NetworkMagic, NetworkRegistry, Result};

/// Mainnet magic
pub const MAINNET_MAGIC: NetworkMagic = NetworkMagic::new(0xb8d4ddf8);
/// Testnet magic
pub const TESTNET_MAGIC: NetworkMagic = NetworkMagic::new(0xd8f4fdb8);
/// Regtest magic. Shared with Bitcoin regtest, so it is never registered.
pub const REGTEST_MAGIC: NetworkMagic = NetworkMagic::new(0xdab5bffa);

/// Sinovate mainnet parameters
pub static MAIN_NET_PARAMS: ChainParams = ChainParams {
    net: MAINNET_MAGIC,
    pubkey_hash_addr_id: &[63],
    script_hash_addr_id: &[5],
    bech32_hrp_segwit: "sin",
    ..BITCOIN_MAIN_NET_PARAMS
};

/// Sinovate testnet parameters
pub static TEST_NET_PARAMS: ChainParams = ChainParams {
    net: TESTNET_MAGIC,
    pubkey_hash_addr_id: &[63],
    script_hash_addr_id: &[5],
    bech32_hrp_segwit: "tsin",
    ..BITCOIN_TEST_NET3_PARAMS
};

/// Parameters for `chain` from the process-wide registry.
///
/// See [`get_chain_params_in`].
pub fn get_chain_params(chain: &str) -> &'static ChainParams {
    get_chain_params_in(NetworkRegistry::global(), chain)
}

/// Parameters for `chain`, registering both Sinovate networks on first use.
///
/// `"test"` selects testnet; every other name selects mainnet.
///
/// # Panics
///
/// Panics when the registry rejects a Sinovate network, which means another
/// coin definition already claimed its magic or bech32 prefix.
pub fn get_chain_params_in(registry: &NetworkRegistry, chain: &str) -> &'static ChainParams {
    match try_get_chain_params_in(registry, chain) {
        Ok(params) => params,
        Err(e) => panic!("cannot register Sinovate networks: {e}"),
    }
}

/// Fallible form of [`get_chain_params_in`]
pub fn try_get_chain_params_in(
    registry: &NetworkRegistry,
    chain: &str,
) -> Result<&'static ChainParams> {
    if registry.register_if_absent(&[&MAIN_NET_PARAMS, &TEST_NET_PARAMS])? {
        tracing::info!("Registered Sinovate mainnet and testnet parameters");
    }

    let params = match chain {
        "test" => &TEST_NET_PARAMS,
        _ => &MAIN_NET_PARAMS,
    };
    tracing::debug!("Selected Sinovate {} parameters for chain {:?}", params.name, chain);
    Ok(params)
}
