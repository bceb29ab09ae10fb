//! Property-based tests for coin-sinovate
//!
//! Uses proptest to verify invariants across randomized inputs

use coin_btc::{script, AddressDescriptor, BlockChainParser, Configuration};
use coin_params::NetworkRegistry;
use coin_sinovate::{
    get_chain_params_in, SinovateParser, MAINNET_MAGIC, MAIN_NET_PARAMS, TESTNET_MAGIC,
    TEST_NET_PARAMS,
};
use proptest::prelude::*;

/// Standard output scripts with random hashes and programs
fn descriptor_strategy() -> impl Strategy<Value = AddressDescriptor> {
    prop_oneof![
        any::<[u8; 20]>().prop_map(|h| AddressDescriptor::new(script::p2pkh_script(&h))),
        any::<[u8; 20]>().prop_map(|h| AddressDescriptor::new(script::p2sh_script(&h))),
        any::<[u8; 20]>().prop_map(|h| AddressDescriptor::new(script::witness_script(0, &h))),
        any::<[u8; 32]>().prop_map(|h| AddressDescriptor::new(script::witness_script(0, &h))),
        any::<[u8; 32]>().prop_map(|h| AddressDescriptor::new(script::witness_script(1, &h))),
    ]
}

proptest! {
    /// Property: every name except "test" selects mainnet
    #[test]
    fn prop_unknown_chain_selects_mainnet(chain in ".{0,16}") {
        prop_assume!(chain != "test");
        let registry = NetworkRegistry::new();
        let params = get_chain_params_in(&registry, &chain);
        prop_assert_eq!(params.net, MAINNET_MAGIC);
        prop_assert_eq!(params.bech32_hrp_segwit, "sin");
    }

    /// Property: selection never changes the registered literals
    #[test]
    fn prop_selection_keeps_params(chains in prop::collection::vec("(test|main|[a-z]{0,6})", 1..8)) {
        let registry = NetworkRegistry::new();
        for chain in &chains {
            get_chain_params_in(&registry, chain);
        }
        prop_assert_eq!(registry.len(), 2);
        let test = registry.lookup_by_magic(TESTNET_MAGIC).unwrap();
        prop_assert_eq!(&test, &TEST_NET_PARAMS);
        prop_assert_eq!(test.pubkey_hash_addr_id, &[0x3f][..]);
        prop_assert_eq!(test.script_hash_addr_id, &[0x05][..]);
        prop_assert_eq!(test.bech32_hrp_segwit, "tsin");
    }

    /// Property: descriptor -> address -> descriptor is the identity
    #[test]
    fn prop_descriptor_round_trip(descriptor in descriptor_strategy(), testnet in any::<bool>()) {
        let params = if testnet { &TEST_NET_PARAMS } else { &MAIN_NET_PARAMS };
        let parser = SinovateParser::new(params, Configuration::default());

        let (addresses, searchable) = parser.get_addresses_from_addr_desc(&descriptor).unwrap();
        prop_assert!(searchable);
        prop_assert_eq!(addresses.len(), 1);

        let decoded = parser.get_addr_desc_from_address(&addresses[0]).unwrap();
        prop_assert_eq!(decoded, descriptor);
    }
}
