//! Address descriptors and their conversion to and from addresses
//!
//! An address descriptor is the output script an address pays to. It is what
//! the indexer stores, so every supported address form must map to exactly one
//! descriptor for the network's parameter set.

use crate::script::{self, ScriptType, HASH160_LEN};
use crate::{Error, Result};
use bech32::{Fe32, Hrp};
use coin_params::ChainParams;
use std::fmt;

/// Output script identifying an address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressDescriptor(Vec<u8>);

impl AddressDescriptor {
    /// Wrap raw script bytes
    pub fn new(script: Vec<u8>) -> Self {
        Self(script)
    }

    /// Parse from hex
    pub fn from_hex(s: &str) -> Result<Self> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| Error::InvalidDescriptor(format!("Invalid hex encoding: {e}")))
    }

    /// Script bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the script bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Classify the underlying script
    pub fn script_type(&self) -> ScriptType {
        script::classify(&self.0)
    }
}

impl From<Vec<u8>> for AddressDescriptor {
    fn from(script: Vec<u8>) -> Self {
        Self(script)
    }
}

impl AsRef<[u8]> for AddressDescriptor {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for AddressDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

/// Decode an address of `params`' network into its descriptor
pub fn address_to_descriptor(address: &str, params: &ChainParams) -> Result<AddressDescriptor> {
    if address.is_empty() {
        return Err(Error::InvalidAddress("empty address".to_string()));
    }

    if has_segwit_prefix(address, params) {
        // a base58 address can start with the prefix and a '1' by chance
        return decode_segwit(address, params)
            .or_else(|e| decode_base58(address, params).map_err(|_| e));
    }
    decode_base58(address, params)
}

/// Render the addresses a descriptor pays to.
///
/// Returns the addresses and whether they are searchable. `OP_RETURN` outputs
/// yield a single non-searchable pseudo address; scripts without an address
/// form yield an empty list.
pub fn descriptor_to_addresses(
    descriptor: &AddressDescriptor,
    params: &ChainParams,
) -> Result<(Vec<String>, bool)> {
    match descriptor.script_type() {
        ScriptType::PubKeyHash(hash) => {
            Ok((vec![encode_base58(params.pubkey_hash_addr_id, &hash)], true))
        }
        ScriptType::PubKey(key) => {
            let hash = script::hash160(&key);
            Ok((vec![encode_base58(params.pubkey_hash_addr_id, &hash)], true))
        }
        ScriptType::ScriptHash(hash) => {
            Ok((vec![encode_base58(params.script_hash_addr_id, &hash)], true))
        }
        ScriptType::WitnessProgram { version, program } => {
            let address = encode_segwit(version, &program, params)?;
            Ok((vec![address], true))
        }
        ScriptType::NullData => match null_data_text(descriptor.as_bytes()) {
            Some(text) => Ok((vec![text], false)),
            None => Ok((Vec::new(), false)),
        },
        ScriptType::NonStandard => Ok((Vec::new(), false)),
    }
}

fn has_segwit_prefix(address: &str, params: &ChainParams) -> bool {
    let hrp = params.bech32_hrp_segwit;
    if hrp.is_empty() {
        return false;
    }
    // the separator is the last '1'; the data part never contains one
    match address.rfind('1') {
        Some(sep) => address[..sep].eq_ignore_ascii_case(hrp),
        None => false,
    }
}

fn decode_segwit(address: &str, params: &ChainParams) -> Result<AddressDescriptor> {
    let (hrp, version, program) = bech32::segwit::decode(address)
        .map_err(|e| Error::InvalidAddress(format!("{address}: {e}")))?;

    if !hrp.as_str().eq_ignore_ascii_case(params.bech32_hrp_segwit) {
        return Err(Error::AddressNetworkMismatch {
            address: address.to_string(),
            network: params.name.to_string(),
        });
    }

    Ok(AddressDescriptor(script::witness_script(
        version.to_u8(),
        &program,
    )))
}

fn decode_base58(address: &str, params: &ChainParams) -> Result<AddressDescriptor> {
    let data = bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|e| Error::InvalidAddress(format!("{address}: {e}")))?;

    if let Some(hash) = strip_version(&data, params.pubkey_hash_addr_id) {
        return Ok(AddressDescriptor(script::p2pkh_script(&hash)));
    }
    if let Some(hash) = strip_version(&data, params.script_hash_addr_id) {
        return Ok(AddressDescriptor(script::p2sh_script(&hash)));
    }

    if data.len() > HASH160_LEN {
        return Err(Error::AddressNetworkMismatch {
            address: address.to_string(),
            network: params.name.to_string(),
        });
    }
    Err(Error::InvalidAddress(format!(
        "{address}: unexpected payload length {}",
        data.len()
    )))
}

fn strip_version(data: &[u8], version: &[u8]) -> Option<[u8; HASH160_LEN]> {
    if version.is_empty() || data.len() != version.len() + HASH160_LEN {
        return None;
    }
    let (prefix, hash) = data.split_at(version.len());
    if prefix != version {
        return None;
    }
    let mut out = [0u8; HASH160_LEN];
    out.copy_from_slice(hash);
    Some(out)
}

fn encode_base58(version: &[u8], hash: &[u8; HASH160_LEN]) -> String {
    let mut payload = Vec::with_capacity(version.len() + HASH160_LEN);
    payload.extend_from_slice(version);
    payload.extend_from_slice(hash);
    bs58::encode(payload).with_check().into_string()
}

fn encode_segwit(version: u8, program: &[u8], params: &ChainParams) -> Result<String> {
    let hrp = Hrp::parse(params.bech32_hrp_segwit)
        .map_err(|e| Error::InvalidDescriptor(format!("invalid bech32 prefix: {e}")))?;
    let version = Fe32::try_from(version)
        .map_err(|e| Error::InvalidDescriptor(format!("invalid witness version: {e}")))?;
    bech32::segwit::encode(hrp, version, program)
        .map_err(|e| Error::InvalidDescriptor(format!("witness program: {e}")))
}

fn null_data_text(script: &[u8]) -> Option<String> {
    let data = script::null_data_payload(script)?;
    let rendered = match std::str::from_utf8(data) {
        Ok(text) => format!("({text})"),
        Err(_) => hex::encode(data),
    };
    Some(format!("OP_RETURN {rendered}"))
}
