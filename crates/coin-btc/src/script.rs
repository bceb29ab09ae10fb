//! Standard output-script templates
//!
//! Only the templates an address can stand for are recognized here; anything
//! else is `NonStandard`. No script is ever executed.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// `OP_0`, also the witness version 0 marker
pub const OP_0: u8 = 0x00;
/// `OP_PUSHDATA1`
pub const OP_PUSHDATA1: u8 = 0x4c;
/// `OP_PUSHDATA2`
pub const OP_PUSHDATA2: u8 = 0x4d;
/// `OP_1`, witness version 1
pub const OP_1: u8 = 0x51;
/// `OP_16`, witness version 16
pub const OP_16: u8 = 0x60;
/// `OP_RETURN`
pub const OP_RETURN: u8 = 0x6a;
/// `OP_DUP`
pub const OP_DUP: u8 = 0x76;
/// `OP_EQUAL`
pub const OP_EQUAL: u8 = 0x87;
/// `OP_EQUALVERIFY`
pub const OP_EQUALVERIFY: u8 = 0x88;
/// `OP_HASH160`
pub const OP_HASH160: u8 = 0xa9;
/// `OP_CHECKSIG`
pub const OP_CHECKSIG: u8 = 0xac;

/// Length of a HASH160 digest
pub const HASH160_LEN: usize = 20;

/// Classified output script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptType {
    /// `OP_DUP OP_HASH160 <20> OP_EQUALVERIFY OP_CHECKSIG`
    PubKeyHash([u8; HASH160_LEN]),
    /// `<33 or 65 byte public key> OP_CHECKSIG`
    PubKey(Vec<u8>),
    /// `OP_HASH160 <20> OP_EQUAL`
    ScriptHash([u8; HASH160_LEN]),
    /// `OP_n <program>` with a 2..=40 byte program; 20 or 32 bytes for v0
    WitnessProgram {
        /// Witness version 0..=16
        version: u8,
        /// Witness program
        program: Vec<u8>,
    },
    /// `OP_RETURN ...`
    NullData,
    /// Anything else
    NonStandard,
}

impl ScriptType {
    /// True for taproot outputs (witness v1, 32-byte program)
    pub fn is_taproot(&self) -> bool {
        matches!(self, ScriptType::WitnessProgram { version: 1, program } if program.len() == 32)
    }
}

/// Classify an output script
pub fn classify(script: &[u8]) -> ScriptType {
    if script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] as usize == HASH160_LEN
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
    {
        let mut hash = [0u8; HASH160_LEN];
        hash.copy_from_slice(&script[3..23]);
        return ScriptType::PubKeyHash(hash);
    }

    if script.len() == 23
        && script[0] == OP_HASH160
        && script[1] as usize == HASH160_LEN
        && script[22] == OP_EQUAL
    {
        let mut hash = [0u8; HASH160_LEN];
        hash.copy_from_slice(&script[2..22]);
        return ScriptType::ScriptHash(hash);
    }

    if let Some(key) = pay_to_pubkey_key(script) {
        return ScriptType::PubKey(key.to_vec());
    }

    if let Some(version) = witness_version(script) {
        return ScriptType::WitnessProgram {
            version,
            program: script[2..].to_vec(),
        };
    }

    if script.first() == Some(&OP_RETURN) {
        return ScriptType::NullData;
    }

    ScriptType::NonStandard
}

fn witness_version(script: &[u8]) -> Option<u8> {
    if script.len() < 4 || script.len() > 42 {
        return None;
    }
    if script[1] as usize != script.len() - 2 {
        return None;
    }
    match script[0] {
        // v0 programs are P2WPKH or P2WSH only
        OP_0 if script.len() == 22 || script.len() == 34 => Some(0),
        op @ OP_1..=OP_16 => Some(op - OP_1 + 1),
        _ => None,
    }
}

fn pay_to_pubkey_key(script: &[u8]) -> Option<&[u8]> {
    let (&last, body) = script.split_last()?;
    if last != OP_CHECKSIG || body.is_empty() {
        return None;
    }
    let key = &body[1..];
    let well_formed = match (body[0], key.first()) {
        (33, Some(0x02 | 0x03)) => key.len() == 33,
        (65, Some(0x04)) => key.len() == 65,
        _ => false,
    };
    well_formed.then_some(key)
}

/// RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    let digest = Ripemd160::digest(Sha256::digest(data));
    let mut out = [0u8; HASH160_LEN];
    out.copy_from_slice(&digest);
    out
}

/// Build a pay-to-pubkey-hash script
pub fn p2pkh_script(hash: &[u8; HASH160_LEN]) -> Vec<u8> {
    let mut script = Vec::with_capacity(25);
    script.extend_from_slice(&[OP_DUP, OP_HASH160, HASH160_LEN as u8]);
    script.extend_from_slice(hash);
    script.extend_from_slice(&[OP_EQUALVERIFY, OP_CHECKSIG]);
    script
}

/// Build a pay-to-script-hash script
pub fn p2sh_script(hash: &[u8; HASH160_LEN]) -> Vec<u8> {
    let mut script = Vec::with_capacity(23);
    script.extend_from_slice(&[OP_HASH160, HASH160_LEN as u8]);
    script.extend_from_slice(hash);
    script.push(OP_EQUAL);
    script
}

/// Build a witness program script.
///
/// The caller guarantees `version <= 16` and a 2..=40 byte program, which the
/// bech32 segwit decoder already enforces.
pub fn witness_script(version: u8, program: &[u8]) -> Vec<u8> {
    let op = if version == 0 { OP_0 } else { OP_1 + version - 1 };
    let mut script = Vec::with_capacity(program.len() + 2);
    script.push(op);
    script.push(program.len() as u8);
    script.extend_from_slice(program);
    script
}

/// Extract the pushed payload of an `OP_RETURN` script.
///
/// Accepts `OP_RETURN <len> <data>`, `OP_RETURN OP_PUSHDATA1 <len> <data>` and
/// `OP_RETURN OP_PUSHDATA2 <len-lo> <len-hi> <data>`; the declared length must
/// cover the rest of the script exactly.
pub fn null_data_payload(script: &[u8]) -> Option<&[u8]> {
    if script.len() < 2 || script[0] != OP_RETURN {
        return None;
    }

    let (len, data) = match script[1] {
        OP_PUSHDATA1 if script.len() > 2 && script[2] as usize == script.len() - 3 => {
            (script[2] as usize, &script[3..])
        }
        OP_PUSHDATA2 if script.len() > 3 => {
            let len = script[2] as usize | (script[3] as usize) << 8;
            (len, &script[4..])
        }
        n => (n as usize, &script[2..]),
    };

    (len == data.len()).then_some(data)
}
