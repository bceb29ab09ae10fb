//! Network registry
//!
//! Each parameter set claims its network magic and its bech32 prefix. A second
//! claim on either is a conflicting coin definition and is rejected.

use crate::network::NetworkMagic;
use crate::params::ChainParams;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

static GLOBAL_REGISTRY: Lazy<NetworkRegistry> = Lazy::new(NetworkRegistry::new);

#[derive(Debug, Default)]
struct Entries {
    by_magic: HashMap<NetworkMagic, ChainParams>,
    by_hrp: HashMap<String, NetworkMagic>,
}

impl Entries {
    fn contains(&self, params: &ChainParams) -> bool {
        self.by_magic.contains_key(&params.net)
    }

    fn insert(&mut self, params: &ChainParams) -> Result<()> {
        if self.by_magic.contains_key(&params.net) {
            return Err(Error::DuplicateNetwork(params.net));
        }
        let hrp = params.bech32_hrp_segwit.to_ascii_lowercase();
        if !hrp.is_empty() && self.by_hrp.contains_key(&hrp) {
            return Err(Error::DuplicateHrp(hrp));
        }

        if !hrp.is_empty() {
            self.by_hrp.insert(hrp, params.net);
        }
        self.by_magic.insert(params.net, params.clone());
        Ok(())
    }
}

/// Registry of the network identities known to the process
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    entries: RwLock<Entries>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry shared by hosts that do not inject their own
    pub fn global() -> &'static NetworkRegistry {
        &GLOBAL_REGISTRY
    }

    /// Register a parameter set
    pub fn register(&self, params: &ChainParams) -> Result<()> {
        let mut entries = self.entries.write();
        Self::register_locked(&mut entries, params)
    }

    /// Check whether the parameter set's network magic is registered
    pub fn is_registered(&self, params: &ChainParams) -> bool {
        self.entries.read().contains(params)
    }

    /// Register `sets` in order unless the first one is already present.
    ///
    /// The presence check and the registrations happen under one write lock,
    /// so concurrent first callers register the sets exactly once. Returns
    /// `true` when this call performed the registration.
    pub fn register_if_absent(&self, sets: &[&ChainParams]) -> Result<bool> {
        let Some(first) = sets.first() else {
            return Ok(false);
        };

        let mut entries = self.entries.write();
        if entries.contains(first) {
            return Ok(false);
        }
        for params in sets {
            Self::register_locked(&mut entries, params)?;
        }
        Ok(true)
    }

    /// Find a registered parameter set by network magic
    pub fn lookup_by_magic(&self, magic: NetworkMagic) -> Option<ChainParams> {
        self.entries.read().by_magic.get(&magic).cloned()
    }

    /// Find a registered parameter set by bech32 prefix (case-insensitive)
    pub fn lookup_by_hrp(&self, hrp: &str) -> Option<ChainParams> {
        let entries = self.entries.read();
        let magic = entries.by_hrp.get(&hrp.to_ascii_lowercase())?;
        entries.by_magic.get(magic).cloned()
    }

    /// Number of registered networks
    pub fn len(&self) -> usize {
        self.entries.read().by_magic.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().by_magic.is_empty()
    }

    /// Forget every registration
    pub fn reset(&self) {
        let mut entries = self.entries.write();
        entries.by_magic.clear();
        entries.by_hrp.clear();
        tracing::debug!("Network registry reset");
    }

    fn register_locked(entries: &mut Entries, params: &ChainParams) -> Result<()> {
        match entries.insert(params) {
            Ok(()) => {
                tracing::info!(
                    "Registered network {} (magic {}, hrp {:?})",
                    params.name,
                    params.net,
                    params.bech32_hrp_segwit
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected network {}: {}", params.name, e);
                Err(e)
            }
        }
    }
}
