//! BLS12-381 setup, EIP-2333 tree derivation and EIP-2334 key paths.

use crate::{KeyError, KeyResult};
use blst::min_pk::{AggregatePublicKey, PublicKey, SecretKey};
use genesis_primitives::BlsPublicKey;
use std::{fmt, str::FromStr, sync::OnceLock};

/// Purpose field of EIP-2334 validator paths.
const PURPOSE: u32 = 12381;

/// Coin type of EIP-2334 validator paths.
const COIN_TYPE: u32 = 3600;

static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Initializes the BLS backend.
///
/// The first call runs a derivation and point-compression self-check and caches the outcome;
/// every later call returns the cached result.
pub fn init() -> KeyResult<()> {
    INIT.get_or_init(self_check).clone().map_err(KeyError::BlsInit)
}

fn self_check() -> Result<(), String> {
    let master = SecretKey::derive_master_eip2333(&[0x5a; 32]).map_err(|e| format!("{e:?}"))?;
    let pubkey = master.derive_child_eip2333(0).sk_to_pk();
    let compressed = pubkey.compress();
    let decoded = PublicKey::key_validate(&compressed).map_err(|e| format!("{e:?}"))?;
    if decoded.compress() != compressed {
        return Err("public key does not survive compression".to_string());
    }
    debug!(target: "keys", "BLS self-check passed");
    Ok(())
}

/// An EIP-2334 derivation path such as `m/12381/3600/0/0/0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath(Vec<u32>);

impl KeyPath {
    /// Path of the signing key of validator `index`.
    pub fn signing(index: u32) -> Self {
        Self(vec![PURPOSE, COIN_TYPE, index, 0, 0])
    }

    /// Path of the withdrawal key of validator `index`.
    pub fn withdrawal(index: u32) -> Self {
        Self(vec![PURPOSE, COIN_TYPE, index, 0])
    }

    /// The child indices below the master key.
    pub fn components(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for KeyPath {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| KeyError::InvalidKeyPath { path: s.to_string(), reason };

        let mut parts = s.trim().split('/');
        if parts.next() != Some("m") {
            return Err(invalid("must start with `m`"));
        }
        parts
            .map(|part| part.parse::<u32>().map_err(|_| invalid("components must be u32 integers")))
            .collect::<KeyResult<Vec<_>>>()
            .map(Self)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for component in &self.0 {
            write!(f, "/{component}")?;
        }
        Ok(())
    }
}

/// The root of an EIP-2333 key tree.
#[derive(Debug, Clone)]
pub struct MasterKey(SecretKey);

impl MasterKey {
    /// Derives the master key from a seed of at least 32 bytes.
    pub fn from_seed(seed: &[u8]) -> KeyResult<Self> {
        SecretKey::derive_master_eip2333(seed)
            .map(Self)
            .map_err(|e| KeyError::InvalidSeed(format!("{e:?}")))
    }

    /// Walks `path` down from the master key.
    pub fn derive(&self, path: &KeyPath) -> SecretKey {
        path.components().iter().fold(self.0.clone(), |sk, index| sk.derive_child_eip2333(*index))
    }

    /// The master secret key.
    pub const fn secret_key(&self) -> &SecretKey {
        &self.0
    }
}

/// The compressed public key of `sk`, validated to be a usable point.
pub fn public_key(sk: &SecretKey) -> KeyResult<BlsPublicKey> {
    let pubkey = sk.sk_to_pk();
    pubkey.validate().map_err(|e| KeyError::InvalidPublicKey {
        pubkey: BlsPublicKey::from(pubkey.compress()),
        reason: format!("{e:?}"),
    })?;
    Ok(BlsPublicKey::from(pubkey.compress()))
}

/// Aggregates compressed public keys into their compressed BLS sum.
pub fn aggregate_public_keys(pubkeys: &[BlsPublicKey]) -> KeyResult<BlsPublicKey> {
    let points = pubkeys
        .iter()
        .map(|pubkey| {
            PublicKey::key_validate(pubkey.as_slice()).map_err(|e| KeyError::InvalidPublicKey {
                pubkey: *pubkey,
                reason: format!("{e:?}"),
            })
        })
        .collect::<KeyResult<Vec<_>>>()?;
    let refs = points.iter().collect::<Vec<_>>();
    let aggregate = AggregatePublicKey::aggregate(&refs, false)
        .map_err(|e| KeyError::Aggregation(format!("{e:?}")))?;
    Ok(BlsPublicKey::from(aggregate.to_public_key().compress()))
}
