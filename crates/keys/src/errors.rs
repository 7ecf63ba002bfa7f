//! Errors for the `genesis-keys` crate.

use crate::ValidatorOrigin;
use genesis_primitives::BlsPublicKey;
use std::path::PathBuf;
use thiserror::Error;

/// A [Result] type for the [KeyError].
pub type KeyResult<T> = Result<T, KeyError>;

/// An error reading key sources or deriving validator identities.
#[derive(Error, Debug)]
pub enum KeyError {
    /// A key source or tranche file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The seed source file is not a YAML list of `{mnemonic, count}` entries.
    #[error("Invalid seed source file {path}: {source}")]
    SeedSources {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        source: serde_yaml_ng::Error,
    },
    /// A mnemonic failed BIP-39 validation.
    #[error("Mnemonic {source_index} is invalid: {reason}")]
    InvalidMnemonic {
        /// Position of the seed source in its file.
        source_index: usize,
        /// Why the mnemonic was rejected.
        reason: String,
    },
    /// The BLS library self-check failed.
    #[error("BLS initialization failed: {0}")]
    BlsInit(String),
    /// A key derivation path is malformed.
    #[error("Invalid key path {path:?}: {reason}")]
    InvalidKeyPath {
        /// The offending path.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },
    /// The seed is not usable as EIP-2333 input key material.
    #[error("Invalid derivation seed: {0}")]
    InvalidSeed(String),
    /// A seed source requests more validators than EIP-2334 indices can address.
    #[error("Seed source {source_index} requests {count} validators, more than can be indexed")]
    TooManyValidators {
        /// Position of the seed source in its file.
        source_index: usize,
        /// The requested count.
        count: u64,
    },
    /// Deriving one validator failed.
    #[error("Failed to derive validator {validator_index} of seed source {source_index}: {reason}")]
    Derivation {
        /// Position of the seed source in its file.
        source_index: usize,
        /// Index of the validator within the source.
        validator_index: u64,
        /// The underlying failure.
        reason: String,
    },
    /// The derivation worker pool could not be created.
    #[error("Failed to build the derivation pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// A line of an explicit validator list is malformed.
    #[error("Invalid validator list entry on line {line}: {reason}")]
    InvalidListEntry {
        /// 1-based line number.
        line: usize,
        /// Why the entry was rejected.
        reason: String,
    },
    /// The same pubkey appears twice in the combined validator set.
    #[error("Duplicate validator pubkey {pubkey} from {first} and {second}")]
    DuplicatePubkey {
        /// The repeated pubkey.
        pubkey: BlsPublicKey,
        /// Where the pubkey was first seen.
        first: ValidatorOrigin,
        /// Where it was seen again.
        second: ValidatorOrigin,
    },
    /// A pubkey is not a valid compressed BLS12-381 point.
    #[error("Invalid BLS public key {pubkey}: {reason}")]
    InvalidPublicKey {
        /// The offending pubkey.
        pubkey: BlsPublicKey,
        /// The underlying failure.
        reason: String,
    },
    /// Public key aggregation failed.
    #[error("Failed to aggregate public keys: {0}")]
    Aggregation(String),
}
