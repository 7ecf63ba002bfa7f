//! Errors for the `genesis-primitives` crate.

use crate::ForkName;
use std::path::PathBuf;
use thiserror::Error;

/// A [Result] type for the [ConfigError].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An error loading or querying a [ChainConfig].
///
/// [ChainConfig]: crate::ChainConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Error reading chain config {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The configuration file is not valid YAML or is missing required keys.
    #[error("Error parsing chain config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// The configuration does not define a version for the requested fork.
    #[error("Chain config does not define a fork version for {0}")]
    MissingForkVersion(ForkName),
}

/// A [Result] type for the [StateError].
pub type StateResult<T> = Result<T, StateError>;

/// An error raised while mutating or decoding a [BeaconState].
///
/// [BeaconState]: crate::BeaconState
#[derive(Error, Debug)]
pub enum StateError {
    /// A bounded SSZ list is already at its limit.
    #[error("{list} is full: {error:?}")]
    ListFull {
        /// The name of the list.
        list: &'static str,
        /// The underlying error.
        error: ssz_types::Error,
    },
    /// The state's fork has no such field.
    #[error("{fork} states have no {field}")]
    Unsupported {
        /// The fork of the state.
        fork: ForkName,
        /// The missing field.
        field: &'static str,
    },
    /// An execution payload header does not match the shape of the state's fork.
    #[error("Execution payload header for {header} cannot be stored in a {state} state")]
    HeaderForkMismatch {
        /// The fork of the state.
        state: ForkName,
        /// The fork whose header shape was supplied.
        header: ForkName,
    },
    /// The SSZ bytes do not decode into a state of the requested fork.
    #[error("Invalid {fork} state encoding: {error:?}")]
    Decode {
        /// The fork the bytes were decoded as.
        fork: ForkName,
        /// The underlying error.
        error: ssz::DecodeError,
    },
}
