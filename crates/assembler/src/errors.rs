//! Errors for the `genesis-assembler` crate.

use genesis_keys::KeyError;
use genesis_primitives::{ConfigError, ForkName, StateError};
use thiserror::Error;

/// A [Result] type for the [AssemblyError].
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// An error assembling a genesis state.
///
/// Every variant except [AssemblyError::Invariant] is caused by the inputs.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// `eth1_timestamp + genesis_delay` does not fit a `u64`.
    #[error("Genesis time overflows: {eth1_timestamp} + {genesis_delay}")]
    GenesisTimeOverflow {
        /// The eth1 timestamp.
        eth1_timestamp: u64,
        /// The configured delay.
        genesis_delay: u64,
    },
    /// The chain configuration lacks a value the fork needs.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The validator set does not fit the registry of the preset.
    #[error("Validator set exceeds the registry limit: {0}")]
    RegistryFull(StateError),
    /// No validator is active at genesis, so no sync committee can be selected.
    #[error("No validator is active at genesis, cannot select a sync committee")]
    EmptyActiveSet,
    /// The sync committee pubkeys could not be aggregated.
    #[error("Failed to aggregate the sync committee: {0}")]
    Aggregation(#[from] KeyError),
    /// An internal invariant of the assembly does not hold.
    #[error("Internal invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// A condition the assembly itself guarantees, found broken.
#[derive(Error, Debug)]
pub enum InvariantViolation {
    /// The eth1 deposit index is not zero after setting empty eth1 data.
    #[error("expected eth1 deposit index 0, got {0}")]
    DepositIndex(u64),
    /// An execution fork was assembled without a payload header.
    #[error("{0} genesis requires an execution payload header")]
    MissingHeader(ForkName),
    /// A pre-merge fork was given a payload header.
    #[error("{0} states do not embed an execution payload header")]
    UnexpectedHeader(ForkName),
    /// The state rejected a field update.
    #[error("state update failed: {0}")]
    State(#[from] StateError),
    /// Shuffling produced an index outside the active set.
    #[error("shuffled index {index} is outside an active set of {count}")]
    ShuffleOutOfRange {
        /// The offending index.
        index: usize,
        /// Size of the active set.
        count: usize,
    },
    /// The selected committee does not match the preset size.
    #[error("sync committee has {got} members, expected {expected}")]
    CommitteeSize {
        /// The number of selected members.
        got: usize,
        /// The preset committee size.
        expected: usize,
    },
}
