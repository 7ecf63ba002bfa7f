//! Errors for the `genesis-execution` crate.

use alloy_primitives::B256;
use alloy_transport::TransportError;
use genesis_primitives::ForkName;
use std::path::PathBuf;
use thiserror::Error;

/// A [Result] type for the [ExecutionError].
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// An error obtaining an execution block or translating it into a payload header.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// A block or genesis config file could not be read.
    #[error("Error reading {path}: {source}")]
    Io {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// A block or genesis config file is not valid JSON of the expected shape.
    #[error("Error parsing {path}: {source}")]
    Json {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
    /// The RPC endpoint URL does not parse.
    #[error("Invalid RPC URL {0:?}")]
    InvalidRpcUrl(String),
    /// A JSON-RPC request failed.
    #[error("RPC request failed: {0}")]
    Rpc(#[from] TransportError),
    /// The endpoint returned no block for a number it reported.
    #[error("RPC endpoint returned no block {0}")]
    MissingBlock(u64),
    /// The EL genesis base fee does not fit a header field.
    #[error("Genesis base fee {0} exceeds the header's 64-bit field")]
    BaseFeeOverflow(u128),
    /// The fork needs an execution block but none was configured.
    #[error("{0} genesis requires an execution block: pass an EL genesis config, block file or RPC endpoint")]
    MissingSource(ForkName),
    /// The fork does not embed an execution payload header.
    #[error("{0} states do not embed an execution payload header")]
    NoExecutionPayload(ForkName),
    /// The block's extra data exceeds the preset limit.
    #[error("Extra data is {len} bytes, max is {max}")]
    ExtraDataTooLong {
        /// Length of the extra data.
        len: usize,
        /// The preset limit.
        max: usize,
    },
    /// An electra block lacks the requests hash.
    #[error("Execution block has no requests hash")]
    MissingRequestsHash,
    /// An electra genesis block commits to execution requests.
    #[error("Expected the empty requests hash {expected} in the genesis block, got {got}")]
    NonEmptyRequestsHash {
        /// The hash of an empty request list.
        expected: B256,
        /// The block's requests hash.
        got: B256,
    },
    /// A deneb or later block lacks a blob gas field.
    #[error("Execution block has no {0} field")]
    MissingBlobGas(&'static str),
    /// A transaction or withdrawal list does not fit the preset.
    #[error("{list} does not fit the payload: {error:?}")]
    ListTooLong {
        /// The name of the list.
        list: &'static str,
        /// The underlying error.
        error: ssz_types::Error,
    },
}
