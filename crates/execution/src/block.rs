//! Execution blocks, as served over JSON-RPC or saved to a file.

use crate::{ExecutionError, ExecutionResult};
use alloy_consensus::{Header, TxEnvelope};
use alloy_eips::eip4895::Withdrawal;
use alloy_primitives::B256;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// A block with hydrated transactions in the `eth_getBlockByNumber` JSON shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcBlock {
    /// The consensus header.
    #[serde(flatten)]
    pub header: Header,
    /// The hash the block declares for itself.
    pub hash: B256,
    /// Full transaction objects.
    #[serde(default)]
    pub transactions: Vec<TxEnvelope>,
    /// Withdrawals, from shanghai on.
    #[serde(default)]
    pub withdrawals: Option<Vec<Withdrawal>>,
}

/// The execution block a genesis payload header is derived from.
#[derive(Debug, Clone)]
pub struct ExecutionBlock {
    /// The consensus header.
    pub header: Header,
    /// Value for the payload header's `prev_randao`.
    pub prev_randao: B256,
    /// Transactions of the block.
    pub transactions: Vec<TxEnvelope>,
    /// Withdrawals of the block, if it carries a withdrawal list.
    pub withdrawals: Option<Vec<Withdrawal>>,
}

impl ExecutionBlock {
    /// The block hash, recomputed from the header.
    pub fn hash(&self) -> B256 {
        self.header.hash_slow()
    }
}

impl From<RpcBlock> for ExecutionBlock {
    /// Pre-merge style blocks carry the RANDAO value in the difficulty field.
    fn from(block: RpcBlock) -> Self {
        let computed = block.header.hash_slow();
        if computed != block.hash {
            warn!(
                target: "execution",
                "Block {} declares hash {} but its header hashes to {computed}",
                block.header.number,
                block.hash
            );
        }
        Self {
            prev_randao: B256::from(block.header.difficulty.to_be_bytes::<32>()),
            header: block.header,
            transactions: block.transactions,
            withdrawals: block.withdrawals,
        }
    }
}

/// Reads a block from a JSON file holding either a JSON-RPC response (`{"result": block}`) or
/// a bare block object.
pub fn load_block_file(path: &Path) -> ExecutionResult<ExecutionBlock> {
    let json_err = |source| ExecutionError::Json { path: path.to_path_buf(), source };

    let raw = std::fs::read_to_string(path)
        .map_err(|source| ExecutionError::Io { path: path.to_path_buf(), source })?;
    let mut value = serde_json::from_str::<Value>(&raw).map_err(json_err)?;
    if let Some(result) = value.get_mut("result") {
        value = result.take();
    }
    let block = serde_json::from_value::<RpcBlock>(value).map_err(json_err)?;

    info!(target: "execution", "Loaded block {} from {}", block.header.number, path.display());
    Ok(block.into())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use serde_json::json;

    pub(crate) fn sample_header() -> Header {
        Header {
            number: 21,
            gas_limit: 30_000_000,
            gas_used: 0,
            timestamp: 1_700_000_000,
            difficulty: U256::from(0x1234),
            beneficiary: Address::repeat_byte(0xfe),
            base_fee_per_gas: Some(7),
            withdrawals_root: Some(B256::repeat_byte(1)),
            blob_gas_used: Some(0),
            excess_blob_gas: Some(0),
            parent_beacon_block_root: Some(B256::ZERO),
            requests_hash: Some(alloy_eips::eip7685::EMPTY_REQUESTS_HASH),
            ..Default::default()
        }
    }

    fn block_json(header: &Header, hash: B256) -> Value {
        let mut value = serde_json::to_value(header).unwrap();
        let object = value.as_object_mut().unwrap();
        object.insert("hash".to_string(), json!(hash));
        object.insert("transactions".to_string(), json!([]));
        object.insert(
            "withdrawals".to_string(),
            json!([{
                "index": "0x1",
                "validatorIndex": "0x2",
                "address": Address::repeat_byte(3),
                "amount": "0x4"
            }]),
        );
        value
    }

    #[test]
    fn test_load_rpc_envelope() {
        let header = sample_header();
        let file = tempfile::NamedTempFile::new().unwrap();
        let envelope = json!({"jsonrpc": "2.0", "id": 1, "result": block_json(&header, header.hash_slow())});
        std::fs::write(file.path(), envelope.to_string()).unwrap();

        let block = load_block_file(file.path()).unwrap();
        assert_eq!(block.header, header);
        assert_eq!(block.hash(), header.hash_slow());
        assert_eq!(block.prev_randao, B256::from(U256::from(0x1234).to_be_bytes::<32>()));
        let withdrawals = block.withdrawals.unwrap();
        assert_eq!(withdrawals.len(), 1);
        assert_eq!(withdrawals[0].validator_index, 2);
        assert!(block.transactions.is_empty());
    }

    #[test]
    fn test_load_bare_block_with_wrong_hash() {
        let header = sample_header();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), block_json(&header, B256::repeat_byte(9)).to_string()).unwrap();

        let block = load_block_file(file.path()).unwrap();
        assert_eq!(block.hash(), header.hash_slow());
    }

    #[test]
    fn test_load_invalid_block() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"result": {"number": "0x1"}}"#).unwrap();
        assert!(matches!(load_block_file(file.path()), Err(ExecutionError::Json { .. })));

        let missing = file.path().with_extension("missing");
        assert!(matches!(load_block_file(&missing), Err(ExecutionError::Io { .. })));
    }
}
