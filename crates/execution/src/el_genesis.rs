//! Builds the execution genesis block from an EL genesis config.

use crate::{ExecutionBlock, ExecutionError, ExecutionResult};
use alloy_consensus::{Header, EMPTY_OMMER_ROOT_HASH, EMPTY_ROOT_HASH};
use alloy_eips::{eip1559::INITIAL_BASE_FEE, eip7685::EMPTY_REQUESTS_HASH};
use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{b256, keccak256, Address, B256, B64, U256};
use alloy_rlp::{Encodable, RlpEncodable};
use alloy_trie::{HashBuilder, Nibbles};
use std::{collections::BTreeMap, path::Path};

/// Gas limit of a genesis block that does not set one.
const DEFAULT_GAS_LIMIT: u64 = 4_712_388;

const EMPTY_CODE_HASH: B256 =
    b256!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");

/// An Ethereum account as represented in the state trie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, RlpEncodable)]
pub struct TrieAccount {
    /// Account nonce.
    pub nonce: u64,
    /// Account balance.
    pub balance: U256,
    /// Account's storage root.
    pub storage_root: B256,
    /// Hash of the account's bytecode.
    pub code_hash: B256,
}

impl From<&GenesisAccount> for TrieAccount {
    fn from(account: &GenesisAccount) -> Self {
        Self {
            nonce: account.nonce.unwrap_or_default(),
            balance: account.balance,
            storage_root: account.storage.as_ref().map_or(EMPTY_ROOT_HASH, storage_root),
            code_hash: account.code.as_ref().map_or(EMPTY_CODE_HASH, keccak256),
        }
    }
}

/// Reads an EL genesis config (geth `genesis.json` format).
pub fn load_el_genesis(path: &Path) -> ExecutionResult<Genesis> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ExecutionError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&raw)
        .map_err(|source| ExecutionError::Json { path: path.to_path_buf(), source })
}

/// Root of the state trie holding `alloc`.
pub fn state_root(alloc: &BTreeMap<Address, GenesisAccount>) -> B256 {
    let accounts = alloc
        .iter()
        .map(|(address, account)| (keccak256(address), TrieAccount::from(account)))
        .collect::<BTreeMap<_, _>>();

    let mut hb = HashBuilder::default();
    for (hashed_address, account) in accounts {
        let mut account_buffer = Vec::with_capacity(account.length());
        account.encode(&mut account_buffer);
        hb.add_leaf(Nibbles::unpack(hashed_address), &account_buffer);
    }
    hb.root()
}

fn storage_root(storage: &BTreeMap<B256, B256>) -> B256 {
    let slots = storage
        .iter()
        .filter(|(_, value)| !value.is_zero())
        .map(|(slot, value)| (keccak256(slot), U256::from_be_bytes(value.0)))
        .collect::<BTreeMap<_, _>>();

    let mut hb = HashBuilder::default();
    for (hashed_slot, value) in slots {
        hb.add_leaf(Nibbles::unpack(hashed_slot), &alloy_rlp::encode(value));
    }
    hb.root()
}

/// Builds block 0 of the chain described by `genesis`.
///
/// Fork-dependent header fields are set for every fork active at the genesis timestamp:
/// london sets the base fee, shanghai an empty withdrawal list, cancun the blob gas fields and
/// beacon root, prague the empty requests hash.
pub fn genesis_block(genesis: &Genesis) -> ExecutionResult<ExecutionBlock> {
    let config = &genesis.config;
    let active_at = |time: Option<u64>| time.is_some_and(|t| t <= genesis.timestamp);
    let shanghai = active_at(config.shanghai_time);
    let cancun = active_at(config.cancun_time);
    let prague = active_at(config.prague_time);

    let base_fee_per_gas = if config.london_block == Some(0) {
        let fee = genesis.base_fee_per_gas.unwrap_or(u128::from(INITIAL_BASE_FEE));
        Some(u64::try_from(fee).map_err(|_| ExecutionError::BaseFeeOverflow(fee))?)
    } else {
        None
    };

    let header = Header {
        parent_hash: B256::ZERO,
        ommers_hash: EMPTY_OMMER_ROOT_HASH,
        beneficiary: genesis.coinbase,
        state_root: state_root(&genesis.alloc),
        transactions_root: EMPTY_ROOT_HASH,
        receipts_root: EMPTY_ROOT_HASH,
        difficulty: genesis.difficulty,
        number: genesis.number.unwrap_or_default(),
        gas_limit: if genesis.gas_limit == 0 { DEFAULT_GAS_LIMIT } else { genesis.gas_limit },
        gas_used: 0,
        timestamp: genesis.timestamp,
        extra_data: genesis.extra_data.clone(),
        mix_hash: genesis.mix_hash,
        nonce: B64::from(genesis.nonce.to_be_bytes()),
        base_fee_per_gas,
        withdrawals_root: shanghai.then_some(EMPTY_ROOT_HASH),
        blob_gas_used: cancun.then(|| genesis.blob_gas_used.unwrap_or_default()),
        excess_blob_gas: cancun.then(|| genesis.excess_blob_gas.unwrap_or_default()),
        parent_beacon_block_root: cancun.then_some(B256::ZERO),
        requests_hash: prague.then_some(EMPTY_REQUESTS_HASH),
        ..Default::default()
    };

    info!(
        target: "execution",
        "Built EL genesis block {} with {} allocated accounts",
        header.hash_slow(),
        genesis.alloc.len()
    );
    Ok(ExecutionBlock {
        header,
        prev_randao: B256::ZERO,
        transactions: Vec::new(),
        withdrawals: shanghai.then(Vec::new),
    })
}
