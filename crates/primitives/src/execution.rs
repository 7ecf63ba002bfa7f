//! Execution payloads and payload headers embedded in beacon blocks and states.

use crate::{EthSpec, ForkName};
use alloy_primitives::{Address, B256, U256};
use ssz_derive::{Decode, Encode};
use ssz_types::{FixedVector, VariableList};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// An opaque, EIP-2718 encoded transaction.
pub type Transaction<E> = VariableList<u8, <E as EthSpec>::MaxBytesPerTransaction>;

/// The transaction list of an execution payload.
pub type Transactions<E> = VariableList<Transaction<E>, <E as EthSpec>::MaxTransactionsPerPayload>;

/// The withdrawal list of an execution payload.
pub type Withdrawals<E> = VariableList<Withdrawal, <E as EthSpec>::MaxWithdrawalsPerPayload>;

/// A consensus-layer withdrawal (capella).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct Withdrawal {
    /// Monotonic withdrawal index.
    pub index: u64,
    /// The withdrawing validator.
    pub validator_index: u64,
    /// Recipient address.
    pub address: Address,
    /// Amount in Gwei.
    pub amount: u64,
}

/// Bellatrix execution payload.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadBellatrix<E: EthSpec> {
    /// Parent execution block hash.
    pub parent_hash: B256,
    /// Block beneficiary.
    pub fee_recipient: Address,
    /// Post-state root.
    pub state_root: B256,
    /// Receipts root.
    pub receipts_root: B256,
    /// Logs bloom.
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    /// Previous RANDAO value.
    pub prev_randao: B256,
    /// Block number.
    pub block_number: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Extra data.
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    /// Base fee per gas.
    pub base_fee_per_gas: U256,
    /// Execution block hash.
    pub block_hash: B256,
    /// Transactions.
    pub transactions: Transactions<E>,
}

/// Capella execution payload.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadCapella<E: EthSpec> {
    /// Parent execution block hash.
    pub parent_hash: B256,
    /// Block beneficiary.
    pub fee_recipient: Address,
    /// Post-state root.
    pub state_root: B256,
    /// Receipts root.
    pub receipts_root: B256,
    /// Logs bloom.
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    /// Previous RANDAO value.
    pub prev_randao: B256,
    /// Block number.
    pub block_number: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Extra data.
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    /// Base fee per gas.
    pub base_fee_per_gas: U256,
    /// Execution block hash.
    pub block_hash: B256,
    /// Transactions.
    pub transactions: Transactions<E>,
    /// Withdrawals.
    pub withdrawals: Withdrawals<E>,
}

/// Deneb execution payload, also used by electra.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadDeneb<E: EthSpec> {
    /// Parent execution block hash.
    pub parent_hash: B256,
    /// Block beneficiary.
    pub fee_recipient: Address,
    /// Post-state root.
    pub state_root: B256,
    /// Receipts root.
    pub receipts_root: B256,
    /// Logs bloom.
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    /// Previous RANDAO value.
    pub prev_randao: B256,
    /// Block number.
    pub block_number: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Extra data.
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    /// Base fee per gas.
    pub base_fee_per_gas: U256,
    /// Execution block hash.
    pub block_hash: B256,
    /// Transactions.
    pub transactions: Transactions<E>,
    /// Withdrawals.
    pub withdrawals: Withdrawals<E>,
    /// Blob gas used by the block.
    pub blob_gas_used: u64,
    /// Excess blob gas carried into the block.
    pub excess_blob_gas: u64,
}

/// Bellatrix execution payload header.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadHeaderBellatrix<E: EthSpec> {
    /// Parent execution block hash.
    pub parent_hash: B256,
    /// Block beneficiary.
    pub fee_recipient: Address,
    /// Post-state root.
    pub state_root: B256,
    /// Receipts root.
    pub receipts_root: B256,
    /// Logs bloom.
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    /// Previous RANDAO value.
    pub prev_randao: B256,
    /// Block number.
    pub block_number: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Extra data.
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    /// Base fee per gas.
    pub base_fee_per_gas: U256,
    /// Execution block hash.
    pub block_hash: B256,
    /// Hash tree root of the transaction list.
    pub transactions_root: B256,
}

/// Capella execution payload header.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadHeaderCapella<E: EthSpec> {
    /// Parent execution block hash.
    pub parent_hash: B256,
    /// Block beneficiary.
    pub fee_recipient: Address,
    /// Post-state root.
    pub state_root: B256,
    /// Receipts root.
    pub receipts_root: B256,
    /// Logs bloom.
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    /// Previous RANDAO value.
    pub prev_randao: B256,
    /// Block number.
    pub block_number: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Extra data.
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    /// Base fee per gas.
    pub base_fee_per_gas: U256,
    /// Execution block hash.
    pub block_hash: B256,
    /// Hash tree root of the transaction list.
    pub transactions_root: B256,
    /// Hash tree root of the withdrawal list.
    pub withdrawals_root: B256,
}

/// Deneb execution payload header, also used by electra.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionPayloadHeaderDeneb<E: EthSpec> {
    /// Parent execution block hash.
    pub parent_hash: B256,
    /// Block beneficiary.
    pub fee_recipient: Address,
    /// Post-state root.
    pub state_root: B256,
    /// Receipts root.
    pub receipts_root: B256,
    /// Logs bloom.
    pub logs_bloom: FixedVector<u8, E::BytesPerLogsBloom>,
    /// Previous RANDAO value.
    pub prev_randao: B256,
    /// Block number.
    pub block_number: u64,
    /// Gas limit.
    pub gas_limit: u64,
    /// Gas used.
    pub gas_used: u64,
    /// Block timestamp.
    pub timestamp: u64,
    /// Extra data.
    pub extra_data: VariableList<u8, E::MaxExtraDataBytes>,
    /// Base fee per gas.
    pub base_fee_per_gas: U256,
    /// Execution block hash.
    pub block_hash: B256,
    /// Hash tree root of the transaction list.
    pub transactions_root: B256,
    /// Hash tree root of the withdrawal list.
    pub withdrawals_root: B256,
    /// Blob gas used by the block.
    pub blob_gas_used: u64,
    /// Excess blob gas carried into the block.
    pub excess_blob_gas: u64,
}

/// An execution payload header in the shape of the fork that introduced it.
#[derive(Debug, PartialEq, Clone)]
pub enum ExecutionPayloadHeader<E: EthSpec> {
    /// Bellatrix shape.
    Bellatrix(ExecutionPayloadHeaderBellatrix<E>),
    /// Capella shape.
    Capella(ExecutionPayloadHeaderCapella<E>),
    /// Deneb shape, shared with electra.
    Deneb(ExecutionPayloadHeaderDeneb<E>),
}

macro_rules! map_execution_payload_header {
    ($header:expr, |$inner:ident| $body:expr) => {
        match $header {
            ExecutionPayloadHeader::Bellatrix($inner) => $body,
            ExecutionPayloadHeader::Capella($inner) => $body,
            ExecutionPayloadHeader::Deneb($inner) => $body,
        }
    };
}

impl<E: EthSpec> ExecutionPayloadHeader<E> {
    /// The fork that introduced this header's shape.
    pub const fn shape(&self) -> ForkName {
        match self {
            Self::Bellatrix(_) => ForkName::Bellatrix,
            Self::Capella(_) => ForkName::Capella,
            Self::Deneb(_) => ForkName::Deneb,
        }
    }

    /// Returns `true` if a state of `fork` stores headers of this shape.
    pub fn fits(&self, fork: ForkName) -> bool {
        match fork {
            ForkName::Phase0 | ForkName::Altair => false,
            ForkName::Bellatrix | ForkName::Capella => self.shape() == fork,
            ForkName::Deneb | ForkName::Electra => self.shape() == ForkName::Deneb,
        }
    }

    /// The execution block hash.
    pub fn block_hash(&self) -> B256 {
        map_execution_payload_header!(self, |inner| inner.block_hash)
    }

    /// The execution block timestamp.
    pub fn timestamp(&self) -> u64 {
        map_execution_payload_header!(self, |inner| inner.timestamp)
    }

    /// The transactions root.
    pub fn transactions_root(&self) -> B256 {
        map_execution_payload_header!(self, |inner| inner.transactions_root)
    }

    /// The hash tree root of the header.
    pub fn tree_hash_root(&self) -> B256 {
        map_execution_payload_header!(self, |inner| inner.tree_hash_root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MainnetEthSpec;

    #[test]
    fn test_header_fits_fork() {
        let bellatrix =
            ExecutionPayloadHeader::<MainnetEthSpec>::Bellatrix(Default::default());
        let deneb = ExecutionPayloadHeader::<MainnetEthSpec>::Deneb(Default::default());

        assert!(bellatrix.fits(ForkName::Bellatrix));
        assert!(!bellatrix.fits(ForkName::Capella));
        assert!(!bellatrix.fits(ForkName::Altair));
        assert!(deneb.fits(ForkName::Deneb));
        assert!(deneb.fits(ForkName::Electra));
        assert!(!deneb.fits(ForkName::Capella));
    }

    #[test]
    fn test_empty_transactions_root_matches_payload() {
        // A default payload and a header committing to an empty transaction list agree.
        let payload = ExecutionPayloadBellatrix::<MainnetEthSpec>::default();
        let header = ExecutionPayloadHeaderBellatrix::<MainnetEthSpec> {
            transactions_root: payload.transactions.tree_hash_root(),
            ..Default::default()
        };
        assert_eq!(payload.tree_hash_root(), header.tree_hash_root());
    }
}
