//! Translation of execution blocks into consensus payload headers.

use crate::{ExecutionBlock, ExecutionError, ExecutionResult};
use alloy_consensus::TxEnvelope;
use alloy_eips::{eip2718::Encodable2718, eip4895, eip7685::EMPTY_REQUESTS_HASH};
use alloy_primitives::{B256, U256};
use genesis_primitives::{
    EthSpec, ExecutionPayloadHeader, ExecutionPayloadHeaderBellatrix,
    ExecutionPayloadHeaderCapella, ExecutionPayloadHeaderDeneb, ForkName, Transaction,
    Transactions, Withdrawal, Withdrawals,
};
use ssz_types::{FixedVector, VariableList};
use tree_hash::TreeHash;

/// Hash tree root of `transactions` in their EIP-2718 encoding.
pub fn transactions_root<E: EthSpec>(transactions: &[TxEnvelope]) -> ExecutionResult<B256> {
    let list_too_long = |list| move |error| ExecutionError::ListTooLong { list, error };

    let encoded = transactions
        .iter()
        .map(|tx| Transaction::<E>::new(tx.encoded_2718()).map_err(list_too_long("transaction")))
        .collect::<ExecutionResult<Vec<_>>>()?;
    let transactions = Transactions::<E>::new(encoded).map_err(list_too_long("transactions"))?;
    Ok(transactions.tree_hash_root())
}

fn withdrawals_root<E: EthSpec>(
    withdrawals: Option<&[eip4895::Withdrawal]>,
) -> ExecutionResult<B256> {
    let Some(withdrawals) = withdrawals else {
        return Ok(B256::ZERO);
    };
    let withdrawals = withdrawals
        .iter()
        .map(|w| Withdrawal {
            index: w.index,
            validator_index: w.validator_index,
            address: w.address,
            amount: w.amount,
        })
        .collect::<Vec<_>>();
    let withdrawals = Withdrawals::<E>::new(withdrawals)
        .map_err(|error| ExecutionError::ListTooLong { list: "withdrawals", error })?;
    Ok(withdrawals.tree_hash_root())
}

/// Translates `block` into the payload header a `fork` state embeds.
pub fn translate_header<E: EthSpec>(
    fork: ForkName,
    block: &ExecutionBlock,
) -> ExecutionResult<ExecutionPayloadHeader<E>> {
    if !fork.capabilities().execution_payload {
        return Err(ExecutionError::NoExecutionPayload(fork));
    }
    let header = &block.header;

    let extra_data = VariableList::new(header.extra_data.to_vec()).map_err(|_| {
        ExecutionError::ExtraDataTooLong {
            len: header.extra_data.len(),
            max: E::max_extra_data_bytes(),
        }
    })?;

    if fork.capabilities().execution_requests {
        let got = header.requests_hash.ok_or(ExecutionError::MissingRequestsHash)?;
        if got != EMPTY_REQUESTS_HASH {
            return Err(ExecutionError::NonEmptyRequestsHash { expected: EMPTY_REQUESTS_HASH, got });
        }
    }

    macro_rules! payload_header {
        ($ty:ident { $($field:ident: $value:expr),* $(,)? }) => {
            $ty::<E> {
                parent_hash: header.parent_hash,
                fee_recipient: header.beneficiary,
                state_root: header.state_root,
                receipts_root: header.receipts_root,
                logs_bloom: FixedVector::from(header.logs_bloom.to_vec()),
                prev_randao: block.prev_randao,
                block_number: header.number,
                gas_limit: header.gas_limit,
                gas_used: header.gas_used,
                timestamp: header.timestamp,
                extra_data,
                base_fee_per_gas: U256::from(header.base_fee_per_gas.unwrap_or_default()),
                block_hash: block.hash(),
                transactions_root: transactions_root::<E>(&block.transactions)?,
                $($field: $value,)*
            }
        };
    }

    let payload_header = match fork {
        ForkName::Bellatrix => {
            ExecutionPayloadHeader::Bellatrix(payload_header!(ExecutionPayloadHeaderBellatrix {}))
        }
        ForkName::Capella => ExecutionPayloadHeader::Capella(payload_header!(
            ExecutionPayloadHeaderCapella {
                withdrawals_root: withdrawals_root::<E>(block.withdrawals.as_deref())?,
            }
        )),
        _ => ExecutionPayloadHeader::Deneb(payload_header!(ExecutionPayloadHeaderDeneb {
            withdrawals_root: withdrawals_root::<E>(block.withdrawals.as_deref())?,
            blob_gas_used: header
                .blob_gas_used
                .ok_or(ExecutionError::MissingBlobGas("blob_gas_used"))?,
            excess_blob_gas: header
                .excess_blob_gas
                .ok_or(ExecutionError::MissingBlobGas("excess_blob_gas"))?,
        })),
    };

    debug!(
        target: "execution",
        "Translated block {} into a {} payload header",
        header.number,
        payload_header.shape()
    );
    Ok(payload_header)
}

/// The header embedded when no execution block is available: only the block hash, the
/// timestamp and the empty transactions root are set.
///
/// Only bellatrix, the first execution fork, may start without an execution block.
pub fn placeholder_header<E: EthSpec>(
    fork: ForkName,
    block_hash: B256,
    timestamp: u64,
) -> ExecutionResult<ExecutionPayloadHeader<E>> {
    if !fork.capabilities().execution_payload {
        return Err(ExecutionError::NoExecutionPayload(fork));
    }
    if !fork.is_first_execution_fork() {
        return Err(ExecutionError::MissingSource(fork));
    }
    Ok(ExecutionPayloadHeader::Bellatrix(ExecutionPayloadHeaderBellatrix {
        block_hash,
        timestamp,
        transactions_root: transactions_root::<E>(&[])?,
        ..Default::default()
    }))
}
