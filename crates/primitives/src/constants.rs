//! Protocol constants shared by every preset.

use alloy_primitives::{aliases::B32, fixed_bytes};

/// The first slot of the chain.
pub const GENESIS_SLOT: u64 = 0;

/// The first epoch of the chain.
pub const GENESIS_EPOCH: u64 = 0;

/// Sentinel epoch for "not scheduled".
pub const FAR_FUTURE_EPOCH: u64 = u64::MAX;

/// Granularity of effective balances, in Gwei.
pub const EFFECTIVE_BALANCE_INCREMENT: u64 = 1_000_000_000;

/// Maximum effective balance of a validator before electra, in Gwei.
pub const MAX_EFFECTIVE_BALANCE: u64 = 32_000_000_000;

/// Maximum effective balance of a compounding validator from electra on, in Gwei.
pub const MAX_EFFECTIVE_BALANCE_ELECTRA: u64 = 2_048_000_000_000;

/// Minimum per-epoch churn from electra on, in Gwei.
pub const MIN_PER_EPOCH_CHURN_LIMIT_ELECTRA: u64 = 128_000_000_000;

/// Number of epochs between a seed being fixed and used.
pub const MIN_SEED_LOOKAHEAD: u64 = 1;

/// Maximum number of epochs an activation or exit is delayed by.
pub const MAX_SEED_LOOKAHEAD: u64 = 4;

/// Depth of the deposit contract merkle tree.
pub const DEPOSIT_CONTRACT_TREE_DEPTH: u64 = 32;

/// Domain of the sync committee selection seed.
pub const DOMAIN_SYNC_COMMITTEE: B32 = fixed_bytes!("07000000");

/// Withdrawal credential prefix of the BLS-hash scheme.
pub const BLS_WITHDRAWAL_PREFIX: u8 = 0x00;

/// Withdrawal credential prefix of the Eth1-address scheme.
pub const ETH1_ADDRESS_WITHDRAWAL_PREFIX: u8 = 0x01;

/// Withdrawal credential prefix of compounding validators (electra).
pub const COMPOUNDING_WITHDRAWAL_PREFIX: u8 = 0x02;

/// Upper bound of the random byte drawn during sync committee selection.
pub const MAX_RANDOM_BYTE: u64 = u8::MAX as u64;

/// Upper bound of the random 16-bit value drawn during electra sync committee selection.
pub const MAX_RANDOM_VALUE: u64 = u16::MAX as u64;

/// Marker for a deposit request start index that has not been observed yet.
pub const UNSET_DEPOSIT_REQUESTS_START_INDEX: u64 = u64::MAX;
