//! The beacon state of every fork, and the [BeaconState] wrapper dispatching over them.

use crate::{
    BeaconBlockHeader, Checkpoint, Eth1Data, EthSpec, ExecutionPayloadHeader,
    ExecutionPayloadHeaderBellatrix, ExecutionPayloadHeaderCapella, ExecutionPayloadHeaderDeneb,
    Fork, ForkName, HistoricalSummary, PendingAttestation, PendingConsolidation, PendingDeposit,
    PendingPartialWithdrawal, StateError, StateResult, SyncCommittee, Validator,
};
use alloy_primitives::B256;
use ssz::{Decode as _, Encode as _};
use ssz_derive::{Decode, Encode};
use ssz_types::{BitVector, FixedVector, VariableList};
use tree_hash::TreeHash as _;
use tree_hash_derive::TreeHash;

/// Phase0 beacon state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct BeaconStatePhase0<E: EthSpec> {
    /// Unix time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator registry.
    pub genesis_validators_root: B256,
    /// Current slot.
    pub slot: u64,
    /// Fork versioning.
    pub fork: Fork,
    /// Header of the latest block.
    pub latest_block_header: BeaconBlockHeader,
    /// Recent block roots.
    pub block_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Recent state roots.
    pub state_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Roots of historical batches.
    pub historical_roots: VariableList<B256, E::HistoricalRootsLimit>,
    /// Eth1 data the chain is bound to.
    pub eth1_data: Eth1Data,
    /// Eth1 votes of the current voting period.
    pub eth1_data_votes: VariableList<Eth1Data, E::SlotsPerEth1VotingPeriod>,
    /// Index of the next deposit to process.
    pub eth1_deposit_index: u64,
    /// Validator registry.
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    /// Validator balances, in Gwei.
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,
    /// RANDAO mixes.
    pub randao_mixes: FixedVector<B256, E::EpochsPerHistoricalVector>,
    /// Slashed balances per epoch.
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,
    /// Attestations of the previous epoch.
    pub previous_epoch_attestations: VariableList<PendingAttestation<E>, E::MaxPendingAttestations>,
    /// Attestations of the current epoch.
    pub current_epoch_attestations: VariableList<PendingAttestation<E>, E::MaxPendingAttestations>,
    /// Justification of recent epochs.
    pub justification_bits: BitVector<E::JustificationBitsLength>,
    /// Previous justified checkpoint.
    pub previous_justified_checkpoint: Checkpoint,
    /// Current justified checkpoint.
    pub current_justified_checkpoint: Checkpoint,
    /// Finalized checkpoint.
    pub finalized_checkpoint: Checkpoint,
}

/// Altair beacon state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct BeaconStateAltair<E: EthSpec> {
    /// Unix time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator registry.
    pub genesis_validators_root: B256,
    /// Current slot.
    pub slot: u64,
    /// Fork versioning.
    pub fork: Fork,
    /// Header of the latest block.
    pub latest_block_header: BeaconBlockHeader,
    /// Recent block roots.
    pub block_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Recent state roots.
    pub state_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Roots of historical batches.
    pub historical_roots: VariableList<B256, E::HistoricalRootsLimit>,
    /// Eth1 data the chain is bound to.
    pub eth1_data: Eth1Data,
    /// Eth1 votes of the current voting period.
    pub eth1_data_votes: VariableList<Eth1Data, E::SlotsPerEth1VotingPeriod>,
    /// Index of the next deposit to process.
    pub eth1_deposit_index: u64,
    /// Validator registry.
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    /// Validator balances, in Gwei.
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,
    /// RANDAO mixes.
    pub randao_mixes: FixedVector<B256, E::EpochsPerHistoricalVector>,
    /// Slashed balances per epoch.
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,
    /// Participation flags of the previous epoch.
    pub previous_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Participation flags of the current epoch.
    pub current_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Justification of recent epochs.
    pub justification_bits: BitVector<E::JustificationBitsLength>,
    /// Previous justified checkpoint.
    pub previous_justified_checkpoint: Checkpoint,
    /// Current justified checkpoint.
    pub current_justified_checkpoint: Checkpoint,
    /// Finalized checkpoint.
    pub finalized_checkpoint: Checkpoint,
    /// Inactivity scores.
    pub inactivity_scores: VariableList<u64, E::ValidatorRegistryLimit>,
    /// Sync committee of the current period.
    pub current_sync_committee: SyncCommittee<E>,
    /// Sync committee of the next period.
    pub next_sync_committee: SyncCommittee<E>,
}

/// Bellatrix beacon state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct BeaconStateBellatrix<E: EthSpec> {
    /// Unix time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator registry.
    pub genesis_validators_root: B256,
    /// Current slot.
    pub slot: u64,
    /// Fork versioning.
    pub fork: Fork,
    /// Header of the latest block.
    pub latest_block_header: BeaconBlockHeader,
    /// Recent block roots.
    pub block_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Recent state roots.
    pub state_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Roots of historical batches.
    pub historical_roots: VariableList<B256, E::HistoricalRootsLimit>,
    /// Eth1 data the chain is bound to.
    pub eth1_data: Eth1Data,
    /// Eth1 votes of the current voting period.
    pub eth1_data_votes: VariableList<Eth1Data, E::SlotsPerEth1VotingPeriod>,
    /// Index of the next deposit to process.
    pub eth1_deposit_index: u64,
    /// Validator registry.
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    /// Validator balances, in Gwei.
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,
    /// RANDAO mixes.
    pub randao_mixes: FixedVector<B256, E::EpochsPerHistoricalVector>,
    /// Slashed balances per epoch.
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,
    /// Participation flags of the previous epoch.
    pub previous_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Participation flags of the current epoch.
    pub current_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Justification of recent epochs.
    pub justification_bits: BitVector<E::JustificationBitsLength>,
    /// Previous justified checkpoint.
    pub previous_justified_checkpoint: Checkpoint,
    /// Current justified checkpoint.
    pub current_justified_checkpoint: Checkpoint,
    /// Finalized checkpoint.
    pub finalized_checkpoint: Checkpoint,
    /// Inactivity scores.
    pub inactivity_scores: VariableList<u64, E::ValidatorRegistryLimit>,
    /// Sync committee of the current period.
    pub current_sync_committee: SyncCommittee<E>,
    /// Sync committee of the next period.
    pub next_sync_committee: SyncCommittee<E>,
    /// Header of the latest execution payload.
    pub latest_execution_payload_header: ExecutionPayloadHeaderBellatrix<E>,
}

/// Capella beacon state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct BeaconStateCapella<E: EthSpec> {
    /// Unix time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator registry.
    pub genesis_validators_root: B256,
    /// Current slot.
    pub slot: u64,
    /// Fork versioning.
    pub fork: Fork,
    /// Header of the latest block.
    pub latest_block_header: BeaconBlockHeader,
    /// Recent block roots.
    pub block_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Recent state roots.
    pub state_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Roots of historical batches, frozen since capella.
    pub historical_roots: VariableList<B256, E::HistoricalRootsLimit>,
    /// Eth1 data the chain is bound to.
    pub eth1_data: Eth1Data,
    /// Eth1 votes of the current voting period.
    pub eth1_data_votes: VariableList<Eth1Data, E::SlotsPerEth1VotingPeriod>,
    /// Index of the next deposit to process.
    pub eth1_deposit_index: u64,
    /// Validator registry.
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    /// Validator balances, in Gwei.
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,
    /// RANDAO mixes.
    pub randao_mixes: FixedVector<B256, E::EpochsPerHistoricalVector>,
    /// Slashed balances per epoch.
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,
    /// Participation flags of the previous epoch.
    pub previous_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Participation flags of the current epoch.
    pub current_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Justification of recent epochs.
    pub justification_bits: BitVector<E::JustificationBitsLength>,
    /// Previous justified checkpoint.
    pub previous_justified_checkpoint: Checkpoint,
    /// Current justified checkpoint.
    pub current_justified_checkpoint: Checkpoint,
    /// Finalized checkpoint.
    pub finalized_checkpoint: Checkpoint,
    /// Inactivity scores.
    pub inactivity_scores: VariableList<u64, E::ValidatorRegistryLimit>,
    /// Sync committee of the current period.
    pub current_sync_committee: SyncCommittee<E>,
    /// Sync committee of the next period.
    pub next_sync_committee: SyncCommittee<E>,
    /// Header of the latest execution payload.
    pub latest_execution_payload_header: ExecutionPayloadHeaderCapella<E>,
    /// Index of the next withdrawal.
    pub next_withdrawal_index: u64,
    /// Validator the next withdrawal sweep starts at.
    pub next_withdrawal_validator_index: u64,
    /// Summaries of historical periods.
    pub historical_summaries: VariableList<HistoricalSummary, E::HistoricalRootsLimit>,
}

/// Deneb beacon state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct BeaconStateDeneb<E: EthSpec> {
    /// Unix time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator registry.
    pub genesis_validators_root: B256,
    /// Current slot.
    pub slot: u64,
    /// Fork versioning.
    pub fork: Fork,
    /// Header of the latest block.
    pub latest_block_header: BeaconBlockHeader,
    /// Recent block roots.
    pub block_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Recent state roots.
    pub state_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Roots of historical batches, frozen since capella.
    pub historical_roots: VariableList<B256, E::HistoricalRootsLimit>,
    /// Eth1 data the chain is bound to.
    pub eth1_data: Eth1Data,
    /// Eth1 votes of the current voting period.
    pub eth1_data_votes: VariableList<Eth1Data, E::SlotsPerEth1VotingPeriod>,
    /// Index of the next deposit to process.
    pub eth1_deposit_index: u64,
    /// Validator registry.
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    /// Validator balances, in Gwei.
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,
    /// RANDAO mixes.
    pub randao_mixes: FixedVector<B256, E::EpochsPerHistoricalVector>,
    /// Slashed balances per epoch.
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,
    /// Participation flags of the previous epoch.
    pub previous_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Participation flags of the current epoch.
    pub current_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Justification of recent epochs.
    pub justification_bits: BitVector<E::JustificationBitsLength>,
    /// Previous justified checkpoint.
    pub previous_justified_checkpoint: Checkpoint,
    /// Current justified checkpoint.
    pub current_justified_checkpoint: Checkpoint,
    /// Finalized checkpoint.
    pub finalized_checkpoint: Checkpoint,
    /// Inactivity scores.
    pub inactivity_scores: VariableList<u64, E::ValidatorRegistryLimit>,
    /// Sync committee of the current period.
    pub current_sync_committee: SyncCommittee<E>,
    /// Sync committee of the next period.
    pub next_sync_committee: SyncCommittee<E>,
    /// Header of the latest execution payload.
    pub latest_execution_payload_header: ExecutionPayloadHeaderDeneb<E>,
    /// Index of the next withdrawal.
    pub next_withdrawal_index: u64,
    /// Validator the next withdrawal sweep starts at.
    pub next_withdrawal_validator_index: u64,
    /// Summaries of historical periods.
    pub historical_summaries: VariableList<HistoricalSummary, E::HistoricalRootsLimit>,
}

/// Electra beacon state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct BeaconStateElectra<E: EthSpec> {
    /// Unix time of slot 0.
    pub genesis_time: u64,
    /// Root of the genesis validator registry.
    pub genesis_validators_root: B256,
    /// Current slot.
    pub slot: u64,
    /// Fork versioning.
    pub fork: Fork,
    /// Header of the latest block.
    pub latest_block_header: BeaconBlockHeader,
    /// Recent block roots.
    pub block_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Recent state roots.
    pub state_roots: FixedVector<B256, E::SlotsPerHistoricalRoot>,
    /// Roots of historical batches, frozen since capella.
    pub historical_roots: VariableList<B256, E::HistoricalRootsLimit>,
    /// Eth1 data the chain is bound to.
    pub eth1_data: Eth1Data,
    /// Eth1 votes of the current voting period.
    pub eth1_data_votes: VariableList<Eth1Data, E::SlotsPerEth1VotingPeriod>,
    /// Index of the next deposit to process.
    pub eth1_deposit_index: u64,
    /// Validator registry.
    pub validators: VariableList<Validator, E::ValidatorRegistryLimit>,
    /// Validator balances, in Gwei.
    pub balances: VariableList<u64, E::ValidatorRegistryLimit>,
    /// RANDAO mixes.
    pub randao_mixes: FixedVector<B256, E::EpochsPerHistoricalVector>,
    /// Slashed balances per epoch.
    pub slashings: FixedVector<u64, E::EpochsPerSlashingsVector>,
    /// Participation flags of the previous epoch.
    pub previous_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Participation flags of the current epoch.
    pub current_epoch_participation: VariableList<u8, E::ValidatorRegistryLimit>,
    /// Justification of recent epochs.
    pub justification_bits: BitVector<E::JustificationBitsLength>,
    /// Previous justified checkpoint.
    pub previous_justified_checkpoint: Checkpoint,
    /// Current justified checkpoint.
    pub current_justified_checkpoint: Checkpoint,
    /// Finalized checkpoint.
    pub finalized_checkpoint: Checkpoint,
    /// Inactivity scores.
    pub inactivity_scores: VariableList<u64, E::ValidatorRegistryLimit>,
    /// Sync committee of the current period.
    pub current_sync_committee: SyncCommittee<E>,
    /// Sync committee of the next period.
    pub next_sync_committee: SyncCommittee<E>,
    /// Header of the latest execution payload.
    pub latest_execution_payload_header: ExecutionPayloadHeaderDeneb<E>,
    /// Index of the next withdrawal.
    pub next_withdrawal_index: u64,
    /// Validator the next withdrawal sweep starts at.
    pub next_withdrawal_validator_index: u64,
    /// Summaries of historical periods.
    pub historical_summaries: VariableList<HistoricalSummary, E::HistoricalRootsLimit>,
    /// Index of the first deposit request processed.
    pub deposit_requests_start_index: u64,
    /// Deposit churn carried over to the next epoch.
    pub deposit_balance_to_consume: u64,
    /// Exit churn left in the current exit epoch.
    pub exit_balance_to_consume: u64,
    /// Earliest epoch an exit may be scheduled at.
    pub earliest_exit_epoch: u64,
    /// Consolidation churn left in the current consolidation epoch.
    pub consolidation_balance_to_consume: u64,
    /// Earliest epoch a consolidation may be scheduled at.
    pub earliest_consolidation_epoch: u64,
    /// Deposits waiting to be applied.
    pub pending_deposits: VariableList<PendingDeposit, E::PendingDepositsLimit>,
    /// Partial withdrawals waiting to be applied.
    pub pending_partial_withdrawals:
        VariableList<PendingPartialWithdrawal, E::PendingPartialWithdrawalsLimit>,
    /// Consolidations waiting to be applied.
    pub pending_consolidations: VariableList<PendingConsolidation, E::PendingConsolidationsLimit>,
}

/// Implements [Default] for a state whose fields are all defaultable except the justification
/// bits.
macro_rules! impl_empty_state {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl<E: EthSpec> Default for $name<E> {
            fn default() -> Self {
                Self { justification_bits: BitVector::new(), $($field: Default::default()),* }
            }
        }
    };
}

impl_empty_state!(BeaconStatePhase0 {
    genesis_time, genesis_validators_root, slot, fork, latest_block_header, block_roots,
    state_roots, historical_roots, eth1_data, eth1_data_votes, eth1_deposit_index, validators,
    balances, randao_mixes, slashings, previous_epoch_attestations, current_epoch_attestations,
    previous_justified_checkpoint, current_justified_checkpoint, finalized_checkpoint,
});

impl_empty_state!(BeaconStateAltair {
    genesis_time, genesis_validators_root, slot, fork, latest_block_header, block_roots,
    state_roots, historical_roots, eth1_data, eth1_data_votes, eth1_deposit_index, validators,
    balances, randao_mixes, slashings, previous_epoch_participation, current_epoch_participation,
    previous_justified_checkpoint, current_justified_checkpoint, finalized_checkpoint,
    inactivity_scores, current_sync_committee, next_sync_committee,
});

impl_empty_state!(BeaconStateBellatrix {
    genesis_time, genesis_validators_root, slot, fork, latest_block_header, block_roots,
    state_roots, historical_roots, eth1_data, eth1_data_votes, eth1_deposit_index, validators,
    balances, randao_mixes, slashings, previous_epoch_participation, current_epoch_participation,
    previous_justified_checkpoint, current_justified_checkpoint, finalized_checkpoint,
    inactivity_scores, current_sync_committee, next_sync_committee,
    latest_execution_payload_header,
});

impl_empty_state!(BeaconStateCapella {
    genesis_time, genesis_validators_root, slot, fork, latest_block_header, block_roots,
    state_roots, historical_roots, eth1_data, eth1_data_votes, eth1_deposit_index, validators,
    balances, randao_mixes, slashings, previous_epoch_participation, current_epoch_participation,
    previous_justified_checkpoint, current_justified_checkpoint, finalized_checkpoint,
    inactivity_scores, current_sync_committee, next_sync_committee,
    latest_execution_payload_header, next_withdrawal_index, next_withdrawal_validator_index,
    historical_summaries,
});

impl_empty_state!(BeaconStateDeneb {
    genesis_time, genesis_validators_root, slot, fork, latest_block_header, block_roots,
    state_roots, historical_roots, eth1_data, eth1_data_votes, eth1_deposit_index, validators,
    balances, randao_mixes, slashings, previous_epoch_participation, current_epoch_participation,
    previous_justified_checkpoint, current_justified_checkpoint, finalized_checkpoint,
    inactivity_scores, current_sync_committee, next_sync_committee,
    latest_execution_payload_header, next_withdrawal_index, next_withdrawal_validator_index,
    historical_summaries,
});

impl_empty_state!(BeaconStateElectra {
    genesis_time, genesis_validators_root, slot, fork, latest_block_header, block_roots,
    state_roots, historical_roots, eth1_data, eth1_data_votes, eth1_deposit_index, validators,
    balances, randao_mixes, slashings, previous_epoch_participation, current_epoch_participation,
    previous_justified_checkpoint, current_justified_checkpoint, finalized_checkpoint,
    inactivity_scores, current_sync_committee, next_sync_committee,
    latest_execution_payload_header, next_withdrawal_index, next_withdrawal_validator_index,
    historical_summaries, deposit_requests_start_index, deposit_balance_to_consume,
    exit_balance_to_consume, earliest_exit_epoch, consolidation_balance_to_consume,
    earliest_consolidation_epoch, pending_deposits, pending_partial_withdrawals,
    pending_consolidations,
});

/// A beacon state of any supported fork.
#[derive(Debug, PartialEq, Clone)]
pub enum BeaconState<E: EthSpec> {
    /// Phase0 state.
    Phase0(BeaconStatePhase0<E>),
    /// Altair state.
    Altair(BeaconStateAltair<E>),
    /// Bellatrix state.
    Bellatrix(BeaconStateBellatrix<E>),
    /// Capella state.
    Capella(BeaconStateCapella<E>),
    /// Deneb state.
    Deneb(BeaconStateDeneb<E>),
    /// Electra state.
    Electra(BeaconStateElectra<E>),
}

/// Evaluates `$body` against the fork-specific state, bound to `$inner`.
macro_rules! map_beacon_state {
    ($state:expr, |$inner:ident| $body:expr) => {
        match $state {
            BeaconState::Phase0($inner) => $body,
            BeaconState::Altair($inner) => $body,
            BeaconState::Bellatrix($inner) => $body,
            BeaconState::Capella($inner) => $body,
            BeaconState::Deneb($inner) => $body,
            BeaconState::Electra($inner) => $body,
        }
    };
}

/// Evaluates `$body` against states carrying sync committees; `$otherwise` for the rest.
macro_rules! map_altair_onwards {
    ($state:expr, |$inner:ident| $body:expr, $otherwise:expr) => {
        match $state {
            BeaconState::Phase0(_) => $otherwise,
            BeaconState::Altair($inner) => $body,
            BeaconState::Bellatrix($inner) => $body,
            BeaconState::Capella($inner) => $body,
            BeaconState::Deneb($inner) => $body,
            BeaconState::Electra($inner) => $body,
        }
    };
}

impl<E: EthSpec> BeaconState<E> {
    /// Creates an all-default state of `fork`.
    pub fn new(fork: ForkName) -> Self {
        match fork {
            ForkName::Phase0 => Self::Phase0(Default::default()),
            ForkName::Altair => Self::Altair(Default::default()),
            ForkName::Bellatrix => Self::Bellatrix(Default::default()),
            ForkName::Capella => Self::Capella(Default::default()),
            ForkName::Deneb => Self::Deneb(Default::default()),
            ForkName::Electra => Self::Electra(Default::default()),
        }
    }

    /// The fork of this state.
    pub const fn fork_name(&self) -> ForkName {
        match self {
            Self::Phase0(_) => ForkName::Phase0,
            Self::Altair(_) => ForkName::Altair,
            Self::Bellatrix(_) => ForkName::Bellatrix,
            Self::Capella(_) => ForkName::Capella,
            Self::Deneb(_) => ForkName::Deneb,
            Self::Electra(_) => ForkName::Electra,
        }
    }

    /// Unix time of slot 0.
    pub fn genesis_time(&self) -> u64 {
        map_beacon_state!(self, |s| s.genesis_time)
    }

    /// Sets the genesis time.
    pub fn set_genesis_time(&mut self, genesis_time: u64) {
        map_beacon_state!(self, |s| s.genesis_time = genesis_time)
    }

    /// Root of the genesis validator registry.
    pub fn genesis_validators_root(&self) -> B256 {
        map_beacon_state!(self, |s| s.genesis_validators_root)
    }

    /// Sets the genesis validators root.
    pub fn set_genesis_validators_root(&mut self, root: B256) {
        map_beacon_state!(self, |s| s.genesis_validators_root = root)
    }

    /// Fork versioning.
    pub fn fork(&self) -> Fork {
        map_beacon_state!(self, |s| s.fork)
    }

    /// Sets the fork versioning.
    pub fn set_fork(&mut self, fork: Fork) {
        map_beacon_state!(self, |s| s.fork = fork)
    }

    /// Eth1 data the chain is bound to.
    pub fn eth1_data(&self) -> Eth1Data {
        map_beacon_state!(self, |s| s.eth1_data)
    }

    /// Sets the eth1 data.
    pub fn set_eth1_data(&mut self, eth1_data: Eth1Data) {
        map_beacon_state!(self, |s| s.eth1_data = eth1_data)
    }

    /// Index of the next deposit to process.
    pub fn eth1_deposit_index(&self) -> u64 {
        map_beacon_state!(self, |s| s.eth1_deposit_index)
    }

    /// Header of the latest block.
    pub fn latest_block_header(&self) -> BeaconBlockHeader {
        map_beacon_state!(self, |s| s.latest_block_header)
    }

    /// Sets the header of the latest block.
    pub fn set_latest_block_header(&mut self, header: BeaconBlockHeader) {
        map_beacon_state!(self, |s| s.latest_block_header = header)
    }

    /// RANDAO mixes.
    pub fn randao_mixes(&self) -> &FixedVector<B256, E::EpochsPerHistoricalVector> {
        map_beacon_state!(self, |s| &s.randao_mixes)
    }

    /// Mutable RANDAO mixes.
    pub fn randao_mixes_mut(&mut self) -> &mut FixedVector<B256, E::EpochsPerHistoricalVector> {
        map_beacon_state!(self, |s| &mut s.randao_mixes)
    }

    /// Validator registry.
    pub fn validators(&self) -> &VariableList<Validator, E::ValidatorRegistryLimit> {
        map_beacon_state!(self, |s| &s.validators)
    }

    /// Mutable validator registry.
    pub fn validators_mut(&mut self) -> &mut VariableList<Validator, E::ValidatorRegistryLimit> {
        map_beacon_state!(self, |s| &mut s.validators)
    }

    /// Validator balances.
    pub fn balances(&self) -> &VariableList<u64, E::ValidatorRegistryLimit> {
        map_beacon_state!(self, |s| &s.balances)
    }

    /// Participation flags of the previous epoch, for forks that track them.
    pub fn previous_epoch_participation(
        &self,
    ) -> Option<&VariableList<u8, E::ValidatorRegistryLimit>> {
        map_altair_onwards!(self, |s| Some(&s.previous_epoch_participation), None)
    }

    /// Participation flags of the current epoch, for forks that track them.
    pub fn current_epoch_participation(
        &self,
    ) -> Option<&VariableList<u8, E::ValidatorRegistryLimit>> {
        map_altair_onwards!(self, |s| Some(&s.current_epoch_participation), None)
    }

    /// Inactivity scores, for forks that track them.
    pub fn inactivity_scores(&self) -> Option<&VariableList<u64, E::ValidatorRegistryLimit>> {
        map_altair_onwards!(self, |s| Some(&s.inactivity_scores), None)
    }

    /// Appends a registry entry together with its balance and, from altair on, zeroed
    /// participation flags and inactivity score.
    pub fn push_validator(&mut self, validator: Validator, balance: u64) -> StateResult<()> {
        map_beacon_state!(self, |s| {
            s.validators.push(validator).map_err(list_full("validators"))?;
            s.balances.push(balance).map_err(list_full("balances"))?;
        });
        map_altair_onwards!(
            self,
            |s| {
                s.previous_epoch_participation
                    .push(0)
                    .map_err(list_full("previous_epoch_participation"))?;
                s.current_epoch_participation
                    .push(0)
                    .map_err(list_full("current_epoch_participation"))?;
                s.inactivity_scores.push(0).map_err(list_full("inactivity_scores"))?;
            },
            ()
        );
        Ok(())
    }

    /// Sync committee of the current period.
    pub fn current_sync_committee(&self) -> Option<&SyncCommittee<E>> {
        map_altair_onwards!(self, |s| Some(&s.current_sync_committee), None)
    }

    /// Sync committee of the next period.
    pub fn next_sync_committee(&self) -> Option<&SyncCommittee<E>> {
        map_altair_onwards!(self, |s| Some(&s.next_sync_committee), None)
    }

    /// Installs `committee` as both the current and the next sync committee.
    pub fn set_sync_committees(&mut self, committee: SyncCommittee<E>) -> StateResult<()> {
        let fork = self.fork_name();
        map_altair_onwards!(
            self,
            |s| {
                s.next_sync_committee = committee.clone();
                s.current_sync_committee = committee;
                Ok(())
            },
            Err(StateError::Unsupported { fork, field: "sync committees" })
        )
    }

    /// Header of the latest execution payload, for forks that embed one.
    pub fn latest_execution_payload_header(&self) -> Option<ExecutionPayloadHeader<E>> {
        match self {
            Self::Phase0(_) | Self::Altair(_) => None,
            Self::Bellatrix(s) => {
                Some(ExecutionPayloadHeader::Bellatrix(s.latest_execution_payload_header.clone()))
            }
            Self::Capella(s) => {
                Some(ExecutionPayloadHeader::Capella(s.latest_execution_payload_header.clone()))
            }
            Self::Deneb(s) => {
                Some(ExecutionPayloadHeader::Deneb(s.latest_execution_payload_header.clone()))
            }
            Self::Electra(s) => {
                Some(ExecutionPayloadHeader::Deneb(s.latest_execution_payload_header.clone()))
            }
        }
    }

    /// Stores `header` as the latest execution payload header. The header's shape must match
    /// the state's fork.
    pub fn set_latest_execution_payload_header(
        &mut self,
        header: ExecutionPayloadHeader<E>,
    ) -> StateResult<()> {
        let (state, shape) = (self.fork_name(), header.shape());
        match (self, header) {
            (Self::Bellatrix(s), ExecutionPayloadHeader::Bellatrix(h)) => {
                s.latest_execution_payload_header = h
            }
            (Self::Capella(s), ExecutionPayloadHeader::Capella(h)) => {
                s.latest_execution_payload_header = h
            }
            (Self::Deneb(s), ExecutionPayloadHeader::Deneb(h)) => {
                s.latest_execution_payload_header = h
            }
            (Self::Electra(s), ExecutionPayloadHeader::Deneb(h)) => {
                s.latest_execution_payload_header = h
            }
            _ => return Err(StateError::HeaderForkMismatch { state, header: shape }),
        }
        Ok(())
    }

    /// The electra state, if this is one.
    pub const fn as_electra(&self) -> Option<&BeaconStateElectra<E>> {
        match self {
            Self::Electra(s) => Some(s),
            _ => None,
        }
    }

    /// The mutable electra state, if this is one.
    pub fn as_electra_mut(&mut self) -> Option<&mut BeaconStateElectra<E>> {
        match self {
            Self::Electra(s) => Some(s),
            _ => None,
        }
    }

    /// SSZ encoding of the fork-specific state.
    pub fn as_ssz_bytes(&self) -> Vec<u8> {
        map_beacon_state!(self, |s| s.as_ssz_bytes())
    }

    /// Decodes a state of `fork` from its SSZ encoding.
    pub fn from_ssz_bytes(bytes: &[u8], fork: ForkName) -> StateResult<Self> {
        match fork {
            ForkName::Phase0 => BeaconStatePhase0::from_ssz_bytes(bytes).map(Self::Phase0),
            ForkName::Altair => BeaconStateAltair::from_ssz_bytes(bytes).map(Self::Altair),
            ForkName::Bellatrix => BeaconStateBellatrix::from_ssz_bytes(bytes).map(Self::Bellatrix),
            ForkName::Capella => BeaconStateCapella::from_ssz_bytes(bytes).map(Self::Capella),
            ForkName::Deneb => BeaconStateDeneb::from_ssz_bytes(bytes).map(Self::Deneb),
            ForkName::Electra => BeaconStateElectra::from_ssz_bytes(bytes).map(Self::Electra),
        }
        .map_err(|error| StateError::Decode { fork, error })
    }

    /// Hash tree root of the fork-specific state.
    pub fn tree_hash_root(&self) -> B256 {
        map_beacon_state!(self, |s| s.tree_hash_root())
    }
}

fn list_full(list: &'static str) -> impl Fn(ssz_types::Error) -> StateError {
    move |error| StateError::ListFull { list, error }
}
