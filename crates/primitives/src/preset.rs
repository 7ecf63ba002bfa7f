//! Compile-time presets bounding every SSZ list and vector of the consensus containers.

use core::{fmt, fmt::Debug, str::FromStr};
use serde::{Deserialize, Serialize};
use ssz_types::typenum::{
    Unsigned, U1, U1024, U1048576, U1073741824, U1099511627776, U131072, U134217728, U128, U16,
    U16777216, U2, U2048, U262144, U32, U4, U4096, U512, U64, U65536, U8, U8192,
};

/// The named presets a chain configuration may be based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// The production preset.
    #[default]
    Mainnet,
    /// The reduced preset used by test networks and unit tests.
    Minimal,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!("Unknown preset: {other}")),
        }
    }
}

/// Type-level description of a consensus preset.
///
/// Every bound used by a container is an associated [Unsigned] type so that the SSZ
/// encoding and merkleization of a container follow the preset without any runtime lookups.
pub trait EthSpec:
    'static + Default + Sync + Send + Clone + Debug + PartialEq + Eq + Copy
{
    /// `SLOTS_PER_HISTORICAL_ROOT`
    type SlotsPerHistoricalRoot: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `EPOCHS_PER_HISTORICAL_VECTOR`
    type EpochsPerHistoricalVector: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `EPOCHS_PER_SLASHINGS_VECTOR`
    type EpochsPerSlashingsVector: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `HISTORICAL_ROOTS_LIMIT`
    type HistoricalRootsLimit: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `VALIDATOR_REGISTRY_LIMIT`
    type ValidatorRegistryLimit: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `EPOCHS_PER_ETH1_VOTING_PERIOD * SLOTS_PER_EPOCH`
    type SlotsPerEth1VotingPeriod: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_ATTESTATIONS * SLOTS_PER_EPOCH`
    type MaxPendingAttestations: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_VALIDATORS_PER_COMMITTEE`
    type MaxValidatorsPerCommittee: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_VALIDATORS_PER_COMMITTEE * MAX_COMMITTEES_PER_SLOT`
    type MaxValidatorsPerSlot: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_COMMITTEES_PER_SLOT`
    type MaxCommitteesPerSlot: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `JUSTIFICATION_BITS_LENGTH`
    type JustificationBitsLength: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `DEPOSIT_CONTRACT_TREE_DEPTH + 1`
    type DepositProofLength: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_PROPOSER_SLASHINGS`
    type MaxProposerSlashings: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_ATTESTER_SLASHINGS`
    type MaxAttesterSlashings: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_ATTESTER_SLASHINGS_ELECTRA`
    type MaxAttesterSlashingsElectra: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_ATTESTATIONS`
    type MaxAttestations: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_ATTESTATIONS_ELECTRA`
    type MaxAttestationsElectra: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_DEPOSITS`
    type MaxDeposits: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_VOLUNTARY_EXITS`
    type MaxVoluntaryExits: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `SYNC_COMMITTEE_SIZE`
    type SyncCommitteeSize: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `BYTES_PER_LOGS_BLOOM`
    type BytesPerLogsBloom: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_EXTRA_DATA_BYTES`
    type MaxExtraDataBytes: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_BYTES_PER_TRANSACTION`
    type MaxBytesPerTransaction: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_TRANSACTIONS_PER_PAYLOAD`
    type MaxTransactionsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_WITHDRAWALS_PER_PAYLOAD`
    type MaxWithdrawalsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_BLS_TO_EXECUTION_CHANGES`
    type MaxBlsToExecutionChanges: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_BLOB_COMMITMENTS_PER_BLOCK`
    type MaxBlobCommitmentsPerBlock: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `PENDING_DEPOSITS_LIMIT`
    type PendingDepositsLimit: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `PENDING_PARTIAL_WITHDRAWALS_LIMIT`
    type PendingPartialWithdrawalsLimit: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `PENDING_CONSOLIDATIONS_LIMIT`
    type PendingConsolidationsLimit: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_DEPOSIT_REQUESTS_PER_PAYLOAD`
    type MaxDepositRequestsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_WITHDRAWAL_REQUESTS_PER_PAYLOAD`
    type MaxWithdrawalRequestsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq;
    /// `MAX_CONSOLIDATION_REQUESTS_PER_PAYLOAD`
    type MaxConsolidationRequestsPerPayload: Unsigned + Clone + Sync + Send + Debug + PartialEq;

    /// The runtime name of this preset.
    const PRESET: Preset;
    /// `SLOTS_PER_EPOCH`
    const SLOTS_PER_EPOCH: u64;
    /// `SHUFFLE_ROUND_COUNT`
    const SHUFFLE_ROUND_COUNT: u8;

    /// `EPOCHS_PER_HISTORICAL_VECTOR` as a runtime value.
    fn epochs_per_historical_vector() -> u64 {
        Self::EpochsPerHistoricalVector::to_u64()
    }

    /// `SYNC_COMMITTEE_SIZE` as a runtime value.
    fn sync_committee_size() -> usize {
        Self::SyncCommitteeSize::to_usize()
    }

    /// `MAX_WITHDRAWALS_PER_PAYLOAD` as a runtime value.
    fn max_withdrawals_per_payload() -> usize {
        Self::MaxWithdrawalsPerPayload::to_usize()
    }

    /// `MAX_TRANSACTIONS_PER_PAYLOAD` as a runtime value.
    fn max_transactions_per_payload() -> usize {
        Self::MaxTransactionsPerPayload::to_usize()
    }

    /// `MAX_EXTRA_DATA_BYTES` as a runtime value.
    fn max_extra_data_bytes() -> usize {
        Self::MaxExtraDataBytes::to_usize()
    }
}

/// The `mainnet` preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MainnetEthSpec;

impl EthSpec for MainnetEthSpec {
    type SlotsPerHistoricalRoot = U8192;
    type EpochsPerHistoricalVector = U65536;
    type EpochsPerSlashingsVector = U8192;
    type HistoricalRootsLimit = U16777216;
    type ValidatorRegistryLimit = U1099511627776;
    type SlotsPerEth1VotingPeriod = U2048;
    type MaxPendingAttestations = U4096;
    type MaxValidatorsPerCommittee = U2048;
    type MaxValidatorsPerSlot = U131072;
    type MaxCommitteesPerSlot = U64;
    type JustificationBitsLength = U4;
    type DepositProofLength = ssz_types::typenum::U33;
    type MaxProposerSlashings = U16;
    type MaxAttesterSlashings = U2;
    type MaxAttesterSlashingsElectra = U1;
    type MaxAttestations = U128;
    type MaxAttestationsElectra = U8;
    type MaxDeposits = U16;
    type MaxVoluntaryExits = U16;
    type SyncCommitteeSize = U512;
    type BytesPerLogsBloom = ssz_types::typenum::U256;
    type MaxExtraDataBytes = U32;
    type MaxBytesPerTransaction = U1073741824;
    type MaxTransactionsPerPayload = U1048576;
    type MaxWithdrawalsPerPayload = U16;
    type MaxBlsToExecutionChanges = U16;
    type MaxBlobCommitmentsPerBlock = U4096;
    type PendingDepositsLimit = U134217728;
    type PendingPartialWithdrawalsLimit = U134217728;
    type PendingConsolidationsLimit = U262144;
    type MaxDepositRequestsPerPayload = U8192;
    type MaxWithdrawalRequestsPerPayload = U16;
    type MaxConsolidationRequestsPerPayload = U2;

    const PRESET: Preset = Preset::Mainnet;
    const SLOTS_PER_EPOCH: u64 = 32;
    const SHUFFLE_ROUND_COUNT: u8 = 90;
}

/// The `minimal` preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimalEthSpec;

impl EthSpec for MinimalEthSpec {
    type SlotsPerHistoricalRoot = U64;
    type EpochsPerHistoricalVector = U64;
    type EpochsPerSlashingsVector = U64;
    type HistoricalRootsLimit = U16777216;
    type ValidatorRegistryLimit = U1099511627776;
    type SlotsPerEth1VotingPeriod = U32;
    type MaxPendingAttestations = U1024;
    type MaxValidatorsPerCommittee = U2048;
    type MaxValidatorsPerSlot = U8192;
    type MaxCommitteesPerSlot = U4;
    type JustificationBitsLength = U4;
    type DepositProofLength = ssz_types::typenum::U33;
    type MaxProposerSlashings = U16;
    type MaxAttesterSlashings = U2;
    type MaxAttesterSlashingsElectra = U1;
    type MaxAttestations = U128;
    type MaxAttestationsElectra = U8;
    type MaxDeposits = U16;
    type MaxVoluntaryExits = U16;
    type SyncCommitteeSize = U32;
    type BytesPerLogsBloom = ssz_types::typenum::U256;
    type MaxExtraDataBytes = U32;
    type MaxBytesPerTransaction = U1073741824;
    type MaxTransactionsPerPayload = U1048576;
    type MaxWithdrawalsPerPayload = U4;
    type MaxBlsToExecutionChanges = U16;
    type MaxBlobCommitmentsPerBlock = U32;
    type PendingDepositsLimit = U134217728;
    type PendingPartialWithdrawalsLimit = U64;
    type PendingConsolidationsLimit = U64;
    type MaxDepositRequestsPerPayload = U4;
    type MaxWithdrawalRequestsPerPayload = U2;
    type MaxConsolidationRequestsPerPayload = U2;

    const PRESET: Preset = Preset::Minimal;
    const SLOTS_PER_EPOCH: u64 = 8;
    const SHUFFLE_ROUND_COUNT: u8 = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_from_str() {
        assert_eq!("mainnet".parse::<Preset>(), Ok(Preset::Mainnet));
        assert_eq!("MINIMAL".parse::<Preset>(), Ok(Preset::Minimal));
        assert!("gnosis".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_bounds() {
        assert_eq!(MainnetEthSpec::sync_committee_size(), 512);
        assert_eq!(MinimalEthSpec::sync_committee_size(), 32);
        assert_eq!(MainnetEthSpec::epochs_per_historical_vector(), 65536);
        assert_eq!(MinimalEthSpec::epochs_per_historical_vector(), 64);
        assert_eq!(MainnetEthSpec::max_withdrawals_per_payload(), 16);
        assert_eq!(MinimalEthSpec::max_extra_data_bytes(), 32);
        assert_eq!(MainnetEthSpec::PRESET, Preset::Mainnet);
    }
}
