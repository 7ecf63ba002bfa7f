//! SSZ containers shared by the beacon blocks and states of every fork.

use crate::EthSpec;
use alloy_primitives::{aliases::B32, Address, FixedBytes, B256};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum::U4294967296, BitList, BitVector, FixedVector, VariableList};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A compressed BLS12-381 public key.
pub type BlsPublicKey = FixedBytes<48>;

/// A compressed BLS12-381 signature.
pub type BlsSignature = FixedBytes<96>;

/// Fork versioning of a state.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct Fork {
    /// Version of the previous fork.
    pub previous_version: B32,
    /// Version of the current fork.
    pub current_version: B32,
    /// Epoch at which the current fork activated.
    pub epoch: u64,
}

/// A finality checkpoint.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct Checkpoint {
    /// The epoch of the checkpoint.
    pub epoch: u64,
    /// The block root at the start of the epoch.
    pub root: B256,
}

/// A beacon block header.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockHeader {
    /// The slot of the block.
    pub slot: u64,
    /// The index of the proposer.
    pub proposer_index: u64,
    /// The root of the parent block.
    pub parent_root: B256,
    /// The root of the post-state.
    pub state_root: B256,
    /// The hash tree root of the block body.
    pub body_root: B256,
}

/// A signed [BeaconBlockHeader].
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct SignedBeaconBlockHeader {
    /// The header.
    pub message: BeaconBlockHeader,
    /// The proposer signature.
    pub signature: BlsSignature,
}

/// The eth1 chain data a state is bound to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct Eth1Data {
    /// Root of the deposit tree.
    pub deposit_root: B256,
    /// Number of deposits in the tree.
    pub deposit_count: u64,
    /// Hash of the eth1 block.
    pub block_hash: B256,
}

/// A registry entry.
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct Validator {
    /// The validator's signing key.
    pub pubkey: BlsPublicKey,
    /// Commitment to the withdrawal authority.
    pub withdrawal_credentials: B256,
    /// Balance used for protocol accounting, in Gwei.
    pub effective_balance: u64,
    /// Whether the validator has been slashed.
    pub slashed: bool,
    /// Epoch at which the validator became eligible for activation.
    pub activation_eligibility_epoch: u64,
    /// Epoch at which the validator activated.
    pub activation_epoch: u64,
    /// Epoch at which the validator exited.
    pub exit_epoch: u64,
    /// Epoch at which the validator may withdraw.
    pub withdrawable_epoch: u64,
}

/// The vote of an attestation.
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct AttestationData {
    /// Slot of the attestation.
    pub slot: u64,
    /// Committee index.
    pub index: u64,
    /// LMD GHOST vote.
    pub beacon_block_root: B256,
    /// FFG source.
    pub source: Checkpoint,
    /// FFG target.
    pub target: Checkpoint,
}

/// An aggregated attestation.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct Attestation<E: EthSpec> {
    /// Participating committee members.
    pub aggregation_bits: BitList<E::MaxValidatorsPerCommittee>,
    /// The vote.
    pub data: AttestationData,
    /// Aggregate signature.
    pub signature: BlsSignature,
}

/// An aggregated attestation spanning several committees (electra).
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct AttestationElectra<E: EthSpec> {
    /// Participating members across all committees of the slot.
    pub aggregation_bits: BitList<E::MaxValidatorsPerSlot>,
    /// The vote.
    pub data: AttestationData,
    /// Aggregate signature.
    pub signature: BlsSignature,
    /// Committees included in the aggregate.
    pub committee_bits: BitVector<E::MaxCommitteesPerSlot>,
}

/// An attestation recorded in a phase0 state.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct PendingAttestation<E: EthSpec> {
    /// Participating committee members.
    pub aggregation_bits: BitList<E::MaxValidatorsPerCommittee>,
    /// The vote.
    pub data: AttestationData,
    /// Slots between the attestation and its inclusion.
    pub inclusion_delay: u64,
    /// Proposer of the including block.
    pub proposer_index: u64,
}

/// An attestation with explicit attester indices.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct IndexedAttestation<E: EthSpec> {
    /// Sorted attester indices.
    pub attesting_indices: VariableList<u64, E::MaxValidatorsPerCommittee>,
    /// The vote.
    pub data: AttestationData,
    /// Aggregate signature.
    pub signature: BlsSignature,
}

/// An attestation with explicit attester indices (electra).
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct IndexedAttestationElectra<E: EthSpec> {
    /// Sorted attester indices.
    pub attesting_indices: VariableList<u64, E::MaxValidatorsPerSlot>,
    /// The vote.
    pub data: AttestationData,
    /// Aggregate signature.
    pub signature: BlsSignature,
}

/// Evidence of a proposer signing two blocks for the same slot.
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ProposerSlashing {
    /// First header.
    pub signed_header_1: SignedBeaconBlockHeader,
    /// Second header.
    pub signed_header_2: SignedBeaconBlockHeader,
}

/// Evidence of conflicting attestations.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct AttesterSlashing<E: EthSpec> {
    /// First attestation.
    pub attestation_1: IndexedAttestation<E>,
    /// Second attestation.
    pub attestation_2: IndexedAttestation<E>,
}

/// Evidence of conflicting attestations (electra).
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct AttesterSlashingElectra<E: EthSpec> {
    /// First attestation.
    pub attestation_1: IndexedAttestationElectra<E>,
    /// Second attestation.
    pub attestation_2: IndexedAttestationElectra<E>,
}

/// The data of a deposit contract entry.
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct DepositData {
    /// The depositor's signing key.
    pub pubkey: BlsPublicKey,
    /// Withdrawal credentials.
    pub withdrawal_credentials: B256,
    /// Amount in Gwei.
    pub amount: u64,
    /// Proof of possession.
    pub signature: BlsSignature,
}

/// The deposit list committed to by the deposit contract root.
pub type DepositDataList = VariableList<DepositData, U4294967296>;

impl DepositData {
    /// The deposit root of a contract that has seen no deposits.
    pub fn empty_list_root() -> B256 {
        DepositDataList::default().tree_hash_root()
    }
}

/// A deposit together with its merkle proof.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct Deposit<E: EthSpec> {
    /// Branch in the deposit tree, with the length mixed in.
    pub proof: FixedVector<B256, E::DepositProofLength>,
    /// The deposit.
    pub data: DepositData,
}

/// A voluntary exit message.
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct VoluntaryExit {
    /// Earliest epoch the exit may be processed.
    pub epoch: u64,
    /// The exiting validator.
    pub validator_index: u64,
}

/// A signed [VoluntaryExit].
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct SignedVoluntaryExit {
    /// The exit.
    pub message: VoluntaryExit,
    /// The validator's signature.
    pub signature: BlsSignature,
}

/// Sync committee participation in a block.
#[derive(Debug, PartialEq, Clone, Encode, Decode, TreeHash)]
pub struct SyncAggregate<E: EthSpec> {
    /// Participating members.
    pub sync_committee_bits: BitVector<E::SyncCommitteeSize>,
    /// Aggregate signature.
    pub sync_committee_signature: BlsSignature,
}

impl<E: EthSpec> Default for SyncAggregate<E> {
    fn default() -> Self {
        Self { sync_committee_bits: BitVector::new(), sync_committee_signature: BlsSignature::ZERO }
    }
}

/// A sync committee.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct SyncCommittee<E: EthSpec> {
    /// Member pubkeys, in selection order.
    pub pubkeys: FixedVector<BlsPublicKey, E::SyncCommitteeSize>,
    /// Aggregate of all member pubkeys.
    pub aggregate_pubkey: BlsPublicKey,
}

/// Summary of a historical period (capella).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct HistoricalSummary {
    /// Root of the block roots of the period.
    pub block_summary_root: B256,
    /// Root of the state roots of the period.
    pub state_summary_root: B256,
}

/// A request to switch BLS withdrawal credentials to an execution address.
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BlsToExecutionChange {
    /// The validator.
    pub validator_index: u64,
    /// The withdrawal key committed to by the current credentials.
    pub from_bls_pubkey: BlsPublicKey,
    /// The new withdrawal address.
    pub to_execution_address: Address,
}

/// A signed [BlsToExecutionChange].
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct SignedBlsToExecutionChange {
    /// The change.
    pub message: BlsToExecutionChange,
    /// Signature by the withdrawal key.
    pub signature: BlsSignature,
}

/// A deposit waiting to be applied (electra).
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct PendingDeposit {
    /// Depositor signing key.
    pub pubkey: BlsPublicKey,
    /// Withdrawal credentials.
    pub withdrawal_credentials: B256,
    /// Amount in Gwei.
    pub amount: u64,
    /// Proof of possession.
    pub signature: BlsSignature,
    /// Slot the deposit was observed at.
    pub slot: u64,
}

/// A partial withdrawal waiting to be applied (electra).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct PendingPartialWithdrawal {
    /// The validator.
    pub validator_index: u64,
    /// Amount in Gwei.
    pub amount: u64,
    /// Epoch at which the withdrawal may be processed.
    pub withdrawable_epoch: u64,
}

/// A consolidation waiting to be applied (electra).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Encode, Decode, TreeHash)]
pub struct PendingConsolidation {
    /// Validator being consolidated.
    pub source_index: u64,
    /// Validator receiving the balance.
    pub target_index: u64,
}

/// An execution-layer deposit request (EIP-6110).
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct DepositRequest {
    /// Depositor signing key.
    pub pubkey: BlsPublicKey,
    /// Withdrawal credentials.
    pub withdrawal_credentials: B256,
    /// Amount in Gwei.
    pub amount: u64,
    /// Proof of possession.
    pub signature: BlsSignature,
    /// Index in the deposit contract.
    pub index: u64,
}

/// An execution-layer withdrawal request (EIP-7002).
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct WithdrawalRequest {
    /// The requesting execution address.
    pub source_address: Address,
    /// The validator to withdraw from.
    pub validator_pubkey: BlsPublicKey,
    /// Amount in Gwei.
    pub amount: u64,
}

/// An execution-layer consolidation request (EIP-7251).
#[derive(Debug, PartialEq, Eq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ConsolidationRequest {
    /// The requesting execution address.
    pub source_address: Address,
    /// Validator being consolidated.
    pub source_pubkey: BlsPublicKey,
    /// Validator receiving the balance.
    pub target_pubkey: BlsPublicKey,
}

/// Execution-layer requests carried by an electra block.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct ExecutionRequests<E: EthSpec> {
    /// Deposit requests.
    pub deposits: VariableList<DepositRequest, E::MaxDepositRequestsPerPayload>,
    /// Withdrawal requests.
    pub withdrawals: VariableList<WithdrawalRequest, E::MaxWithdrawalRequestsPerPayload>,
    /// Consolidation requests.
    pub consolidations: VariableList<ConsolidationRequest, E::MaxConsolidationRequestsPerPayload>,
}
