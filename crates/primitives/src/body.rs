//! Beacon block bodies, needed for the body root of the genesis block header.

use crate::{
    Attestation, AttestationElectra, AttesterSlashing, AttesterSlashingElectra, BlsSignature,
    Deposit, Eth1Data, EthSpec, ExecutionPayloadBellatrix, ExecutionPayloadCapella,
    ExecutionPayloadDeneb, ExecutionRequests, ForkName, ProposerSlashing,
    SignedBlsToExecutionChange, SignedVoluntaryExit, SyncAggregate,
};
use alloy_primitives::{FixedBytes, B256};
use ssz_derive::{Decode, Encode};
use ssz_types::VariableList;
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

/// A KZG commitment to a blob.
pub(crate) type KzgCommitment = FixedBytes<48>;

/// Phase0 block body.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyPhase0<E: EthSpec> {
    /// RANDAO reveal.
    pub randao_reveal: BlsSignature,
    /// Eth1 vote.
    pub eth1_data: Eth1Data,
    /// Arbitrary proposer data.
    pub graffiti: B256,
    /// Proposer slashings.
    pub proposer_slashings: VariableList<ProposerSlashing, E::MaxProposerSlashings>,
    /// Attester slashings.
    pub attester_slashings: VariableList<AttesterSlashing<E>, E::MaxAttesterSlashings>,
    /// Attestations.
    pub attestations: VariableList<Attestation<E>, E::MaxAttestations>,
    /// Deposits.
    pub deposits: VariableList<Deposit<E>, E::MaxDeposits>,
    /// Voluntary exits.
    pub voluntary_exits: VariableList<SignedVoluntaryExit, E::MaxVoluntaryExits>,
}

/// Altair block body.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyAltair<E: EthSpec> {
    /// RANDAO reveal.
    pub randao_reveal: BlsSignature,
    /// Eth1 vote.
    pub eth1_data: Eth1Data,
    /// Arbitrary proposer data.
    pub graffiti: B256,
    /// Proposer slashings.
    pub proposer_slashings: VariableList<ProposerSlashing, E::MaxProposerSlashings>,
    /// Attester slashings.
    pub attester_slashings: VariableList<AttesterSlashing<E>, E::MaxAttesterSlashings>,
    /// Attestations.
    pub attestations: VariableList<Attestation<E>, E::MaxAttestations>,
    /// Deposits.
    pub deposits: VariableList<Deposit<E>, E::MaxDeposits>,
    /// Voluntary exits.
    pub voluntary_exits: VariableList<SignedVoluntaryExit, E::MaxVoluntaryExits>,
    /// Sync committee participation.
    pub sync_aggregate: SyncAggregate<E>,
}

/// Bellatrix block body.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyBellatrix<E: EthSpec> {
    /// RANDAO reveal.
    pub randao_reveal: BlsSignature,
    /// Eth1 vote.
    pub eth1_data: Eth1Data,
    /// Arbitrary proposer data.
    pub graffiti: B256,
    /// Proposer slashings.
    pub proposer_slashings: VariableList<ProposerSlashing, E::MaxProposerSlashings>,
    /// Attester slashings.
    pub attester_slashings: VariableList<AttesterSlashing<E>, E::MaxAttesterSlashings>,
    /// Attestations.
    pub attestations: VariableList<Attestation<E>, E::MaxAttestations>,
    /// Deposits.
    pub deposits: VariableList<Deposit<E>, E::MaxDeposits>,
    /// Voluntary exits.
    pub voluntary_exits: VariableList<SignedVoluntaryExit, E::MaxVoluntaryExits>,
    /// Sync committee participation.
    pub sync_aggregate: SyncAggregate<E>,
    /// Execution payload.
    pub execution_payload: ExecutionPayloadBellatrix<E>,
}

/// Capella block body.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyCapella<E: EthSpec> {
    /// RANDAO reveal.
    pub randao_reveal: BlsSignature,
    /// Eth1 vote.
    pub eth1_data: Eth1Data,
    /// Arbitrary proposer data.
    pub graffiti: B256,
    /// Proposer slashings.
    pub proposer_slashings: VariableList<ProposerSlashing, E::MaxProposerSlashings>,
    /// Attester slashings.
    pub attester_slashings: VariableList<AttesterSlashing<E>, E::MaxAttesterSlashings>,
    /// Attestations.
    pub attestations: VariableList<Attestation<E>, E::MaxAttestations>,
    /// Deposits.
    pub deposits: VariableList<Deposit<E>, E::MaxDeposits>,
    /// Voluntary exits.
    pub voluntary_exits: VariableList<SignedVoluntaryExit, E::MaxVoluntaryExits>,
    /// Sync committee participation.
    pub sync_aggregate: SyncAggregate<E>,
    /// Execution payload.
    pub execution_payload: ExecutionPayloadCapella<E>,
    /// Withdrawal credential changes.
    pub bls_to_execution_changes:
        VariableList<SignedBlsToExecutionChange, E::MaxBlsToExecutionChanges>,
}

/// Deneb block body.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyDeneb<E: EthSpec> {
    /// RANDAO reveal.
    pub randao_reveal: BlsSignature,
    /// Eth1 vote.
    pub eth1_data: Eth1Data,
    /// Arbitrary proposer data.
    pub graffiti: B256,
    /// Proposer slashings.
    pub proposer_slashings: VariableList<ProposerSlashing, E::MaxProposerSlashings>,
    /// Attester slashings.
    pub attester_slashings: VariableList<AttesterSlashing<E>, E::MaxAttesterSlashings>,
    /// Attestations.
    pub attestations: VariableList<Attestation<E>, E::MaxAttestations>,
    /// Deposits.
    pub deposits: VariableList<Deposit<E>, E::MaxDeposits>,
    /// Voluntary exits.
    pub voluntary_exits: VariableList<SignedVoluntaryExit, E::MaxVoluntaryExits>,
    /// Sync committee participation.
    pub sync_aggregate: SyncAggregate<E>,
    /// Execution payload.
    pub execution_payload: ExecutionPayloadDeneb<E>,
    /// Withdrawal credential changes.
    pub bls_to_execution_changes:
        VariableList<SignedBlsToExecutionChange, E::MaxBlsToExecutionChanges>,
    /// Blob commitments.
    pub blob_kzg_commitments: VariableList<KzgCommitment, E::MaxBlobCommitmentsPerBlock>,
}

/// Electra block body.
#[derive(Debug, PartialEq, Clone, Default, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyElectra<E: EthSpec> {
    /// RANDAO reveal.
    pub randao_reveal: BlsSignature,
    /// Eth1 vote.
    pub eth1_data: Eth1Data,
    /// Arbitrary proposer data.
    pub graffiti: B256,
    /// Proposer slashings.
    pub proposer_slashings: VariableList<ProposerSlashing, E::MaxProposerSlashings>,
    /// Attester slashings.
    pub attester_slashings: VariableList<AttesterSlashingElectra<E>, E::MaxAttesterSlashingsElectra>,
    /// Attestations.
    pub attestations: VariableList<AttestationElectra<E>, E::MaxAttestationsElectra>,
    /// Deposits.
    pub deposits: VariableList<Deposit<E>, E::MaxDeposits>,
    /// Voluntary exits.
    pub voluntary_exits: VariableList<SignedVoluntaryExit, E::MaxVoluntaryExits>,
    /// Sync committee participation.
    pub sync_aggregate: SyncAggregate<E>,
    /// Execution payload.
    pub execution_payload: ExecutionPayloadDeneb<E>,
    /// Withdrawal credential changes.
    pub bls_to_execution_changes:
        VariableList<SignedBlsToExecutionChange, E::MaxBlsToExecutionChanges>,
    /// Blob commitments.
    pub blob_kzg_commitments: VariableList<KzgCommitment, E::MaxBlobCommitmentsPerBlock>,
    /// Execution-layer requests.
    pub execution_requests: ExecutionRequests<E>,
}

impl ForkName {
    /// Hash tree root of the default block body of this fork.
    pub fn empty_block_body_root<E: EthSpec>(self) -> B256 {
        match self {
            Self::Phase0 => BeaconBlockBodyPhase0::<E>::default().tree_hash_root(),
            Self::Altair => BeaconBlockBodyAltair::<E>::default().tree_hash_root(),
            Self::Bellatrix => BeaconBlockBodyBellatrix::<E>::default().tree_hash_root(),
            Self::Capella => BeaconBlockBodyCapella::<E>::default().tree_hash_root(),
            Self::Deneb => BeaconBlockBodyDeneb::<E>::default().tree_hash_root(),
            Self::Electra => BeaconBlockBodyElectra::<E>::default().tree_hash_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MainnetEthSpec, MinimalEthSpec};
    use alloy_primitives::b256;
    use std::collections::HashSet;

    #[test]
    fn test_mainnet_empty_body_roots() {
        let expected = [
            b256!("ccb62460692be0ec813b56be97f68a82cf57abc102e27bf49ebf4190ff22eedd"),
            b256!("5bbaf31d784ad05f513489748eefa4119bbde2c8ffbc1772911e332d136c50ea"),
            b256!("cd7c49966ebe72b1214e6d4733adf6bf06935c5fbc3b3ad08e84e3085428b82f"),
            b256!("74b4bb048d39c75f175fbb2311062eb9867d79b712907f39544fcaf2d7e1b433"),
            b256!("bce73ee2c617851846af2b3ea2287e3b686098e18ae508c7271aaa06ab1d06cd"),
            b256!("ca4f98890bc98a59f015d06375a5e00546b8f2ac1e88d31b1774ea28d4b3e7d1"),
        ];
        for (fork, root) in ForkName::ALL.into_iter().zip(expected) {
            assert_eq!(fork.empty_block_body_root::<MainnetEthSpec>(), root, "{fork}");
        }
    }

    #[test]
    fn test_minimal_empty_body_roots() {
        let expected = [
            b256!("ccb62460692be0ec813b56be97f68a82cf57abc102e27bf49ebf4190ff22eedd"),
            b256!("0c2f0b3a25ce97551844e65999eabbfab687b67b4eff6dc2477e78364d6766c9"),
            b256!("75851d2575738753ff630d9d443e725e1229ff5f21c2052bbc6cee3585bad895"),
            b256!("0bbd950b328c8587f542ae1880059022a0637d6b26af2ff582ba4f3641528c71"),
            b256!("8d7ab9dd0b24f639527634d2d55c6d8416bc5f4195ef8fbb9b42d9cc5fda7a1e"),
            b256!("1a6cd2392601e1fb4ea2d461c72db67ba297a24406ecb5eb7f760ba6a1a81db2"),
        ];
        for (fork, root) in ForkName::ALL.into_iter().zip(expected) {
            assert_eq!(fork.empty_block_body_root::<MinimalEthSpec>(), root, "{fork}");
        }
    }

    #[test]
    fn test_mainnet_genesis_block_root() {
        // Block 0 of mainnet commits to its genesis state root and the empty phase0 body.
        let header = crate::BeaconBlockHeader {
            state_root: b256!("7e76880eb67bbdc86250aa578958e9d0675e64e714337855204fb5abaaf82c2b"),
            body_root: ForkName::Phase0.empty_block_body_root::<MainnetEthSpec>(),
            ..Default::default()
        };
        assert_eq!(
            header.tree_hash_root(),
            b256!("4d611d5b93fdab69013a7f0a2f961caca0c853f87cfe9595fe50038163079360")
        );
    }

    #[test]
    fn test_empty_body_roots_are_distinct() {
        let roots = ForkName::ALL
            .into_iter()
            .map(|fork| fork.empty_block_body_root::<MainnetEthSpec>())
            .collect::<HashSet<_>>();
        assert_eq!(roots.len(), ForkName::ALL.len());
    }

    #[test]
    fn test_phase0_body_root_is_preset_independent() {
        // Empty list roots depend only on list limits, and phase0 limits match across presets.
        assert_eq!(
            ForkName::Phase0.empty_block_body_root::<MainnetEthSpec>(),
            ForkName::Phase0.empty_block_body_root::<MinimalEthSpec>()
        );
        assert_ne!(
            ForkName::Altair.empty_block_body_root::<MainnetEthSpec>(),
            ForkName::Altair.empty_block_body_root::<MinimalEthSpec>()
        );
    }
}
