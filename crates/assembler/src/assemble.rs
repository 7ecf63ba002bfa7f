//! The genesis assembly pipeline.

use crate::{
    active_validator_indices, compute_sync_committee_indices, get_seed, seed_churn,
    sync_committee, AssemblyError, AssemblyResult, GenesisContext, InvariantViolation,
};
use genesis_primitives::{
    constants::{DOMAIN_SYNC_COMMITTEE, GENESIS_EPOCH, MAX_EFFECTIVE_BALANCE},
    BeaconBlockHeader, BeaconState, ChainConfig, DepositData, Eth1Data, EthSpec,
    ExecutionPayloadHeader, Fork, ValidatorRecord,
};
use tree_hash::TreeHash;

/// Assembles the genesis state of `context.fork`.
///
/// `validators` are registered in order. `header` must be present exactly for forks that embed
/// an execution payload header, and must have that fork's shape.
pub fn assemble<E: EthSpec>(
    config: &ChainConfig,
    context: &GenesisContext,
    validators: &[ValidatorRecord],
    header: Option<ExecutionPayloadHeader<E>>,
) -> AssemblyResult<BeaconState<E>> {
    let fork = context.fork;
    let capabilities = fork.capabilities();
    let mut state = BeaconState::<E>::new(fork);

    state.set_genesis_time(context.genesis_time()?);
    state.set_fork(Fork {
        previous_version: config.previous_fork_version(fork)?,
        current_version: config.fork_version(fork)?,
        epoch: GENESIS_EPOCH,
    });

    state.set_eth1_data(Eth1Data {
        deposit_root: DepositData::empty_list_root(),
        deposit_count: 0,
        block_hash: context.eth1_block_hash,
    });
    let deposit_index = state.eth1_deposit_index();
    if deposit_index != 0 {
        return Err(InvariantViolation::DepositIndex(deposit_index).into());
    }

    state.set_latest_block_header(BeaconBlockHeader {
        body_root: fork.empty_block_body_root::<E>(),
        ..Default::default()
    });

    for mix in state.randao_mixes_mut().iter_mut() {
        *mix = context.eth1_block_hash;
    }

    for record in validators {
        state
            .push_validator(record.to_validator(fork), record.balance)
            .map_err(AssemblyError::RegistryFull)?;
    }

    let mut activated = 0usize;
    for validator in state.validators_mut().iter_mut() {
        if validator.effective_balance == MAX_EFFECTIVE_BALANCE {
            validator.activation_eligibility_epoch = GENESIS_EPOCH;
            validator.activation_epoch = GENESIS_EPOCH;
            activated += 1;
        }
    }
    info!(
        target: "assembler",
        "Registered {} validators, {activated} active at genesis",
        validators.len()
    );

    let validators_root = state.validators().tree_hash_root();
    state.set_genesis_validators_root(validators_root);

    if capabilities.sync_committee {
        let registry = state.validators();
        let active = active_validator_indices(registry, GENESIS_EPOCH);
        let seed = get_seed::<E>(state.randao_mixes(), GENESIS_EPOCH, DOMAIN_SYNC_COMMITTEE);
        let indices = compute_sync_committee_indices::<E>(fork, registry, &active, seed)?;
        let committee = sync_committee::<E>(registry, &indices)?;

        debug!(
            target: "assembler",
            "Selected sync committee from {} active validators, aggregate {}",
            active.len(),
            committee.aggregate_pubkey
        );
        state.set_sync_committees(committee).map_err(InvariantViolation::State)?;
    }

    // Capella onwards keeps `historical_roots` empty; no placeholder root is inserted, so such
    // states differ from generators that seed one.
    if capabilities.churn_accounting {
        if let Some(electra) = state.as_electra_mut() {
            seed_churn(electra);
        }
    }

    match (capabilities.execution_payload, header) {
        (true, Some(header)) => {
            state.set_latest_execution_payload_header(header).map_err(InvariantViolation::State)?
        }
        (true, None) => return Err(InvariantViolation::MissingHeader(fork).into()),
        (false, Some(_)) => return Err(InvariantViolation::UnexpectedHeader(fork).into()),
        (false, None) => {}
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, B256};
    use genesis_keys::{seed_from_mnemonic, ValidatorDeriver, WithdrawalScheme};
    use genesis_primitives::{
        constants::{
            COMPOUNDING_WITHDRAWAL_PREFIX, FAR_FUTURE_EPOCH, MAX_EFFECTIVE_BALANCE_ELECTRA,
        },
        BlsPublicKey, ExecutionPayloadHeaderBellatrix, ExecutionPayloadHeaderDeneb, ForkName,
        MinimalEthSpec,
    };

    type E = MinimalEthSpec;

    const ETH1_HASH: B256 =
        b256!("4242424242424242424242424242424242424242424242424242424242424242");

    fn context(fork: ForkName) -> GenesisContext {
        GenesisContext {
            fork,
            eth1_timestamp: 1_700_000_000,
            eth1_block_hash: ETH1_HASH,
            genesis_delay: 604_800,
        }
    }

    fn derived(count: u64) -> Vec<ValidatorRecord> {
        let seed = seed_from_mnemonic(
            "test test test test test test test test test test test junk",
            0,
        )
        .unwrap();
        ValidatorDeriver::new(2, WithdrawalScheme::Bls).unwrap().derive(0, &seed, count).unwrap()
    }

    fn header_for(fork: ForkName) -> Option<ExecutionPayloadHeader<E>> {
        match fork {
            ForkName::Phase0 | ForkName::Altair => None,
            ForkName::Bellatrix => Some(ExecutionPayloadHeader::Bellatrix(
                ExecutionPayloadHeaderBellatrix { block_hash: ETH1_HASH, ..Default::default() },
            )),
            ForkName::Capella => Some(ExecutionPayloadHeader::Capella(Default::default())),
            ForkName::Deneb | ForkName::Electra => {
                Some(ExecutionPayloadHeader::Deneb(ExecutionPayloadHeaderDeneb {
                    block_hash: ETH1_HASH,
                    ..Default::default()
                }))
            }
        }
    }

    #[test]
    fn test_phase0_empty_round_trip() {
        let config = ChainConfig::minimal();
        let state = assemble::<E>(&config, &context(ForkName::Phase0), &[], None).unwrap();

        assert_eq!(state.genesis_time(), 1_700_604_800);
        assert_eq!(state.validators().len(), 0);
        let decoded = BeaconState::<E>::from_ssz_bytes(&state.as_ssz_bytes(), ForkName::Phase0)
            .unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_common_fields() {
        let config = ChainConfig::minimal();
        for fork in ForkName::ALL {
            let state =
                assemble::<E>(&config, &context(fork), &derived(4), header_for(fork)).unwrap();

            let version = state.fork();
            assert_eq!(version.current_version, config.fork_version(fork).unwrap());
            assert_eq!(version.previous_version, config.previous_fork_version(fork).unwrap());
            assert_eq!(version.epoch, 0);

            let eth1_data = state.eth1_data();
            assert_eq!(
                eth1_data.deposit_root,
                b256!("d70a234731285c6804c2a4f56711ddb8c82c99740f207854891028af34e27e5e")
            );
            assert_eq!(eth1_data.deposit_count, 0);
            assert_eq!(eth1_data.block_hash, ETH1_HASH);
            assert_eq!(state.eth1_deposit_index(), 0);

            assert_eq!(state.latest_block_header().body_root, fork.empty_block_body_root::<E>());
            assert!(state.randao_mixes().iter().all(|mix| *mix == ETH1_HASH));
            assert_eq!(state.genesis_validators_root(), state.validators().tree_hash_root());
            assert_eq!(state.balances().len(), 4);
        }
    }

    #[test]
    fn test_activation_requires_exact_max_balance() {
        let mut records = derived(3);
        records[1].balance = MAX_EFFECTIVE_BALANCE - 1;
        records[2].balance = MAX_EFFECTIVE_BALANCE + 5_000_000_000;

        let state =
            assemble::<E>(&ChainConfig::minimal(), &context(ForkName::Phase0), &records, None)
                .unwrap();
        let registry = state.validators();

        assert_eq!(registry[0].activation_epoch, 0);
        assert_eq!(registry[0].activation_eligibility_epoch, 0);
        assert_eq!(registry[1].effective_balance, MAX_EFFECTIVE_BALANCE - 1_000_000_000);
        assert_eq!(registry[1].activation_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(registry[1].activation_eligibility_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(registry[2].effective_balance, MAX_EFFECTIVE_BALANCE);
        assert_eq!(registry[2].activation_epoch, 0);
        assert_eq!(state.balances()[2], MAX_EFFECTIVE_BALANCE + 5_000_000_000);
    }

    #[test]
    fn test_compounding_validator_stays_pending() {
        let mut records = derived(2);
        records[1].withdrawal_credentials[0] = COMPOUNDING_WITHDRAWAL_PREFIX;
        records[1].balance = MAX_EFFECTIVE_BALANCE_ELECTRA;

        let fork = ForkName::Electra;
        let state =
            assemble::<E>(&ChainConfig::minimal(), &context(fork), &records, header_for(fork))
                .unwrap();
        let registry = state.validators();
        assert_eq!(registry[1].effective_balance, MAX_EFFECTIVE_BALANCE_ELECTRA);
        assert_eq!(registry[1].activation_epoch, FAR_FUTURE_EPOCH);
        assert_eq!(registry[0].activation_epoch, 0);
    }

    #[test]
    fn test_sync_committees_installed() {
        let records = derived(5);
        for fork in [ForkName::Altair, ForkName::Deneb, ForkName::Electra] {
            let state = assemble::<E>(
                &ChainConfig::minimal(),
                &context(fork),
                &records,
                header_for(fork),
            )
            .unwrap();

            let current = state.current_sync_committee().unwrap();
            assert_eq!(Some(current), state.next_sync_committee());
            let pubkeys = records.iter().map(|r| r.pubkey).collect::<Vec<_>>();
            assert!(current.pubkeys.iter().all(|pk| pubkeys.contains(pk)));
            assert_eq!(state.inactivity_scores().unwrap().len(), 5);
        }
    }

    #[test]
    fn test_sync_committee_seeded_at_genesis_epoch() {
        let records = derived(6);
        for fork in [ForkName::Altair, ForkName::Electra] {
            let state = assemble::<E>(
                &ChainConfig::minimal(),
                &context(fork),
                &records,
                header_for(fork),
            )
            .unwrap();

            let registry = state.validators();
            let active = active_validator_indices(registry, GENESIS_EPOCH);
            let seed = get_seed::<E>(state.randao_mixes(), GENESIS_EPOCH, DOMAIN_SYNC_COMMITTEE);
            let indices = compute_sync_committee_indices::<E>(fork, registry, &active, seed).unwrap();
            let expected = sync_committee::<E>(registry, &indices).unwrap();
            assert_eq!(state.current_sync_committee(), Some(&expected));

            let later = get_seed::<E>(state.randao_mixes(), GENESIS_EPOCH + 1, DOMAIN_SYNC_COMMITTEE);
            assert_ne!(seed, later);
        }
    }

    #[test]
    fn test_phase0_state_root() {
        let mut records = (1..=4u8)
            .map(|i| ValidatorRecord::new(BlsPublicKey::repeat_byte(i), B256::ZERO))
            .collect::<Vec<_>>();
        records[2].balance = 31_500_000_000;

        let state =
            assemble::<E>(&ChainConfig::minimal(), &context(ForkName::Phase0), &records, None)
                .unwrap();
        assert_eq!(
            state.genesis_validators_root(),
            b256!("9b68f10d87bb0a97bef1e2338e2d2f13236d142c25f80e59e60d3a0264a9e42d")
        );
        assert_eq!(
            state.tree_hash_root(),
            b256!("ca728206eeb46b4369b861b1331556637cb566092b308357d99a1b138146ac71")
        );
    }

    #[test]
    fn test_empty_active_set_is_fatal() {
        let mut records = derived(2);
        for record in &mut records {
            record.balance = 1_000_000_000;
        }
        let result =
            assemble::<E>(&ChainConfig::minimal(), &context(ForkName::Altair), &records, None);
        assert!(matches!(result, Err(AssemblyError::EmptyActiveSet)));
    }

    #[test]
    fn test_invalid_pubkey_fails_aggregation() {
        let records = vec![ValidatorRecord::new(BlsPublicKey::repeat_byte(0x11), B256::ZERO)];
        let result =
            assemble::<E>(&ChainConfig::minimal(), &context(ForkName::Altair), &records, None);
        assert!(matches!(result, Err(AssemblyError::Aggregation(_))));
    }

    #[test]
    fn test_electra_churn() {
        let fork = ForkName::Electra;
        let state =
            assemble::<E>(&ChainConfig::minimal(), &context(fork), &derived(2), header_for(fork))
                .unwrap();
        let electra = state.as_electra().unwrap();
        assert_eq!(electra.earliest_exit_epoch, 6);
        assert_eq!(electra.earliest_consolidation_epoch, 6);
        assert_eq!(electra.exit_balance_to_consume, 128_000_000_000);
        assert_eq!(electra.deposit_requests_start_index, u64::MAX);
    }

    #[test]
    fn test_execution_header_embedded() {
        let fork = ForkName::Bellatrix;
        let state =
            assemble::<E>(&ChainConfig::minimal(), &context(fork), &derived(1), header_for(fork))
                .unwrap();
        assert_eq!(state.latest_execution_payload_header(), header_for(fork));
    }

    #[test]
    fn test_header_presence_must_match_fork() {
        let config = ChainConfig::minimal();
        let records = derived(1);

        let missing = assemble::<E>(&config, &context(ForkName::Capella), &records, None);
        assert!(matches!(
            missing,
            Err(AssemblyError::Invariant(InvariantViolation::MissingHeader(ForkName::Capella)))
        ));

        let unexpected = assemble::<E>(
            &config,
            &context(ForkName::Phase0),
            &records,
            header_for(ForkName::Bellatrix),
        );
        assert!(matches!(
            unexpected,
            Err(AssemblyError::Invariant(InvariantViolation::UnexpectedHeader(_)))
        ));

        let mismatched = assemble::<E>(
            &config,
            &context(ForkName::Capella),
            &records,
            header_for(ForkName::Bellatrix),
        );
        assert!(matches!(
            mismatched,
            Err(AssemblyError::Invariant(InvariantViolation::State(_)))
        ));
    }

    #[test]
    fn test_missing_fork_version() {
        let config = ChainConfig { electra_fork_version: None, ..ChainConfig::minimal() };
        let fork = ForkName::Electra;
        let result = assemble::<E>(&config, &context(fork), &[], header_for(fork));
        assert!(matches!(result, Err(AssemblyError::Config(_))));
    }

    #[test]
    fn test_genesis_time_overflow() {
        let ctx = GenesisContext { eth1_timestamp: u64::MAX, ..context(ForkName::Phase0) };
        let result = assemble::<E>(&ChainConfig::minimal(), &ctx, &[], None);
        assert!(matches!(result, Err(AssemblyError::GenesisTimeOverflow { .. })));
    }
}
