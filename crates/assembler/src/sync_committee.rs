//! Sync committee selection at genesis.

use crate::{compute_shuffled_index, shuffle::hash, AssemblyError, AssemblyResult, InvariantViolation};
use alloy_primitives::{aliases::B32, B256};
use genesis_keys::bls::aggregate_public_keys;
use genesis_primitives::{
    constants::{
        MAX_EFFECTIVE_BALANCE, MAX_EFFECTIVE_BALANCE_ELECTRA, MAX_RANDOM_BYTE, MAX_RANDOM_VALUE,
        MIN_SEED_LOOKAHEAD,
    },
    EthSpec, ForkName, SyncCommittee, Validator,
};
use ssz_types::FixedVector;

/// Indices of the validators active at `epoch`.
pub fn active_validator_indices(validators: &[Validator], epoch: u64) -> Vec<usize> {
    validators
        .iter()
        .enumerate()
        .filter(|(_, v)| v.activation_epoch <= epoch && epoch < v.exit_epoch)
        .map(|(i, _)| i)
        .collect()
}

/// The seed of `epoch` under `domain`, drawn from the RANDAO mix `MIN_SEED_LOOKAHEAD + 1` epochs
/// back.
pub fn get_seed<E: EthSpec>(
    randao_mixes: &FixedVector<B256, E::EpochsPerHistoricalVector>,
    epoch: u64,
    domain: B32,
) -> B256 {
    let len = E::epochs_per_historical_vector();
    let mix = randao_mixes[((epoch % len + len - MIN_SEED_LOOKAHEAD - 1) % len) as usize];
    hash(&[domain.as_slice(), &epoch.to_le_bytes(), mix.as_slice()])
}

/// Selects the sync committee members, with repetition, by effective-balance weighted sampling
/// over the shuffled active set.
///
/// Electra draws 16-bit values against the compounding balance cap; earlier forks draw single
/// bytes against the regular cap.
pub fn compute_sync_committee_indices<E: EthSpec>(
    fork: ForkName,
    validators: &[Validator],
    active: &[usize],
    seed: B256,
) -> AssemblyResult<Vec<usize>> {
    if active.is_empty() {
        return Err(AssemblyError::EmptyActiveSet);
    }
    let count = active.len();
    let size = E::sync_committee_size();
    let mut members = Vec::with_capacity(size);

    let mut i = 0u64;
    while members.len() < size {
        let position = (i % count as u64) as usize;
        let shuffled = compute_shuffled_index(position, count, seed, E::SHUFFLE_ROUND_COUNT)
            .ok_or(InvariantViolation::ShuffleOutOfRange { index: position, count })?;
        let candidate = active[shuffled];
        let effective_balance = validators[candidate].effective_balance;

        let selected = if fork >= ForkName::Electra {
            let random_bytes = hash(&[seed.as_slice(), &(i / 16).to_le_bytes()]);
            let offset = (i % 16 * 2) as usize;
            let random_value =
                u64::from(u16::from_le_bytes([random_bytes[offset], random_bytes[offset + 1]]));
            effective_balance * MAX_RANDOM_VALUE >= MAX_EFFECTIVE_BALANCE_ELECTRA * random_value
        } else {
            let random_bytes = hash(&[seed.as_slice(), &(i / 32).to_le_bytes()]);
            let random_byte = u64::from(random_bytes[(i % 32) as usize]);
            effective_balance * MAX_RANDOM_BYTE >= MAX_EFFECTIVE_BALANCE * random_byte
        };
        if selected {
            members.push(candidate);
        }
        i += 1;
    }

    Ok(members)
}

/// Builds the committee of `indices`, aggregating their pubkeys.
pub fn sync_committee<E: EthSpec>(
    validators: &[Validator],
    indices: &[usize],
) -> AssemblyResult<SyncCommittee<E>> {
    let pubkeys = indices.iter().map(|i| validators[*i].pubkey).collect::<Vec<_>>();
    let aggregate_pubkey = aggregate_public_keys(&pubkeys)?;

    let got = pubkeys.len();
    let pubkeys = FixedVector::new(pubkeys).map_err(|_| InvariantViolation::CommitteeSize {
        got,
        expected: E::sync_committee_size(),
    })?;
    Ok(SyncCommittee { pubkeys, aggregate_pubkey })
}
