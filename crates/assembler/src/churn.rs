//! Electra churn bookkeeping at genesis.

use genesis_primitives::{
    constants::{
        GENESIS_EPOCH, MAX_SEED_LOOKAHEAD, MIN_PER_EPOCH_CHURN_LIMIT_ELECTRA,
        UNSET_DEPOSIT_REQUESTS_START_INDEX,
    },
    BeaconStateElectra, EthSpec,
};

/// The epoch at which an exit or activation initiated during `epoch` takes effect.
pub const fn compute_activation_exit_epoch(epoch: u64) -> u64 {
    epoch + 1 + MAX_SEED_LOOKAHEAD
}

/// Seeds the churn fields of an electra genesis state.
///
/// Both earliest epochs sit one epoch past the first activation-exit epoch, and the exit budget
/// is the minimum per-epoch churn, which is what any genesis set below ~264k validators yields.
pub fn seed_churn<E: EthSpec>(state: &mut BeaconStateElectra<E>) {
    let earliest = compute_activation_exit_epoch(GENESIS_EPOCH) + 1;
    state.earliest_exit_epoch = earliest;
    state.earliest_consolidation_epoch = earliest;
    state.exit_balance_to_consume = MIN_PER_EPOCH_CHURN_LIMIT_ELECTRA;
    state.consolidation_balance_to_consume = 0;
    state.deposit_balance_to_consume = 0;
    // Unset rather than zero, so deposit request processing has not started at genesis.
    // Generators that leave the field at zero produce a different state here.
    state.deposit_requests_start_index = UNSET_DEPOSIT_REQUESTS_START_INDEX;

    debug!(target: "assembler", "Earliest exit and consolidation epoch: {earliest}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_primitives::MinimalEthSpec;

    #[test]
    fn test_activation_exit_epoch() {
        assert_eq!(compute_activation_exit_epoch(0), 5);
        assert_eq!(compute_activation_exit_epoch(10), 15);
    }

    #[test]
    fn test_seed_churn() {
        let mut state = BeaconStateElectra::<MinimalEthSpec>::default();
        state.consolidation_balance_to_consume = 9;
        seed_churn(&mut state);

        assert_eq!(state.earliest_exit_epoch, 6);
        assert_eq!(state.earliest_consolidation_epoch, 6);
        assert_eq!(state.exit_balance_to_consume, 128_000_000_000);
        assert_eq!(state.consolidation_balance_to_consume, 0);
        assert_eq!(state.deposit_balance_to_consume, 0);
        assert_eq!(state.deposit_requests_start_index, u64::MAX);
    }
}
