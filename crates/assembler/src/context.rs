//! Inputs that fix the time and entropy of a genesis.

use crate::{AssemblyError, AssemblyResult};
use alloy_primitives::B256;
use genesis_primitives::ForkName;

/// The fork, eth1 anchor and delay of one genesis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisContext {
    /// Fork of the genesis state.
    pub fork: ForkName,
    /// Timestamp the genesis time is counted from.
    pub eth1_timestamp: u64,
    /// Eth1 block hash, also the initial RANDAO entropy.
    pub eth1_block_hash: B256,
    /// `GENESIS_DELAY` of the chain configuration.
    pub genesis_delay: u64,
}

impl GenesisContext {
    /// `eth1_timestamp + genesis_delay`, failing on overflow.
    pub const fn genesis_time(&self) -> AssemblyResult<u64> {
        match self.eth1_timestamp.checked_add(self.genesis_delay) {
            Some(time) => Ok(time),
            None => Err(AssemblyError::GenesisTimeOverflow {
                eth1_timestamp: self.eth1_timestamp,
                genesis_delay: self.genesis_delay,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn context(eth1_timestamp: u64, genesis_delay: u64) -> GenesisContext {
        GenesisContext {
            fork: ForkName::Phase0,
            eth1_timestamp,
            eth1_block_hash: B256::ZERO,
            genesis_delay,
        }
    }

    #[test]
    fn test_genesis_time() {
        assert_eq!(context(1_700_000_000, 0).genesis_time().unwrap(), 1_700_000_000);
        assert_eq!(context(1_700_000_000, 604_800).genesis_time().unwrap(), 1_700_604_800);
        assert_eq!(context(0, u64::MAX).genesis_time().unwrap(), u64::MAX);
    }

    #[test]
    fn test_genesis_time_overflow() {
        assert!(matches!(
            context(u64::MAX, 1).genesis_time(),
            Err(AssemblyError::GenesisTimeOverflow { eth1_timestamp: u64::MAX, genesis_delay: 1 })
        ));
    }

    proptest! {
        #[test]
        fn test_genesis_time_is_sum(eth1 in any::<u64>(), delay in any::<u64>()) {
            match eth1.checked_add(delay) {
                Some(sum) => prop_assert_eq!(context(eth1, delay).genesis_time().unwrap(), sum),
                None => prop_assert!(context(eth1, delay).genesis_time().is_err()),
            }
        }
    }
}
