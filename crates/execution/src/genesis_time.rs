//! Choice of the eth1 timestamp a genesis state is anchored to.

/// Inputs deciding the eth1 timestamp; the genesis delay is added on top by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenesisTimePolicy {
    /// Anchor to the EL genesis config's timestamp when one is supplied.
    pub match_execution_genesis: bool,
    /// Timestamp of the EL genesis config, if one was supplied.
    pub el_genesis_timestamp: Option<u64>,
    /// `MIN_GENESIS_TIME` of the chain config; zero means unset.
    pub min_genesis_time: u64,
    /// The `--timestamp` flag.
    pub timestamp_flag: u64,
}

impl GenesisTimePolicy {
    /// Resolves the eth1 timestamp: the EL genesis timestamp if matching was requested, else a
    /// non-zero `MIN_GENESIS_TIME`, else the flag.
    pub fn resolve(&self) -> u64 {
        match self.el_genesis_timestamp {
            Some(timestamp) if self.match_execution_genesis => timestamp,
            _ if self.min_genesis_time != 0 => self.min_genesis_time,
            _ => self.timestamp_flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        let policy = GenesisTimePolicy {
            match_execution_genesis: true,
            el_genesis_timestamp: Some(100),
            min_genesis_time: 200,
            timestamp_flag: 300,
        };
        assert_eq!(policy.resolve(), 100);

        let unmatched = GenesisTimePolicy { match_execution_genesis: false, ..policy };
        assert_eq!(unmatched.resolve(), 200);

        let no_config = GenesisTimePolicy { el_genesis_timestamp: None, ..policy };
        assert_eq!(no_config.resolve(), 200);

        let no_min = GenesisTimePolicy { min_genesis_time: 0, ..no_config };
        assert_eq!(no_min.resolve(), 300);

        let no_min_matched = GenesisTimePolicy { min_genesis_time: 0, ..policy };
        assert_eq!(no_min_matched.resolve(), 100);
    }
}
