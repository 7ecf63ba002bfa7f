//! Combines mnemonic sources and explicit lists into one genesis validator set.

use crate::{
    load_seed_sources, load_validators_list, seed_from_mnemonic, write_tranche, KeyError,
    KeyResult, ValidatorDeriver, WithdrawalScheme,
};
use alloy_primitives::Address;
use genesis_primitives::{BlsPublicKey, ValidatorRecord};
use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
    path::PathBuf,
};

/// Where a validator of the combined set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorOrigin {
    /// Derived from a mnemonic seed source.
    Mnemonic {
        /// Position of the seed source in its file.
        source: usize,
        /// Derivation index within the source.
        index: u64,
    },
    /// Read from line `n` of the explicit validator list.
    ListLine(usize),
}

impl fmt::Display for ValidatorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mnemonic { source, index } => {
                write!(f, "seed source {source} index {index}")
            }
            Self::ListLine(line) => write!(f, "validator list line {line}"),
        }
    }
}

/// Accumulates validators in order, rejecting repeated pubkeys.
#[derive(Debug, Default)]
pub struct ValidatorSetBuilder {
    records: Vec<ValidatorRecord>,
    origins: HashMap<BlsPublicKey, ValidatorOrigin>,
}

impl ValidatorSetBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record`, failing if its pubkey is already present.
    pub fn push(&mut self, record: ValidatorRecord, origin: ValidatorOrigin) -> KeyResult<()> {
        match self.origins.entry(record.pubkey) {
            Entry::Occupied(first) => Err(KeyError::DuplicatePubkey {
                pubkey: record.pubkey,
                first: *first.get(),
                second: origin,
            }),
            Entry::Vacant(slot) => {
                slot.insert(origin);
                self.records.push(record);
                Ok(())
            }
        }
    }

    /// Number of validators collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no validator has been collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The collected validators, in insertion order.
    pub fn build(self) -> Vec<ValidatorRecord> {
        self.records
    }
}

/// Every key source of one genesis run.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRequest {
    /// YAML list of mnemonic seed sources.
    pub mnemonics: Option<PathBuf>,
    /// Explicit validator list.
    pub validators_list: Option<PathBuf>,
    /// Directory receiving one tranche file per seed source.
    pub tranches_dir: PathBuf,
    /// Withdrawal address of derived validators; zero selects BLS credentials.
    pub withdrawal_address: Address,
    /// Derivation worker cap; zero uses the available parallelism.
    pub workers: usize,
}

impl ValidatorRequest {
    /// Loads the combined validator set: mnemonic sources in file order, then the explicit
    /// list. Any failure aborts the whole load.
    pub fn load(&self) -> KeyResult<Vec<ValidatorRecord>> {
        let mut set = ValidatorSetBuilder::new();

        if let Some(path) = &self.mnemonics {
            let sources = load_seed_sources(path)?;
            let deriver =
                ValidatorDeriver::new(self.workers, WithdrawalScheme::from(self.withdrawal_address))?;
            debug!(
                target: "keys",
                "Using {} derivation workers for {} seed sources",
                deriver.workers(),
                sources.len()
            );

            for (source, seed_source) in sources.iter().enumerate() {
                let seed = seed_from_mnemonic(&seed_source.mnemonic, source)?;
                let records = deriver.derive(source, &seed, seed_source.count)?;
                let tranche = write_tranche(&self.tranches_dir, source, &records)?;
                info!(
                    target: "keys",
                    "Derived {} validators from seed source {source}, pubkeys in {}",
                    records.len(),
                    tranche.display()
                );

                for (index, record) in (0u64..).zip(records) {
                    set.push(record, ValidatorOrigin::Mnemonic { source, index })?;
                }
            }
        }

        if let Some(path) = &self.validators_list {
            let listed = load_validators_list(path)?;
            info!(
                target: "keys",
                "Loaded {} validators from {}",
                listed.len(),
                path.display()
            );
            for validator in listed {
                set.push(validator.record, ValidatorOrigin::ListLine(validator.line))?;
            }
        }

        Ok(set.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{hex, B256};
    use std::fs;

    const MNEMONIC: &str = "test test test test test test test test test test test junk";

    #[test]
    fn test_builder_rejects_duplicates() {
        let record = ValidatorRecord::new(BlsPublicKey::repeat_byte(1), B256::ZERO);
        let mut set = ValidatorSetBuilder::new();
        set.push(record, ValidatorOrigin::Mnemonic { source: 0, index: 4 }).unwrap();

        let err = set.push(record, ValidatorOrigin::ListLine(12)).unwrap_err();
        let KeyError::DuplicatePubkey { first, second, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(first, ValidatorOrigin::Mnemonic { source: 0, index: 4 });
        assert_eq!(second, ValidatorOrigin::ListLine(12));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(
            ValidatorOrigin::Mnemonic { source: 1, index: 9 }.to_string(),
            "seed source 1 index 9"
        );
        assert_eq!(ValidatorOrigin::ListLine(3).to_string(), "validator list line 3");
    }

    #[test]
    fn test_load_combined_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mnemonics = dir.path().join("mnemonics.yaml");
        fs::write(&mnemonics, format!("- mnemonic: \"{MNEMONIC}\"\n  count: 3\n")).unwrap();
        let list = dir.path().join("validators.txt");
        fs::write(&list, format!("{}:{}:1\n", hex::encode([7u8; 48]), "00".repeat(32))).unwrap();

        let request = ValidatorRequest {
            mnemonics: Some(mnemonics),
            validators_list: Some(list),
            tranches_dir: dir.path().join("tranches"),
            workers: 2,
            ..Default::default()
        };
        let validators = request.load().unwrap();

        assert_eq!(validators.len(), 4);
        assert_eq!(validators[3].pubkey, BlsPublicKey::repeat_byte(7));
        assert_eq!(validators[3].balance, 1);

        let tranche = fs::read_to_string(dir.path().join("tranches/tranche_0000.txt")).unwrap();
        let expected = validators[..3]
            .iter()
            .map(|v| format!("{}\n", hex::encode_prefixed(v.pubkey)))
            .collect::<String>();
        assert_eq!(tranche, expected);
    }

    #[test]
    fn test_duplicate_across_sources_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mnemonics = dir.path().join("mnemonics.yaml");
        fs::write(
            &mnemonics,
            format!("- mnemonic: \"{MNEMONIC}\"\n  count: 2\n- mnemonic: \"{MNEMONIC}\"\n  count: 1\n"),
        )
        .unwrap();

        let request = ValidatorRequest {
            mnemonics: Some(mnemonics),
            tranches_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let err = request.load().unwrap_err();
        assert!(matches!(
            err,
            KeyError::DuplicatePubkey {
                first: ValidatorOrigin::Mnemonic { source: 0, index: 0 },
                second: ValidatorOrigin::Mnemonic { source: 1, index: 0 },
                ..
            }
        ));
    }

    #[test]
    fn test_bad_mnemonic_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let mnemonics = dir.path().join("mnemonics.yaml");
        fs::write(&mnemonics, "- mnemonic: \"not a real mnemonic\"\n  count: 2\n").unwrap();

        let request = ValidatorRequest {
            mnemonics: Some(mnemonics),
            tranches_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(matches!(request.load(), Err(KeyError::InvalidMnemonic { source_index: 0, .. })));
    }

    #[test]
    fn test_no_sources() {
        assert!(ValidatorRequest::default().load().unwrap().is_empty());
    }
}
