//! Bounded parallel derivation of validator identities from one seed.

use crate::{
    bls::{self, KeyPath, MasterKey},
    KeyError, KeyResult,
};
use alloy_primitives::{hex, Address, B256};
use genesis_primitives::{ValidatorRecord, WithdrawalCredentials};
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use sha2::{Digest, Sha256};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

/// Completed derivations between two progress lines.
const PROGRESS_INTERVAL: u64 = 1_000;

/// How the withdrawal credentials of derived validators are formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalScheme {
    /// Hash of the withdrawal key at `m/12381/3600/i/0`.
    Bls,
    /// Withdrawals paid out to a fixed execution address.
    Eth1(Address),
}

impl From<Address> for WithdrawalScheme {
    /// The zero address selects [WithdrawalScheme::Bls].
    fn from(address: Address) -> Self {
        if address.is_zero() {
            Self::Bls
        } else {
            Self::Eth1(address)
        }
    }
}

/// Derives validator records on a dedicated worker pool.
#[derive(Debug)]
pub struct ValidatorDeriver {
    pool: ThreadPool,
    scheme: WithdrawalScheme,
}

impl ValidatorDeriver {
    /// Creates a deriver with at most `workers` threads. Zero uses the available parallelism.
    pub fn new(workers: usize, scheme: WithdrawalScheme) -> KeyResult<Self> {
        bls::init()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("derive-{i}"))
            .build()?;
        Ok(Self { pool, scheme })
    }

    /// The number of worker threads.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Derives validators `0..count` of `seed`.
    ///
    /// The record at position `i` always belongs to index `i`. The first failing index aborts
    /// the whole source.
    pub fn derive(
        &self,
        source_index: usize,
        seed: &[u8],
        count: u64,
    ) -> KeyResult<Vec<ValidatorRecord>> {
        let too_many = || KeyError::TooManyValidators { source_index, count };
        if count > u64::from(u32::MAX) + 1 {
            return Err(too_many());
        }
        let len = usize::try_from(count).map_err(|_| too_many())?;

        let master = MasterKey::from_seed(seed)?;
        let mut records = vec![ValidatorRecord::default(); len];
        let done = AtomicU64::new(0);

        info!(target: "keys", "Deriving {count} validators from seed source {source_index}");
        self.pool.install(|| {
            records.par_iter_mut().enumerate().try_for_each(|(i, slot)| {
                let index = u32::try_from(i).map_err(|_| too_many())?;
                *slot = self.derive_one(&master, index).map_err(|e| KeyError::Derivation {
                    source_index,
                    validator_index: u64::from(index),
                    reason: e.to_string(),
                })?;

                let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
                if completed % PROGRESS_INTERVAL == 0 {
                    info!(target: "keys", "...validator {completed}/{count}");
                }
                Ok::<(), KeyError>(())
            })
        })?;

        Ok(records)
    }

    fn derive_one(&self, master: &MasterKey, index: u32) -> KeyResult<ValidatorRecord> {
        let withdrawal_sk = master.derive(&KeyPath::withdrawal(index));
        // The signing key sits directly below the withdrawal key.
        let pubkey = bls::public_key(&withdrawal_sk.derive_child_eip2333(0))?;

        let credentials = match self.scheme {
            WithdrawalScheme::Bls => {
                let withdrawal_pubkey = bls::public_key(&withdrawal_sk)?;
                WithdrawalCredentials::bls(B256::from_slice(&Sha256::digest(withdrawal_pubkey)))
            }
            WithdrawalScheme::Eth1(address) => WithdrawalCredentials::eth1(address),
        };
        Ok(ValidatorRecord::new(pubkey, credentials.into()))
    }
}

/// Writes the pubkeys of one seed source to `<dir>/tranche_<NNNN>.txt`, one per line.
pub fn write_tranche(
    dir: &Path,
    source_index: usize,
    records: &[ValidatorRecord],
) -> KeyResult<PathBuf> {
    let path = dir.join(format!("tranche_{source_index:04}.txt"));
    let io_err = |source| KeyError::Io { path: path.clone(), source };

    std::fs::create_dir_all(dir)
        .map_err(|source| KeyError::Io { path: dir.to_path_buf(), source })?;
    let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
    for record in records {
        writeln!(writer, "{}", hex::encode_prefixed(record.pubkey)).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    debug!(target: "keys", "Wrote {} pubkeys to {}", records.len(), path.display());
    Ok(path)
}
