#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod bls;

mod errors;
pub use errors::{KeyError, KeyResult};

mod mnemonic;
pub use mnemonic::{load_seed_sources, seed_from_mnemonic, SeedSource};

mod deriver;
pub use deriver::{write_tranche, ValidatorDeriver, WithdrawalScheme};

mod validators_file;
pub use validators_file::{load_validators_list, parse_validators_list, ListedValidator};

mod loader;
pub use loader::{ValidatorOrigin, ValidatorRequest, ValidatorSetBuilder};
