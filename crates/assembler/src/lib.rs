#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{AssemblyError, AssemblyResult, InvariantViolation};

mod context;
pub use context::GenesisContext;

mod shuffle;
pub use shuffle::compute_shuffled_index;

mod sync_committee;
pub use sync_committee::{
    active_validator_indices, compute_sync_committee_indices, get_seed, sync_committee,
};

mod churn;
pub use churn::{compute_activation_exit_epoch, seed_churn};

mod assemble;
pub use assemble::assemble;

