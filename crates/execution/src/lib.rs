#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{ExecutionError, ExecutionResult};

mod block;
pub use block::{load_block_file, ExecutionBlock, RpcBlock};

mod rpc;
pub use rpc::fetch_latest_block;

mod el_genesis;
pub use el_genesis::{genesis_block, load_el_genesis, state_root, TrieAccount};

mod source;
pub use source::ExecutionBlockSource;

mod translator;
pub use translator::{placeholder_header, transactions_root, translate_header};

mod genesis_time;
pub use genesis_time::GenesisTimePolicy;
