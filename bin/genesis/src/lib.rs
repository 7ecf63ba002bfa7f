#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod cli;
pub use cli::{init_tracing_subscriber, GenesisArgs, GenesisCli, GenesisCommand};

mod driver;
pub use driver::run;
