#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use anyhow::Result;
use beacon_genesis::{init_tracing_subscriber, run, GenesisCli};
use clap::Parser;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let cli = GenesisCli::parse();
    init_tracing_subscriber(cli.v)?;
    run(cli.command.fork(), cli.command.args()).await
}
