//! This module contains all CLI-specific code for the genesis binary.

use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use genesis_keys::ValidatorRequest;
use genesis_primitives::{ForkName, Preset};
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

mod parser;
pub(crate) use parser::{parse_address, parse_b256};

mod tracing_util;
pub use tracing_util::init_tracing_subscriber;

/// The genesis binary CLI application arguments.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct GenesisCli {
    /// Verbosity level (0-2)
    #[arg(long, short, help = "Verbosity level (0-2)", action = ArgAction::Count, global = true)]
    pub v: u8,
    /// The fork of the genesis state.
    #[clap(subcommand)]
    pub command: GenesisCommand,
}

/// One subcommand per fork a genesis state can be created for.
#[derive(Subcommand, Clone, Debug)]
pub enum GenesisCommand {
    /// Create a phase0 genesis state.
    Phase0(GenesisArgs),
    /// Create an altair genesis state.
    Altair(GenesisArgs),
    /// Create a bellatrix genesis state.
    Bellatrix(GenesisArgs),
    /// Create a capella genesis state.
    Capella(GenesisArgs),
    /// Create a deneb genesis state.
    Deneb(GenesisArgs),
    /// Create an electra genesis state.
    Electra(GenesisArgs),
}

impl GenesisCommand {
    /// The fork of the requested state.
    pub const fn fork(&self) -> ForkName {
        match self {
            Self::Phase0(_) => ForkName::Phase0,
            Self::Altair(_) => ForkName::Altair,
            Self::Bellatrix(_) => ForkName::Bellatrix,
            Self::Capella(_) => ForkName::Capella,
            Self::Deneb(_) => ForkName::Deneb,
            Self::Electra(_) => ForkName::Electra,
        }
    }

    /// The arguments of the subcommand.
    pub const fn args(&self) -> &GenesisArgs {
        match self {
            Self::Phase0(args) |
            Self::Altair(args) |
            Self::Bellatrix(args) |
            Self::Capella(args) |
            Self::Deneb(args) |
            Self::Electra(args) => args,
        }
    }
}

/// Inputs and outputs of one genesis run.
#[derive(Args, Clone, Debug)]
pub struct GenesisArgs {
    /// Chain config: `mainnet`, `minimal`, or the path of a consensus `config.yaml`.
    #[clap(long, default_value = "mainnet")]
    pub config: String,
    /// Preset of the state. Defaults to the chain config's `PRESET_BASE`.
    #[clap(long)]
    pub preset: Option<Preset>,
    /// EL genesis config (`genesis.json`) whose block 0 the state embeds.
    #[clap(long)]
    pub eth1_config: Option<PathBuf>,
    /// Eth1 block hash used when no execution block is available.
    #[clap(long, value_parser = parse_b256, default_value_t = B256::ZERO)]
    pub eth1_block: B256,
    /// Eth1 timestamp used when neither the EL genesis nor `MIN_GENESIS_TIME` provides one.
    /// Defaults to the current time.
    #[clap(long, visible_alias = "eth1-timestamp")]
    pub timestamp: Option<u64>,
    /// Count the genesis time from the EL genesis config's timestamp.
    #[clap(long)]
    pub eth1_match_genesis_time: bool,
    /// YAML list of `{mnemonic, count}` seed sources.
    #[clap(long)]
    pub mnemonics: Option<PathBuf>,
    /// Explicit `pubkey:withdrawal_credentials[:balance]` validator list, appended after the
    /// derived validators.
    #[clap(long)]
    pub additional_validators: Option<PathBuf>,
    /// Output path of the SSZ-encoded state.
    #[clap(long, default_value = "genesis.ssz")]
    pub state_output: PathBuf,
    /// Directory receiving the pubkeys derived from each seed source.
    #[clap(long, default_value = "tranches")]
    pub tranches_dir: PathBuf,
    /// Execution address for the withdrawal credentials of derived validators. Zero selects
    /// BLS credentials.
    #[clap(long, value_parser = parse_address, default_value_t = Address::ZERO)]
    pub eth1_withdrawal_address: Address,
    /// JSON-RPC endpoint whose head block a shadow fork starts from.
    #[clap(long)]
    pub shadow_fork_eth1_rpc: Option<String>,
    /// JSON file holding the block a shadow fork starts from.
    #[clap(long)]
    pub shadow_fork_block_file: Option<PathBuf>,
    /// Key derivation threads. Zero uses the available parallelism.
    #[clap(long, default_value_t = 0)]
    pub workers: usize,
}

impl GenesisArgs {
    /// The validator sources of this run.
    pub fn validator_request(&self) -> ValidatorRequest {
        ValidatorRequest {
            mnemonics: self.mnemonics.clone(),
            validators_list: self.additional_validators.clone(),
            tranches_dir: self.tranches_dir.clone(),
            withdrawal_address: self.eth1_withdrawal_address,
            workers: self.workers,
        }
    }

    /// The `--timestamp` value, or the current unix time.
    pub fn timestamp_or_now(&self) -> Result<u64> {
        match self.timestamp {
            Some(timestamp) => Ok(timestamp),
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .map_err(|e| anyhow!("System clock is before the unix epoch: {e}")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fork_subcommands() {
        for fork in ForkName::ALL {
            let cli = GenesisCli::try_parse_from(["beacon-genesis", &fork.to_string()]).unwrap();
            assert_eq!(cli.command.fork(), fork);
        }
        assert!(GenesisCli::try_parse_from(["beacon-genesis", "fulu"]).is_err());
        assert!(GenesisCli::try_parse_from(["beacon-genesis"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = GenesisCli::try_parse_from(["beacon-genesis", "capella"]).unwrap();
        let args = cli.command.args();
        assert_eq!(cli.v, 0);
        assert_eq!(args.config, "mainnet");
        assert_eq!(args.preset, None);
        assert_eq!(args.eth1_block, B256::ZERO);
        assert_eq!(args.timestamp, None);
        assert!(!args.eth1_match_genesis_time);
        assert_eq!(args.state_output, PathBuf::from("genesis.ssz"));
        assert_eq!(args.tranches_dir, PathBuf::from("tranches"));
        assert_eq!(args.eth1_withdrawal_address, Address::ZERO);
        assert_eq!(args.workers, 0);
    }

    #[test]
    fn test_flags() {
        let hash = B256::repeat_byte(0xab).to_string();
        let cli = GenesisCli::try_parse_from([
            "beacon-genesis",
            "-vv",
            "bellatrix",
            "--preset",
            "minimal",
            "--eth1-block",
            &hash,
            "--eth1-timestamp",
            "1700000000",
            "--eth1-withdrawal-address",
            "0x4242424242424242424242424242424242424242",
            "--shadow-fork-eth1-rpc",
            "http://localhost:8545",
            "--workers",
            "3",
        ])
        .unwrap();
        let args = cli.command.args();
        assert_eq!(cli.v, 2);
        assert_eq!(args.preset, Some(Preset::Minimal));
        assert_eq!(args.eth1_block, B256::repeat_byte(0xab));
        assert_eq!(args.timestamp_or_now().unwrap(), 1_700_000_000);
        assert_eq!(args.shadow_fork_eth1_rpc.as_deref(), Some("http://localhost:8545"));

        let request = args.validator_request();
        assert_eq!(request.withdrawal_address, Address::repeat_byte(0x42));
        assert_eq!(request.workers, 3);
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            ["beacon-genesis", "deneb", "--eth1-block", "0x1234"],
            ["beacon-genesis", "deneb", "--eth1-withdrawal-address", "0x42"],
            ["beacon-genesis", "deneb", "--preset", "gnosis"],
            ["beacon-genesis", "deneb", "--timestamp", "-1"],
        ];
        for args in cases {
            assert!(GenesisCli::try_parse_from(args).is_err(), "{args:?}");
        }
    }
}
