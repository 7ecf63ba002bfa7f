//! Drives one genesis run from parsed arguments to the written state.

use crate::GenesisArgs;
use anyhow::{Context, Result};
use genesis_assembler::{assemble, GenesisContext};
use genesis_execution::{
    load_el_genesis, placeholder_header, translate_header, ExecutionBlockSource,
    GenesisTimePolicy,
};
use genesis_primitives::{ChainConfig, EthSpec, ForkName, MainnetEthSpec, MinimalEthSpec, Preset};
use std::{
    fs::File,
    io::{BufWriter, Write},
};

/// Creates the `fork` genesis state described by `args` and writes it to `args.state_output`.
pub async fn run(fork: ForkName, args: &GenesisArgs) -> Result<()> {
    let config = ChainConfig::load(&args.config)
        .with_context(|| format!("Failed to load chain config {}", args.config))?;
    let preset = args.preset.unwrap_or(config.preset_base);
    info!(target: "genesis", "Creating {fork} genesis state with the {preset} preset");

    match preset {
        Preset::Mainnet => run_with::<MainnetEthSpec>(fork, args, &config).await,
        Preset::Minimal => run_with::<MinimalEthSpec>(fork, args, &config).await,
    }
}

async fn run_with<E: EthSpec>(
    fork: ForkName,
    args: &GenesisArgs,
    config: &ChainConfig,
) -> Result<()> {
    let el_genesis = args.eth1_config.as_deref().map(load_el_genesis).transpose()?;
    let timestamp_flag = args.timestamp_or_now()?;

    let policy = GenesisTimePolicy {
        match_execution_genesis: args.eth1_match_genesis_time,
        el_genesis_timestamp: el_genesis.as_ref().map(|genesis| genesis.timestamp),
        min_genesis_time: config.min_genesis_time,
        timestamp_flag,
    };
    let eth1_timestamp = policy.resolve();

    let (eth1_block_hash, header) = if fork.capabilities().execution_payload {
        let source = ExecutionBlockSource::select(
            args.shadow_fork_block_file.as_deref(),
            args.shadow_fork_eth1_rpc.as_deref(),
            el_genesis.as_ref(),
        );
        info!(target: "genesis", "Using the {source} as execution block source");
        match source.fetch().await? {
            Some(block) => (block.hash(), Some(translate_header::<E>(fork, &block)?)),
            None => (
                args.eth1_block,
                Some(placeholder_header::<E>(fork, args.eth1_block, timestamp_flag)?),
            ),
        }
    } else {
        (args.eth1_block, None)
    };

    let request = args.validator_request();
    let validators = tokio::task::spawn_blocking(move || request.load()).await??;
    if (validators.len() as u64) < config.min_genesis_active_validator_count {
        warn!(
            target: "genesis",
            "Only {} validators, fewer than MIN_GENESIS_ACTIVE_VALIDATOR_COUNT ({})",
            validators.len(),
            config.min_genesis_active_validator_count
        );
    }

    let context = GenesisContext {
        fork,
        eth1_timestamp,
        eth1_block_hash,
        genesis_delay: config.genesis_delay,
    };
    let state = assemble::<E>(config, &context, &validators, header)?;

    let path = &args.state_output;
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&state.as_ssz_bytes())?;
    writer.flush()?;
    info!(target: "genesis", "Wrote genesis state to {}", path.display());

    info!(
        target: "genesis",
        "genesis at {eth1_timestamp} + {} = {}",
        config.genesis_delay,
        state.genesis_time()
    );
    Ok(())
}
