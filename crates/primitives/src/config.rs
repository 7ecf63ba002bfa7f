//! Runtime chain configuration, as published in a consensus network's `config.yaml`.

use crate::{ConfigError, ConfigResult, ForkName, Preset};
use alloy_primitives::{aliases::B32, hex};
use serde::{de::Error as _, Deserialize, Deserializer};
use std::path::Path;

/// The subset of a consensus chain configuration that shapes the genesis state.
///
/// Unknown keys are ignored so that full network configuration files can be used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainConfig {
    /// The preset this configuration builds on.
    #[serde(rename = "PRESET_BASE", default)]
    pub preset_base: Preset,
    /// Human readable network name.
    #[serde(rename = "CONFIG_NAME", default)]
    pub config_name: Option<String>,
    /// Validator count below which a genesis is considered under-supplied.
    #[serde(rename = "MIN_GENESIS_ACTIVE_VALIDATOR_COUNT", deserialize_with = "quoted_u64")]
    pub min_genesis_active_validator_count: u64,
    /// Earliest allowed eth1 timestamp of the genesis; `0` disables the floor.
    #[serde(rename = "MIN_GENESIS_TIME", deserialize_with = "quoted_u64")]
    pub min_genesis_time: u64,
    /// Seconds between the eth1 timestamp and the genesis time.
    #[serde(rename = "GENESIS_DELAY", deserialize_with = "quoted_u64")]
    pub genesis_delay: u64,
    /// `GENESIS_FORK_VERSION`
    #[serde(rename = "GENESIS_FORK_VERSION", deserialize_with = "version")]
    pub genesis_fork_version: B32,
    /// `ALTAIR_FORK_VERSION`
    #[serde(rename = "ALTAIR_FORK_VERSION", default, deserialize_with = "optional_version")]
    pub altair_fork_version: Option<B32>,
    /// `BELLATRIX_FORK_VERSION`
    #[serde(rename = "BELLATRIX_FORK_VERSION", default, deserialize_with = "optional_version")]
    pub bellatrix_fork_version: Option<B32>,
    /// `CAPELLA_FORK_VERSION`
    #[serde(rename = "CAPELLA_FORK_VERSION", default, deserialize_with = "optional_version")]
    pub capella_fork_version: Option<B32>,
    /// `DENEB_FORK_VERSION`
    #[serde(rename = "DENEB_FORK_VERSION", default, deserialize_with = "optional_version")]
    pub deneb_fork_version: Option<B32>,
    /// `ELECTRA_FORK_VERSION`
    #[serde(rename = "ELECTRA_FORK_VERSION", default, deserialize_with = "optional_version")]
    pub electra_fork_version: Option<B32>,
}

impl ChainConfig {
    /// The mainnet chain configuration.
    pub fn mainnet() -> Self {
        Self {
            preset_base: Preset::Mainnet,
            config_name: Some("mainnet".to_string()),
            min_genesis_active_validator_count: 16384,
            min_genesis_time: 1606824000,
            genesis_delay: 604800,
            genesis_fork_version: B32::new([0x00, 0, 0, 0]),
            altair_fork_version: Some(B32::new([0x01, 0, 0, 0])),
            bellatrix_fork_version: Some(B32::new([0x02, 0, 0, 0])),
            capella_fork_version: Some(B32::new([0x03, 0, 0, 0])),
            deneb_fork_version: Some(B32::new([0x04, 0, 0, 0])),
            electra_fork_version: Some(B32::new([0x05, 0, 0, 0])),
        }
    }

    /// The minimal chain configuration.
    pub fn minimal() -> Self {
        Self {
            preset_base: Preset::Minimal,
            config_name: Some("minimal".to_string()),
            min_genesis_active_validator_count: 64,
            min_genesis_time: 1578009600,
            genesis_delay: 300,
            genesis_fork_version: B32::new([0x00, 0, 0, 0x01]),
            altair_fork_version: Some(B32::new([0x01, 0, 0, 0x01])),
            bellatrix_fork_version: Some(B32::new([0x02, 0, 0, 0x01])),
            capella_fork_version: Some(B32::new([0x03, 0, 0, 0x01])),
            deneb_fork_version: Some(B32::new([0x04, 0, 0, 0x01])),
            electra_fork_version: Some(B32::new([0x05, 0, 0, 0x01])),
        }
    }

    /// Resolves a built-in network name (`mainnet`, `minimal`) or a path to a YAML file.
    pub fn load(name_or_path: &str) -> ConfigResult<Self> {
        match name_or_path {
            "mainnet" => Ok(Self::mainnet()),
            "minimal" => Ok(Self::minimal()),
            path => Self::from_file(path),
        }
    }

    /// Reads a chain configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&raw)
    }

    /// Parses a chain configuration from a YAML document.
    pub fn from_yaml_str(raw: &str) -> ConfigResult<Self> {
        Ok(serde_yaml_ng::from_str(raw)?)
    }

    /// Returns the fork version of `fork`.
    pub fn fork_version(&self, fork: ForkName) -> ConfigResult<B32> {
        let version = match fork {
            ForkName::Phase0 => Some(self.genesis_fork_version),
            ForkName::Altair => self.altair_fork_version,
            ForkName::Bellatrix => self.bellatrix_fork_version,
            ForkName::Capella => self.capella_fork_version,
            ForkName::Deneb => self.deneb_fork_version,
            ForkName::Electra => self.electra_fork_version,
        };
        version.ok_or(ConfigError::MissingForkVersion(fork))
    }

    /// Returns the version of the fork preceding `fork`, or `fork`'s own version for the first
    /// fork.
    pub fn previous_fork_version(&self, fork: ForkName) -> ConfigResult<B32> {
        self.fork_version(fork.previous().unwrap_or(fork))
    }
}

/// A YAML scalar that is either a plain integer or a quoted string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(u64),
    Str(String),
}

fn quoted_u64<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(d)? {
        Scalar::Int(value) => Ok(value),
        Scalar::Str(s) => s.trim().parse().map_err(D::Error::custom),
    }
}

fn version<'de, D>(d: D) -> Result<B32, D::Error>
where
    D: Deserializer<'de>,
{
    // YAML 1.1 resolves unquoted `0x01000000` to an integer.
    match Scalar::deserialize(d)? {
        Scalar::Int(value) => u32::try_from(value)
            .map(|v| B32::new(v.to_be_bytes()))
            .map_err(|_| D::Error::custom(format!("fork version {value:#x} exceeds 4 bytes"))),
        Scalar::Str(s) => {
            let bytes = hex::decode(s.trim()).map_err(D::Error::custom)?;
            <[u8; 4]>::try_from(bytes.as_slice())
                .map(B32::new)
                .map_err(|_| D::Error::custom(format!("fork version {s} is not 4 bytes")))
        }
    }
}

fn optional_version<'de, D>(d: D) -> Result<Option<B32>, D::Error>
where
    D: Deserializer<'de>,
{
    version(d).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEVNET_CONFIG: &str = r#"
# Extended network configs carry many more keys.
PRESET_BASE: 'minimal'
CONFIG_NAME: 'devnet-7'
MIN_GENESIS_ACTIVE_VALIDATOR_COUNT: 64
MIN_GENESIS_TIME: "0"
GENESIS_FORK_VERSION: 0x10000038
GENESIS_DELAY: 60
ALTAIR_FORK_VERSION: "0x20000038"
ALTAIR_FORK_EPOCH: 0
BELLATRIX_FORK_VERSION: 0x30000038
CAPELLA_FORK_VERSION: 0x40000038
DENEB_FORK_VERSION: 0x50000038
SECONDS_PER_SLOT: 6
"#;

    #[test]
    fn test_parse_devnet_config() {
        let config = ChainConfig::from_yaml_str(DEVNET_CONFIG).unwrap();
        assert_eq!(config.preset_base, Preset::Minimal);
        assert_eq!(config.config_name.as_deref(), Some("devnet-7"));
        assert_eq!(config.min_genesis_active_validator_count, 64);
        assert_eq!(config.min_genesis_time, 0);
        assert_eq!(config.genesis_delay, 60);
        assert_eq!(config.genesis_fork_version, B32::new([0x10, 0, 0, 0x38]));
        assert_eq!(config.fork_version(ForkName::Altair).unwrap(), B32::new([0x20, 0, 0, 0x38]));
        assert_eq!(config.fork_version(ForkName::Deneb).unwrap(), B32::new([0x50, 0, 0, 0x38]));
        assert!(matches!(
            config.fork_version(ForkName::Electra),
            Err(ConfigError::MissingForkVersion(ForkName::Electra))
        ));
    }

    #[test]
    fn test_previous_fork_version() {
        let config = ChainConfig::mainnet();
        assert_eq!(
            config.previous_fork_version(ForkName::Phase0).unwrap(),
            config.genesis_fork_version
        );
        assert_eq!(
            config.previous_fork_version(ForkName::Electra).unwrap(),
            B32::new([0x04, 0, 0, 0])
        );
    }

    #[test]
    fn test_load_builtin_and_file() {
        assert_eq!(ChainConfig::load("mainnet").unwrap(), ChainConfig::mainnet());
        assert_eq!(ChainConfig::load("minimal").unwrap(), ChainConfig::minimal());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEVNET_CONFIG.as_bytes()).unwrap();
        let config = ChainConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.genesis_delay, 60);

        assert!(matches!(ChainConfig::load("/does/not/exist.yaml"), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_reject_oversized_version() {
        let raw = DEVNET_CONFIG.replace("0x10000038", "\"0x1000003800\"");
        assert!(ChainConfig::from_yaml_str(&raw).is_err());
    }
}
