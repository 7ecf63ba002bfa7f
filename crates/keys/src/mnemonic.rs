//! Mnemonic seed sources.

use crate::{KeyError, KeyResult};
use alloy_signer_local::coins_bip39::{English, Mnemonic};
use serde::Deserialize;
use std::path::Path;

/// One entry of a seed source file: derive `count` validators from `mnemonic`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedSource {
    /// BIP-39 mnemonic phrase.
    pub mnemonic: String,
    /// Number of validators to derive, starting at index 0.
    pub count: u64,
}

/// Reads a YAML list of [SeedSource]s.
pub fn load_seed_sources(path: &Path) -> KeyResult<Vec<SeedSource>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| KeyError::Io { path: path.to_path_buf(), source })?;
    serde_yaml_ng::from_str(&raw)
        .map_err(|source| KeyError::SeedSources { path: path.to_path_buf(), source })
}

/// Validates `phrase` and stretches it into a 64-byte BIP-39 seed with an empty passphrase.
///
/// Words are rejoined with single spaces before stretching, so runs of whitespace inside the
/// phrase do not change the seed. Tools that only trim the ends of the phrase stretch the raw
/// string instead and derive different keys for such a phrase.
///
/// `source_index` only labels the error.
pub fn seed_from_mnemonic(phrase: &str, source_index: usize) -> KeyResult<[u8; 64]> {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let invalid = |reason: String| KeyError::InvalidMnemonic { source_index, reason };

    let mnemonic =
        Mnemonic::<English>::new_from_phrase(&normalized).map_err(|e| invalid(e.to_string()))?;
    mnemonic.to_seed(None).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use std::io::Write;

    const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_seed_from_mnemonic() {
        let seed = seed_from_mnemonic(ABANDON, 0).unwrap();
        assert_eq!(
            hex::encode(seed),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_ignores_surrounding_whitespace() {
        let padded = format!("  \n{ABANDON}\t\n");
        assert_eq!(seed_from_mnemonic(&padded, 0).unwrap(), seed_from_mnemonic(ABANDON, 0).unwrap());
    }

    #[test]
    fn test_seed_collapses_inner_whitespace() {
        let spaced = ABANDON.replacen(' ', "  \t", 3);
        assert_eq!(seed_from_mnemonic(&spaced, 0).unwrap(), seed_from_mnemonic(ABANDON, 0).unwrap());
    }

    #[test]
    fn test_bad_checksum_names_source() {
        let phrase = ABANDON.replace("about", "abandon");
        let err = seed_from_mnemonic(&phrase, 3).unwrap_err();
        assert!(matches!(err, KeyError::InvalidMnemonic { source_index: 3, .. }));
    }

    #[test]
    fn test_load_seed_sources() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- mnemonic: \"{ABANDON}\"\n  count: 4\n- mnemonic: other words\n  count: 0")
            .unwrap();

        let sources = load_seed_sources(file.path()).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], SeedSource { mnemonic: ABANDON.to_string(), count: 4 });
        assert_eq!(sources[1].count, 0);
    }

    #[test]
    fn test_load_seed_sources_rejects_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mnemonic: not-a-list").unwrap();
        assert!(matches!(load_seed_sources(file.path()), Err(KeyError::SeedSources { .. })));
    }
}
