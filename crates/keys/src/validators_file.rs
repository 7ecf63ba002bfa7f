//! Explicit validator lists: `pubkey:withdrawal_credentials[:balance]`, one per line.

use crate::{KeyError, KeyResult};
use alloy_primitives::{hex, B256};
use genesis_primitives::{BlsPublicKey, ValidatorRecord, WithdrawalCredentials};
use std::path::Path;

/// A validator read from an explicit list, with the line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedValidator {
    /// 1-based line number.
    pub line: usize,
    /// The validator.
    pub record: ValidatorRecord,
}

/// Reads and parses the validator list at `path`.
pub fn load_validators_list(path: &Path) -> KeyResult<Vec<ListedValidator>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| KeyError::Io { path: path.to_path_buf(), source })?;
    parse_validators_list(&raw)
}

/// Parses a validator list. Blank lines and `#` comments are skipped.
pub fn parse_validators_list(raw: &str) -> KeyResult<Vec<ListedValidator>> {
    raw.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, entry)| {
            parse_entry(entry)
                .map(|record| ListedValidator { line, record })
                .map_err(|reason| KeyError::InvalidListEntry { line, reason })
        })
        .collect()
}

fn parse_entry(entry: &str) -> Result<ValidatorRecord, String> {
    let mut fields = entry.split(':').map(str::trim);
    let pubkey = fields.next().unwrap_or_default();
    let credentials = fields.next().ok_or("missing withdrawal credentials")?;
    let balance = fields.next();
    if fields.next().is_some() {
        return Err("too many fields".to_string());
    }

    let pubkey = hex::decode(pubkey).map_err(|e| format!("invalid pubkey hex: {e}"))?;
    let pubkey = BlsPublicKey::try_from(pubkey.as_slice())
        .map_err(|_| format!("pubkey must be 48 bytes, got {}", pubkey.len()))?;

    let credentials =
        hex::decode(credentials).map_err(|e| format!("invalid withdrawal credentials hex: {e}"))?;
    let credentials = B256::try_from(credentials.as_slice())
        .map_err(|_| format!("withdrawal credentials must be 32 bytes, got {}", credentials.len()))?;
    if !WithdrawalCredentials(credentials).is_well_formed() {
        return Err(format!(
            "unsupported withdrawal credentials 0x{:02x}.. (expected a 0x00 credential, or 0x01 \
             with 11 zero bytes of padding)",
            credentials[0]
        ));
    }

    let mut record = ValidatorRecord::new(pubkey, credentials);
    if let Some(balance) = balance {
        record.balance = balance.parse().map_err(|e| format!("invalid balance {balance:?}: {e}"))?;
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_primitives::constants::MAX_EFFECTIVE_BALANCE;
    use std::io::Write;

    fn pubkey(byte: u8) -> String {
        hex::encode_prefixed([byte; 48])
    }

    fn eth1_credentials() -> String {
        format!("01{}{}", "00".repeat(11), "42".repeat(20))
    }

    #[test]
    fn test_parse_list() {
        let raw = format!(
            "# genesis validators\n\n{}:{}\n{}:0x{}:64000000000\n",
            pubkey(1),
            "00".repeat(32),
            pubkey(2).trim_start_matches("0x"),
            eth1_credentials(),
        );
        let listed = parse_validators_list(&raw).unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].line, 3);
        assert_eq!(listed[0].record.pubkey, BlsPublicKey::repeat_byte(1));
        assert_eq!(listed[0].record.balance, MAX_EFFECTIVE_BALANCE);
        assert_eq!(listed[1].line, 4);
        assert_eq!(listed[1].record.balance, 64_000_000_000);
        assert_eq!(listed[1].record.withdrawal_credentials[0], 0x01);
    }

    #[test]
    fn test_errors_cite_line() {
        let good = format!("{}:{}", pubkey(1), "00".repeat(32));
        let cases = [
            format!("{}:{}", "ab".repeat(47), "00".repeat(32)),
            format!("{}:{}", pubkey(1), "00".repeat(31)),
            format!("{}:02{}", pubkey(1), "00".repeat(31)),
            format!("{}:01{}", pubkey(1), "11".repeat(31)),
            format!("{}:{}:lots", pubkey(1), "00".repeat(32)),
            format!("{}:{}:1:2", pubkey(1), "00".repeat(32)),
            format!("zz:{}", "00".repeat(32)),
            pubkey(1),
        ];
        for case in cases {
            let raw = format!("# header\n{good}\n{case}\n");
            let err = parse_validators_list(&raw).unwrap_err();
            assert!(matches!(err, KeyError::InvalidListEntry { line: 3, .. }), "{case}: {err}");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_validators_list(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, KeyError::Io { .. }));
    }

    #[test]
    fn test_load_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}:{}", pubkey(9), eth1_credentials()).unwrap();
        let listed = load_validators_list(file.path()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.pubkey, BlsPublicKey::repeat_byte(9));
    }
}
