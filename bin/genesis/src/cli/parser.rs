//! Parser functions for CLI arguments.

use alloy_primitives::{Address, B256};
use std::str::FromStr;

/// Parse a string slice into [B256].
pub(crate) fn parse_b256(s: &str) -> Result<B256, String> {
    B256::from_str(s).map_err(|_| format!("Invalid B256 value: {s}"))
}

/// Parse a string slice into an [Address].
pub(crate) fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("Invalid address: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_b256() {
        assert_eq!(parse_b256(&"11".repeat(32)).unwrap(), B256::repeat_byte(0x11));
        assert_eq!(parse_b256(&format!("0x{}", "11".repeat(32))).unwrap(), B256::repeat_byte(0x11));
        assert!(parse_b256("0x1234").is_err());
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("0x4242424242424242424242424242424242424242").unwrap(),
            Address::repeat_byte(0x42)
        );
        assert!(parse_address("0x42").is_err());
    }
}
