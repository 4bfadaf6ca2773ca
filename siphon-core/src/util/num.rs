use crate::error::{Result, SiphonError};

/// Parse a byte offset, decimal or `0x`-prefixed hex.
pub fn parse_byte_offset(s: &str) -> Result<u64> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|_| SiphonError::Config(format!("invalid byte offset: {s:?}")))
}
