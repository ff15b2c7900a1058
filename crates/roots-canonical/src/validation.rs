use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern for ids and keys: 64 lowercase hex characters.
pub const HEX64_PATTERN: &str = r"^[a-f0-9]{64}$";

/// Pattern for signatures: 128 lowercase hex characters.
pub const HEX128_PATTERN: &str = r"^[a-f0-9]{128}$";

static HEX64: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEX64_PATTERN).expect("invalid regex"));
static HEX128: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX128_PATTERN).expect("invalid regex"));

/// Validation errors for canonical primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Returns true if `value` is exactly 64 lowercase hex characters.
pub fn is_hex64(value: &str) -> bool {
    HEX64.is_match(value)
}

/// Returns true if `value` is exactly 128 lowercase hex characters.
pub fn is_hex128(value: &str) -> bool {
    HEX128.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex64_accepts_lowercase_only() {
        assert!(is_hex64(&"a".repeat(64)));
        assert!(is_hex64(&"0123456789abcdef".repeat(4)));
        assert!(!is_hex64(&"A".repeat(64)));
        assert!(!is_hex64(&"a".repeat(63)));
        assert!(!is_hex64(&"a".repeat(65)));
        assert!(!is_hex64(&"g".repeat(64)));
        assert!(!is_hex64(""));
    }

    #[test]
    fn hex128_rejects_hex64() {
        assert!(is_hex128(&"f".repeat(128)));
        assert!(!is_hex128(&"f".repeat(64)));
        assert!(!is_hex128(&format!("{} ", "f".repeat(127))));
    }
}
