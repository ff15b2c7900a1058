use crate::validation::{is_hex128, is_hex64, ValidationError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a hex string cannot be decoded into a fixed-size buffer.
#[derive(Debug, Error, PartialEq)]
pub enum HexError {
    /// Input had the wrong number of characters for the target buffer.
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required number of hex characters.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
    /// Input contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Hex validity is checked before length, so non-hex input of any length
/// reports `InvalidHex`.
fn decode_fixed<const N: usize>(value: &str) -> Result<[u8; N], HexError> {
    let bytes = hex::decode(value)?;
    bytes.try_into().map_err(|_| HexError::InvalidLength {
        expected: N * 2,
        actual: value.len(),
    })
}

/// Encodes bytes as lowercase hex.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decodes 64 hex characters into 32 bytes.
pub fn decode_hex32(value: &str) -> Result<[u8; 32], HexError> {
    decode_fixed::<32>(value)
}

/// Decodes 128 hex characters into 64 bytes.
pub fn decode_hex64(value: &str) -> Result<[u8; 64], HexError> {
    decode_fixed::<64>(value)
}

macro_rules! hex_newtype {
    ($name:ident, $len:expr, $check:path, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Wraps raw bytes.
            pub fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Parses a lowercase hex string of the exact required length.
            pub fn parse(value: &str) -> Result<Self, ValidationError> {
                let mismatch = || ValidationError::PatternMismatch {
                    field: stringify!($name),
                    value: value.to_string(),
                };
                if !$check(value) {
                    return Err(mismatch());
                }
                decode_fixed::<$len>(value)
                    .map(Self)
                    .map_err(|_| mismatch())
            }

            /// Raw bytes.
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Lowercase hex encoding.
            pub fn to_hex(&self) -> String {
                encode_hex(self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

hex_newtype!(EventId, 32, is_hex64, "SHA-256 event id (64 lowercase hex characters).");
hex_newtype!(
    PublicKey,
    32,
    is_hex64,
    "x-only secp256k1 public key (64 lowercase hex characters)."
);
hex_newtype!(
    SecretKey,
    32,
    is_hex64,
    "secp256k1 private key scalar (64 lowercase hex characters)."
);
hex_newtype!(
    Signature,
    64,
    is_hex128,
    "BIP-340 Schnorr signature (128 lowercase hex characters)."
);
