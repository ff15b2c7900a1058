use roots_canonical::EventIdError;
use std::fmt;
use thiserror::Error;

/// Event field whose hex encoding could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexField {
    /// The `id` field.
    Id,
    /// The `sig` field.
    Signature,
    /// The `pubkey` field.
    PublicKey,
}

impl fmt::Display for HexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HexField::Id => "event id",
            HexField::Signature => "event signature",
            HexField::PublicKey => "public key",
        })
    }
}

/// Errors produced while building, signing or validating events.
#[derive(Error, Debug)]
pub enum EventError {
    /// Public key is not 64 lowercase hex characters.
    #[error("public key must be 64 lowercase hex characters")]
    MalformedPublicKey,
    /// Private key is not 64 lowercase hex characters.
    #[error("private key must be 64 lowercase hex characters")]
    MalformedPrivateKey,
    /// Event id is not 64 lowercase hex characters.
    #[error("event id must be 64 hex characters")]
    MalformedId,
    /// Signature is not 128 lowercase hex characters.
    #[error("event signature must be 128 hex characters")]
    MalformedSignature,
    /// A tag has fewer than two elements.
    #[error("tags must contain at least two elements")]
    MalformedTag,
    /// The canonical form could not be hashed.
    #[error("failed to compute event id: {0}")]
    IdentityComputationFailed(#[source] EventIdError),
    /// The id field is empty.
    #[error("event id is empty")]
    EmptyId,
    /// The stored id differs from the recomputed one.
    #[error("event id {stored:?} does not match computed id {computed:?}")]
    IdMismatch {
        /// Id carried by the event.
        stored: String,
        /// Id recomputed from the event fields.
        computed: String,
    },
    /// The signature is well formed but does not verify.
    #[error("event signature is invalid")]
    InvalidSignature,
    /// A hex field could not be decoded.
    #[error("invalid {field} hex: {source}")]
    UndecodableHex {
        /// Which field failed.
        field: HexField,
        /// Decoder error.
        #[source]
        source: hex::FromHexError,
    },
    /// Signature bytes do not form a Schnorr signature.
    #[error("malformed signature: {0}")]
    UnparsableSignature(String),
    /// Public key bytes do not form a curve point.
    #[error("malformed public key: {0}")]
    UnparsablePublicKey(String),
    /// The signing capability failed.
    #[error("schnorr signature error: {0}")]
    Signing(String),
    /// Wire JSON could not be decoded or encoded.
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors at the cryptographic capability boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature bytes cannot be parsed.
    #[error("malformed signature: {0}")]
    Signature(String),
    /// Public key bytes cannot be parsed as an x-only point.
    #[error("malformed public key: {0}")]
    PublicKey(String),
    /// Private key bytes are not a valid scalar.
    #[error("invalid private key: {0}")]
    PrivateKey(String),
}

impl From<CryptoError> for EventError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Signature(msg) => EventError::UnparsableSignature(msg),
            CryptoError::PublicKey(msg) => EventError::UnparsablePublicKey(msg),
            CryptoError::PrivateKey(_) => EventError::MalformedPrivateKey,
        }
    }
}
