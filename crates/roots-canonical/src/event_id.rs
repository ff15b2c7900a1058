//! Event id computation.
//!
//! Event ids are computed as `sha256(canonical_bytes(event))`, hex encoded
//! in lowercase. The id and signature fields never take part in the hash.

use crate::canonicalizer::{serialize, CanonicalEvent};
use sha2::{Digest as Sha2Digest, Sha256};

/// Error during event id computation.
#[derive(thiserror::Error, Debug)]
pub enum EventIdError {
    /// Canonicalization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] crate::CanonicalizationError),
}

/// Computes the raw 32-byte event id.
pub fn compute_event_id_bytes(event: &CanonicalEvent<'_>) -> Result<[u8; 32], EventIdError> {
    let bytes = serialize(event)?;
    Ok(Sha256::digest(&bytes).into())
}

/// Computes the event id as 64 lowercase hex characters.
///
/// # Example
///
/// ```rust
/// use roots_canonical::{compute_event_id, CanonicalEvent};
///
/// let id = compute_event_id(&CanonicalEvent {
///     pubkey: "cfa87f35acbde29ba1ab3ee42de527b2cad33ac487e80cf2d6405ea0042c8fef",
///     created_at: 1760740551,
///     kind: 1,
///     tags: &[],
///     content: "hello world",
/// })?;
/// assert_eq!(id, "c7a702e6158744ca03508bbb4c90f9dbb0d6e88fefbfaa511d5ab24b4e3c48ad");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`EventIdError`] if the fields cannot be serialized.
pub fn compute_event_id(event: &CanonicalEvent<'_>) -> Result<String, EventIdError> {
    Ok(hex::encode(compute_event_id_bytes(event)?))
}

/// Verifies that a claimed id matches the computed id.
///
/// Returns `true` if the claimed id matches, `false` otherwise. Comparison is
/// on the hex text, so an uppercase claim never matches.
pub fn verify_event_id(event: &CanonicalEvent<'_>, claimed_id: &str) -> Result<bool, EventIdError> {
    let computed = compute_event_id(event)?;
    Ok(computed == claimed_id)
}
