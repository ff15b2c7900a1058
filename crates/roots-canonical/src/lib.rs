//! Canonical data primitives for roots events.
//!
//! Everything that participates in hashing lives in this crate: the hex
//! identifiers and their patterns, the [`Tag`] type, the byte-exact canonical
//! serialization `[0, pubkey, created_at, kind, tags, content]`, and the
//! SHA-256 event id derived from it.
//!
#![deny(missing_docs)]

/// Canonical serialization of the identity-bearing event fields.
pub mod canonicalizer;
/// Event id computation and verification.
pub mod event_id;
/// Fixed-length hex identifiers and the hex codec.
pub mod identifiers;
/// Event tags.
pub mod tag;
/// Pattern validation for hex strings.
pub mod validation;

pub use canonicalizer::{serialize, CanonicalEvent, CanonicalizationError, CANONICAL_DISCRIMINANT};
pub use event_id::{compute_event_id, compute_event_id_bytes, verify_event_id, EventIdError};
pub use identifiers::{decode_hex32, decode_hex64, encode_hex, EventId, HexError, PublicKey, SecretKey, Signature};
pub use tag::Tag;
pub use validation::{is_hex128, is_hex64, ValidationError};
