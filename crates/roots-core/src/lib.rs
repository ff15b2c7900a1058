//! Event model, Schnorr signing and validation for roots.
//!
//! This crate provides:
//! - The seven-field [`Event`] and its wire JSON codec
//! - Event id computation over the canonical serialization
//! - Schnorr signing and key derivation behind [`SchnorrCapability`]
//! - The three-gate [`Validator`] (structure, identity, signature)
//!
//! Core invariants:
//! - An event id is `sha256([0,pubkey,created_at,kind,tags,content])`
//! - Signatures cover the raw 32 id bytes, never the hex text
//! - Validation is pure and synchronous; it never mutates the event
//!
#![deny(missing_docs)]

/// Error types for core operations.
pub mod errors;
/// Event id computation for [`Event`].
pub mod event_id;
/// The event type and its wire codec.
pub mod events;
/// Key generation and derivation.
pub mod keys;
/// Signing capability and the default secp256k1 provider.
pub mod signing;
/// Validation gates.
pub mod verification;

pub use errors::{CryptoError, EventError, HexField};
pub use event_id::compute_event_id;
pub use events::Event;
pub use keys::{generate_private_key, get_public_key};
pub use roots_canonical::Tag;
pub use signing::{default_capability, sign_event, SchnorrCapability, Secp256k1Schnorr};
pub use verification::{
    validate, validate_id, validate_signature, validate_structure, Validator,
};
