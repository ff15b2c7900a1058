//! Event validation: structure, identity, then signature.
//!
//! Each gate returns on its first failure and the gates run in a fixed
//! order, so the error reported for a given event is deterministic.

use roots_canonical::{decode_hex32, decode_hex64, is_hex128, is_hex64, HexError};
use tracing::debug;

use crate::errors::{EventError, HexField};
use crate::events::Event;
use crate::signing::{default_capability, SchnorrCapability, Secp256k1Schnorr};

/// Runs the three validation gates with a given signing capability.
#[derive(Debug, Default)]
pub struct Validator<C = Secp256k1Schnorr> {
    capability: C,
}

impl Validator {
    /// Validator backed by the default secp256k1 provider.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: SchnorrCapability> Validator<C> {
    /// Validator backed by `capability`.
    pub fn with_capability(capability: C) -> Self {
        Self { capability }
    }

    /// Full validation: structure, id, signature.
    pub fn validate(&self, event: &Event) -> Result<(), EventError> {
        validate_structure(event)?;
        validate_id(event)?;
        self.validate_signature(event)
    }

    /// Signature gate only.
    pub fn validate_signature(&self, event: &Event) -> Result<(), EventError> {
        validate_signature_with(&self.capability, event)
    }
}

/// Full validation with the default provider.
pub fn validate(event: &Event) -> Result<(), EventError> {
    validate_structure(event)?;
    validate_id(event)?;
    validate_signature(event)
}

/// Checks hex shapes and tag arity.
///
/// Order: pubkey, id, sig, then tags in sequence.
pub fn validate_structure(event: &Event) -> Result<(), EventError> {
    if !is_hex64(&event.pubkey) {
        debug!(pubkey = %event.pubkey, "rejecting event: malformed pubkey");
        return Err(EventError::MalformedPublicKey);
    }
    if !is_hex64(&event.id) {
        debug!(id = %event.id, "rejecting event: malformed id");
        return Err(EventError::MalformedId);
    }
    if !is_hex128(&event.sig) {
        debug!(id = %event.id, "rejecting event: malformed signature");
        return Err(EventError::MalformedSignature);
    }
    if let Some(index) = event.tags.iter().position(|tag| !tag.is_well_formed()) {
        debug!(id = %event.id, index, "rejecting event: malformed tag");
        return Err(EventError::MalformedTag);
    }
    Ok(())
}

/// Recomputes the id and compares it with the stored one.
pub fn validate_id(event: &Event) -> Result<(), EventError> {
    if event.id.is_empty() {
        return Err(EventError::EmptyId);
    }
    let computed = event.compute_id()?;
    if computed != event.id {
        debug!(stored = %event.id, computed = %computed, "rejecting event: id mismatch");
        return Err(EventError::IdMismatch {
            stored: event.id.clone(),
            computed,
        });
    }
    Ok(())
}

/// Verifies the signature with the default provider.
pub fn validate_signature(event: &Event) -> Result<(), EventError> {
    validate_signature_with(default_capability(), event)
}

/// Verifies `sig` over the raw id bytes under `pubkey`.
///
/// All three fields are hex-decoded first. The signature is then parsed,
/// then the public key, and only after both parse does a non-32-byte id
/// count as a signature that does not verify.
pub fn validate_signature_with<C: SchnorrCapability + ?Sized>(
    capability: &C,
    event: &Event,
) -> Result<(), EventError> {
    let id = decode(HexField::Id, &event.id, decode_hex32)?;
    let sig = decode(HexField::Signature, &event.sig, decode_hex64)?;
    let pubkey = decode(HexField::PublicKey, &event.pubkey, decode_hex32)?;

    let sig = sig.ok_or_else(|| {
        EventError::UnparsableSignature(format!(
            "expected 64 bytes, got {}",
            event.sig.len() / 2
        ))
    })?;
    capability.check_signature(&sig)?;

    let pubkey = pubkey.ok_or_else(|| {
        EventError::UnparsablePublicKey(format!(
            "expected 32 bytes, got {}",
            event.pubkey.len() / 2
        ))
    })?;
    capability.check_public_key(&pubkey)?;

    let Some(message) = id else {
        debug!(id = %event.id, "rejecting event: id is not 32 bytes");
        return Err(EventError::InvalidSignature);
    };

    if capability.verify(&message, &sig, &pubkey)? {
        Ok(())
    } else {
        debug!(id = %event.id, "rejecting event: signature does not verify");
        Err(EventError::InvalidSignature)
    }
}

/// Non-hex input is an error; valid hex of the wrong length is `None`.
fn decode<const N: usize>(
    field: HexField,
    value: &str,
    decoder: fn(&str) -> Result<[u8; N], HexError>,
) -> Result<Option<[u8; N]>, EventError> {
    match decoder(value) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(HexError::InvalidLength { .. }) => Ok(None),
        Err(HexError::InvalidHex(source)) => Err(EventError::UndecodableHex { field, source }),
    }
}
