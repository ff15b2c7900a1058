//! Private key generation and public key derivation.

use crate::errors::EventError;
use crate::signing::{default_capability, SchnorrCapability};
use roots_canonical::{PublicKey, SecretKey};

/// Generates a new random private key as 64 lowercase hex characters.
pub fn generate_private_key() -> String {
    SecretKey::from_bytes(default_capability().generate_private_key()).to_hex()
}

/// Derives the x-only public key for a hex private key.
///
/// Returns the 32-byte x coordinate as 64 lowercase hex characters.
pub fn get_public_key(private_key: &str) -> Result<String, EventError> {
    get_public_key_with(default_capability(), private_key)
}

/// Same as [`get_public_key`] with an explicit capability.
pub fn get_public_key_with<C: SchnorrCapability + ?Sized>(
    capability: &C,
    private_key: &str,
) -> Result<String, EventError> {
    let sk = SecretKey::parse(private_key).map_err(|_| EventError::MalformedPrivateKey)?;
    let pk = capability.derive_public_key(sk.as_bytes())?;
    Ok(PublicKey::from_bytes(pk).to_hex())
}
