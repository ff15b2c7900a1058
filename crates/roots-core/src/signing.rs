//! Schnorr signing behind a narrow capability interface.
//!
//! The core never touches curve arithmetic directly. Everything goes through
//! [`SchnorrCapability`], and [`Secp256k1Schnorr`] is the default provider
//! backed by the `secp256k1` crate (BIP-340).

use crate::errors::{CryptoError, EventError};
use roots_canonical::{EventId, SecretKey, Signature};
use secp256k1::{constants, schnorr, All, Keypair, Message, Secp256k1, XOnlyPublicKey};
use std::sync::LazyLock;

/// Sign/verify/derive over secp256k1 Schnorr.
///
/// Implementations must be re-entrant and free of observable side effects so
/// that validation can run concurrently from any number of threads.
pub trait SchnorrCapability: Send + Sync {
    /// Signs a 32-byte message with a 32-byte private key.
    fn sign(&self, message: &[u8; 32], private_key: &[u8; 32]) -> Result<[u8; 64], CryptoError>;

    /// Verifies a signature against a message and an x-only public key.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not verify
    /// and `Err` when the signature or key cannot be parsed.
    fn verify(
        &self,
        message: &[u8; 32],
        signature: &[u8; 64],
        public_key: &[u8; 32],
    ) -> Result<bool, CryptoError>;

    /// Checks that 64 bytes form a parsable Schnorr signature.
    ///
    /// Lets callers report an unparsable signature before the public key is
    /// looked at. The default accepts everything and leaves it to `verify`.
    fn check_signature(&self, _signature: &[u8; 64]) -> Result<(), CryptoError> {
        Ok(())
    }

    /// Checks that 32 bytes form an x-only public key on the curve.
    fn check_public_key(&self, _public_key: &[u8; 32]) -> Result<(), CryptoError> {
        Ok(())
    }

    /// Derives the x-only public key (compressed point without its parity byte).
    fn derive_public_key(&self, private_key: &[u8; 32]) -> Result<[u8; 32], CryptoError>;

    /// Generates a fresh private key from a cryptographically secure RNG.
    fn generate_private_key(&self) -> [u8; 32];
}

/// Default provider using `libsecp256k1` through the `secp256k1` crate.
pub struct Secp256k1Schnorr {
    secp: Secp256k1<All>,
}

impl Secp256k1Schnorr {
    /// Creates a provider with its own signing/verification context.
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }
}

impl Default for Secp256k1Schnorr {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Secp256k1Schnorr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secp256k1Schnorr")
    }
}

static DEFAULT_CAPABILITY: LazyLock<Secp256k1Schnorr> = LazyLock::new(Secp256k1Schnorr::new);

/// Shared default provider.
pub fn default_capability() -> &'static Secp256k1Schnorr {
    &DEFAULT_CAPABILITY
}

/// BIP-340 range checks: `r` must be a field element and `s` a scalar.
fn parse_signature(signature: &[u8; 64]) -> Result<schnorr::Signature, CryptoError> {
    if signature[..32] >= constants::FIELD_SIZE[..] {
        return Err(CryptoError::Signature("r is not a field element".into()));
    }
    if signature[32..] >= constants::CURVE_ORDER[..] {
        return Err(CryptoError::Signature("s is not below the curve order".into()));
    }
    schnorr::Signature::from_slice(signature).map_err(|e| CryptoError::Signature(e.to_string()))
}

fn parse_public_key(public_key: &[u8; 32]) -> Result<XOnlyPublicKey, CryptoError> {
    XOnlyPublicKey::from_slice(public_key).map_err(|e| CryptoError::PublicKey(e.to_string()))
}

impl SchnorrCapability for Secp256k1Schnorr {
    fn sign(&self, message: &[u8; 32], private_key: &[u8; 32]) -> Result<[u8; 64], CryptoError> {
        let keypair = Keypair::from_seckey_slice(&self.secp, private_key)
            .map_err(|e| CryptoError::PrivateKey(e.to_string()))?;
        let msg = Message::from_digest(*message);
        let sig = self.secp.sign_schnorr_no_aux_rand(&msg, &keypair);
        Ok(sig.serialize())
    }

    fn verify(
        &self,
        message: &[u8; 32],
        signature: &[u8; 64],
        public_key: &[u8; 32],
    ) -> Result<bool, CryptoError> {
        let sig = parse_signature(signature)?;
        let pk = parse_public_key(public_key)?;
        let msg = Message::from_digest(*message);
        Ok(self.secp.verify_schnorr(&sig, &msg, &pk).is_ok())
    }

    fn check_signature(&self, signature: &[u8; 64]) -> Result<(), CryptoError> {
        parse_signature(signature).map(|_| ())
    }

    fn check_public_key(&self, public_key: &[u8; 32]) -> Result<(), CryptoError> {
        parse_public_key(public_key).map(|_| ())
    }

    fn derive_public_key(&self, private_key: &[u8; 32]) -> Result<[u8; 32], CryptoError> {
        let sk = secp256k1::SecretKey::from_slice(private_key)
            .map_err(|e| CryptoError::PrivateKey(e.to_string()))?;
        let (xonly, _parity) = sk.x_only_public_key(&self.secp);
        Ok(xonly.serialize())
    }

    fn generate_private_key(&self) -> [u8; 32] {
        secp256k1::SecretKey::new(&mut rand::thread_rng()).secret_bytes()
    }
}

/// Signs a hex event id with a hex private key using the default provider.
///
/// Returns the signature as 128 lowercase hex characters.
pub fn sign_event(event_id: &str, private_key: &str) -> Result<String, EventError> {
    sign_event_with(default_capability(), event_id, private_key)
}

/// Signs a hex event id with a hex private key using `capability`.
///
/// The signature covers the raw 32 id bytes, not the hex text.
pub fn sign_event_with<C: SchnorrCapability + ?Sized>(
    capability: &C,
    event_id: &str,
    private_key: &str,
) -> Result<String, EventError> {
    let id = EventId::parse(event_id).map_err(|_| EventError::MalformedId)?;
    let sk = SecretKey::parse(private_key).map_err(|_| EventError::MalformedPrivateKey)?;
    let sig = capability
        .sign(id.as_bytes(), sk.as_bytes())
        .map_err(|e| match e {
            CryptoError::PrivateKey(_) => EventError::MalformedPrivateKey,
            other => EventError::Signing(other.to_string()),
        })?;
    Ok(Signature::from_bytes(sig).to_hex())
}
