use roots_canonical::{CanonicalEvent, Tag};
use serde::{Deserialize, Serialize};

use crate::errors::EventError;
use crate::event_id::compute_event_id;
use crate::signing::{default_capability, sign_event_with, SchnorrCapability};

/// A protocol event with its seven wire fields.
///
/// Fields are kept as plain strings so that malformed wire input stays
/// representable and can be rejected with a precise validation error.
///
/// ```json
/// {
///   "id": "c7a702e6...48ad",
///   "pubkey": "cfa87f35...8fef",
///   "created_at": 1760740551,
///   "kind": 1,
///   "tags": [["e", "..."], ["p", "..."]],
///   "content": "hello world",
///   "sig": "83b71e15...071a"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// 32-byte lowercase hex SHA-256 of the canonical serialization.
    #[serde(default)]
    pub id: String,
    /// 32-byte lowercase hex x-only public key of the author.
    pub pubkey: String,
    /// Unix timestamp in seconds.
    pub created_at: i64,
    /// Event kind.
    pub kind: i64,
    /// Tags, in order.
    pub tags: Vec<Tag>,
    /// Arbitrary content.
    pub content: String,
    /// 64-byte lowercase hex Schnorr signature over the id bytes.
    #[serde(default)]
    pub sig: String,
}

impl Event {
    /// Creates an unsigned event; `id` and `sig` are left empty.
    pub fn new(
        pubkey: impl Into<String>,
        created_at: i64,
        kind: i64,
        tags: Vec<Tag>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            pubkey: pubkey.into(),
            created_at,
            kind,
            tags,
            content: content.into(),
            sig: String::new(),
        }
    }

    /// Borrowed view of the identity-bearing fields.
    pub fn canonical(&self) -> CanonicalEvent<'_> {
        CanonicalEvent {
            pubkey: &self.pubkey,
            created_at: self.created_at,
            kind: self.kind,
            tags: &self.tags,
            content: &self.content,
        }
    }

    /// Canonical bytes used for hashing.
    pub fn serialize(&self) -> Result<Vec<u8>, EventError> {
        self.canonical()
            .to_bytes()
            .map_err(|e| EventError::IdentityComputationFailed(e.into()))
    }

    /// Recomputes the id from the current fields.
    pub fn compute_id(&self) -> Result<String, EventError> {
        compute_event_id(self)
    }

    /// Decodes wire JSON. Key order is irrelevant; `id`/`sig` may be absent.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes compact wire JSON with all seven fields.
    pub fn to_json(&self) -> Result<String, EventError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Consumes an unsigned event and returns it signed by `private_key`.
    ///
    /// The pubkey is replaced by the one derived from the key, then the id is
    /// computed and signed.
    pub fn finalize(self, private_key: &str) -> Result<Event, EventError> {
        self.finalize_with(default_capability(), private_key)
    }

    /// Same as [`Event::finalize`] with an explicit capability.
    pub fn finalize_with<C: SchnorrCapability + ?Sized>(
        self,
        capability: &C,
        private_key: &str,
    ) -> Result<Event, EventError> {
        let pubkey = crate::keys::get_public_key_with(capability, private_key)?;
        let mut event = Event {
            pubkey,
            id: String::new(),
            sig: String::new(),
            ..self
        };
        event.id = event.compute_id()?;
        event.sig = sign_event_with(capability, &event.id, private_key)?;
        Ok(event)
    }
}
