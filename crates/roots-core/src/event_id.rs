use crate::errors::EventError;
use crate::events::Event;

/// Computes the event id for an event.
///
/// Formula: `sha256([0,pubkey,created_at,kind,tags,content])`, lowercase hex.
/// The stored `id` and `sig` fields are ignored.
pub fn compute_event_id(event: &Event) -> Result<String, EventError> {
    roots_canonical::compute_event_id(&event.canonical())
        .map_err(EventError::IdentityComputationFailed)
}
