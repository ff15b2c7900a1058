use crate::tag::Tag;

/// Leading element of every canonical array; fixes the serialization version.
pub const CANONICAL_DISCRIMINANT: u8 = 0;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The fields could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Borrowed view over the identity-bearing fields of an event.
///
/// `id` and `sig` are deliberately absent: the id is derived from these
/// fields and the signature is derived from the id.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalEvent<'a> {
    /// Author public key, hex.
    pub pubkey: &'a str,
    /// Creation time in seconds.
    pub created_at: i64,
    /// Event kind.
    pub kind: i64,
    /// Tags in their original order.
    pub tags: &'a [Tag],
    /// Content body.
    pub content: &'a str,
}

impl CanonicalEvent<'_> {
    /// Canonical bytes for this view. See [`serialize`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, CanonicalizationError> {
        serialize(self)
    }
}

/// Produces the canonical bytes `[0,pubkey,created_at,kind,tags,content]`.
///
/// The output is compact JSON: no whitespace, integers in plain decimal,
/// strings escaped only where JSON requires it (quote, backslash, control
/// characters) and non-ASCII written as raw UTF-8. These bytes are hashed
/// as-is, so any re-encoding yields a different id.
///
/// # Example
///
/// ```rust
/// use roots_canonical::{serialize, CanonicalEvent};
///
/// let bytes = serialize(&CanonicalEvent {
///     pubkey: "ab",
///     created_at: 1,
///     kind: 1,
///     tags: &[],
///     content: "hi",
/// })?;
/// assert_eq!(bytes, br#"[0,"ab",1,1,[],"hi"]"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn serialize(event: &CanonicalEvent<'_>) -> Result<Vec<u8>, CanonicalizationError> {
    let bytes = serde_json::to_vec(&(
        CANONICAL_DISCRIMINANT,
        event.pubkey,
        event.created_at,
        event.kind,
        event.tags,
        event.content,
    ))?;
    Ok(bytes)
}
