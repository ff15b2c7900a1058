//! Filter data model.

use serde::Serialize;
use serde_json::value::RawValue;
use std::collections::BTreeMap;

use crate::nullable::Nullable;

/// Tag predicates keyed by tag name without the `#` marker.
pub type TagFilters = BTreeMap<String, Vec<String>>;

/// Wire fields this implementation does not understand, kept as raw JSON.
///
/// Values are stored verbatim and never parsed, so they re-encode exactly as
/// received.
#[derive(Debug, Clone, Default)]
pub struct Extensions(BTreeMap<String, Box<RawValue>>);

impl Extensions {
    /// Empty extension bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an already-encoded raw value.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Box<RawValue>) {
        self.0.insert(key.into(), value);
    }

    /// Encodes `value` and inserts it.
    pub fn insert<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<(), serde_json::Error> {
        let raw = serde_json::value::to_raw_value(value)?;
        self.0.insert(key.into(), raw);
        Ok(())
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key).map(Box::as_ref)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Box<RawValue>>> for Extensions {
    fn from(map: BTreeMap<String, Box<RawValue>>) -> Self {
        Self(map)
    }
}

impl PartialEq for Extensions {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va.get() == vb.get())
    }
}

impl Eq for Extensions {}

/// Subscription criteria. All populated predicates combine with AND.
///
/// `None` and `Some(vec![])` are kept apart for `ids`, `authors` and `kinds`
/// so the wire form round-trips, but both impose no constraint when
/// matching. `limit` and `extensions` are carried for other components and
/// never consulted by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Event id prefixes.
    pub ids: Option<Vec<String>>,
    /// Author pubkey prefixes.
    pub authors: Option<Vec<String>>,
    /// Exact kinds.
    pub kinds: Option<Vec<i64>>,
    /// Inclusive lower bound on `created_at`.
    pub since: Nullable<i64>,
    /// Inclusive upper bound on `created_at`.
    pub until: Nullable<i64>,
    /// Advisory result cap.
    pub limit: Nullable<i64>,
    /// Tag predicates.
    pub tags: TagFilters,
    /// Unrecognised wire fields.
    pub extensions: Extensions,
}

impl Filter {
    /// Empty filter; matches every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets id prefixes.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets author prefixes.
    pub fn authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    /// Sets kinds.
    pub fn kinds(mut self, kinds: impl IntoIterator<Item = i64>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    /// Sets the lower bound.
    pub fn since(mut self, since: i64) -> Self {
        self.since = Nullable::Value(since);
        self
    }

    /// Sets the upper bound.
    pub fn until(mut self, until: i64) -> Self {
        self.until = Nullable::Value(until);
        self
    }

    /// Sets the advisory limit.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Nullable::Value(limit);
        self
    }

    /// Adds a tag predicate. `name` excludes the `#` marker.
    pub fn tag<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }
}
