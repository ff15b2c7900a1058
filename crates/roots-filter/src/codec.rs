//! Wire JSON codec for [`Filter`].
//!
//! Encoding emits structured fields first (`ids`, `authors`, `kinds`,
//! `since`, `until`, `limit`), then one `#<name>` field per tag predicate,
//! then extensions. Extensions whose key is reserved or carries the tag
//! marker are dropped so they can never shadow a real field.
//!
//! Decoding runs three passes over the raw object: structured keys, tag
//! keys, then everything left over into [`Extensions`].

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::error::FilterError;
use crate::filter::{Extensions, Filter};
use crate::nullable::Nullable;

/// Prefix distinguishing tag predicates from other wire keys.
pub const TAG_MARKER: char = '#';

/// Keys owned by the structured fields.
pub const RESERVED_KEYS: [&str; 6] = ["ids", "authors", "kinds", "since", "until", "limit"];

type RawObject = BTreeMap<String, Box<RawValue>>;

/// True when an extension under `key` would collide with a real field.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.contains(&key) || key.starts_with(TAG_MARKER)
}

/// Decodes a filter from wire JSON.
pub fn decode(json: &str) -> Result<Filter, FilterError> {
    let raw: RawObject = serde_json::from_str(json).map_err(FilterError::Decode)?;
    from_raw_object(raw)
}

/// Encodes a filter as compact wire JSON.
pub fn encode(filter: &Filter) -> Result<String, FilterError> {
    serde_json::to_string(filter).map_err(FilterError::Encode)
}

fn from_raw_object(mut raw: RawObject) -> Result<Filter, FilterError> {
    let mut filter = Filter::new();

    // Structured fields. `null` on a list means absent, on a bound `Cleared`.
    filter.ids = take_field::<Option<Vec<String>>>(&mut raw, "ids")?.flatten();
    filter.authors = take_field::<Option<Vec<String>>>(&mut raw, "authors")?.flatten();
    filter.kinds = take_field::<Option<Vec<i64>>>(&mut raw, "kinds")?.flatten();
    filter.since = take_bound(&mut raw, "since")?;
    filter.until = take_bound(&mut raw, "until")?;
    filter.limit = take_bound(&mut raw, "limit")?;

    // Tag fields.
    let tag_keys: Vec<String> = raw
        .keys()
        .filter(|key| key.starts_with(TAG_MARKER))
        .cloned()
        .collect();
    for key in tag_keys {
        let values = take_field::<Option<Vec<String>>>(&mut raw, &key)?.flatten();
        let name = key[TAG_MARKER.len_utf8()..].to_string();
        filter.tags.insert(name, values.unwrap_or_default());
    }

    // Remainder.
    filter.extensions = Extensions::from(raw);

    trace!(
        tags = filter.tags.len(),
        extensions = filter.extensions.len(),
        "decoded filter"
    );
    Ok(filter)
}

fn take_field<T: DeserializeOwned>(
    raw: &mut RawObject,
    key: &str,
) -> Result<Option<T>, FilterError> {
    raw.remove(key)
        .map(|value| {
            serde_json::from_str(value.get()).map_err(|source| FilterError::Field {
                field: key.to_string(),
                source,
            })
        })
        .transpose()
}

fn take_bound(raw: &mut RawObject, key: &str) -> Result<Nullable<i64>, FilterError> {
    Ok(take_field::<Option<i64>>(raw, key)?
        .map(Nullable::from_present)
        .unwrap_or_default())
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;

        if let Some(ids) = &self.ids {
            map.serialize_entry("ids", ids)?;
        }
        if let Some(authors) = &self.authors {
            map.serialize_entry("authors", authors)?;
        }
        if let Some(kinds) = &self.kinds {
            map.serialize_entry("kinds", kinds)?;
        }
        let bounds = [("since", &self.since), ("until", &self.until), ("limit", &self.limit)];
        for (key, bound) in bounds {
            if let Some(value) = bound.as_present() {
                map.serialize_entry(key, &value)?;
            }
        }

        for (name, values) in &self.tags {
            map.serialize_entry(&format!("{TAG_MARKER}{name}"), values)?;
        }

        for (key, value) in self.extensions.iter() {
            if is_reserved_key(key) {
                debug!(key, "dropping extension that collides with a filter field");
                continue;
            }
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Filter {
    /// Only JSON deserializers are supported; extensions are captured as
    /// [`RawValue`].
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawObject::deserialize(deserializer)?;
        from_raw_object(raw).map_err(D::Error::custom)
    }
}

impl Filter {
    /// Decodes a filter from wire JSON. See [`decode`].
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        decode(json)
    }

    /// Encodes this filter as wire JSON. See [`encode`].
    pub fn to_json(&self) -> Result<String, FilterError> {
        encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys_and_tag_marker_collide() {
        for key in RESERVED_KEYS {
            assert!(is_reserved_key(key));
        }
        assert!(is_reserved_key("#e"));
        assert!(is_reserved_key("#"));
        assert!(!is_reserved_key("search"));
        assert!(!is_reserved_key("e#"));
    }

    #[test]
    fn non_object_input_is_rejected() {
        for input in ["[]", "null", "1", "\"ids\"", "{", ""] {
            assert!(
                matches!(decode(input), Err(FilterError::Decode(_))),
                "{input:?} should not decode"
            );
        }
    }

    #[test]
    fn field_type_errors_name_the_key() {
        let cases = [
            (r#"{"ids":"abc"}"#, "ids"),
            (r#"{"kinds":["1"]}"#, "kinds"),
            (r#"{"since":"yesterday"}"#, "since"),
            (r#"{"limit":1.5}"#, "limit"),
            (r##"{"#e":"x"}"##, "#e"),
            (r##"{"#p":[1]}"##, "#p"),
        ];
        for (input, expected) in cases {
            match decode(input) {
                Err(FilterError::Field { field, .. }) => assert_eq!(field, expected),
                other => panic!("{input}: expected field error, got {other:?}"),
            }
        }
    }

    #[test]
    fn bounds_keep_three_states() {
        let filter = decode(r#"{"since":null,"until":5}"#).unwrap();
        assert_eq!(filter.since, Nullable::Cleared);
        assert_eq!(filter.until, Nullable::Value(5));
        assert_eq!(filter.limit, Nullable::Unset);
        assert_eq!(encode(&filter).unwrap(), r#"{"since":null,"until":5}"#);
    }

    #[test]
    fn serde_path_matches_codec() {
        let filters: Vec<Filter> =
            serde_json::from_str(r##"[{"kinds":[1]},{"#t":["x"],"search":"y"}]"##).unwrap();
        assert_eq!(filters[0], Filter::new().kinds([1]));
        assert_eq!(filters[1].tags["t"], vec!["x".to_string()]);
        assert_eq!(filters[1].extensions.get("search").unwrap().get(), r#""y""#);
    }
}
