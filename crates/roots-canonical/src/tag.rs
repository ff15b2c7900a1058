use serde::{Deserialize, Serialize};

/// A single event tag: `[name, value, ...metadata]`.
///
/// Element order inside a tag is significant and is hashed verbatim. A tag is
/// structurally valid only when it carries at least a name and a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Minimum number of elements for a structurally valid tag.
    pub const MIN_LEN: usize = 2;

    /// Builds a tag from anything yielding strings.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(items.into_iter().map(Into::into).collect())
    }

    /// Tag name (element 0), if present.
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Primary value (element 1), if present.
    pub fn value(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    /// True when the tag has both a name and a value.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() >= Self::MIN_LEN
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the tag has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Tag {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl AsRef<[String]> for Tag {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_array() {
        let tag = Tag::new(["e", "abc", "wss://relay"]);
        assert_eq!(
            serde_json::to_string(&tag).unwrap(),
            r#"["e","abc","wss://relay"]"#
        );
    }

    #[test]
    fn single_element_tag_is_not_well_formed() {
        let tag = Tag::new(["e"]);
        assert!(!tag.is_well_formed());
        assert_eq!(tag.name(), Some("e"));
        assert_eq!(tag.value(), None);
        assert!(!Tag(Vec::new()).is_well_formed());
    }
}
