/// A wire field that can be absent, explicitly `null`, or carry a value.
///
/// `since`, `until` and `limit` need all three states to round-trip: an
/// absent key and a `null` key are different on the wire even though neither
/// constrains matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The key was never sent.
    Unset,
    /// The key was sent as `null`.
    Cleared,
    /// The key was sent with a value.
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Unset
    }
}

impl<T> Nullable<T> {
    /// The carried value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            Nullable::Unset | Nullable::Cleared => None,
        }
    }

    /// True when the key should be omitted from the wire form.
    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    /// Builds the state for a key that was present on the wire.
    pub fn from_present(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Cleared,
        }
    }

    /// Wire representation of a present key (`None` serializes as `null`).
    pub(crate) fn as_present(&self) -> Option<Option<&T>> {
        match self {
            Nullable::Unset => None,
            Nullable::Cleared => Some(None),
            Nullable::Value(v) => Some(Some(v)),
        }
    }
}

impl<T: Copy> Nullable<T> {
    /// The carried value by copy, if any.
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_value_carries_a_bound() {
        assert_eq!(Nullable::<i64>::Unset.get(), None);
        assert_eq!(Nullable::<i64>::Cleared.get(), None);
        assert_eq!(Nullable::Value(5).get(), Some(5));
    }

    #[test]
    fn present_states_are_distinct() {
        assert_eq!(Nullable::<i64>::from_present(None), Nullable::Cleared);
        assert_eq!(Nullable::from_present(Some(1)), Nullable::Value(1));
        assert!(Nullable::<i64>::default().is_unset());
        assert!(!Nullable::<i64>::Cleared.is_unset());
    }
}
