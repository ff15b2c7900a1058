//! Event matching for filters.

use roots_core::{Event, Tag};
use std::collections::{HashMap, HashSet};

use crate::filter::{Filter, TagFilters};

/// Trait for deciding whether an event satisfies subscription criteria.
pub trait EventFilter {
    /// Returns true if the event matches the filter criteria.
    fn matches(&self, event: &Event) -> bool;
}

impl EventFilter for Filter {
    fn matches(&self, event: &Event) -> bool {
        Filter::matches(self, event)
    }
}

/// A subscription with several filters matches when any one of them does.
impl EventFilter for [Filter] {
    fn matches(&self, event: &Event) -> bool {
        matches_any(self, event)
    }
}

impl Filter {
    /// Returns true when `event` satisfies every populated predicate.
    ///
    /// `limit` and extensions are ignored.
    pub fn matches(&self, event: &Event) -> bool {
        matches_prefix(&event.id, self.ids.as_deref())
            && matches_prefix(&event.pubkey, self.authors.as_deref())
            && matches_kind(event.kind, self.kinds.as_deref())
            && matches_time_range(event.created_at, self.since.get(), self.until.get())
            && matches_tags(&event.tags, &self.tags)
    }
}

/// True when any filter in `filters` matches `event`.
pub fn matches_any(filters: &[Filter], event: &Event) -> bool {
    filters.iter().any(|filter| filter.matches(event))
}

fn matches_prefix(candidate: &str, prefixes: Option<&[String]>) -> bool {
    match prefixes {
        None | Some([]) => true,
        Some(prefixes) => prefixes
            .iter()
            .any(|prefix| candidate.starts_with(prefix.as_str())),
    }
}

fn matches_kind(kind: i64, kinds: Option<&[i64]>) -> bool {
    match kinds {
        None | Some([]) => true,
        Some(kinds) => kinds.contains(&kind),
    }
}

fn matches_time_range(created_at: i64, since: Option<i64>, until: Option<i64>) -> bool {
    if let Some(since) = since {
        if created_at < since {
            return false;
        }
    }
    if let Some(until) = until {
        if created_at > until {
            return false;
        }
    }
    true
}

fn matches_tags(tags: &[Tag], filters: &TagFilters) -> bool {
    if filters.values().all(Vec::is_empty) {
        return true;
    }

    let index = index_tags(tags);
    filters.iter().all(|(name, wanted)| {
        // An empty value set places no constraint on this tag name.
        wanted.is_empty()
            || index
                .get(name.as_str())
                .is_some_and(|values| wanted.iter().any(|v| values.contains(v.as_str())))
    })
}

/// Tag name to the set of first values. Tags shorter than two elements are
/// skipped.
fn index_tags(tags: &[Tag]) -> HashMap<&str, HashSet<&str>> {
    let mut index: HashMap<&str, HashSet<&str>> = HashMap::new();
    for tag in tags {
        if let [name, value, ..] = tag.0.as_slice() {
            index.entry(name.as_str()).or_default().insert(value.as_str());
        }
    }
    index
}
