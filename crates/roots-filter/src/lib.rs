//! Subscription filters for roots events.
//!
//! This crate provides:
//! - The [`Filter`] model with tri-state time bounds ([`Nullable`])
//! - A wire JSON codec that preserves unknown fields as [`Extensions`]
//! - Event matching, for single filters and for filter sets
//!
//! A filter is a conjunction: every populated predicate must hold. A set of
//! filters is a disjunction, as in a subscription request.
//!
//! ```
//! use roots_filter::Filter;
//!
//! let filter = Filter::from_json(r#"{"kinds":[1],"since":4000}"#).unwrap();
//! assert_eq!(filter.to_json().unwrap(), r#"{"kinds":[1],"since":4000}"#);
//! ```
#![deny(missing_docs)]

/// Wire codec.
pub mod codec;
/// Error types.
pub mod error;
/// Filter model and builder.
pub mod filter;
/// Event matching.
pub mod matcher;
/// Tri-state wire field.
pub mod nullable;

pub use codec::{decode, encode, is_reserved_key, RESERVED_KEYS, TAG_MARKER};
pub use error::FilterError;
pub use filter::{Extensions, Filter, TagFilters};
pub use matcher::{matches_any, EventFilter};
pub use nullable::Nullable;
