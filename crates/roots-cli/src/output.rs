//! Output formatting utilities.

use roots_core::Event;
use serde_json::{json, Value};

/// Outcome of validating one event.
#[derive(Debug)]
pub struct Verdict {
    /// Stored id, as found in the input.
    pub id: String,
    /// Event kind.
    pub kind: i64,
    /// Validation error message, if the event was rejected.
    pub error: Option<String>,
}

impl Verdict {
    /// Records the outcome for `event`.
    pub fn new(event: &Event, error: Option<String>) -> Self {
        Self {
            id: event.id.clone(),
            kind: event.kind,
            error,
        }
    }

    /// True when the event passed every gate.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// JSON report entry.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "kind": self.kind,
            "valid": self.is_valid(),
            "error": self.error,
        })
    }
}

/// Formats a verdict as a simple table row.
pub fn format_table_row(verdict: &Verdict) -> String {
    let id = if verdict.id.is_empty() { "?" } else { &verdict.id };
    let result = verdict.error.as_deref().unwrap_or("ok");
    format!("{:<64} {:<6} {}", truncate(id, 64), verdict.kind, result)
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<64} {:<6} {}", "EVENT_ID", "KIND", "RESULT");
    println!("{}", "-".repeat(90));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
