//! Match command implementation.

use roots_core::Event;
use roots_filter::{EventFilter, Filter};
use tracing::debug;

use crate::input::{parse_one_or_many, read_input};

pub fn run(filter: String, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = read_input(Some(filter.as_str()))?;
    let filters: Vec<Filter> =
        parse_one_or_many(&filter_str).map_err(|e| format!("Invalid filter: {}", e))?;

    let json_str = read_input(input.as_deref())?;
    let events: Vec<Event> =
        parse_one_or_many(&json_str).map_err(|e| format!("Invalid event: {}", e))?;

    let mut matched = 0usize;
    for event in events.iter().filter(|event| filters.as_slice().matches(event)) {
        println!("{}", event.to_json()?);
        matched += 1;
    }
    debug!(filters = filters.len(), events = events.len(), matched, "match complete");

    Ok(())
}
