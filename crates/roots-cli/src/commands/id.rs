//! Id command implementation.

use roots_core::Event;
use tracing::debug;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_input(input.as_deref())?;
    let event = Event::from_json(&json_str).map_err(|e| format!("Invalid event: {}", e))?;

    let id = roots_canonical::compute_event_id(&event.canonical())?;
    if !event.id.is_empty() && event.id != id {
        debug!(stored = %event.id, computed = %id, "stored id differs from computed id");
    }

    println!("{}", id);
    Ok(())
}
