//! Sign command implementation.

use roots_core::Event;
use tracing::debug;

use crate::input::read_input;

pub fn run(key: String, input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_input(input.as_deref())?;
    let template = Event::from_json(&json_str).map_err(|e| format!("Invalid event: {}", e))?;

    let event = template.finalize(key.trim())?;
    debug!(id = %event.id, pubkey = %event.pubkey, "signed event");

    println!("{}", event.to_json()?);
    Ok(())
}
