//! Canonicalize command implementation.

use roots_core::Event;

use crate::input::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_input(input.as_deref())?;
    let event = Event::from_json(&json_str).map_err(|e| format!("Invalid event: {}", e))?;

    let bytes = roots_canonical::serialize(&event.canonical())
        .map_err(|e| format!("Canonicalization failed: {}", e))?;

    println!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}
