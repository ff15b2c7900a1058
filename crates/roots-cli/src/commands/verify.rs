//! Verify command implementation.

use roots_core::{Event, Validator};
use tracing::debug;

use crate::input::{parse_one_or_many, read_input};
use crate::output::{format_table_row, print_table_header, Verdict};

pub fn run(
    input: Option<String>,
    strict: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_str = read_input(input.as_deref())?;
    let events: Vec<Event> =
        parse_one_or_many(&json_str).map_err(|e| format!("Invalid event: {}", e))?;

    let validator = Validator::new();
    let results: Vec<Verdict> = events
        .iter()
        .map(|event| {
            let error = validator.validate(event).err().map(|e| e.to_string());
            if let Some(ref reason) = error {
                debug!(id = %event.id, %reason, "event rejected");
            }
            Verdict::new(event, error)
        })
        .collect();
    let all_ok = results.iter().all(Verdict::is_valid);

    if json_output {
        let json_results: Vec<_> = results.iter().map(Verdict::to_json).collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else {
        print_table_header();
        for verdict in &results {
            println!("{}", format_table_row(verdict));
        }
    }

    if strict && !all_ok {
        std::process::exit(1);
    }

    Ok(())
}
