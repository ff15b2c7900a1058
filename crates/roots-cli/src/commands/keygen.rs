//! Keygen command implementation.

use roots_core::{generate_private_key, get_public_key};
use serde_json::json;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let private_key = generate_private_key();

    if json_output {
        let public_key = get_public_key(&private_key)?;
        let pair = json!({
            "private_key": private_key,
            "public_key": public_key,
        });
        println!("{}", serde_json::to_string_pretty(&pair)?);
    } else {
        println!("{}", private_key);
    }
    Ok(())
}
