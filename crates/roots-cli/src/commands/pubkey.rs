//! Pubkey command implementation.

use roots_core::get_public_key;

pub fn run(private_key: String) -> Result<(), Box<dyn std::error::Error>> {
    let public_key = get_public_key(private_key.trim())?;
    println!("{}", public_key);
    Ok(())
}
