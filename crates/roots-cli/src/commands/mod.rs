//! Subcommand implementations.

pub mod canonicalize;
pub mod id;
pub mod keygen;
pub mod matching;
pub mod pubkey;
pub mod sign;
pub mod verify;
