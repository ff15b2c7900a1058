//! Roots CLI - event ids, signing, verification and filter matching.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;

use commands::{canonicalize, id, keygen, matching, pubkey, sign, verify};

#[derive(Parser)]
#[command(name = "roots")]
#[command(about = "Roots event identity, signing, verification and filtering CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show canonical bytes for an event
    Canonicalize {
        /// Input event JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Compute the id of an event
    Id {
        /// Input event JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Generate a new private key
    Keygen {
        /// Output the key pair as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive the public key for a private key
    Pubkey {
        /// Private key as 64 lowercase hex characters
        private_key: String,
    },
    /// Sign an event template and print the finalized event
    Sign {
        /// Private key as 64 lowercase hex characters
        #[arg(long)]
        key: String,
        /// Input event JSON file (or stdin if not provided)
        input: Option<String>,
    },
    /// Validate one event or a JSON array of events
    Verify {
        /// Input event JSON file (or stdin if not provided)
        input: Option<String>,
        /// Exit with error code if any verification fails
        #[arg(long)]
        strict: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the events matching a filter, one per line
    Match {
        /// Filter JSON file holding one filter or an array of filters
        #[arg(long)]
        filter: String,
        /// Input event JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn init_tracing() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Canonicalize { input } => canonicalize::run(input),
        Commands::Id { input } => id::run(input),
        Commands::Keygen { json } => keygen::run(json),
        Commands::Pubkey { private_key } => pubkey::run(private_key),
        Commands::Sign { key, input } => sign::run(key, input),
        Commands::Verify {
            input,
            strict,
            json,
        } => verify::run(input, strict, json),
        Commands::Match { filter, input } => matching::run(filter, input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
