//! Teaching Bank CLI
//!
//! Menu-driven shell over the in-memory bank core.
//!
//! # Usage
//!
//! ```bash
//! cargo run                  # interactive session on stdin
//! cargo run -- session.txt   # replay menu input from a file
//! ```
//!
//! All state is in memory and discarded on exit. Core events are logged
//! through `tracing`; set `RUST_LOG` (e.g. `RUST_LOG=bank_teller=debug`)
//! to see them on stderr without disturbing the menu on stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script file not found, I/O failure, etc.)

use bank_teller::cli;
use bank_teller::core::Bank;
use bank_teller::shell::Session;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so the menu on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    let result = match args.script {
        Some(path) => match File::open(&path) {
            Ok(file) => {
                let session = Session::new(Bank::new(), BufReader::new(file), io::stdout());
                session.run()
            }
            Err(error) => {
                eprintln!("Error: cannot open script '{}': {}", path.display(), error);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let session = Session::new(Bank::new(), stdin.lock(), io::stdout());
            session.run()
        }
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
