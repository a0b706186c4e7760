//! Bank Records CLI
//!
//! Command-line interface for the employee and customer record files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- employee add --name "Alice Smith" --salary 52000 --designation Manager
//! cargo run -- employee list --order desc
//! cargo run -- employee delete --designation clerk
//! cargo run -- customer add --name "Asha Rao" --national-id 111122223333 \
//!     --phone 9000000001 --deposit 1500 --address "MG Road"
//! cargo run -- customer deposit --account 1 --amount 5000
//! cargo run -- customer withdraw --account 1 --amount 500 --yes
//! cargo run -- --data-dir /srv/bank customer export october
//! ```
//!
//! Data files live in `--data-dir` (or `BANK_DATA_DIR`, default `.`).
//! Diagnostics go to stderr and are filtered by `RUST_LOG` (default `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success (including cancelled confirmations)
//! - 1: Error (validation failure, unknown record, unreadable file, etc.)

use rust_bank_records::cli;
use rust_bank_records::commands::{self, Console};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = cli::parse_args();
    let config = args.to_store_config();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut console = Console::new(&mut input, &mut output);

    if let Err(e) = commands::run(args.command, &config, &mut console) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
