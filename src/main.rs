//! Coffee Machine CLI
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --water 1000 --cups 20
//! cargo run -- orders.csv > state.csv
//! RUST_LOG=debug cargo run -- orders.csv
//! ```
//!
//! Without a script the machine is driven interactively on stdin/stdout.
//! With a script the commands are replayed and the final state is written
//! to stdout as CSV. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (script not found, I/O failure, etc.)

use coffee_machine::cli;
use coffee_machine::session;
use coffee_machine::CoffeeMachine;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut machine = CoffeeMachine::new(args.initial_state());
    let mut session = session::create_session(args.session_mode(), &args.currency);

    let mut output = std::io::stdout();
    if let Err(e) = session.run(&mut machine, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
