//! Session strategy module
//!
//! A session is the driver that feeds commands to the machine and shows the
//! results. Two implementations can be selected at runtime:
//!
//! - **interactive**: console prompts read from a line-oriented input
//! - **replay**: commands read from a CSV script, final state written as CSV

use crate::core::CoffeeMachine;
use crate::types::MachineError;
use std::io::Write;
use std::path::PathBuf;

pub mod interactive;
pub mod replay;

pub use interactive::InteractiveSession;
pub use replay::ReplaySession;

/// How the machine is driven
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    /// Prompt an operator on standard input
    Interactive,
    /// Replay the command script at the given path
    Replay(PathBuf),
}

/// Driver loop around a coffee machine
pub trait Session {
    /// Run the session to completion against `machine`
    ///
    /// Rejected commands are reported and the session carries on; only
    /// fatal problems (unreadable input, failed output) are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be opened or read, or output cannot be written.
    fn run(&mut self, machine: &mut CoffeeMachine, output: &mut dyn Write)
        -> Result<(), MachineError>;
}

/// Create the session for the given mode
///
/// Interactive sessions read from standard input.
pub fn create_session(mode: SessionMode, currency: &str) -> Box<dyn Session> {
    match mode {
        SessionMode::Interactive => {
            Box::new(InteractiveSession::new(std::io::stdin().lock(), currency))
        }
        SessionMode::Replay(path) => Box::new(ReplaySession::new(path)),
    }
}
