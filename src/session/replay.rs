//! Scripted replay session
//!
//! Streams commands from a CSV command script through the machine and writes
//! the final state as CSV.
//!
//! # Error Handling
//!
//! A missing or unreadable script is fatal and returned immediately.
//! Malformed rows and commands the machine rejects are logged and skipped;
//! the replay continues with the next row. An `exit` row stops the replay early.

use crate::core::CoffeeMachine;
use crate::io::csv_format::write_state_csv;
use crate::io::script_reader::ScriptReader;
use crate::session::Session;
use crate::types::{MachineError, Outcome};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Replay of a command script file
#[derive(Debug, Clone)]
pub struct ReplaySession {
    path: PathBuf,
}

impl ReplaySession {
    pub fn new(path: PathBuf) -> Self {
        ReplaySession { path }
    }
}

impl Session for ReplaySession {
    fn run(
        &mut self,
        machine: &mut CoffeeMachine,
        output: &mut dyn Write,
    ) -> Result<(), MachineError> {
        let reader = ScriptReader::from_path(&self.path)?;

        let mut applied = 0usize;
        let mut rejected = 0usize;
        let mut skipped = 0usize;

        for result in reader {
            let command = match result {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "skipping script row");
                    skipped += 1;
                    continue;
                }
            };

            match machine.process(command) {
                Ok(Outcome::Exit) => {
                    debug!("exit command reached, stopping replay");
                    break;
                }
                Ok(outcome) => {
                    debug!(action = ?command.action(), ?outcome, "command applied");
                    applied += 1;
                }
                Err(e) => {
                    warn!(?command, error = %e, "command rejected");
                    rejected += 1;
                }
            }
        }

        info!(
            script = %self.path.display(),
            applied, rejected, skipped, "replay finished"
        );

        write_state_csv(&machine.inspect(), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MachineState;
    use tempfile::NamedTempFile;

    const HEADER: &str = "action,drink,water,milk,beans,cups\n";

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(rows: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEADER.as_bytes())
            .expect("Failed to write to temp file");
        file.write_all(rows.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn replay(machine: &mut CoffeeMachine, rows: &str) -> String {
        let file = create_temp_csv(rows);
        let mut session = ReplaySession::new(file.path().to_path_buf());
        let mut output = Vec::new();

        session.run(machine, &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_replay_writes_final_state() {
        let mut machine = CoffeeMachine::default();

        let output = replay(&mut machine, "buy,1,,,,\n");

        assert_eq!(output, "water,milk,beans,cups,money\n150,540,104,8,554\n");
    }

    #[test]
    fn test_replay_skips_rejected_and_malformed_rows() {
        let mut machine = CoffeeMachine::default();

        replay(
            &mut machine,
            "buy,espresso,,,,\n\
             buy,latte,,,,\n\
             fill,,abc,,,\n\
             buy,mocha,,,,\n\
             fill,,1000,1000,1000,10\n",
        );

        assert_eq!(
            machine.inspect(),
            MachineState::new(1150, 1540, 1104, 18, 554)
        );
    }

    #[test]
    fn test_replay_stops_at_exit() {
        let mut machine = CoffeeMachine::default();

        replay(&mut machine, "take,,,,,\nexit,,,,,\nfill,,1,1,1,1\n");

        assert_eq!(machine.inspect(), MachineState::new(400, 540, 120, 9, 0));
    }

    #[test]
    fn test_replay_missing_file_is_fatal() {
        let mut machine = CoffeeMachine::default();
        let mut session = ReplaySession::new(PathBuf::from("nonexistent.csv"));
        let mut output = Vec::new();

        let result = session.run(&mut machine, &mut output);

        assert!(matches!(result, Err(MachineError::FileNotFound { .. })));
        assert!(output.is_empty());
    }
}
