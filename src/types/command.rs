//! Command types for driving the coffee machine
//!
//! A `Command` is one turn of the operator's loop. The engine answers every
//! command it accepts with an `Outcome`.

use std::str::FromStr;

use super::error::MachineError;
use super::machine_state::{MachineState, Supplies};
use super::recipe::{Recipe, Selection};

/// Top-level action words understood at the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the drink menu
    Buy,
    /// Add supplies
    Fill,
    /// Collect the money
    Take,
    /// Show the current levels
    Remaining,
    /// Leave the loop
    Exit,
}

impl FromStr for Action {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Action::Buy),
            "fill" => Ok(Action::Fill),
            "take" => Ok(Action::Take),
            "remaining" => Ok(Action::Remaining),
            "exit" => Ok(Action::Exit),
            _ => Err(MachineError::unknown_action(s.trim())),
        }
    }
}

/// A fully specified instruction for the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Buy(Selection),
    Fill(Supplies),
    Take,
    Remaining,
    Exit,
}

impl Command {
    /// The action word this command was issued with
    pub fn action(&self) -> Action {
        match self {
            Command::Buy(_) => Action::Buy,
            Command::Fill(_) => Action::Fill,
            Command::Take => Action::Take,
            Command::Remaining => Action::Remaining,
            Command::Exit => Action::Exit,
        }
    }
}

/// Result of a command the machine accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A drink was made and paid for
    Served(Recipe),
    /// The customer backed out of the drink menu
    Cancelled,
    /// Supplies were added
    Refilled,
    /// All money was handed out; carries the amount
    Collected(u32),
    /// Snapshot of the current levels
    Report(MachineState),
    /// The operator asked to stop
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::buy("buy", Action::Buy)]
    #[case::fill("fill", Action::Fill)]
    #[case::take("take", Action::Take)]
    #[case::remaining("remaining", Action::Remaining)]
    #[case::exit("exit", Action::Exit)]
    #[case::upper("BUY", Action::Buy)]
    #[case::padded("  take\n", Action::Take)]
    fn test_action_parsing(#[case] input: &str, #[case] expected: Action) {
        assert_eq!(input.parse::<Action>().unwrap(), expected);
    }

    #[rstest]
    #[case::unknown("brew")]
    #[case::empty("")]
    #[case::prefix("rem")]
    fn test_action_rejects_unknown(#[case] input: &str) {
        let err = input.parse::<Action>().unwrap_err();
        assert!(matches!(err, MachineError::UnknownAction { .. }));
    }

    #[rstest]
    #[case::buy(Command::Buy(Selection::Back), Action::Buy)]
    #[case::fill(Command::Fill(Supplies::default()), Action::Fill)]
    #[case::take(Command::Take, Action::Take)]
    #[case::remaining(Command::Remaining, Action::Remaining)]
    #[case::exit(Command::Exit, Action::Exit)]
    fn test_command_action(#[case] command: Command, #[case] expected: Action) {
        assert_eq!(command.action(), expected);
    }
}
