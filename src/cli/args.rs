use crate::session::SessionMode;
use crate::types::MachineState;
use clap::Parser;
use std::path::PathBuf;

/// Simulate a coffee vending machine
#[derive(Parser, Debug)]
#[command(name = "coffee-machine")]
#[command(about = "Simulate a coffee vending machine", long_about = None)]
pub struct CliArgs {
    /// Command script to replay instead of reading the console
    #[arg(
        value_name = "SCRIPT",
        help = "Path to a CSV command script (runs non-interactively when given)"
    )]
    pub script: Option<PathBuf>,

    /// Initial water level
    #[arg(
        long = "water",
        value_name = "ML",
        default_value_t = MachineState::INITIAL.water,
        help = "Initial water in ml"
    )]
    pub water: u32,

    /// Initial milk level
    #[arg(
        long = "milk",
        value_name = "ML",
        default_value_t = MachineState::INITIAL.milk,
        help = "Initial milk in ml"
    )]
    pub milk: u32,

    /// Initial coffee beans
    #[arg(
        long = "beans",
        value_name = "G",
        default_value_t = MachineState::INITIAL.beans,
        help = "Initial coffee beans in grams"
    )]
    pub beans: u32,

    /// Initial disposable cups
    #[arg(
        long = "cups",
        value_name = "COUNT",
        default_value_t = MachineState::INITIAL.cups,
        help = "Initial number of disposable cups"
    )]
    pub cups: u32,

    /// Initial money in the till
    #[arg(
        long = "money",
        value_name = "AMOUNT",
        default_value_t = MachineState::INITIAL.money,
        help = "Initial money in currency units"
    )]
    pub money: u32,

    /// Currency symbol shown before amounts
    #[arg(
        long = "currency",
        value_name = "SYMBOL",
        default_value = "$",
        help = "Currency symbol used when displaying money"
    )]
    pub currency: String,
}

impl CliArgs {
    /// Build the starting machine state from the stock flags
    pub fn initial_state(&self) -> MachineState {
        MachineState::new(self.water, self.milk, self.beans, self.cups, self.money)
    }

    /// Session mode implied by the arguments
    ///
    /// A script path selects replay; otherwise the console is interactive.
    pub fn session_mode(&self) -> SessionMode {
        match &self.script {
            Some(path) => SessionMode::Replay(path.clone()),
            None => SessionMode::Interactive,
        }
    }
}
