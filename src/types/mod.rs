//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `machine_state`: counters, resources and refill quantities
//! - `recipe`: the fixed drink menu and buy-menu selections
//! - `command`: commands issued to the machine and their outcomes
//! - `error`: Error types for the coffee machine

pub mod command;
pub mod error;
pub mod machine_state;
pub mod recipe;

pub use command::{Action, Command, Outcome};
pub use error::MachineError;
pub use machine_state::{parse_quantity, MachineState, Resource, Supplies};
pub use recipe::{Formula, Recipe, Selection};
