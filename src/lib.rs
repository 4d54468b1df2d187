//! Coffee Machine Library
//! # Overview
//!
//! This library simulates a coffee vending machine: it tracks water, milk,
//! coffee beans, disposable cups and collected money, sells drinks against
//! fixed recipes, and supports refilling supplies and taking the cash out.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (MachineState, Recipe, Command, errors)
//! - [`core`] - The [`CoffeeMachine`] state engine
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Console text, command scripts and CSV output
//! - [`session`] - Interactive and scripted drivers around the engine
//!
//! # Operations
//!
//! - **Purchase**: make an espresso, latte or cappuccino if every ingredient
//!   and a cup are available; otherwise report the first short resource
//! - **Refill**: add water, milk, beans and cups
//! - **Collect cash**: hand out all money and reset it to zero
//! - **Inspect**: report the current levels
//!
//! A rejected operation never changes any counter.

pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use core::CoffeeMachine;
pub use types::{
    Action, Command, MachineError, MachineState, Outcome, Recipe, Resource, Selection, Supplies,
};
