//! Core business logic module
//!
//! - `engine` - The coffee machine state engine

pub mod engine;

pub use engine::CoffeeMachine;
