//! Console text for the interactive session
//!
//! Prompts shown to the operator and the rendering of outcomes and errors.
//! All functions are pure so the exact wording can be tested.

use crate::types::{MachineError, MachineState, Outcome, Resource};

pub const ACTION_PROMPT: &str = "Write action (buy, fill, take, remaining, exit):";

pub const BUY_PROMPT: &str =
    "What do you want to buy? 1 - espresso, 2 - latte, 3 - cappuccino, back - to main menu:";

pub const SERVED_MESSAGE: &str = "I have enough resources, making you a coffee!";

/// Prompts asked during `fill`, in the order the quantities are read
pub const FILL_PROMPTS: [(Resource, &str); 4] = [
    (Resource::Water, "Write how many ml of water you want to add:"),
    (Resource::Milk, "Write how many ml of milk you want to add:"),
    (Resource::Beans, "Write how many grams of coffee beans you want to add:"),
    (Resource::Cups, "Write how many disposable cups you want to add:"),
];

/// Multi-line report printed for `remaining`
pub fn render_state(state: &MachineState, currency: &str) -> String {
    format!(
        "The coffee machine has:\n\
         {} ml of water\n\
         {} ml of milk\n\
         {} g of coffee beans\n\
         {} disposable cups\n\
         {}{} of money",
        state.water, state.milk, state.beans, state.cups, currency, state.money
    )
}

/// Text shown after a command was accepted, if any
pub fn render_outcome(outcome: &Outcome, currency: &str) -> Option<String> {
    match outcome {
        Outcome::Served(_) => Some(SERVED_MESSAGE.to_string()),
        Outcome::Collected(amount) => Some(format!("I gave you {}{}", currency, amount)),
        Outcome::Report(state) => Some(render_state(state, currency)),
        Outcome::Cancelled | Outcome::Refilled | Outcome::Exit => None,
    }
}

/// Text shown when a command was rejected
pub fn render_error(error: &MachineError) -> String {
    error.to_string()
}
