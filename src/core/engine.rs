//! Coffee machine engine
//!
//! This module provides the `CoffeeMachine`, which owns the machine counters
//! and applies every operation to them.
//!
//! The engine enforces business rules such as:
//! - Resource checks in a fixed order before a drink is made
//! - All-or-nothing updates: a rejected operation leaves every counter untouched
//! - Checked arithmetic so no counter wraps around

use crate::types::{
    Command, MachineError, MachineState, Outcome, Recipe, Resource, Selection, Supplies,
};
use tracing::{debug, info, warn};

/// The coffee machine state engine
///
/// Holds the five counters and exposes the purchase, refill, cash-out and
/// inspection operations. Each operation runs to completion against the
/// current state; rejected operations change nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeMachine {
    state: MachineState,
}

impl CoffeeMachine {
    /// Create a machine stocked with the given levels
    ///
    /// No validation is needed: every `u32` combination is a valid state,
    /// including all-zero.
    ///
    /// # Arguments
    ///
    /// * `state` - Starting water, milk, beans, cups and money
    ///
    /// # Returns
    ///
    /// A new CoffeeMachine ready to process commands
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coffee_machine::{CoffeeMachine, MachineState, Recipe};
    ///
    /// let mut machine = CoffeeMachine::new(MachineState::INITIAL);
    /// machine.purchase(Recipe::Espresso).unwrap();
    /// println!("{:?}", machine.inspect());
    /// ```
    pub fn new(state: MachineState) -> Self {
        CoffeeMachine { state }
    }

    /// Process a single command
    ///
    /// Routes the command to the matching operation and wraps its result
    /// in an `Outcome`.
    ///
    /// # Errors
    ///
    /// Returns an error if the purchase or refill behind the command is
    /// rejected. The machine state is unchanged in that case.
    pub fn process(&mut self, command: Command) -> Result<Outcome, MachineError> {
        match command {
            Command::Buy(selection) => self.sell(selection),
            Command::Fill(supplies) => {
                self.refill(supplies)?;
                Ok(Outcome::Refilled)
            }
            Command::Take => Ok(Outcome::Collected(self.collect_cash())),
            Command::Remaining => Ok(Outcome::Report(self.inspect())),
            Command::Exit => Ok(Outcome::Exit),
        }
    }

    /// Handle a buy-menu selection
    ///
    /// `Selection::Back` is a no-op; a drink selection is a purchase.
    pub fn sell(&mut self, selection: Selection) -> Result<Outcome, MachineError> {
        match selection {
            Selection::Drink(recipe) => {
                self.purchase(recipe)?;
                Ok(Outcome::Served(recipe))
            }
            Selection::Back => {
                debug!("purchase cancelled");
                Ok(Outcome::Cancelled)
            }
        }
    }

    /// Make one drink and take payment for it
    ///
    /// Checks water, milk, beans and cups in that order. The first shortage
    /// is reported, so the reason is deterministic when several resources
    /// are short. Nothing is mutated until every check has passed.
    ///
    /// # Errors
    ///
    /// - `InsufficientResource` naming the first short resource
    /// - `ArithmeticOverflow` if the money counter cannot take the price
    pub fn purchase(&mut self, recipe: Recipe) -> Result<(), MachineError> {
        let formula = recipe.formula();
        let current = self.state;

        let requirements = [
            (Resource::Water, current.water, formula.water),
            (Resource::Milk, current.milk, formula.milk),
            (Resource::Beans, current.beans, formula.beans),
            (Resource::Cups, current.cups, 1),
        ];

        if let Some((resource, available, needed)) = requirements
            .into_iter()
            .find(|(_, available, needed)| available < needed)
        {
            warn!(%recipe, %resource, available, needed, "purchase rejected");
            return Err(MachineError::insufficient(resource));
        }

        let money = current
            .money
            .checked_add(formula.cost)
            .ok_or_else(|| MachineError::arithmetic_overflow("purchase", Resource::Money))?;

        // All checks passed above, so the subtractions cannot underflow
        self.state = MachineState {
            water: current.water - formula.water,
            milk: current.milk - formula.milk,
            beans: current.beans - formula.beans,
            cups: current.cups - 1,
            money,
        };

        debug!(%recipe, state = ?self.state, "drink served");
        Ok(())
    }

    /// Add supplies to the machine
    ///
    /// Money is not affected.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` naming the first counter that cannot hold
    /// the added amount; no counter is changed in that case.
    pub fn refill(&mut self, supplies: Supplies) -> Result<(), MachineError> {
        let current = self.state;
        let add = |resource: Resource, level: u32, amount: u32| {
            level
                .checked_add(amount)
                .ok_or_else(|| MachineError::arithmetic_overflow("refill", resource))
        };

        let refilled = MachineState {
            water: add(Resource::Water, current.water, supplies.water)?,
            milk: add(Resource::Milk, current.milk, supplies.milk)?,
            beans: add(Resource::Beans, current.beans, supplies.beans)?,
            cups: add(Resource::Cups, current.cups, supplies.cups)?,
            money: current.money,
        };
        self.state = refilled;

        debug!(?supplies, state = ?self.state, "machine refilled");
        Ok(())
    }

    /// Hand out all collected money
    ///
    /// Returns the amount held before the call and leaves the money counter at zero.
    pub fn collect_cash(&mut self) -> u32 {
        let amount = std::mem::take(&mut self.state.money);
        info!(amount, "cash collected");
        amount
    }

    /// Snapshot of the current levels
    pub fn inspect(&self) -> MachineState {
        self.state
    }
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        Self::new(MachineState::INITIAL)
    }
}
