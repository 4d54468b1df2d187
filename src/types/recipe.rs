//! Recipe and selection types for the coffee machine
//!
//! The drink menu is fixed: three recipes, each a tag with constant
//! ingredient requirements attached.

use std::fmt;
use std::str::FromStr;

use super::error::MachineError;

/// Ingredient requirements and price of a single drink
///
/// Every drink also consumes exactly one cup, which is not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    /// Price paid into the machine
    pub cost: u32,
    /// Water needed (ml)
    pub water: u32,
    /// Milk needed (ml)
    pub milk: u32,
    /// Coffee beans needed (g)
    pub beans: u32,
}

/// Drinks the machine can make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipe {
    Espresso,
    Latte,
    Cappuccino,
}

impl Recipe {
    /// All recipes in menu order
    pub const ALL: [Recipe; 3] = [Recipe::Espresso, Recipe::Latte, Recipe::Cappuccino];

    /// Constant requirements for this drink
    pub const fn formula(self) -> Formula {
        match self {
            Recipe::Espresso => Formula {
                cost: 4,
                water: 250,
                milk: 0,
                beans: 16,
            },
            Recipe::Latte => Formula {
                cost: 7,
                water: 350,
                milk: 75,
                beans: 20,
            },
            Recipe::Cappuccino => Formula {
                cost: 6,
                water: 200,
                milk: 100,
                beans: 12,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Recipe::Espresso => "espresso",
            Recipe::Latte => "latte",
            Recipe::Cappuccino => "cappuccino",
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A choice made at the buy menu
///
/// `Back` returns to the main menu without touching the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Drink(Recipe),
    Back,
}

impl FromStr for Selection {
    type Err = MachineError;

    /// Accepts the menu number or the drink name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim().to_lowercase();
        match choice.as_str() {
            "1" | "espresso" => Ok(Selection::Drink(Recipe::Espresso)),
            "2" | "latte" => Ok(Selection::Drink(Recipe::Latte)),
            "3" | "cappuccino" => Ok(Selection::Drink(Recipe::Cappuccino)),
            "back" => Ok(Selection::Back),
            _ => Err(MachineError::unknown_selection(s.trim())),
        }
    }
}
