//! Machine state types
//!
//! This module defines the counters the coffee machine keeps and the
//! supply delta used to refill them.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::MachineError;

/// A counter tracked by the machine
///
/// Used to report which resource was short or overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Water,
    Milk,
    Beans,
    Cups,
    Money,
}

impl Resource {
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Water => "water",
            Resource::Milk => "milk",
            Resource::Beans => "beans",
            Resource::Cups => "cups",
            Resource::Money => "money",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current levels of every counter in the machine
///
/// All fields are unsigned, so no level can go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MachineState {
    /// Water (ml)
    pub water: u32,

    /// Milk (ml)
    pub milk: u32,

    /// Coffee beans (g)
    pub beans: u32,

    /// Disposable cups
    pub cups: u32,

    /// Money collected from sales, in currency units
    pub money: u32,
}

impl MachineState {
    /// Stock the machine starts with when nothing else is configured
    pub const INITIAL: MachineState = MachineState {
        water: 400,
        milk: 540,
        beans: 120,
        cups: 9,
        money: 550,
    };

    pub fn new(water: u32, milk: u32, beans: u32, cups: u32, money: u32) -> Self {
        MachineState {
            water,
            milk,
            beans,
            cups,
            money,
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Quantities added to the machine by a refill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Supplies {
    /// Water to add (ml)
    pub water: u32,
    /// Milk to add (ml)
    pub milk: u32,
    /// Coffee beans to add (g)
    pub beans: u32,
    /// Cups to add
    pub cups: u32,
}

impl Supplies {
    pub fn new(water: u32, milk: u32, beans: u32, cups: u32) -> Self {
        Supplies {
            water,
            milk,
            beans,
            cups,
        }
    }
}

/// Parse a refill quantity typed by the operator
///
/// Accepts a non-negative integer with surrounding whitespace. Negative
/// numbers are rejected rather than subtracted from stock.
pub fn parse_quantity(resource: Resource, input: &str) -> Result<u32, MachineError> {
    u32::from_str(input.trim()).map_err(|_| MachineError::invalid_quantity(resource, input.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_state_is_initial_stock() {
        let state = MachineState::default();
        assert_eq!(state, MachineState::new(400, 540, 120, 9, 550));
    }

    #[rstest]
    #[case::zero("0", 0)]
    #[case::plain("1000", 1000)]
    #[case::padded(" 42\n", 42)]
    #[case::max("4294967295", u32::MAX)]
    fn test_parse_quantity(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(parse_quantity(Resource::Water, input).unwrap(), expected);
    }

    #[rstest]
    #[case::negative("-5")]
    #[case::empty("")]
    #[case::word("plenty")]
    #[case::fraction("1.5")]
    #[case::too_large("4294967296")]
    fn test_parse_quantity_rejects(#[case] input: &str) {
        let err = parse_quantity(Resource::Milk, input).unwrap_err();
        assert_eq!(err, MachineError::invalid_quantity(Resource::Milk, input.trim()));
    }

    #[rstest]
    #[case(Resource::Water, "water")]
    #[case(Resource::Milk, "milk")]
    #[case(Resource::Beans, "beans")]
    #[case(Resource::Cups, "cups")]
    #[case(Resource::Money, "money")]
    fn test_resource_display(#[case] resource: Resource, #[case] expected: &str) {
        assert_eq!(resource.to_string(), expected);
    }
}
