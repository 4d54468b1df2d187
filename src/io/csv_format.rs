//! CSV format handling for command scripts and state output
//!
//! This module centralizes all CSV format concerns, providing:
//! - ScriptRecord structure for deserialization
//! - Conversion from script records to commands
//! - Machine state output serialization
//!
//! A command script has the header `action,drink,water,milk,beans,cups`.
//! Only the columns an action needs are read; the rest may be left blank.
//!
//! ```text
//! action,drink,water,milk,beans,cups
//! buy,espresso,,,,
//! buy,2,,,,
//! fill,,1000,1000,1000,10
//! take,,,,,
//! ```

use crate::types::{
    parse_quantity, Action, Command, MachineError, MachineState, Resource, Selection, Supplies,
};
use serde::Deserialize;
use std::io::Write;

/// One row of a command script
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ScriptRecord {
    pub action: String,
    #[serde(default)]
    pub drink: Option<String>,
    #[serde(default)]
    pub water: Option<String>,
    #[serde(default)]
    pub milk: Option<String>,
    #[serde(default)]
    pub beans: Option<String>,
    #[serde(default)]
    pub cups: Option<String>,
}

/// Convert a ScriptRecord to a Command
///
/// - `buy` requires the drink column (menu number, name or `back`)
/// - `fill` reads the four quantity columns; a blank quantity adds nothing
/// - `take`, `remaining` and `exit` ignore every other column
///
/// # Errors
///
/// Returns an error if the action or drink is unknown, the drink is missing
/// for `buy`, or a quantity is not a non-negative integer.
pub fn convert_script_record(record: ScriptRecord) -> Result<Command, MachineError> {
    let action: Action = record.action.parse()?;

    let command = match action {
        Action::Buy => {
            let drink = non_blank(record.drink.as_deref())
                .ok_or_else(|| MachineError::parse_error(None, "buy requires a drink"))?;
            Command::Buy(drink.parse::<Selection>()?)
        }
        Action::Fill => Command::Fill(Supplies {
            water: quantity(Resource::Water, record.water.as_deref())?,
            milk: quantity(Resource::Milk, record.milk.as_deref())?,
            beans: quantity(Resource::Beans, record.beans.as_deref())?,
            cups: quantity(Resource::Cups, record.cups.as_deref())?,
        }),
        Action::Take => Command::Take,
        Action::Remaining => Command::Remaining,
        Action::Exit => Command::Exit,
    };

    Ok(command)
}

fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}

fn quantity(resource: Resource, cell: Option<&str>) -> Result<u32, MachineError> {
    match non_blank(cell) {
        Some(value) => parse_quantity(resource, value),
        None => Ok(0),
    }
}

/// Write the machine state as a one-row CSV table
///
/// Columns: water, milk, beans, cups, money
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_state_csv(state: &MachineState, output: &mut dyn Write) -> Result<(), MachineError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.serialize(state)?;
    writer.flush()?;

    Ok(())
}
