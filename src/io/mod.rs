//! I/O module
//!
//! Handles console text, command script parsing and state output.
//!
//! # Components
//!
//! - `console` - Prompts and rendering for the interactive session
//! - `csv_format` - CSV format handling (script record conversion, state serialization)
//! - `script_reader` - Command script reader with iterator interface

pub mod console;
pub mod csv_format;
pub mod script_reader;

pub use csv_format::{convert_script_record, write_state_csv, ScriptRecord};
pub use script_reader::ScriptReader;
