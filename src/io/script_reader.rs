//! Command script reader with iterator interface
//!
//! Provides a streaming iterator over the commands in a CSV command script.
//! Delegates format concerns to the csv_format module.
//!
//! ```no_run
//! use coffee_machine::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::from_path(Path::new("orders.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `from_path()`
//! - Individual row errors are yielded as `ParseError` values carrying the line number

use crate::io::csv_format::{convert_script_record, ScriptRecord};
use crate::types::{Command, MachineError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Streaming reader over a command script
///
/// Rows are read one at a time. Errors carry the physical line of the row
/// as reported by the CSV reader, so blank lines in the script are counted.
#[derive(Debug)]
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl ScriptReader<File> {
    /// Open a command script file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a CSV script with an `action,drink,water,milk,beans,cups` header
    ///
    /// # Returns
    ///
    /// * `Ok(ScriptReader)` ready to iterate over the script's commands
    /// * `Err(MachineError)` if the file cannot be opened
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist, or `IoError` if it
    /// cannot be opened for another reason.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use coffee_machine::io::ScriptReader;
    /// use std::path::Path;
    ///
    /// let reader = ScriptReader::from_path(Path::new("orders.csv")).unwrap();
    /// let commands: Vec<_> = reader.filter_map(Result::ok).collect();
    /// println!("Read {} commands", commands.len());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, MachineError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MachineError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => MachineError::from(e),
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap any byte source holding a command script
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Accept rows with fewer columns than the header
    ///
    /// # Arguments
    ///
    /// * `source` - Byte source positioned at the header row
    ///
    /// # Returns
    ///
    /// A `ScriptReader` that yields one command per data row
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }

    /// Deserialize and convert the row held in `self.record`
    fn convert_current(&mut self) -> Result<Command, MachineError> {
        let line = self.record.position().map(|pos| pos.line());
        let headers = self.reader.headers()?;

        let record: ScriptRecord = self
            .record
            .deserialize(Some(headers))
            .map_err(|e| MachineError::parse_error(line, e.to_string()))?;

        convert_script_record(record).map_err(|e| match e {
            MachineError::ParseError { line: None, message } => {
                MachineError::parse_error(line, message)
            }
            other => MachineError::parse_error(line, other.to_string()),
        })
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Command, MachineError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.convert_current()),
            Ok(false) => None,
            Err(e) => Some(Err(MachineError::from(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Recipe, Selection, Supplies};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<Command, MachineError>> {
        ScriptReader::from_reader(content.as_bytes()).collect()
    }

    #[test]
    fn test_from_path_opens_file() {
        let file = create_temp_csv("action,drink,water,milk,beans,cups\ntake,,,,,\n");

        let reader = ScriptReader::from_path(file.path()).unwrap();
        let commands: Vec<_> = reader.collect();

        assert_eq!(commands, vec![Ok(Command::Take)]);
    }

    #[test]
    fn test_from_path_fails_on_missing_file() {
        let result = ScriptReader::from_path(Path::new("nonexistent.csv"));

        assert_eq!(
            result.unwrap_err(),
            MachineError::FileNotFound {
                path: "nonexistent.csv".to_string()
            }
        );
    }

    #[test]
    fn test_reads_commands_in_order() {
        let commands = read_all(
            "action,drink,water,milk,beans,cups\n\
             buy,1,,,,\n\
             fill,,10,20,30,4\n\
             remaining,,,,,\n",
        );

        assert_eq!(
            commands,
            vec![
                Ok(Command::Buy(Selection::Drink(Recipe::Espresso))),
                Ok(Command::Fill(Supplies::new(10, 20, 30, 4))),
                Ok(Command::Remaining),
            ]
        );
    }

    #[test]
    fn test_short_rows_are_accepted() {
        let commands = read_all("action,drink,water,milk,beans,cups\ntake\nbuy,latte\n");

        assert_eq!(
            commands,
            vec![
                Ok(Command::Take),
                Ok(Command::Buy(Selection::Drink(Recipe::Latte))),
            ]
        );
    }

    #[test]
    fn test_handles_whitespace() {
        let commands = read_all("action,drink,water,milk,beans,cups\n  buy  ,  3  ,,,,\n");

        assert_eq!(
            commands,
            vec![Ok(Command::Buy(Selection::Drink(Recipe::Cappuccino)))]
        );
    }

    #[test]
    fn test_includes_line_numbers_in_errors() {
        let commands = read_all(
            "action,drink,water,milk,beans,cups\n\
             buy,1,,,,\n\
             buy,9,,,,\n\
             take,,,,,\n",
        );

        assert_eq!(commands.len(), 3);
        assert!(commands[0].is_ok());
        assert!(commands[2].is_ok());

        let error = commands[1].as_ref().unwrap_err();
        assert!(matches!(error, MachineError::ParseError { line: Some(3), .. }));
        assert!(error.to_string().contains("Unknown drink selection '9'"));
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let commands = read_all(
            "action,drink,water,milk,beans,cups\n\
             buy,1,,,,\n\
             \n\
             buy,9,,,,\n\
             fill,,x,,,\n",
        );

        assert_eq!(commands.len(), 3);
        assert!(commands[0].is_ok());
        assert!(matches!(
            commands[1],
            Err(MachineError::ParseError { line: Some(4), .. })
        ));
        assert!(matches!(
            commands[2],
            Err(MachineError::ParseError { line: Some(5), .. })
        ));
    }

    #[test]
    fn test_missing_drink_reports_line() {
        let commands = read_all("action,drink,water,milk,beans,cups\nbuy,,,,,\n");

        assert_eq!(
            commands,
            vec![Err(MachineError::parse_error(Some(2), "buy requires a drink"))]
        );
    }

    #[test]
    fn test_empty_script_after_header() {
        assert!(read_all("action,drink,water,milk,beans,cups\n").is_empty());
    }
}
