//! Interactive console session
//!
//! Reads one action per line, asks follow-up questions for `buy` and `fill`,
//! and prints what the machine did. Unknown actions and unknown drink choices
//! return to the main menu silently. End of input behaves like `exit`.

use crate::core::CoffeeMachine;
use crate::io::console::{
    render_error, render_outcome, ACTION_PROMPT, BUY_PROMPT, FILL_PROMPTS,
};
use crate::session::Session;
use crate::types::{parse_quantity, Action, Command, MachineError, Outcome, Selection, Supplies};
use std::io::{BufRead, ErrorKind, Write};
use tracing::debug;

/// Result of reading one turn from the operator
enum Turn {
    Command(Command),
    Skip,
    Invalid(MachineError),
    EndOfInput,
}

/// Console session over any line-oriented input
pub struct InteractiveSession<R: BufRead> {
    input: R,
    currency: String,
}

impl<R: BufRead> InteractiveSession<R> {
    pub fn new(input: R, currency: &str) -> Self {
        InteractiveSession {
            input,
            currency: currency.to_string(),
        }
    }

    /// Print a prompt and read the answer
    ///
    /// Returns `None` once the input is exhausted. A line that is not valid
    /// UTF-8 is consumed and answered as blank.
    fn ask(&mut self, output: &mut dyn Write, prompt: &str) -> Result<Option<String>, MachineError> {
        writeln!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                debug!(error = %e, "ignoring undecodable input");
                Ok(Some(String::new()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn next_turn(&mut self, output: &mut dyn Write) -> Result<Turn, MachineError> {
        let Some(answer) = self.ask(output, ACTION_PROMPT)? else {
            return Ok(Turn::EndOfInput);
        };

        let action = match answer.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                debug!(error = %e, "ignoring input");
                return Ok(Turn::Skip);
            }
        };

        let command = match action {
            Action::Buy => {
                let Some(choice) = self.ask(output, BUY_PROMPT)? else {
                    return Ok(Turn::EndOfInput);
                };
                match choice.parse::<Selection>() {
                    Ok(selection) => Command::Buy(selection),
                    Err(e) => {
                        debug!(error = %e, "ignoring drink choice");
                        return Ok(Turn::Skip);
                    }
                }
            }
            Action::Fill => {
                let mut amounts = [0u32; 4];
                for (slot, (resource, prompt)) in amounts.iter_mut().zip(FILL_PROMPTS) {
                    let Some(answer) = self.ask(output, prompt)? else {
                        return Ok(Turn::EndOfInput);
                    };
                    match parse_quantity(resource, &answer) {
                        Ok(amount) => *slot = amount,
                        Err(e) => return Ok(Turn::Invalid(e)),
                    }
                }
                let [water, milk, beans, cups] = amounts;
                Command::Fill(Supplies::new(water, milk, beans, cups))
            }
            Action::Take => Command::Take,
            Action::Remaining => Command::Remaining,
            Action::Exit => Command::Exit,
        };

        Ok(Turn::Command(command))
    }
}

impl<R: BufRead> Session for InteractiveSession<R> {
    fn run(
        &mut self,
        machine: &mut CoffeeMachine,
        output: &mut dyn Write,
    ) -> Result<(), MachineError> {
        loop {
            let command = match self.next_turn(output)? {
                Turn::Command(command) => command,
                Turn::Skip => continue,
                Turn::Invalid(e) => {
                    writeln!(output, "{}", render_error(&e))?;
                    continue;
                }
                Turn::EndOfInput => {
                    debug!("input closed");
                    break;
                }
            };

            match machine.process(command) {
                Ok(Outcome::Exit) => break,
                Ok(outcome) => {
                    if let Some(text) = render_outcome(&outcome, &self.currency) {
                        writeln!(output, "{}", text)?;
                    }
                }
                Err(e) => writeln!(output, "{}", render_error(&e))?,
            }
        }

        output.flush()?;
        Ok(())
    }
}
