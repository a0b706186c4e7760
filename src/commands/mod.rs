//! Command execution
//!
//! Bridges parsed CLI commands to the record operations in [`crate::core`].
//! Each handler opens the store named by the [`StoreConfig`], runs one
//! operation and prints its result. Confirmation prompts are read from the
//! console input unless `--yes` was given.

use crate::cli::Command;
use crate::config::StoreConfig;
use crate::types::{Confirmation, RecordError};
use std::fs;
use std::io::{BufRead, Write};

pub mod customer;
pub mod employee;
pub mod render;

/// Input and output streams used by a command
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Console { input, output }
    }

    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    /// Ask a YES/NO question
    ///
    /// Returns `Affirmed` straight away when `assume_yes` is set. A failed
    /// write, a failed read or end of input counts as a decline.
    pub fn confirm(&mut self, question: &str, assume_yes: bool) -> Confirmation {
        if assume_yes {
            return Confirmation::Affirmed;
        }
        let prompted = write!(self.output, "{} (YES/NO): ", question)
            .and_then(|_| self.output.flush());
        if prompted.is_err() {
            return Confirmation::Declined;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => Confirmation::Declined,
            Ok(_) => Confirmation::from_token(&answer),
        }
    }
}

/// Run one parsed command against the configured store
///
/// The data directory is created if it does not exist yet.
pub fn run(
    command: Command,
    config: &StoreConfig,
    console: &mut Console<'_>,
) -> Result<(), RecordError> {
    fs::create_dir_all(config.data_dir())
        .map_err(|e| RecordError::file_unavailable(config.data_dir(), &e))?;

    match command {
        Command::Employee(action) => employee::execute(action, config, console),
        Command::Customer(action) => customer::execute(action, config, console),
    }
}
