//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod validate_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use validate_command::ValidateCommand;

use clap::ArgMatches;

use crate::utils::logger::Logger;
use crate::validation::errors::{GuardError, GuardResult};

/// Factory for creating command instances based on CLI arguments
pub struct RasterguardCommandFactory;

impl RasterguardCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RasterguardCommandFactory
    }
}

impl Default for RasterguardCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RasterguardCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GuardResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args)?))
        } else {
            Ok(Box::new(ValidateCommand::new(args, logger)?))
        }
    }
}

/// Collects the positional file arguments
pub(crate) fn input_files(args: &ArgMatches) -> GuardResult<Vec<String>> {
    let files: Vec<String> = args
        .get_many::<String>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if files.is_empty() {
        return Err(GuardError::GenericError("Missing input file".to_string()));
    }
    Ok(files)
}
