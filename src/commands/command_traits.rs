//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use async_trait::async_trait;

use crate::utils::logger::Logger;
use crate::validation::errors::GuardResult;

/// Represents an executable command in the application
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    ///
    /// # Returns
    /// `Ok(true)` when every file passed, `Ok(false)` when at least one
    /// was rejected, or an error if the command could not run
    async fn execute(&self) -> GuardResult<bool>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Audit logger for recording outcomes
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> GuardResult<Box<dyn Command + 'a>>;
}
