//! Upload validation command
//!
//! Validates one or more files on disk the way an upload form would
//! before sending them.

use async_trait::async_trait;
use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::command_traits::Command;
use crate::commands::input_files;
use crate::io::candidate::LocalFile;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use crate::validation::config::ValidatorConfig;
use crate::validation::errors::GuardResult;
use crate::validation::messages::Locale;
use crate::validation::validator::FileFormatValidator;

/// Command for validating candidate files
pub struct ValidateCommand<'a> {
    /// Paths of the files to validate
    input_files: Vec<String>,
    /// Declared MIME type for every file; guessed per file when absent
    declared_type: Option<String>,
    /// Effective validator configuration
    config: ValidatorConfig,
    /// Audit logger
    logger: &'a Logger,
}

impl<'a> ValidateCommand<'a> {
    /// Create a new validate command
    ///
    /// Configuration is read from `--config` when given, then `--strict`
    /// and `--locale` override it.
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GuardResult<Self> {
        let input_files = input_files(args)?;
        let declared_type = args.get_one::<String>("mime").cloned();

        let mut config = match args.get_one::<String>("config") {
            Some(path) => {
                debug!("Loading config from {}", path);
                ValidatorConfig::from_file(path)?
            }
            None => ValidatorConfig::default(),
        };

        if args.get_flag("strict") {
            config = config.with_strict_signatures(true);
        }

        if let Some(tag) = args.get_one::<String>("locale") {
            config = config.with_locale(tag.parse::<Locale>()?);
        }

        Ok(ValidateCommand {
            input_files,
            declared_type,
            config,
            logger,
        })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn candidate(&self, path: &str) -> LocalFile {
        match &self.declared_type {
            Some(declared) => LocalFile::new(path, declared.clone()),
            None => LocalFile::with_guessed_type(path),
        }
    }
}

#[async_trait]
impl<'a> Command for ValidateCommand<'a> {
    async fn execute(&self) -> GuardResult<bool> {
        let validator = FileFormatValidator::new(self.config);

        let progress = if self.input_files.len() > 1 {
            ProgressTracker::new(self.input_files.len() as u64, "Validating")
        } else {
            ProgressTracker::hidden()
        };

        let mut rejected = 0usize;
        for path in &self.input_files {
            let candidate = self.candidate(path);
            progress.set_message(path);

            let result = validator.validate(&candidate).await;
            if result.is_valid() {
                println!("OK      {}", path);
            } else {
                rejected += 1;
                println!("INVALID {}: {}", path, result.error().unwrap_or_default());
            }

            if let Err(e) = self.logger.record(path, &result) {
                warn!("Could not write audit log: {}", e);
            }
            progress.increment(1);
        }
        progress.finish();

        info!(
            "{} of {} file(s) accepted",
            self.input_files.len() - rejected,
            self.input_files.len()
        );
        Ok(rejected == 0)
    }
}
