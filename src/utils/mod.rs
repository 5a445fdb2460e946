//! Utility modules for common functionality
//!
//! This module provides the audit log and progress reporting used by
//! the CLI commands.

pub mod logger;
pub(crate) mod progress;
