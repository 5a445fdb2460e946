//! I/O utilities for candidate files
//!
//! This module provides the file abstraction the validator reads from
//! and the byte order strategies used to interpret TIFF headers.

pub mod byte_order;
pub mod candidate;
