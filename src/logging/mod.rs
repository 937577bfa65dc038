//! Logging for the dataset splitter
//!
//! This module provides:
//! - Bracketed log formatting
//! - stderr logging with an optional plain-text log file

mod formatter;
mod setup;

pub use setup::setup_logging;
