//! Command-line interface for letterdesk.

mod commands;
pub mod helpers;

pub use commands::{is_verbose, run};
