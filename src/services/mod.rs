//! Service layer for letterdesk.
//!
//! Domain logic separated from the CLI so other front ends can reuse it.

pub mod intake;

pub use intake::{IntakeError, IntakeOutcome, IntakeService};
