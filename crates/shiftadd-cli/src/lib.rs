#![forbid(unsafe_code)]

//! Command-line front end for the shift-and-add pipeline simulator.
//!
//! Validates operand lists and the tick duration, drives
//! [`shiftadd_core::PipelineScheduler`] to completion, and renders the
//! result line plus the diagonal stage table (or a JSON report).

pub mod cli;
pub mod error;
pub mod input;
pub mod report;
pub mod table;

pub use cli::{Cli, Format, run, run_from_env};
pub use error::{CliError, Result};
