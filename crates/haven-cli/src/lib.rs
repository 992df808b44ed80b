//! haven-cli library root.
//!
//! Re-exports the host modules so that integration tests can exercise
//! configuration handling and non-interactive scoring without a terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod interactive;
pub mod output;
