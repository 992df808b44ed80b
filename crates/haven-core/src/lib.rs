//! haven-core
//!
//! Pure domain types shared by the Haven screening crates: instrument
//! identifiers, severity levels, and the result record handed to hosts.
//! No I/O of any kind.

pub mod error;
pub mod models;
