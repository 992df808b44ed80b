//! haven-screening
//!
//! The screening engine: a [`Session`] captures answers for one
//! instrument, the [`Navigator`] walks it question by question and gates
//! completion, and [`scoring`] turns a completed session into a total score
//! and a severity band.
//!
//! Everything here is synchronous and in-memory. Nothing is persisted.

pub mod error;
pub mod navigator;
pub mod scoring;
pub mod session;

pub use error::ScreeningError;
pub use haven_instruments::{Instrument, InstrumentSummary, get_instrument, list_instruments};
pub use navigator::{Advance, NavigationState, Navigator, Progress};
pub use session::Session;
