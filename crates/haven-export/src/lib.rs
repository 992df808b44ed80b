//! haven-export
//!
//! Turns a completed screening result into something a host can show:
//! text rendered from a Tera template, or JSON.

pub mod error;
pub mod render;
pub mod templates;
