pub mod follow_up;
pub mod instrument_id;
pub mod result;
pub mod severity;
