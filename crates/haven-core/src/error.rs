use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
