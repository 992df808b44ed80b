use thiserror::Error;

use haven_core::models::instrument_id::InstrumentId;
use haven_instruments::error::InstrumentError;
use haven_instruments::scoring::BandTableError;

/// Errors returned by session and navigation operations.
///
/// Every variant is recoverable by the caller; none of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("question '{question_id}' does not belong to instrument '{instrument_id}'")]
    InvalidQuestion {
        instrument_id: InstrumentId,
        question_id: String,
    },

    #[error("{score} is not a valid answer to question '{question_id}'")]
    InvalidScore { question_id: String, score: u32 },

    #[error("no screening in progress")]
    NoActiveSession,

    #[error("question '{question_id}' must be answered before continuing")]
    AnswerRequired { question_id: String },

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("screening is not complete")]
    SessionNotComplete,

    #[error("score {score} matches no interpretation band of instrument '{instrument_id}'")]
    ScoreOutOfRange {
        instrument_id: InstrumentId,
        score: u32,
    },

    #[error("invalid band table for instrument '{instrument_id}': {source}")]
    BandTable {
        instrument_id: InstrumentId,
        #[source]
        source: BandTableError,
    },
}

impl From<InstrumentError> for ScreeningError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownInstrument(id) => ScreeningError::UnknownInstrument(id),
            InstrumentError::ScoreOutOfRange {
                instrument_id,
                score,
            } => ScreeningError::ScoreOutOfRange {
                instrument_id,
                score,
            },
            InstrumentError::BandTable {
                instrument_id,
                source,
            } => ScreeningError::BandTable {
                instrument_id,
                source,
            },
        }
    }
}
