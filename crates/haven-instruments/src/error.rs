use thiserror::Error;

use haven_core::models::instrument_id::InstrumentId;

use crate::scoring::BandTableError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

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
