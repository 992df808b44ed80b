//! haven-instruments
//!
//! Screening instrument definitions. Pure data: questions, answer options,
//! and the interpretation bands that map a total score to a severity level.
//! The registry is static and never mutated at runtime.

pub mod error;
pub mod instruments;
pub mod scoring;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haven_core::models::instrument_id::InstrumentId;

use error::InstrumentError;
use scoring::{Band, BandTableError, Question};

/// Prompt shown above every item of the frequency-scale questionnaires.
pub const TWO_WEEK_STEM: &str = "Over the past 2 weeks, how often have you been bothered by:";

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Registry identifier (e.g., `phq9`).
    fn id(&self) -> InstrumentId;

    /// Human-readable title (e.g., "PHQ-9 Depression Screening").
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Prompt that precedes each question's text.
    fn stem(&self) -> &str {
        TWO_WEEK_STEM
    }

    /// Short bullet points for the instrument-selection screen.
    fn overview(&self) -> &[&str] {
        &[]
    }

    /// Questions in presentation order.
    fn questions(&self) -> &[Question];

    /// Interpretation bands in ascending score order.
    fn bands(&self) -> &[Band];

    /// Look up a question by its identifier.
    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Highest option score offered by any question.
    fn max_option_score(&self) -> u32 {
        self.questions()
            .iter()
            .map(Question::max_score)
            .max()
            .unwrap_or(0)
    }

    /// Highest total a fully answered session can reach. For instruments
    /// whose questions share one option set this is
    /// `question_count * max_option_score`.
    fn max_score(&self) -> u32 {
        self.questions().iter().map(Question::max_score).sum()
    }

    /// Resolve the band whose closed interval contains `score`.
    ///
    /// Bands are scanned in table order and the first match wins. A score
    /// that matches no band means the band table is misconfigured.
    fn interpret(&self, score: u32) -> Result<&Band, InstrumentError> {
        self.bands().iter().find(|b| b.contains(score)).ok_or_else(|| {
            tracing::error!(instrument = %self.id(), score, "score matches no interpretation band");
            InstrumentError::ScoreOutOfRange {
                instrument_id: self.id(),
                score,
            }
        })
    }

    /// Check that the band table partitions `[0, max_score]`.
    fn validate_bands(&self) -> Result<(), BandTableError> {
        scoring::validate_band_table(self.bands(), self.max_score())
    }

    fn summary(&self) -> InstrumentSummary {
        InstrumentSummary {
            id: self.id(),
            title: self.title().to_string(),
            description: self.description().to_string(),
            question_count: self.question_count(),
            overview: self.overview().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// What the instrument-selection screen needs to know about an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentSummary {
    pub id: InstrumentId,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub overview: Vec<String>,
}

/// Return all registered instruments, in registry order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    InstrumentId::ALL.into_iter().map(instrument).collect()
}

/// The definition registered under `id`.
pub fn instrument(id: InstrumentId) -> Box<dyn Instrument> {
    match id {
        InstrumentId::Phq9 => Box::new(instruments::phq9::Phq9),
        InstrumentId::Gad7 => Box::new(instruments::gad7::Gad7),
    }
}

/// Look up an instrument by its string identifier.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    let id: InstrumentId = id
        .parse()
        .map_err(|_| InstrumentError::UnknownInstrument(id.to_string()))?;
    Ok(instrument(id))
}

/// Summaries of every registered instrument, for the selection screen.
pub fn list_instruments() -> Vec<InstrumentSummary> {
    all_instruments().iter().map(|i| i.summary()).collect()
}

/// Validate the band table of every registered instrument.
pub fn validate_registry() -> Result<(), InstrumentError> {
    for instrument in all_instruments() {
        instrument
            .validate_bands()
            .map_err(|source| InstrumentError::BandTable {
                instrument_id: instrument.id(),
                source,
            })?;
    }
    Ok(())
}
