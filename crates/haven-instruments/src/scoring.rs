use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use haven_core::models::severity::Severity;

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub score: u32,
}

impl AnswerOption {
    pub fn new(label: impl Into<String>, score: u32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A single item of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Unique within its instrument (e.g., "phq1").
    pub id: String,
    pub text: String,
    /// Presentation order.
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
        }
    }

    /// The option carrying `score`, if the question offers one.
    pub fn option(&self, score: u32) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.score == score)
    }

    pub fn accepts(&self, score: u32) -> bool {
        self.option(score).is_some()
    }

    /// Highest score any option of this question carries.
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }
}

/// A closed score interval `[min, max]` mapped to a severity level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub min: u32,
    pub max: u32,
    pub level: Severity,
    pub description: String,
}

impl Band {
    pub fn new(min: u32, max: u32, level: Severity, description: impl Into<String>) -> Self {
        Self {
            min,
            max,
            level,
            description: description.into(),
        }
    }

    pub fn contains(&self, score: u32) -> bool {
        self.min <= score && score <= self.max
    }
}

/// Reasons a band table fails to partition `[0, max_score]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum BandTableError {
    #[error("band table is empty")]
    Empty,

    #[error("first band starts at {min}, expected 0")]
    DoesNotStartAtZero { min: u32 },

    #[error("band [{min}, {max}] is inverted")]
    Inverted { min: u32, max: u32 },

    #[error("scores {from}..={to} fall between bands")]
    Gap { from: u32, to: u32 },

    #[error("band starting at {next_min} overlaps the band ending at {previous_max}")]
    Overlap { previous_max: u32, next_min: u32 },

    #[error("bands cover [0, {covered_max}] but the maximum possible score is {max_score}")]
    CoverageMismatch { covered_max: u32, max_score: u32 },
}

/// Check that `bands` are ascending, contiguous, non-overlapping, and cover
/// exactly `[0, max_score]`.
///
/// Bands are checked in table order and the first violation is returned.
pub fn validate_band_table(bands: &[Band], max_score: u32) -> Result<(), BandTableError> {
    let first = bands.first().ok_or(BandTableError::Empty)?;
    if first.min != 0 {
        return Err(BandTableError::DoesNotStartAtZero { min: first.min });
    }

    if let Some(band) = bands.iter().find(|b| b.min > b.max) {
        return Err(BandTableError::Inverted {
            min: band.min,
            max: band.max,
        });
    }

    for pair in bands.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.min <= previous.max {
            return Err(BandTableError::Overlap {
                previous_max: previous.max,
                next_min: next.min,
            });
        }
        if next.min > previous.max + 1 {
            return Err(BandTableError::Gap {
                from: previous.max + 1,
                to: next.min - 1,
            });
        }
    }

    // `first` exists, so `last` does too.
    let covered_max = bands.last().map_or(first.max, |b| b.max);
    if covered_max != max_score {
        return Err(BandTableError::CoverageMismatch {
            covered_max,
            max_score,
        });
    }

    Ok(())
}
