use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::follow_up::FollowUp;
use super::instrument_id::InstrumentId;
use super::severity::Severity;

/// The outcome of a completed screening session.
///
/// Built once from a complete session and handed to the host for display.
/// Nothing in Haven stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub instrument_id: InstrumentId,
    pub instrument_title: String,
    pub score: u32,
    pub max_score: u32,
    pub severity: Severity,
    pub description: String,
    /// One entry per question, in instrument order.
    pub responses: Vec<ItemResponse>,
    pub follow_ups: Vec<FollowUp>,
    pub completed_at: jiff::Timestamp,
}

impl ScreeningResult {
    pub fn booking_recommended(&self) -> bool {
        self.follow_ups
            .iter()
            .any(|f| matches!(f, FollowUp::Booking { recommended: true }))
    }
}

/// The answer recorded for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemResponse {
    pub question_id: String,
    pub question: String,
    pub score: u32,
    pub label: String,
}
