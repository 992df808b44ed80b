use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::instrument_id::InstrumentId;
use super::severity::Severity;

/// A next step offered to the user on the result screen.
///
/// The host decides where each one routes; the engine only says which
/// ones apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum FollowUp {
    /// Browse self-help resources.
    Resources,
    /// Book a session with a counsellor.
    Booking { recommended: bool },
    /// Take the same instrument again from scratch.
    Retake { instrument_id: InstrumentId },
    /// Take a different instrument.
    OtherInstrument { instrument_id: InstrumentId },
}

/// Follow-ups for a completed screening, in display order.
pub fn follow_ups_for(instrument_id: InstrumentId, severity: Severity) -> Vec<FollowUp> {
    let mut follow_ups = vec![
        FollowUp::Resources,
        FollowUp::Booking {
            recommended: severity.warrants_professional_support(),
        },
        FollowUp::Retake { instrument_id },
    ];
    follow_ups.extend(
        InstrumentId::ALL
            .into_iter()
            .filter(|other| *other != instrument_id)
            .map(|other| FollowUp::OtherInstrument {
                instrument_id: other,
            }),
    );
    follow_ups
}
