use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identifier of a registered screening instrument.
///
/// The set is closed: adding an instrument means adding a variant here and
/// a definition in `haven-instruments`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    /// Patient Health Questionnaire (depression).
    Phq9,
    /// Generalized Anxiety Disorder scale.
    Gad7,
}

impl InstrumentId {
    /// Every identifier, in registry order.
    pub const ALL: [InstrumentId; 2] = [InstrumentId::Phq9, InstrumentId::Gad7];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "phq9",
            InstrumentId::Gad7 => "gad7",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phq9" => Ok(InstrumentId::Phq9),
            "gad7" => Ok(InstrumentId::Gad7),
            _ => Err(CoreError::UnknownInstrument(s.to_string())),
        }
    }
}
