use haven_core::models::follow_up::follow_ups_for;
use haven_core::models::result::{ItemResponse, ScreeningResult};
use haven_instruments::Instrument;
use haven_instruments::scoring::Band;

use crate::error::ScreeningError;
use crate::session::Session;

/// Total score of a completed session.
///
/// Pure function of the recorded answers: calling it repeatedly on the same
/// session always yields the same value.
pub fn compute_score(session: &Session) -> Result<u32, ScreeningError> {
    if !session.is_complete() {
        return Err(ScreeningError::SessionNotComplete);
    }
    Ok(session.total())
}

/// Resolve the severity band for `score` on `instrument`.
pub fn interpret(instrument: &dyn Instrument, score: u32) -> Result<&Band, ScreeningError> {
    Ok(instrument.interpret(score)?)
}

/// Assemble the result record for a completed session, stamped with the
/// current time.
pub fn build_result(session: &Session) -> Result<ScreeningResult, ScreeningError> {
    let score = compute_score(session)?;
    let instrument = session.instrument();
    let band = interpret(instrument, score)?;

    let responses = session
        .answers()
        .map(|(question, score)| ItemResponse {
            question_id: question.id.clone(),
            question: question.text.clone(),
            score,
            label: question
                .option(score)
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        })
        .collect();

    Ok(ScreeningResult {
        instrument_id: instrument.id(),
        instrument_title: instrument.title().to_string(),
        score,
        max_score: instrument.max_score(),
        severity: band.level,
        description: band.description.clone(),
        responses,
        follow_ups: follow_ups_for(instrument.id(), band.level),
        completed_at: jiff::Timestamp::now(),
    })
}
