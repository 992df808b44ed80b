use serde::{Deserialize, Serialize};
use ts_rs::TS;

use haven_core::models::instrument_id::InstrumentId;
use haven_core::models::result::ScreeningResult;
use haven_instruments::Instrument;
use haven_instruments::scoring::{Band, Question};

use crate::error::ScreeningError;
use crate::scoring;
use crate::session::Session;

/// Where the navigator is in the screening lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NavigationState {
    /// No session; the host shows the instrument-selection screen.
    Selecting,
    InProgress,
    /// Every question answered and submitted. Terminal until reset.
    Complete,
}

/// Outcome of a successful [`Navigator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Advance {
    /// Moved to the question at `position`.
    Moved { position: usize },
    /// Submitted the final question; the session is complete.
    Completed,
}

/// Position within the active session, for progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    /// Zero-based index of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    /// `(position + 1) / total` as a percentage.
    pub percent: f64,
}

/// Drives a single screening session through
/// `Selecting -> InProgress -> Complete`.
///
/// The state is derived from the session itself, so the two can never
/// disagree. The navigator is reusable: after [`reset`](Self::reset) it
/// accepts a new session immediately.
#[derive(Debug, Default)]
pub struct Navigator {
    session: Option<Session>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        match &self.session {
            None => NavigationState::Selecting,
            Some(s) if s.is_complete() => NavigationState::Complete,
            Some(_) => NavigationState::InProgress,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == NavigationState::Complete
    }

    /// The active session, complete or not.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Begin a fresh session on the registered instrument `instrument_id`.
    ///
    /// Any existing session is discarded. An unknown id leaves the
    /// navigator untouched.
    pub fn start(&mut self, instrument_id: &str) -> Result<(), ScreeningError> {
        let instrument = haven_instruments::get_instrument(instrument_id)?;
        self.start_with(instrument);
        Ok(())
    }

    /// Begin a fresh session on an arbitrary instrument definition.
    pub fn start_with(&mut self, instrument: Box<dyn Instrument>) {
        tracing::info!(
            instrument = %instrument.id(),
            questions = instrument.question_count(),
            "screening started"
        );
        self.session = Some(Session::new(instrument));
    }

    /// Discard the session and return to `Selecting`.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(
                instrument = %session.instrument().id(),
                complete = session.is_complete(),
                "session discarded"
            );
        }
    }

    /// Start the current instrument again from an empty session.
    pub fn restart(&mut self) -> Result<(), ScreeningError> {
        let session = self.session.take().ok_or(ScreeningError::NoActiveSession)?;
        self.start_with(session.into_instrument());
        Ok(())
    }

    /// Discard the session and start `instrument_id` instead.
    pub fn switch_instrument(&mut self, instrument_id: &str) -> Result<(), ScreeningError> {
        let instrument = haven_instruments::get_instrument(instrument_id)?;
        self.reset();
        self.start_with(instrument);
        Ok(())
    }

    /// The active session's instrument.
    pub fn instrument(&self) -> Result<&dyn Instrument, ScreeningError> {
        Ok(self.active()?.instrument())
    }

    pub fn current_question(&self) -> Result<&Question, ScreeningError> {
        self.active()?.current_question()
    }

    pub fn record_answer(&mut self, question_id: &str, score: u32) -> Result<(), ScreeningError> {
        self.active_mut()?.record_answer(question_id, score)
    }

    /// Move to the next question, or complete the session from the last one.
    ///
    /// Fails with [`ScreeningError::AnswerRequired`] when the current
    /// question has no answer; the pointer does not move.
    pub fn advance(&mut self) -> Result<Advance, ScreeningError> {
        let session = self.active_mut()?;
        let question_id = session.current_question()?.id.clone();
        if session.answer(&question_id).is_none() {
            tracing::debug!(
                question_id = question_id.as_str(),
                "advance rejected, question unanswered"
            );
            return Err(ScreeningError::AnswerRequired { question_id });
        }

        if !session.is_last_question() {
            session.step_forward();
            tracing::debug!(position = session.position(), "advanced");
            return Ok(Advance::Moved {
                position: session.position(),
            });
        }

        if let Some(missing) = session.first_unanswered() {
            return Err(ScreeningError::AnswerRequired {
                question_id: missing.id.clone(),
            });
        }
        session.mark_complete();
        tracing::info!(
            instrument = %session.instrument().id(),
            answered = session.answered_count(),
            "screening complete"
        );
        Ok(Advance::Completed)
    }

    /// Move back one question. Answers are kept.
    pub fn retreat(&mut self) -> Result<usize, ScreeningError> {
        let session = self.active_mut()?;
        if session.position() == 0 {
            return Err(ScreeningError::AtFirstQuestion);
        }
        session.step_back();
        tracing::debug!(position = session.position(), "retreated");
        Ok(session.position())
    }

    pub fn progress(&self) -> Result<Progress, ScreeningError> {
        let session = self.active()?;
        let total = session.instrument().question_count();
        let percent = if total == 0 {
            0.0
        } else {
            (session.position() + 1) as f64 / total as f64 * 100.0
        };
        Ok(Progress {
            position: session.position(),
            total,
            answered: session.answered_count(),
            percent,
        })
    }

    /// Total score of the completed session.
    pub fn compute_score(&self) -> Result<u32, ScreeningError> {
        scoring::compute_score(self.active()?)
    }

    /// Severity band for `score` on the active instrument.
    pub fn interpret(&self, score: u32) -> Result<Band, ScreeningError> {
        scoring::interpret(self.active()?.instrument(), score).cloned()
    }

    /// Result record for the completed session.
    pub fn result(&self) -> Result<ScreeningResult, ScreeningError> {
        scoring::build_result(self.active()?)
    }

    /// Identifier of the instrument the session is bound to.
    pub fn instrument_id(&self) -> Option<InstrumentId> {
        self.session.as_ref().map(|s| s.instrument().id())
    }

    fn active(&self) -> Result<&Session, ScreeningError> {
        self.session.as_ref().ok_or(ScreeningError::NoActiveSession)
    }

    /// The session, only while answers may still change.
    fn active_mut(&mut self) -> Result<&mut Session, ScreeningError> {
        match self.session.as_mut() {
            Some(session) if !session.is_complete() => Ok(session),
            _ => Err(ScreeningError::NoActiveSession),
        }
    }
}
