use std::collections::HashMap;
use std::fmt;

use haven_instruments::Instrument;
use haven_instruments::scoring::Question;

use crate::error::ScreeningError;

/// The in-progress state of one user working through one instrument.
///
/// A session only ever holds answers that are valid option scores of
/// questions in its own instrument. The pointer is moved by the
/// [`Navigator`](crate::navigator::Navigator), which enforces the
/// completion gate.
pub struct Session {
    instrument: Box<dyn Instrument>,
    position: usize,
    answers: HashMap<String, u32>,
    complete: bool,
}

impl Session {
    /// A fresh session: pointer at the first question, nothing answered.
    pub fn new(instrument: Box<dyn Instrument>) -> Self {
        Self {
            instrument,
            position: 0,
            answers: HashMap::new(),
            complete: false,
        }
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The question at the pointer.
    pub fn current_question(&self) -> Result<&Question, ScreeningError> {
        if self.complete {
            return Err(ScreeningError::NoActiveSession);
        }
        self.instrument
            .questions()
            .get(self.position)
            .ok_or(ScreeningError::NoActiveSession)
    }

    /// Record `score` for `question_id`, replacing any earlier answer.
    pub fn record_answer(&mut self, question_id: &str, score: u32) -> Result<(), ScreeningError> {
        if self.complete {
            return Err(ScreeningError::NoActiveSession);
        }
        let question = self.instrument.question(question_id).ok_or_else(|| {
            ScreeningError::InvalidQuestion {
                instrument_id: self.instrument.id(),
                question_id: question_id.to_string(),
            }
        })?;
        if !question.accepts(score) {
            return Err(ScreeningError::InvalidScore {
                question_id: question_id.to_string(),
                score,
            });
        }

        let previous = self.answers.insert(question.id.clone(), score);
        tracing::debug!(
            instrument = %self.instrument.id(),
            question_id,
            score,
            replaced = ?previous,
            "answer recorded"
        );
        Ok(())
    }

    /// The recorded score for `question_id`, if any.
    pub fn answer(&self, question_id: &str) -> Option<u32> {
        self.answers.get(question_id).copied()
    }

    /// Recorded answers in instrument order. Unanswered questions are skipped.
    pub fn answers(&self) -> impl Iterator<Item = (&Question, u32)> {
        self.instrument
            .questions()
            .iter()
            .filter_map(|q| self.answer(&q.id).map(|score| (q, score)))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// The first question in instrument order without an answer.
    pub fn first_unanswered(&self) -> Option<&Question> {
        self.instrument
            .questions()
            .iter()
            .find(|q| !self.answers.contains_key(&q.id))
    }

    /// Sum of every recorded answer. Always recomputed from the answers.
    pub(crate) fn total(&self) -> u32 {
        self.answers().map(|(_, score)| score).sum()
    }

    pub(crate) fn is_last_question(&self) -> bool {
        self.position + 1 >= self.instrument.question_count()
    }

    pub(crate) fn step_forward(&mut self) {
        self.position += 1;
    }

    pub(crate) fn step_back(&mut self) {
        self.position -= 1;
    }

    pub(crate) fn into_instrument(self) -> Box<dyn Instrument> {
        self.instrument
    }

    pub(crate) fn mark_complete(&mut self) {
        self.complete = true;
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("instrument", &self.instrument.id())
            .field("position", &self.position)
            .field("answers", &self.answers)
            .field("complete", &self.complete)
            .finish()
    }
}
