use std::sync::LazyLock;

use haven_core::models::instrument_id::InstrumentId;
use haven_core::models::severity::Severity;
use haven_instruments::Instrument;
use haven_instruments::instruments::frequency_options;
use haven_instruments::scoring::{Band, Question};
use haven_screening::{Advance, NavigationState, Navigator, ScreeningError};

/// A five-item depression screen with the full PHQ-9 band table.
struct ShortPhq;

static SHORT_QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    (1..=5)
        .map(|n| Question::new(format!("phq{n}"), format!("Item {n}"), frequency_options()))
        .collect()
});

static SHORT_BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
    vec![
        Band::new(0, 4, Severity::Minimal, "Minimal depressive symptoms"),
        Band::new(5, 9, Severity::Mild, "Mild depressive symptoms"),
        Band::new(10, 14, Severity::Moderate, "Moderate depressive symptoms"),
        Band::new(15, 27, Severity::Severe, "Severe depressive symptoms"),
    ]
});

impl Instrument for ShortPhq {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9
    }

    fn title(&self) -> &str {
        "Short depression screen"
    }

    fn description(&self) -> &str {
        "Five-item variant"
    }

    fn questions(&self) -> &[Question] {
        &SHORT_QUESTIONS
    }

    fn bands(&self) -> &[Band] {
        &SHORT_BANDS
    }
}

fn answer_current(navigator: &mut Navigator, score: u32) -> Advance {
    let question_id = navigator.current_question().unwrap().id.clone();
    navigator.record_answer(&question_id, score).unwrap();
    navigator.advance().unwrap()
}

fn complete_with(navigator: &mut Navigator, instrument_id: &str, scores: &[u32]) {
    navigator.start(instrument_id).unwrap();
    for &score in scores {
        answer_current(navigator, score);
    }
    assert_eq!(navigator.state(), NavigationState::Complete);
}

#[test]
fn navigator_starts_in_selecting() {
    let navigator = Navigator::new();
    assert_eq!(navigator.state(), NavigationState::Selecting);
    assert_eq!(
        navigator.current_question(),
        Err(ScreeningError::NoActiveSession)
    );
}

#[test]
fn start_opens_a_fresh_session_at_the_first_question() {
    let mut navigator = Navigator::new();
    navigator.start("phq9").unwrap();

    assert_eq!(navigator.state(), NavigationState::InProgress);
    let session = navigator.session().unwrap();
    assert_eq!(session.position(), 0);
    assert_eq!(session.answered_count(), 0);
    assert!(!session.is_complete());
    assert_eq!(navigator.current_question().unwrap().id, "phq1");
}

#[test]
fn unknown_instrument_leaves_navigator_usable() {
    let mut navigator = Navigator::new();
    assert_eq!(
        navigator.start("unknown"),
        Err(ScreeningError::UnknownInstrument("unknown".to_string()))
    );
    assert_eq!(navigator.state(), NavigationState::Selecting);

    navigator.start("phq9").unwrap();
    assert_eq!(navigator.state(), NavigationState::InProgress);
    assert_eq!(navigator.current_question().unwrap().id, "phq1");
}

#[test]
fn start_requires_the_exact_registered_id() {
    let mut navigator = Navigator::new();
    for input in [" PHQ9 ", "Gad7", "phq9 "] {
        assert_eq!(
            navigator.start(input),
            Err(ScreeningError::UnknownInstrument(input.to_string()))
        );
        assert_eq!(navigator.state(), NavigationState::Selecting);
    }
}

#[test]
fn unknown_instrument_does_not_discard_a_running_session() {
    let mut navigator = Navigator::new();
    navigator.start("gad7").unwrap();
    answer_current(&mut navigator, 2);

    assert!(navigator.start("nope").is_err());
    let session = navigator.session().unwrap();
    assert_eq!(session.instrument().id(), InstrumentId::Gad7);
    assert_eq!(session.position(), 1);
    assert_eq!(session.answer("gad1"), Some(2));
}

#[test]
fn advancing_without_an_answer_is_rejected_and_pointer_stays() {
    let mut navigator = Navigator::new();
    navigator.start("gad7").unwrap();
    answer_current(&mut navigator, 1);
    answer_current(&mut navigator, 1);

    assert_eq!(
        navigator.advance(),
        Err(ScreeningError::AnswerRequired {
            question_id: "gad3".to_string()
        })
    );
    assert_eq!(navigator.session().unwrap().position(), 2);
    assert_eq!(navigator.state(), NavigationState::InProgress);
}

#[test]
fn advance_reports_the_new_position() {
    let mut navigator = Navigator::new();
    navigator.start("phq9").unwrap();
    assert_eq!(answer_current(&mut navigator, 0), Advance::Moved { position: 1 });
    assert_eq!(answer_current(&mut navigator, 0), Advance::Moved { position: 2 });
}

#[test]
fn retreat_keeps_answers_and_needs_no_answer() {
    let mut navigator = Navigator::new();
    navigator.start("phq9").unwrap();
    answer_current(&mut navigator, 3);
    answer_current(&mut navigator, 2);
    navigator.record_answer("phq3", 1).unwrap();

    assert_eq!(navigator.retreat(), Ok(1));
    assert_eq!(navigator.current_question().unwrap().id, "phq2");
    let session = navigator.session().unwrap();
    assert_eq!(session.answer("phq3"), Some(1));
    assert_eq!(session.answer("phq2"), Some(2));

    // No answer is needed on the question being left.
    navigator.advance().unwrap();
    navigator.advance().unwrap();
    assert_eq!(navigator.current_question().unwrap().id, "phq4");
    assert_eq!(navigator.retreat(), Ok(2));
}

#[test]
fn retreat_from_first_question_is_rejected() {
    let mut navigator = Navigator::new();
    navigator.start("gad7").unwrap();
    assert_eq!(navigator.retreat(), Err(ScreeningError::AtFirstQuestion));
    assert_eq!(navigator.session().unwrap().position(), 0);
}

#[test]
fn advancing_from_the_last_question_completes() {
    let mut navigator = Navigator::new();
    navigator.start("gad7").unwrap();
    for _ in 0..6 {
        assert!(matches!(
            answer_current(&mut navigator, 1),
            Advance::Moved { .. }
        ));
    }
    assert_eq!(answer_current(&mut navigator, 1), Advance::Completed);
    assert!(navigator.is_complete());
    assert_eq!(navigator.state(), NavigationState::Complete);
}

#[test]
fn completed_session_rejects_further_answers_until_reset() {
    let mut navigator = Navigator::new();
    complete_with(&mut navigator, "gad7", &[0; 7]);

    assert_eq!(
        navigator.record_answer("gad1", 3),
        Err(ScreeningError::NoActiveSession)
    );
    assert_eq!(navigator.advance(), Err(ScreeningError::NoActiveSession));
    assert_eq!(navigator.retreat(), Err(ScreeningError::NoActiveSession));
    assert_eq!(
        navigator.current_question(),
        Err(ScreeningError::NoActiveSession)
    );
    assert_eq!(navigator.compute_score(), Ok(0));

    navigator.reset();
    assert_eq!(navigator.state(), NavigationState::Selecting);
    navigator.start("gad7").unwrap();
    navigator.record_answer("gad1", 3).unwrap();
}

#[test]
fn five_item_scenario_scores_mild() {
    let mut navigator = Navigator::new();
    navigator.start_with(Box::new(ShortPhq));
    for score in [1, 2, 1, 0, 1] {
        answer_current(&mut navigator, score);
    }

    assert!(navigator.is_complete());
    let score = navigator.compute_score().unwrap();
    assert_eq!(score, 5);
    let band = navigator.interpret(score).unwrap();
    assert_eq!(band.level, Severity::Mild);
    assert_eq!(band.level.label(), "Mild");
}

#[test]
fn partially_answered_gad7_is_not_scoreable() {
    let mut navigator = Navigator::new();
    navigator.start("gad7").unwrap();
    for score in [1, 2, 3, 0] {
        answer_current(&mut navigator, score);
    }

    assert_eq!(
        navigator.compute_score(),
        Err(ScreeningError::SessionNotComplete)
    );
    assert_eq!(navigator.result(), Err(ScreeningError::SessionNotComplete));
}

#[test]
fn score_uses_only_the_latest_answer_per_question() {
    let mut navigator = Navigator::new();
    navigator.start("phq9").unwrap();
    navigator.record_answer("phq1", 3).unwrap();
    navigator.record_answer("phq1", 1).unwrap();
    navigator.advance().unwrap();
    for _ in 1..9 {
        answer_current(&mut navigator, 2);
    }

    assert_eq!(navigator.compute_score(), Ok(1 + 8 * 2));
    assert_eq!(navigator.interpret(17).unwrap().level, Severity::Severe);
}

#[test]
fn compute_score_and_interpret_are_repeatable() {
    let mut navigator = Navigator::new();
    complete_with(&mut navigator, "phq9", &[1, 1, 2, 0, 3, 1, 0, 2, 0]);

    let first_score = navigator.compute_score().unwrap();
    let second_score = navigator.compute_score().unwrap();
    assert_eq!(first_score, 10);
    assert_eq!(first_score, second_score);

    let first = navigator.interpret(first_score).unwrap();
    let second = navigator.interpret(first_score).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.level, Severity::Moderate);
}

#[test]
fn reset_then_start_reproduces_initial_state() {
    let mut navigator = Navigator::new();
    navigator.start("phq9").unwrap();
    answer_current(&mut navigator, 2);
    answer_current(&mut navigator, 2);

    navigator.reset();
    assert_eq!(navigator.state(), NavigationState::Selecting);
    assert!(navigator.session().is_none());

    navigator.start("phq9").unwrap();
    let session = navigator.session().unwrap();
    assert_eq!(session.position(), 0);
    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.answer("phq1"), None);
}

#[test]
fn restart_retakes_the_same_instrument() {
    let mut navigator = Navigator::new();
    complete_with(&mut navigator, "gad7", &[3; 7]);

    navigator.restart().unwrap();
    assert_eq!(navigator.state(), NavigationState::InProgress);
    assert_eq!(navigator.instrument_id(), Some(InstrumentId::Gad7));
    assert_eq!(navigator.session().unwrap().answered_count(), 0);
}

#[test]
fn restart_keeps_a_custom_instrument_definition() {
    let mut navigator = Navigator::new();
    navigator.start_with(Box::new(ShortPhq));
    navigator.restart().unwrap();
    assert_eq!(navigator.instrument().unwrap().question_count(), 5);
}

#[test]
fn restart_without_session_fails() {
    let mut navigator = Navigator::new();
    assert_eq!(navigator.restart(), Err(ScreeningError::NoActiveSession));
}

#[test]
fn switch_instrument_discards_the_previous_session() {
    let mut navigator = Navigator::new();
    complete_with(&mut navigator, "phq9", &[1; 9]);

    navigator.switch_instrument("gad7").unwrap();
    assert_eq!(navigator.state(), NavigationState::InProgress);
    assert_eq!(navigator.instrument_id(), Some(InstrumentId::Gad7));
    assert_eq!(navigator.current_question().unwrap().id, "gad1");
    assert_eq!(navigator.session().unwrap().answered_count(), 0);
}

#[test]
fn progress_tracks_position_and_answers() {
    let mut navigator = Navigator::new();
    assert_eq!(navigator.progress(), Err(ScreeningError::NoActiveSession));

    navigator.start("phq9").unwrap();
    answer_current(&mut navigator, 1);
    answer_current(&mut navigator, 1);

    let progress = navigator.progress().unwrap();
    assert_eq!(progress.position, 2);
    assert_eq!(progress.total, 9);
    assert_eq!(progress.answered, 2);
    assert!((progress.percent - 100.0 / 3.0).abs() < 1e-9);
}

#[test]
fn result_collects_responses_and_follow_ups() {
    let mut navigator = Navigator::new();
    complete_with(&mut navigator, "gad7", &[3, 3, 2, 2, 1, 0, 0]);

    let result = navigator.result().unwrap();
    assert_eq!(result.instrument_id, InstrumentId::Gad7);
    assert_eq!(result.instrument_title, "GAD-7 Anxiety Screening");
    assert_eq!(result.score, 11);
    assert_eq!(result.max_score, 21);
    assert_eq!(result.severity, Severity::Moderate);
    assert_eq!(result.description, "Moderate anxiety symptoms");
    assert_eq!(result.responses.len(), 7);
    assert_eq!(result.responses[0].question_id, "gad1");
    assert_eq!(result.responses[0].label, "Nearly every day");
    assert_eq!(result.responses[5].label, "Not at all");
    assert!(result.booking_recommended());
}

#[test]
fn interpret_without_session_fails() {
    let navigator = Navigator::new();
    assert_eq!(navigator.interpret(3), Err(ScreeningError::NoActiveSession));
    assert_eq!(
        navigator.compute_score(),
        Err(ScreeningError::NoActiveSession)
    );
}
