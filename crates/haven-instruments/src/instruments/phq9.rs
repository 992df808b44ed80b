use std::sync::LazyLock;

use haven_core::models::instrument_id::InstrumentId;
use haven_core::models::severity::Severity;

use crate::Instrument;
use crate::scoring::{Band, Question};

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    super::frequency_items(&[
        ("phq1", "Little interest or pleasure in doing things"),
        ("phq2", "Feeling down, depressed, or hopeless"),
        ("phq3", "Trouble falling or staying asleep, or sleeping too much"),
        ("phq4", "Feeling tired or having little energy"),
        ("phq5", "Poor appetite or overeating"),
        (
            "phq6",
            "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
        ),
        (
            "phq7",
            "Trouble concentrating on things, such as reading or watching television",
        ),
        (
            "phq8",
            "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
        ),
        (
            "phq9",
            "Thoughts that you would be better off dead, or of hurting yourself in some way",
        ),
    ])
});

static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
    vec![
        Band::new(0, 4, Severity::Minimal, "Minimal depressive symptoms"),
        Band::new(5, 9, Severity::Mild, "Mild depressive symptoms"),
        Band::new(10, 14, Severity::Moderate, "Moderate depressive symptoms"),
        Band::new(15, 27, Severity::Severe, "Severe depressive symptoms"),
    ]
});

/// Patient Health Questionnaire, nine items, total 0-27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Phq9
    }

    fn title(&self) -> &str {
        "PHQ-9 Depression Screening"
    }

    fn description(&self) -> &str {
        "Patient Health Questionnaire - assesses depression severity over the past 2 weeks"
    }

    fn overview(&self) -> &[&str] {
        &[
            "9 questions about mood and activities",
            "Takes 3-5 minutes to complete",
            "Provides severity assessment",
            "Helps identify depression symptoms",
        ]
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn bands(&self) -> &[Band] {
        &BANDS
    }
}
