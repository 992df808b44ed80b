use std::sync::LazyLock;

use haven_core::models::instrument_id::InstrumentId;
use haven_core::models::severity::Severity;

use crate::Instrument;
use crate::scoring::{Band, Question};

static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    super::frequency_items(&[
        ("gad1", "Feeling nervous, anxious, or on edge"),
        ("gad2", "Not being able to stop or control worrying"),
        ("gad3", "Worrying too much about different things"),
        ("gad4", "Trouble relaxing"),
        ("gad5", "Being so restless that it's hard to sit still"),
        ("gad6", "Becoming easily annoyed or irritable"),
        ("gad7", "Feeling afraid as if something awful might happen"),
    ])
});

static BANDS: LazyLock<Vec<Band>> = LazyLock::new(|| {
    vec![
        Band::new(0, 4, Severity::Minimal, "Minimal anxiety symptoms"),
        Band::new(5, 9, Severity::Mild, "Mild anxiety symptoms"),
        Band::new(10, 14, Severity::Moderate, "Moderate anxiety symptoms"),
        Band::new(15, 21, Severity::Severe, "Severe anxiety symptoms"),
    ]
});

/// Generalized Anxiety Disorder scale, seven items, total 0-21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> InstrumentId {
        InstrumentId::Gad7
    }

    fn title(&self) -> &str {
        "GAD-7 Anxiety Screening"
    }

    fn description(&self) -> &str {
        "Generalized Anxiety Disorder assessment for the past 2 weeks"
    }

    fn overview(&self) -> &[&str] {
        &[
            "7 questions about anxiety and worry",
            "Takes 2-3 minutes to complete",
            "Measures anxiety severity",
            "Helps identify anxiety disorders",
        ]
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }

    fn bands(&self) -> &[Band] {
        &BANDS
    }
}
