pub mod gad7;
pub mod phq9;

use crate::scoring::{AnswerOption, Question};

/// The four-point frequency scale shared by PHQ-9 and GAD-7.
pub fn frequency_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("Not at all", 0),
        AnswerOption::new("Several days", 1),
        AnswerOption::new("More than half the days", 2),
        AnswerOption::new("Nearly every day", 3),
    ]
}

fn frequency_items(items: &[(&str, &str)]) -> Vec<Question> {
    items
        .iter()
        .map(|(id, text)| Question::new(*id, *text, frequency_options()))
        .collect()
}
