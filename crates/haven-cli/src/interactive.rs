use console::style;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use haven_core::models::follow_up::FollowUp;
use haven_screening::{NavigationState, Navigator};

use crate::config::HavenConfig;
use crate::output;

const PREVIOUS: &str = "← Previous question";

enum NextStep {
    Retake,
    Switch(String),
    Quit,
}

/// Walk the user through `instrument_id`, then offer to retake it or take
/// another instrument.
pub fn take(instrument_id: &str, config: &HavenConfig) -> eyre::Result<()> {
    let theme = ColorfulTheme::default();
    let mut navigator = Navigator::new();
    navigator.start(instrument_id)?;

    println!(
        "{} {}\n",
        style("→").cyan(),
        style(navigator.instrument()?.title()).bold()
    );

    loop {
        match navigator.state() {
            NavigationState::InProgress => ask_current(&mut navigator, &theme, config)?,
            NavigationState::Complete => match show_result(&navigator, &theme, config)? {
                NextStep::Retake => navigator.restart()?,
                NextStep::Switch(id) => navigator.switch_instrument(&id)?,
                NextStep::Quit => {
                    navigator.reset();
                    return Ok(());
                }
            },
            NavigationState::Selecting => return Ok(()),
        }
    }
}

fn ask_current(
    navigator: &mut Navigator,
    theme: &ColorfulTheme,
    config: &HavenConfig,
) -> eyre::Result<()> {
    let progress = navigator.progress()?;
    let stem = navigator.instrument()?.stem().to_string();
    let question = navigator.current_question()?.clone();
    let previous_answer = navigator.session().and_then(|s| s.answer(&question.id));

    let mut items: Vec<&str> = question.options.iter().map(|o| o.label.as_str()).collect();
    if progress.position > 0 {
        items.push(PREVIOUS);
    }
    let default = previous_answer
        .and_then(|score| question.options.iter().position(|o| o.score == score))
        .unwrap_or(0);

    let prompt = if config.show_progress {
        format!(
            "Question {} of {}  {}\n  {}",
            progress.position + 1,
            progress.total,
            stem,
            question.text
        )
    } else {
        format!("{stem}\n  {}", question.text)
    };

    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(default)
        .interact()?;

    match question.options.get(choice) {
        Some(option) => {
            navigator.record_answer(&question.id, option.score)?;
            navigator.advance()?;
        }
        None => {
            navigator.retreat()?;
        }
    }
    Ok(())
}

fn show_result(
    navigator: &Navigator,
    theme: &ColorfulTheme,
    config: &HavenConfig,
) -> eyre::Result<NextStep> {
    let result = navigator.result()?;
    println!(
        "\n{}",
        output::format_result(&result, config.default_format, config)?
    );

    let mut labels = vec!["Retake this test".to_string()];
    let mut steps = vec![NextStep::Retake];
    for follow_up in &result.follow_ups {
        if let FollowUp::OtherInstrument { instrument_id } = follow_up {
            labels.push(format!("Take the {} instead", instrument_id.as_str().to_uppercase()));
            steps.push(NextStep::Switch(instrument_id.to_string()));
        }
    }
    labels.push("Quit".to_string());
    steps.push(NextStep::Quit);

    let choice = Select::with_theme(theme)
        .with_prompt("What next?")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    Ok(steps.into_iter().nth(choice).unwrap_or(NextStep::Quit))
}
