use std::path::PathBuf;

use haven_core::models::result::ScreeningResult;
use haven_screening::{Navigator, ScreeningError, get_instrument, list_instruments};

use crate::cli::{Cli, Command, ConfigAction};
use crate::config::{self, HavenConfig};
use crate::{interactive, output};

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> eyre::Result<()> {
    haven_instruments::validate_registry()?;

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Command::List => {
            print!("{}", output::format_instrument_list(&list_instruments())?);
            Ok(())
        }
        Command::Take { instrument } => interactive::take(&instrument, &config),
        Command::Score {
            instrument,
            answers,
            format,
        } => score(&instrument, &answers, format, &config),
        Command::Config { action } => run_config(action, config_path, &config),
    }
}

/// Feed `answers` through a fresh session in question order and return the
/// result.
///
/// Each score is recorded for the current question before advancing, so the
/// usual validation and completion gate apply. Too few answers leave the
/// session incomplete ([`ScreeningError::SessionNotComplete`]); answers
/// beyond the last question hit a completed session
/// ([`ScreeningError::NoActiveSession`]).
pub fn score_answers(instrument_id: &str, answers: &[u32]) -> Result<ScreeningResult, ScreeningError> {
    let mut navigator = Navigator::new();
    navigator.start(instrument_id)?;
    for &score in answers {
        let question_id = navigator.current_question()?.id.clone();
        navigator.record_answer(&question_id, score)?;
        navigator.advance()?;
    }
    navigator.result()
}

fn score(
    instrument_id: &str,
    answers: &[u32],
    format: Option<config::OutputFormat>,
    config: &HavenConfig,
) -> eyre::Result<()> {
    let instrument = get_instrument(instrument_id)?;
    if answers.len() != instrument.question_count() {
        return Err(eyre::eyre!(
            "{} has {} questions but {} answers were given",
            instrument.title(),
            instrument.question_count(),
            answers.len()
        ));
    }

    let result = score_answers(instrument_id, answers)?;
    let format = format.unwrap_or(config.default_format);
    println!("{}", output::format_result(&result, format, config)?);
    Ok(())
}

fn run_config(action: ConfigAction, path: PathBuf, config: &HavenConfig) -> eyre::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigAction::Init => {
            if path.exists() {
                println!("config already exists at {}", path.display());
            } else {
                config::save_config(&path, &HavenConfig::default())?;
                println!("wrote default config to {}", path.display());
            }
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}
