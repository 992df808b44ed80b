use std::fmt::Write as _;

use console::style;

use haven_core::models::follow_up::FollowUp;
use haven_core::models::result::ScreeningResult;
use haven_export::render;
use haven_instruments::InstrumentSummary;

use crate::config::{HavenConfig, OutputFormat};

/// Render a result in `format`, using the configured template for text.
pub fn format_result(
    result: &ScreeningResult,
    format: OutputFormat,
    config: &HavenConfig,
) -> eyre::Result<String> {
    match format {
        OutputFormat::Json => Ok(render::to_json(result)?),
        OutputFormat::Text => {
            let mut text = match &config.template_path {
                Some(path) => {
                    let template = std::fs::read_to_string(path).map_err(|e| {
                        eyre::eyre!("failed to read template at {}: {e}", path.display())
                    })?;
                    let name = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("custom.txt");
                    render::render_result(name, &template, result)?
                }
                None => render::render_summary(result)?,
            };
            text.push_str("\nNext steps:\n");
            for follow_up in &result.follow_ups {
                writeln!(text, "  - {}", describe_follow_up(follow_up, config))?;
            }
            Ok(text)
        }
    }
}

/// One line describing where a follow-up leads.
pub fn describe_follow_up(follow_up: &FollowUp, config: &HavenConfig) -> String {
    match follow_up {
        FollowUp::Resources => format!("View resources: {}", config.resources_url),
        FollowUp::Booking { recommended: true } => {
            format!("Book a session (recommended): {}", config.booking_url)
        }
        FollowUp::Booking { recommended: false } => {
            format!("Book a session: {}", config.booking_url)
        }
        FollowUp::Retake { instrument_id } => {
            format!("Retake this test: haven take {instrument_id}")
        }
        FollowUp::OtherInstrument { instrument_id } => {
            format!("Take another assessment: haven take {instrument_id}")
        }
    }
}

/// The instrument-selection listing.
pub fn format_instrument_list(summaries: &[InstrumentSummary]) -> eyre::Result<String> {
    let mut out = String::new();
    for summary in summaries {
        writeln!(
            out,
            "{}  {}",
            style(summary.id).cyan().bold(),
            style(&summary.title).bold()
        )?;
        writeln!(out, "    {}", summary.description)?;
        for line in &summary.overview {
            writeln!(out, "    • {line}")?;
        }
        out.push('\n');
    }
    Ok(out)
}
