use tera::{Context, Tera};

use haven_core::models::result::ScreeningResult;

use crate::error::ExportError;
use crate::templates::{SUMMARY_TEMPLATE, SUMMARY_TEMPLATE_NAME};

/// Render a Tera template with a ScreeningResult.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The result fields become the template context variables, alongside the
/// derived `severity_label`, `completed_at_display`, and
/// `booking_recommended` values.
pub fn render_result(
    template_name: &str,
    template_content: &str,
    result: &ScreeningResult,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = build_context(result)?;
    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(
        template = template_name,
        instrument = %result.instrument_id,
        bytes = rendered.len(),
        "result rendered"
    );
    Ok(rendered)
}

/// Render the built-in plain-text summary.
pub fn render_summary(result: &ScreeningResult) -> Result<String, ExportError> {
    render_result(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE, result)
}

/// Pretty-printed JSON for hosts that render results themselves.
pub fn to_json(result: &ScreeningResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn build_context(result: &ScreeningResult) -> Result<Context, ExportError> {
    let value = serde_json::to_value(result)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("severity_label", result.severity.label());
    context.insert(
        "completed_at_display",
        &result.completed_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
    );
    context.insert("booking_recommended", &result.booking_recommended());
    Ok(context)
}
