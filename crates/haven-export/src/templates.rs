/// Name the built-in summary template is registered under.
pub const SUMMARY_TEMPLATE_NAME: &str = "summary.txt";

/// Plain-text result summary.
///
/// Besides the serialized `ScreeningResult` fields, the context carries
/// `severity_label`, `completed_at_display`, and `booking_recommended`.
pub const SUMMARY_TEMPLATE: &str = r#"{{ instrument_title }}
Completed {{ completed_at_display }}

Score: {{ score }} / {{ max_score }}
Severity: {{ severity_label }}
{{ description }}

Responses:
{% for response in responses -%}
{{ loop.index }}. {{ response.question }}: {{ response.label }} ({{ response.score }})
{% endfor %}
{%- if booking_recommended %}
Your score suggests that talking to a mental health professional could help.
{%- endif %}
This screening is not a diagnosis.
"#;
