//! Prompt rendering with Handlebars.

use crate::templates::{CHUNK_TEMPLATE, SYNTHESIS_TEMPLATE, TRANSLATION_TEMPLATE};
use condense_core::{AppError, AppResult};
use handlebars::Handlebars;

/// Render the per-window bullet summary prompt around a passage.
pub fn chunk_prompt(passage: &str) -> AppResult<String> {
    render(CHUNK_TEMPLATE, passage)
}

/// Render the final synthesis prompt around the stitched intermediate.
pub fn synthesis_prompt(stitched: &str) -> AppResult<String> {
    render(SYNTHESIS_TEMPLATE, stitched)
}

/// Render the translation prompt around a finished summary.
pub fn translation_prompt(summary: &str) -> AppResult<String> {
    render(TRANSLATION_TEMPLATE, summary)
}

/// Render a template with its single `text` variable.
fn render(template: &str, text: &str) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Prompts are plain text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", &serde_json::json!({ "text": text }))
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    tracing::trace!("Rendered prompt ({} chars)", rendered.len());

    Ok(rendered)
}
