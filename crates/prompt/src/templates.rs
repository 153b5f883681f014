//! Prompt templates and stop-sequence sets.
//!
//! Templates are embedded constants with a single `{{text}}` Handlebars
//! placeholder. The stop sets live here as well: they fence the model off
//! from drifting back into the templates' own structural markers, so they
//! are part of the same contract as the template text.

/// Per-window bullet summary prompt (map stage).
pub const CHUNK_TEMPLATE: &str = "\
Summarize the following passage in clear academic English as concise bullet points.
- Use 5-8 bullets.
- Preserve key technical terms and important numbers.
- Avoid metadata (journal names, URLs, figure labels, citation markers).
- Only write in English.

Passage:
{{text}}

Bullet summary:
";

/// Final synthesis prompt (reduce stage), fed the stitched intermediate.
pub const SYNTHESIS_TEMPLATE: &str = "\
You are an expert academic assistant. Using the section-wise summaries of a scientific article provided below, write a comprehensive and well-structured academic summary of the entire paper. Your goal is to integrate and condense the essential information from all sections into a single, cohesive summary that is:

- At least 500 words in length (preferably 550-800 words)
- Written in clear, fluent, formal academic English
- Organized into distinct paragraphs, each addressing one or more of the following aspects:
  - Objective and motivation of the research
  - Methodology and data collection procedures
  - Main results and analytical insights
  - Conclusions, implications, and potential future work
- Avoid inclusion of irrelevant metadata (e.g., journal names, URLs, figure labels such as \"Fig-1\", citation markers like \"[1]\", or publication headers)
- Do not reproduce the original section titles (e.g., \"Introduction\", \"Methodology\")
- Focus on conveying the substance of the article's content without unnecessary repetition
- Ensure a logical and smooth progression between paragraphs through appropriate transitions
- Preserve key technical terms and significant numerical results when relevant
- Only write in English.

Begin your output directly with the summary text. Below are the extracted chunk-wise summaries to be synthesized:

{{text}}
";

/// Translation prompt for the chat-mode language command.
pub const TRANSLATION_TEMPLATE: &str = "\
Translate the following to natural Turkish, keep bullet structure if any:

{{text}}";

/// Stop sequences for the map stage and the translation pass.
pub fn default_stops() -> Vec<String> {
    vec!["</s>".to_string()]
}

/// Extended stop set for the reduce stage.
///
/// Also halts on leaked structural markers (chunk labels, template labels,
/// question openers) so the synthesis cannot drift into fabricating new
/// chunks or Q&A continuations.
pub fn synthesis_stops() -> Vec<String> {
    [
        "</s>",
        "\n[Chunk",
        "\nChunk",
        "Bullet summary:",
        "Passage:",
        "Q:",
        "Question:",
        "What are",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_text_placeholder() {
        assert!(CHUNK_TEMPLATE.contains("{{text}}"));
        assert!(SYNTHESIS_TEMPLATE.contains("{{text}}"));
        assert!(TRANSLATION_TEMPLATE.contains("{{text}}"));
    }

    #[test]
    fn test_synthesis_stops_cover_structural_markers() {
        let stops = synthesis_stops();
        assert!(stops.contains(&"</s>".to_string()));
        assert!(stops.contains(&"\n[Chunk".to_string()));
        assert!(stops.contains(&"Bullet summary:".to_string()));
        assert!(stops.contains(&"Passage:".to_string()));
        assert!(stops.contains(&"Question:".to_string()));
    }

    #[test]
    fn test_default_stops() {
        assert_eq!(default_stops(), vec!["</s>".to_string()]);
    }
}
