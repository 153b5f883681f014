//! Output sanitizer: strips known model artifacts from generated text.
//!
//! A heuristic, line-oriented filter over literal prefixes, not a semantic
//! validator. Lines matching known artifact shapes (chunk labels, leaked
//! Q&A openers, prompt-echo labels) are removed. Every run of removed
//! and/or blank lines folds into a single blank line, so paragraph breaks
//! survive without stacking up; this also makes the filter idempotent.

/// Case-sensitive artifact line prefixes.
const DROP_PREFIXES: &[&str] = &["[Chunk", "Bullet summary:", "Passage:"];

/// Case-insensitive leaked question/answer line prefixes.
const DROP_PREFIXES_CI: &[&str] = &["q:", "question:", "what are", "how can i"];

/// Remove known artifact lines from generated text.
///
/// Kept lines are kept verbatim and in order. Dropped lines and blank
/// lines collapse into a single blank separator, leading blanks are not
/// emitted, and the result is trimmed.
pub fn sanitize(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();

    for line in text.lines() {
        let stripped = line.trim();

        let drop = !stripped.is_empty() && {
            let lower = stripped.to_lowercase();
            DROP_PREFIXES.iter().any(|p| stripped.starts_with(p))
                || DROP_PREFIXES_CI.iter().any(|p| lower.starts_with(p))
        };

        if stripped.is_empty() || drop {
            // Fold runs of blank and dropped lines into one separator
            if !kept.is_empty() && !kept.last().map_or(false, |l| l.is_empty()) {
                kept.push("");
            }
        } else {
            kept.push(line);
        }
    }

    kept.join("\n").trim().to_string()
}
