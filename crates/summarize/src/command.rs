//! Chat command interpretation.
//!
//! Free-text chat commands map to a token-budget override and an optional
//! translation flag via substring matching against explicit trigger
//! tables. No NLU and no negation handling: "not long" still matches
//! "long".

/// Commands asking for bullet output (caps the budget).
const BULLET_TRIGGERS: &[&str] = &["bullet", "madde"];

/// Commands asking for a long or detailed summary (raises the budget floor).
const LENGTH_TRIGGERS: &[&str] = &["long", "detailed", "detay"];

/// Commands asking for Turkish output.
const TRANSLATE_TRIGGERS: &[&str] = &["turkish", "türkçe"];

/// Effect of one chat command on the pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    /// Final synthesis token budget for this run
    pub final_budget: u32,

    /// Translate the finished summary to Turkish
    pub translate: bool,
}

/// Map a free-text chat command to its pipeline directive.
///
/// Bullet triggers take precedence over length triggers; anything else
/// falls back to a medium budget capped at 800 tokens. The translation
/// flag is independent of the budget rules.
pub fn interpret(command: &str, default_budget: u32) -> Directive {
    let cmd = command.trim().to_lowercase();
    let matches_any = |triggers: &[&str]| triggers.iter().any(|t| cmd.contains(t));

    let final_budget = if matches_any(BULLET_TRIGGERS) {
        default_budget.min(600)
    } else if matches_any(LENGTH_TRIGGERS) {
        default_budget.max(900)
    } else {
        default_budget.min(800)
    };

    Directive {
        final_budget,
        translate: matches_any(TRANSLATE_TRIGGERS),
    }
}
