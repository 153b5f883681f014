//! Conversational mode: session state and command handling.
//!
//! A session holds the extracted document text and the in-memory chat
//! history for one process; nothing is persisted and a new document
//! replaces the old one wholesale. Each command runs the full pipeline
//! with the interpreted budget, optionally followed by one translation
//! call whose non-empty result replaces the summary.

use crate::command::interpret;
use crate::pipeline::Summarizer;
use condense_core::AppResult;
use condense_prompt::{default_stops, translation_prompt};

/// Token budget for the translation pass.
const TRANSLATE_MAX_TOKENS: u32 = 800;

/// Reply used when a command arrives before any document is loaded.
pub const NO_DOCUMENT_REPLY: &str =
    "No document loaded yet. Load a document first, then send a command.";

/// Who produced a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the in-memory chat history.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

/// Conversational session over one document.
pub struct ChatSession {
    summarizer: Summarizer,
    default_budget: u32,
    document: Option<String>,
    history: Vec<ChatTurn>,
}

impl ChatSession {
    /// Create a session with no document loaded.
    pub fn new(summarizer: Summarizer) -> Self {
        let default_budget = summarizer.config().final_budget;
        Self {
            summarizer,
            default_budget,
            document: None,
            history: Vec::new(),
        }
    }

    /// Load the session document, replacing any previous one wholesale.
    pub fn load_document(&mut self, text: String) {
        tracing::info!("Document loaded ({} chars)", text.chars().count());
        self.document = Some(text);
    }

    /// Whether a document is currently loaded.
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// The chat history so far.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Handle one chat command and return the assistant reply.
    ///
    /// An empty reply means the model produced nothing even after the
    /// retry; it is recorded and returned as-is.
    pub async fn respond(&mut self, command: &str) -> AppResult<String> {
        self.history.push(ChatTurn {
            role: Role::User,
            content: command.to_string(),
        });

        let reply = match self.document.as_deref() {
            None => NO_DOCUMENT_REPLY.to_string(),
            Some(document) => {
                let directive = interpret(command, self.default_budget);
                tracing::debug!(
                    "Interpreted command: budget {}, translate {}",
                    directive.final_budget,
                    directive.translate
                );

                let mut summary = self
                    .summarizer
                    .summarize(document, Some(directive.final_budget))
                    .await?;

                if directive.translate {
                    let prompt = translation_prompt(&summary)?;
                    let translated = self
                        .summarizer
                        .generator()
                        .complete_once(&prompt, TRANSLATE_MAX_TOKENS, &default_stops())
                        .await?;
                    // An empty translation keeps the original summary
                    if !translated.is_empty() {
                        summary = translated;
                    }
                }

                summary
            }
        };

        self.history.push(ChatTurn {
            role: Role::Assistant,
            content: reply.clone(),
        });

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SummarizeConfig;
    use crate::testing::{generator, ScriptedClient};
    use std::sync::Arc;

    fn session(client: Arc<ScriptedClient>) -> ChatSession {
        ChatSession::new(Summarizer::new(generator(client), SummarizeConfig::default()))
    }

    #[tokio::test]
    async fn test_no_document_reply_skips_the_model() {
        let client = ScriptedClient::new(&[]);
        let mut session = session(client.clone());

        let reply = session.respond("summarize").await.unwrap();

        assert_eq!(reply, NO_DOCUMENT_REPLY);
        assert_eq!(client.calls(), 0);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, Role::User);
        assert_eq!(session.history()[1].role, Role::Assistant);
    }

    #[tokio::test]
    async fn test_translation_replaces_summary() {
        let client = ScriptedClient::new(&["BULLETS", "FINAL", "TURKISH VERSION"]);
        let mut session = session(client.clone());
        session.load_document("A short document.".to_string());

        let reply = session.respond("summary in turkish").await.unwrap();

        assert_eq!(reply, "TURKISH VERSION");
        assert_eq!(client.calls(), 3);

        let translation = client.request(2);
        assert!(translation
            .prompt
            .starts_with("Translate the following to natural Turkish"));
        assert!(translation.prompt.ends_with("FINAL"));
        assert_eq!(translation.max_tokens, Some(800));
        assert_eq!(translation.stop, vec!["</s>".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_translation_keeps_original() {
        let client = ScriptedClient::new(&["BULLETS", "FINAL", ""]);
        let mut session = session(client.clone());
        session.load_document("A short document.".to_string());

        let reply = session.respond("türkçe özet").await.unwrap();

        // Translation is a single non-retried call
        assert_eq!(reply, "FINAL");
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn test_budget_directive_reaches_the_synthesis() {
        let client = ScriptedClient::new(&["BULLETS", "FINAL"]);
        let mut session = session(client.clone());
        session.load_document("A short document.".to_string());

        session.respond("bullet points").await.unwrap();

        assert_eq!(client.request(1).max_tokens, Some(600));
    }

    #[tokio::test]
    async fn test_new_document_replaces_old() {
        let client = ScriptedClient::new(&["BULLETS", "FINAL"]);
        let mut session = session(client.clone());
        session.load_document("first document".to_string());
        session.load_document("second document".to_string());

        session.respond("summarize").await.unwrap();

        assert!(client.request(0).prompt.contains("second document"));
        assert!(!client.request(0).prompt.contains("first document"));
    }
}
