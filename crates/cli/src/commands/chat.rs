//! Chat command handler: a REPL over stdin.
//!
//! Every non-meta line is a chat command ("summarize", "bullet points",
//! "long summary", "summary in Turkish", ...). Replies go to stdout,
//! everything else to stderr.

use crate::extract::extract_text;
use clap::Args;
use condense_core::{config::AppConfig, AppResult};
use condense_llm::Generator;
use condense_summarize::{ChatSession, SummarizeConfig, Summarizer};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Chat over a document with summary commands
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Document to load on startup (PDF or plain text)
    pub file: Option<PathBuf>,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig, generator: Generator) -> AppResult<()> {
        let summarizer = Summarizer::new(generator, SummarizeConfig::from_config(config));
        let mut session = ChatSession::new(summarizer);

        if let Some(ref file) = self.file {
            let text = extract_text(file)?;
            eprintln!("Loaded {} ({} chars)", file.display(), text.chars().count());
            session.load_document(text);
        }

        eprintln!("Commands: summarize | bullet points | long summary | summary in Turkish");
        eprintln!("Meta: :load <path> to switch documents, :quit to exit");
        eprint!("> ");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = line.trim();

            if input.is_empty() {
                eprint!("> ");
                continue;
            }

            if input == ":quit" || input == ":exit" {
                break;
            }

            if let Some(path) = input.strip_prefix(":load ") {
                let path = path.trim();
                match extract_text(Path::new(path)) {
                    Ok(text) => {
                        eprintln!("Loaded {} ({} chars)", path, text.chars().count());
                        session.load_document(text);
                    }
                    Err(e) => eprintln!("Failed to load {}: {}", path, e),
                }
                eprint!("> ");
                continue;
            }

            match session.respond(input).await {
                Ok(reply) if reply.is_empty() => eprintln!("(model returned empty text)"),
                Ok(reply) => println!("{}", reply),
                // Keep the session alive across transport failures
                Err(e) => eprintln!("Error: {}", e),
            }
            eprint!("> ");
        }

        Ok(())
    }
}
