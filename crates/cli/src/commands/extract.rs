//! Extract command handler: print a document's extracted plain text.

use crate::extract::extract_text;
use clap::Args;
use condense_core::AppResult;
use std::path::PathBuf;

/// Extract and print a document's plain text
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Document to extract (PDF or plain text)
    pub file: PathBuf,
}

impl ExtractCommand {
    /// Execute the extract command.
    pub async fn execute(&self) -> AppResult<()> {
        let text = extract_text(&self.file)?;
        tracing::info!("Extracted {} chars from {:?}", text.chars().count(), self.file);

        println!("{}", text);

        Ok(())
    }
}
