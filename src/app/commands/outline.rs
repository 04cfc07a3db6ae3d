//! Outline command execution logic: plan without drafting.

use std::path::PathBuf;

use crate::app::commands::generate::load_config;
use crate::app::pipeline;
use crate::domain::{AppError, ChapterCount, Concept, Outline};
use crate::ports::MockCompletionClient;
use crate::services::HttpCompletionClient;

/// Options for the outline command.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Core concept text for the book.
    pub concept: String,
    /// Requested number of principles.
    pub chapters: usize,
    /// Explicit config file path (None = `bookcraft.toml` if present).
    pub config: Option<PathBuf>,
    /// Run against the offline mock client.
    pub mock: bool,
}

/// Execute the outline command.
pub fn execute(options: OutlineOptions) -> Result<Outline, AppError> {
    let concept = Concept::new(options.concept)?;
    let count = ChapterCount::new(options.chapters)?;
    let config = load_config(options.config.as_deref())?;

    if options.mock {
        pipeline::outline::plan(&MockCompletionClient, &concept, count)
    } else {
        let client = HttpCompletionClient::from_env_with_config(&config.completion)?;
        pipeline::outline::plan(&client, &concept, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_outline_has_requested_length() {
        let outline = execute(OutlineOptions {
            concept: "Patience wins negotiations".to_string(),
            chapters: 4,
            config: None,
            mock: true,
        })
        .unwrap();

        assert_eq!(outline.len(), 4);
    }
}
