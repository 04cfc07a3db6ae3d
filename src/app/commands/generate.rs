//! Generate command execution logic.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::pipeline;
use crate::domain::{AppError, ChapterCount, Concept, FileConfig, RunReport};
use crate::ports::MockCompletionClient;
use crate::services::HttpCompletionClient;

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Core concept text for the book.
    pub concept: String,
    /// Requested number of chapters.
    pub chapters: usize,
    /// Output path for the manuscript.
    pub out: PathBuf,
    /// Explicit config file path (None = `bookcraft.toml` if present).
    pub config: Option<PathBuf>,
    /// Run against the offline mock client.
    pub mock: bool,
}

/// Result of a generate execution.
#[derive(Debug)]
pub struct GenerateResult {
    /// The completed run, including outline and degradations.
    pub report: RunReport,
    /// Where the manuscript was written.
    pub out: PathBuf,
}

/// Execute the generate command.
pub fn execute(options: GenerateOptions) -> Result<GenerateResult, AppError> {
    let concept = Concept::new(options.concept)?;
    let count = ChapterCount::new(options.chapters)?;
    let config = load_config(options.config.as_deref())?;

    let report = if options.mock {
        pipeline::run(&MockCompletionClient, &concept, count)?
    } else {
        let client = HttpCompletionClient::from_env_with_config(&config.completion)?;
        pipeline::run(&client, &concept, count)?
    };

    fs::write(&options.out, report.manuscript.as_str())?;

    Ok(GenerateResult { report, out: options.out })
}

/// Load the config file: an explicit path must exist, the default path is
/// optional.
pub(crate) fn load_config(path: Option<&Path>) -> Result<FileConfig, AppError> {
    match path {
        Some(path) if !path.exists() => {
            Err(AppError::config_error(format!("Config file not found: {}", path.display())))
        }
        Some(path) => FileConfig::load(path),
        None => FileConfig::load(Path::new("bookcraft.toml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_rejects_blank_concept() {
        let options = GenerateOptions {
            concept: "   ".to_string(),
            chapters: 3,
            out: PathBuf::from("unused.md"),
            config: None,
            mock: true,
        };

        assert!(matches!(execute(options), Err(AppError::EmptyConcept)));
    }

    #[test]
    fn execute_rejects_out_of_range_chapter_count() {
        let options = GenerateOptions {
            concept: "Patience".to_string(),
            chapters: 40,
            out: PathBuf::from("unused.md"),
            config: None,
            mock: true,
        };

        assert!(matches!(execute(options), Err(AppError::ChapterCountOutOfRange(40))));
    }

    #[test]
    fn load_config_requires_explicit_path_to_exist() {
        let result = load_config(Some(Path::new("/definitely/not/here.toml")));
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn mock_run_writes_manuscript_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("book.md");

        let result = execute(GenerateOptions {
            concept: "Patience wins negotiations".to_string(),
            chapters: 2,
            out: out.clone(),
            config: None,
            mock: true,
        })
        .unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, result.report.manuscript.as_str());
        assert!(written.contains("### 1. Mock principle 1"));
        assert!(written.contains("### 2. Mock principle 2"));
        assert!(written.contains("### On Mastery and the Path Forward"));
    }
}
