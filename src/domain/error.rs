use std::io;

use thiserror::Error;

/// Library-wide error type for bookcraft operations.
///
/// Every variant names the stage it came from, and every variant is fatal to
/// its run. Non-fatal outcomes (a missing chapter summary, a missing
/// synthesis section) are not errors; they surface as
/// [`Degradation`](crate::domain::Degradation) entries on the run report.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Concept text is empty or whitespace-only.
    #[error("Concept must not be empty")]
    EmptyConcept,

    /// Requested chapter count is outside the supported range.
    #[error("Chapter count {0} is out of range (2-15)")]
    ChapterCountOutOfRange(usize),

    /// The outline request could not be completed.
    #[error("Outline generation failed")]
    OutlineRequest(#[source] CompletionError),

    /// The outline response did not contain a usable list of principles.
    #[error("Outline response could not be parsed as a JSON list of principles")]
    MalformedOutline { raw: String },

    /// A primary chapter write failed; the whole draft is abandoned.
    #[error("Failed to write chapter {number} ('{principle}')")]
    ChapterWrite {
        number: usize,
        principle: String,
        #[source]
        source: CompletionError,
    },

    /// A prompt template failed to render.
    #[error("Failed to render prompt template '{template}': {details}")]
    PromptRender { template: &'static str, details: String },

    /// Config file parsing error.
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Raw model response retained for this failure, when there is one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AppError::MalformedOutline { raw } => Some(raw),
            _ => None,
        }
    }
}

/// Failure of a single completion call.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The completion server could not be reached.
    #[error("request to completion server failed: {0}")]
    Network(String),

    /// The completion server answered with a non-success status.
    #[error("completion server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not carry the expected message content.
    #[error("completion response missing message content: {0}")]
    MalformedResponse(String),
}
