//! bookcraft: draft multi-chapter strategy books through a staged
//! completion pipeline with a bounded rolling memory.
//!
//! The pipeline runs three stages in sequence — outline, chapter loop,
//! synthesis — against an OpenAI-compatible completion server, keeping
//! every request inside a fixed context window regardless of chapter count.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::commands::generate::{GenerateOptions, GenerateResult};
pub use app::commands::outline::OutlineOptions;
pub use domain::{AppError, Degradation, Manuscript, Outline, RunReport};

/// Generate a full strategy book manuscript and write it to the configured
/// output path.
///
/// Returns the run report: manuscript, outline, and any non-fatal
/// degradations (missing chapter summaries, missing synthesis sections).
pub fn generate(options: GenerateOptions) -> Result<GenerateResult, AppError> {
    app::commands::generate::execute(options)
}

/// Plan only: produce the ordered principles for a concept without
/// drafting any chapters.
pub fn plan(options: OutlineOptions) -> Result<Outline, AppError> {
    app::commands::outline::execute(options)
}
