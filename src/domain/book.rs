//! Core book domain types: concept, outline, chapter records, manuscript.

use std::fmt;

use crate::domain::AppError;

/// Separator between rendered sections of the manuscript.
pub const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// The user-supplied core philosophy a book is built from.
///
/// Immutable once a run starts; construction rejects blank input.
#[derive(Debug, Clone)]
pub struct Concept(String);

impl Concept {
    pub fn new<S: Into<String>>(text: S) -> Result<Self, AppError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(AppError::EmptyConcept);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Requested number of chapters, bounded to a small range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterCount(usize);

impl ChapterCount {
    pub const MIN: usize = 2;
    pub const MAX: usize = 15;

    pub fn new(count: usize) -> Result<Self, AppError> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(AppError::ChapterCountOutOfRange(count));
        }
        Ok(Self(count))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// Ordered list of chapter principles produced by the outline stage.
///
/// Order is semantically meaningful: later principles build on earlier ones.
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct Outline {
    principles: Vec<String>,
}

#[allow(clippy::len_without_is_empty)]
impl Outline {
    /// Build an outline from parsed principles. Returns `None` for an empty
    /// list, which the outline stage treats as a generation failure.
    pub fn new(principles: Vec<String>) -> Option<Self> {
        if principles.is_empty() {
            return None;
        }
        Some(Self { principles })
    }

    /// Number of principles; never zero.
    pub fn len(&self) -> usize {
        self.principles.len()
    }

    pub fn titles(&self) -> &[String] {
        &self.principles
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.principles.get(index).map(String::as_str)
    }
}

/// One committed chapter. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ChapterRecord {
    /// 1-based chapter number.
    pub number: usize,
    /// Principle title from the outline.
    pub principle: String,
    /// Full generated chapter text.
    pub text: String,
    /// Formatted memory line ("Chapter N (principle): sentence"), absent
    /// when the summary call failed.
    pub summary: Option<String>,
    /// Formatted chapter block (heading + body) for the manuscript.
    pub block: String,
}

impl ChapterRecord {
    pub fn new(number: usize, principle: &str, text: String, summary: Option<String>) -> Self {
        let block = format!("### {}. {}\n\n{}", number, principle, text);
        let summary =
            summary.map(|sentence| format!("Chapter {} ({}): {}", number, principle, sentence));
        Self { number, principle: principle.to_string(), text, summary, block }
    }
}

/// Output of the chapter loop: all committed records plus the joined body.
#[derive(Debug)]
pub struct Draft {
    pub chapters: Vec<ChapterRecord>,
    pub body: String,
    /// 1-based numbers of chapters whose summary call failed.
    pub missing_summaries: Vec<usize>,
}

impl Draft {
    pub fn from_records(chapters: Vec<ChapterRecord>) -> Self {
        let body = chapters.iter().map(|c| c.block.as_str()).collect::<Vec<_>>().join(SECTION_SEPARATOR);
        let missing_summaries =
            chapters.iter().filter(|c| c.summary.is_none()).map(|c| c.number).collect();
        Self { chapters, body, missing_summaries }
    }
}

/// The final assembled document. Sole externally visible pipeline output.
#[derive(Debug, Clone)]
pub struct Manuscript {
    text: String,
}

impl Manuscript {
    /// Suggested file name for the downloadable artifact.
    pub const FILE_NAME: &'static str = "strategy_book.md";
    /// Media type of the artifact.
    pub const MEDIA_TYPE: &'static str = "text/markdown";

    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// A non-fatal quality loss recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Degradation {
    /// A chapter was committed without a summary; later chapters lost that
    /// memory aid.
    MissingSummary { chapter: usize },
    /// The closing synthesis sections could not be generated.
    MissingSynthesis,
}

impl fmt::Display for Degradation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degradation::MissingSummary { chapter } => {
                write!(f, "Chapter {} has no summary; later context is thinner", chapter)
            }
            Degradation::MissingSynthesis => {
                write!(f, "Manuscript is missing its conclusion and references sections")
            }
        }
    }
}

/// Inspectable result of a completed run.
#[derive(Debug)]
pub struct RunReport {
    pub manuscript: Manuscript,
    pub outline: Outline,
    pub degradations: Vec<Degradation>,
}

impl RunReport {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}
