//! Bounded hybrid-memory window for the chapter loop.
//!
//! Each iteration sees exactly one prior chapter in full, a short tail of
//! summaries, and a short list of upcoming titles. The window size is fixed,
//! so prompt size stays bounded no matter how many chapters the outline has.

use crate::domain::{ChapterRecord, Outline};

/// Maximum number of prior-chapter summaries carried into one prompt.
pub const SUMMARY_WINDOW: usize = 3;
/// Maximum number of upcoming titles carried into one prompt.
pub const LOOK_AHEAD_WINDOW: usize = 3;

const FIRST_CHAPTER_SENTINEL: &str = "This is the first chapter. There is no preceding text.";
const NO_SUMMARIES_SENTINEL: &str = "N/A";
const FINAL_SECTION_SENTINEL: &str = "This is the final section of the main body.";

/// Per-iteration context view, recomputed fresh for every chapter.
///
/// Built only from chapters committed before `index`; upcoming outline
/// entries contribute titles and nothing else.
#[derive(Debug)]
pub struct MemoryWindow {
    /// Full text of the immediately preceding chapter, or a sentinel for
    /// the first chapter.
    pub previous_text: String,
    /// Up to [`SUMMARY_WINDOW`] most recent summary lines, newest last.
    pub recent_summaries: String,
    /// Up to [`LOOK_AHEAD_WINDOW`] upcoming titles as bullets, or a
    /// sentinel at the final index.
    pub look_ahead: String,
}

impl MemoryWindow {
    /// Compute the window for the chapter at `index` (0-based).
    ///
    /// Only `records[..index]` is read, so text written after `index` can
    /// never leak backward even if the caller hands over a longer slice.
    pub fn at(index: usize, records: &[ChapterRecord], outline: &Outline) -> Self {
        let committed = &records[..index.min(records.len())];

        let previous_text = match committed.last() {
            Some(record) => record.text.clone(),
            None => FIRST_CHAPTER_SENTINEL.to_string(),
        };

        let recent_summaries = if index == 0 {
            NO_SUMMARIES_SENTINEL.to_string()
        } else {
            let summaries: Vec<&str> =
                committed.iter().filter_map(|r| r.summary.as_deref()).collect();
            let tail_start = summaries.len().saturating_sub(SUMMARY_WINDOW);
            summaries[tail_start..].join("\n")
        };

        let look_ahead = if index + 1 < outline.len() {
            let end = (index + 1 + LOOK_AHEAD_WINDOW).min(outline.len());
            outline.titles()[index + 1..end]
                .iter()
                .map(|title| format!("- {}", title))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            FINAL_SECTION_SENTINEL.to_string()
        };

        Self { previous_text, recent_summaries, look_ahead }
    }
}
