//! Outline stage: one planning call, one parse, no retries.

use crate::domain::{AppError, ChapterCount, Concept, Outline, parse, prompt};
use crate::ports::CompletionClient;

/// Produce the ordered chapter principles for a concept.
///
/// One attempt per run. A transport failure and an unparseable response are
/// both fatal; on the parse path the raw response is retained so the caller
/// can surface it for diagnosis.
pub fn plan<C: CompletionClient>(
    client: &C,
    concept: &Concept,
    count: ChapterCount,
) -> Result<Outline, AppError> {
    let planning_prompt = prompt::plan(concept, count.get())?;
    let response = client.complete(&planning_prompt).map_err(AppError::OutlineRequest)?;

    parse::extract_string_list(&response)
        .and_then(Outline::new)
        .ok_or(AppError::MalformedOutline { raw: response })
}
