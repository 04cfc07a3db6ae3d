//! Three-stage generation pipeline: outline, chapter loop, synthesis.
//!
//! Strictly sequential and blocking by design: every prompt downstream
//! depends on committed prior output, so no chapter can be generated in
//! parallel without breaking the causal memory window.

pub mod chapters;
pub mod outline;
pub mod synthesis;

use crate::domain::{AppError, ChapterCount, Concept, Degradation, Manuscript, RunReport};
use crate::ports::CompletionClient;

/// Run the full pipeline for one concept.
///
/// An outline failure or any primary chapter failure aborts with no
/// manuscript; a synthesis failure only degrades the result.
pub fn run<C: CompletionClient>(
    client: &C,
    concept: &Concept,
    count: ChapterCount,
) -> Result<RunReport, AppError> {
    println!("Architecting the book's structure ({} principles)...", count.get());
    let outline = outline::plan(client, concept, count)?;

    let draft = chapters::draft(client, concept, &outline)?;

    let mut degradations: Vec<Degradation> = draft
        .missing_summaries
        .iter()
        .map(|&chapter| Degradation::MissingSummary { chapter })
        .collect();

    println!("Writing conclusion and citing historical precedents...");
    let (text, synthesis_loss) = synthesis::finish(client, concept, &outline, draft.body)?;
    degradations.extend(synthesis_loss);

    Ok(RunReport { manuscript: Manuscript::new(text), outline, degradations })
}
