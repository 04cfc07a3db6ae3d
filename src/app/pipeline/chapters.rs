//! Chapter loop: strictly ordered drafting under a bounded memory window.

use crate::domain::{AppError, ChapterRecord, Concept, Draft, MemoryWindow, Outline, prompt};
use crate::ports::CompletionClient;

/// Draft every chapter in outline order.
///
/// States are visited strictly in order, no skipping, no backtracking. The
/// primary write is load-bearing: one failed chapter call abandons the
/// whole draft, partial work included. The follow-up summary call is a
/// best-effort memory aid; its failure only thins the context window of
/// later chapters.
pub fn draft<C: CompletionClient>(
    client: &C,
    concept: &Concept,
    outline: &Outline,
) -> Result<Draft, AppError> {
    let mut records: Vec<ChapterRecord> = Vec::with_capacity(outline.len());

    for (index, principle) in outline.titles().iter().enumerate() {
        let number = index + 1;
        println!("Writing chapter {}/{}: '{}'...", number, outline.len(), principle);

        let window = MemoryWindow::at(index, &records, outline);
        let writing_prompt = prompt::chapter(concept, outline, &window, index, principle)?;

        let text = client.complete(&writing_prompt).map_err(|source| AppError::ChapterWrite {
            number,
            principle: principle.clone(),
            source,
        })?;

        let summary_prompt = prompt::summary(&text)?;
        let summary = match client.complete(&summary_prompt) {
            Ok(sentence) => Some(sentence),
            Err(err) => {
                println!(
                    "  Summary for chapter {} failed ({}); continuing without it.",
                    number, err
                );
                None
            }
        };

        records.push(ChapterRecord::new(number, principle, text, summary));
    }

    Ok(Draft::from_records(records))
}
