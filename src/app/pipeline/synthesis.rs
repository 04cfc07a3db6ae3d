//! Synthesis stage: closing sections, degrading gracefully on failure.

use crate::domain::{AppError, Concept, Degradation, Outline, SECTION_SEPARATOR, prompt};
use crate::ports::CompletionClient;

/// Append the concluding synthesis and references sections to the draft
/// body.
///
/// A completion failure here never aborts the run: the body comes back
/// unchanged and the loss is reported as a degradation.
pub fn finish<C: CompletionClient>(
    client: &C,
    concept: &Concept,
    outline: &Outline,
    body: String,
) -> Result<(String, Option<Degradation>), AppError> {
    let synthesis_prompt = prompt::synthesis(concept, outline, &body)?;

    match client.complete(&synthesis_prompt) {
        Ok(sections) => Ok((format!("{}{}{}", body, SECTION_SEPARATOR, sections), None)),
        Err(err) => {
            println!("Synthesis failed ({}); returning manuscript without closing sections.", err);
            Ok((body, Some(Degradation::MissingSynthesis)))
        }
    }
}
