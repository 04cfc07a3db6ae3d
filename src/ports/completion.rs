//! Completion capability port definition.

use crate::domain::CompletionError;

/// Port for the text-completion capability.
///
/// One blocking call per prompt. Implementations report failure without
/// retrying; the pipeline decides which failures are fatal.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Mock client for running the pipeline without a completion server.
///
/// Returns deterministic canned text keyed off the prompt shape, so a full
/// offline run still exercises every stage and every parser.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        println!("=== MOCK MODE === completion requested ({} chars prompt)", prompt.len());

        if prompt.contains("JSON-formatted list") {
            let count = requested_count(prompt).unwrap_or(3);
            let principles: Vec<String> =
                (1..=count).map(|i| format!("Mock principle {}", i)).collect();
            // Wrapped in chatter on purpose: the tolerant parser is part of
            // what a mock run exercises.
            return Ok(format!(
                "Here is your outline:\n{}\nUse it wisely.",
                serde_json::json!(principles)
            ));
        }

        if prompt.starts_with("Summarize the core message") {
            return Ok("A single mock sentence distilling the chapter.".to_string());
        }

        if prompt.contains("On Mastery and the Path Forward") {
            return Ok(format!(
                "### On Mastery and the Path Forward\n\nMock synthesis of the whole.\n\n\
                 ### Historical Precedents & Further Reading\n\nMock precedents. (mock-{})",
                chrono::Utc::now().timestamp()
            ));
        }

        Ok("Mock chapter text. The principle stands; proof is left to practice.".to_string())
    }
}

/// Pull the requested principle count out of a planning prompt.
fn requested_count(prompt: &str) -> Option<usize> {
    let rest = prompt.split("exactly ").nth(1)?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse::extract_string_list;

    #[test]
    fn mock_outline_matches_requested_count() {
        let client = MockCompletionClient;
        let response = client
            .complete("Break it down into a logical sequence of exactly 5 core principles. Return ONLY a JSON-formatted list of strings.")
            .unwrap();

        let principles = extract_string_list(&response).unwrap();
        assert_eq!(principles.len(), 5);
    }

    #[test]
    fn mock_summary_is_one_sentence() {
        let client = MockCompletionClient;
        let response =
            client.complete("Summarize the core message of this text in one single, concise sentence:\n\nbody").unwrap();

        assert_eq!(response.matches('.').count(), 1);
    }

    #[test]
    fn mock_synthesis_carries_both_headings() {
        let client = MockCompletionClient;
        let response = client
            .complete("... titled \"### On Mastery and the Path Forward\" ...")
            .unwrap();

        assert!(response.contains("### On Mastery and the Path Forward"));
        assert!(response.contains("### Historical Precedents & Further Reading"));
    }
}
