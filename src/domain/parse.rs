//! Tolerant extraction of structured lists from free-form model output.
//!
//! Models routinely wrap the requested JSON in commentary. This is a
//! best-effort bracket scan, not strict parsing: failures come back as
//! `None` so callers can degrade and surface the raw text.

/// Extract a flat JSON list of strings embedded anywhere in `text`.
///
/// Takes the substring between the first `[` and the last `]` (inclusive)
/// and parses it as `Vec<String>`. Returns `None` when no bracket pair
/// exists, the substring is not valid JSON, or any element is not a string.
pub fn extract_string_list(text: &str) -> Option<Vec<String>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    serde_json::from_str::<Vec<String>>(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn extracts_list_surrounded_by_noise() {
        let parsed = extract_string_list("noise [\"a\",\"b\"] trailer");
        assert_eq!(parsed, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn rejects_text_without_brackets() {
        assert_eq!(extract_string_list("no brackets here"), None);
    }

    #[test]
    fn rejects_non_string_elements() {
        assert_eq!(extract_string_list("[1,2,3]"), None);
        assert_eq!(extract_string_list("[\"a\", 2]"), None);
    }

    #[test]
    fn rejects_reversed_brackets() {
        assert_eq!(extract_string_list("] backwards ["), None);
    }

    #[test]
    fn rejects_invalid_json_between_brackets() {
        assert_eq!(extract_string_list("[not, valid, json]"), None);
        assert_eq!(extract_string_list("[\"unterminated]"), None);
    }

    #[test]
    fn handles_multiline_model_chatter() {
        let response = r#"Here are your principles:

["First, observe.", "Second, wait.", "Third, strike."]

Let me know if you'd like revisions."#;

        let parsed = extract_string_list(response).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[2], "Third, strike.");
    }

    #[test]
    fn reparse_of_well_formed_list_is_stable() {
        let once = extract_string_list("intro [\"x\", \"y\"] outro").unwrap();
        let again = extract_string_list(&serde_json::to_string(&once).unwrap()).unwrap();
        assert_eq!(once, again);
    }

    proptest! {
        // Round-trip stability: any list of plain strings, serialized and
        // wrapped in bracket-free noise, parses back to itself.
        #[test]
        fn round_trips_arbitrary_lists(
            items in proptest::collection::vec("[a-zA-Z0-9 .,'!?-]{0,40}", 1..10),
            prefix in "[^\\[\\]]{0,30}",
            suffix in "[^\\[\\]]{0,30}",
        ) {
            let embedded =
                format!("{}{}{}", prefix, serde_json::to_string(&items).unwrap(), suffix);
            prop_assert_eq!(extract_string_list(&embedded), Some(items));
        }
    }
}
