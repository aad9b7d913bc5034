//! Keyword overlap between a message and stored entries.
//!
//! A message is lowercased and split on whitespace. An entry matches when its
//! lowercased content contains any of those tokens as a plain substring, so
//! "practice" matches "Practice makes perfect" and "art" matches "heart".

use crate::entry::types::Entry;

/// Lowercase whitespace-separated tokens of `message`.
pub fn keywords(message: &str) -> Vec<String> {
    message
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Entries sharing at least one token with `message`, in collection order.
pub fn find_matches<'a>(entries: &'a [Entry], message: &str) -> Vec<&'a Entry> {
    let keywords = keywords(message);
    if keywords.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| {
            let content = entry.content.to_lowercase();
            keywords.iter().any(|k| content.contains(k.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::types::sample_entries;

    #[test]
    fn shared_token_matches_case_insensitively() {
        let entries = vec![Entry::new("Practice makes perfect")];
        let matches = find_matches(&entries, "I need more practice today");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].content, "Practice makes perfect");
    }

    #[test]
    fn nonsense_matches_no_sample() {
        assert!(find_matches(&sample_entries(), "xyzzy").is_empty());
    }

    #[test]
    fn tokens_match_inside_words() {
        let entries = vec![Entry::new("Listen to your heart")];
        assert_eq!(find_matches(&entries, "ART").len(), 1);
    }

    #[test]
    fn results_keep_collection_order() {
        let entries = vec![
            Entry::new("first light"),
            Entry::new("nothing here"),
            Entry::new("light at the end"),
        ];
        let matches: Vec<&str> = find_matches(&entries, "light")
            .iter()
            .map(|e| e.content.as_str())
            .collect();
        assert_eq!(matches, vec!["first light", "light at the end"]);
    }

    #[test]
    fn blank_message_matches_nothing() {
        assert!(find_matches(&sample_entries(), "   ").is_empty());
    }

    #[test]
    fn korean_content_matches_on_shared_token() {
        let entries = sample_entries();
        let matches = find_matches(&entries, "요즘 실패가 두려워요");
        assert!(matches.is_empty(), "token must be a substring of the content");

        let matches = find_matches(&entries, "실패는 싫어");
        assert_eq!(matches.len(), 1);
    }
}
