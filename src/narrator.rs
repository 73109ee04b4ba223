//! Narrator extraction from free-text comment fields
//!
//! Audiobook rips frequently bury the narrator in the comment tag, using
//! conventions like "Čte: Jan Novák", "cte Petr" or "read by John Lee".
//! Extraction is a fixed chain of rules tried in order; the first rule that
//! matches wins and later rules are never consulted, so rule order encodes
//! precedence.

use crate::normalize::{strip_diacritics, title_case};

/// "čte" with diacritics stripped, the common Czech narration marker.
const CZECH_NARRATION_MARKER: &str = "cte";
const ENGLISH_NARRATION_MARKER: &str = "read by";

/// Best-guess narrator name from a comment, or empty when nothing matches.
///
/// Rules, in priority order:
/// 1. a colon anywhere: take everything after the first one ("Label: Value"
///    conventions, independent of the label's language);
/// 2. the Czech narration marker in the normalized comment;
/// 3. "read by" in the normalized comment;
/// 4. the last two whitespace-separated tokens of the original comment,
///    assuming a trailing "First Last" name.
pub fn extract_narrator(comment: &str) -> String {
    if comment.trim().is_empty() {
        return String::new();
    }
    after_first_colon(comment)
        .or_else(|| after_marker(comment, CZECH_NARRATION_MARKER))
        .or_else(|| after_marker(comment, ENGLISH_NARRATION_MARKER))
        .or_else(|| trailing_name(comment))
        .unwrap_or_default()
}

fn after_first_colon(comment: &str) -> Option<String> {
    let idx = comment.find(':')?;
    Some(title_case(comment[idx + 1..].trim()))
}

/// The name is whatever follows the marker, after optional colon,
/// whitespace or hyphen separators, up to the end of the comment.
fn after_marker(comment: &str, marker: &str) -> Option<String> {
    let normalized = strip_diacritics(comment).to_lowercase();
    let pos = normalized.find(marker)?;
    let tail = normalized[pos + marker.len()..]
        .trim_start_matches(|c: char| c == ':' || c == '-' || c.is_whitespace());
    Some(title_case(tail))
}

fn trailing_name(comment: &str) -> Option<String> {
    let tokens: Vec<&str> = comment.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    let start = tokens.len().saturating_sub(2);
    Some(title_case(&tokens[start..].join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_rule_wins() {
        assert_eq!(extract_narrator("Čte: Jan Novák"), "Jan Novak");
        assert_eq!(extract_narrator("Narrator: John Lee"), "John Lee");
        // Any label works; the colon is the signal.
        assert_eq!(extract_narrator("Vypravuje: Petr Kostka"), "Petr Kostka");
    }

    #[test]
    fn test_czech_marker_without_colon() {
        assert_eq!(extract_narrator("cte Petr"), "Petr");
        assert_eq!(extract_narrator("čte - Jiří Ornest"), "Jiri Ornest");
    }

    #[test]
    fn test_read_by_marker() {
        assert_eq!(extract_narrator("read by John Lee"), "John Lee");
        assert_eq!(extract_narrator("Read By Simon Vance"), "Simon Vance");
    }

    #[test]
    fn test_trailing_name_fallback() {
        // No marker at all: assume the comment ends with "First Last".
        assert_eq!(extract_narrator("just some text"), "Some Text");
        assert_eq!(extract_narrator("Novák"), "Novak");
    }

    #[test]
    fn test_empty_comment() {
        assert_eq!(extract_narrator(""), "");
        assert_eq!(extract_narrator("   "), "");
    }

    #[test]
    fn test_first_match_is_final() {
        // The colon rule matches first even though "cte" is also present;
        // a later rule never overrides it.
        assert_eq!(extract_narrator("cte: Marek Eben"), "Marek Eben");
    }
}
