//! Text normalization for audiobook metadata fields
//!
//! The canonical form across the suggestion engine is diacritic-free text:
//! suggested values have to survive legacy players and ASCII-only
//! filesystems, so every suggested text field passes through here.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics, yielding an ASCII-compatible approximation.
///
/// Decomposes accented characters (NFKD) and drops the combining marks,
/// so "Čte" becomes "Cte". Idempotent; empty input yields empty output.
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Title-case a person name: strip diacritics, trim, collapse whitespace
/// runs and capitalize the first letter of every word.
///
/// Meant for names (authors, narrators), not book titles.
pub fn title_case(text: &str) -> String {
    strip_diacritics(text)
        .split_whitespace()
        .map(|word| capitalize_first(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first letter of a word
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics() {
        assert_eq!(strip_diacritics("Čte"), "Cte");
        assert_eq!(strip_diacritics("Karel Čapek"), "Karel Capek");
        assert_eq!(strip_diacritics("žluťoučký kůň"), "zlutoucky kun");
        assert_eq!(strip_diacritics("plain ascii"), "plain ascii");
        assert_eq!(strip_diacritics(""), "");
    }

    #[test]
    fn test_strip_diacritics_is_idempotent() {
        for input in ["Čte: Jan Novák", "příliš žluťoučký", "already plain"] {
            let once = strip_diacritics(input);
            assert_eq!(strip_diacritics(&once), once);
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jan novák"), "Jan Novak");
        assert_eq!(title_case("  KAREL   čapek  "), "Karel Capek");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }
}
