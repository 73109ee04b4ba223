// src/suggest/consensus.rs
//! Folder-wide consensus from per-file votes.

use indexmap::IndexMap;

use super::types::{FileTagRecord, FolderConsensus};
use crate::language::{genre_for, infer_language};
use crate::normalize::title_case;

/// Most frequent non-empty artist tag across the folder, title-cased.
///
/// Votes are counted in insertion order, so a tie resolves to the value
/// seen first. Empty and whitespace-only artists never vote, which keeps a
/// present consensus from ever being blank.
fn consensus_author(records: &[FileTagRecord]) -> Option<String> {
    let mut votes: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        let artist = record.artist().map(str::trim).unwrap_or("");
        if !artist.is_empty() {
            *votes.entry(artist).or_insert(0) += 1;
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in votes {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| title_case(value))
}

/// Compute the folder consensus in one pass over the gathered records.
pub fn build_consensus(records: &[FileTagRecord], fallback_genre: &str) -> FolderConsensus {
    let language = infer_language(records.iter().filter_map(|r| r.comment()));
    FolderConsensus {
        author: consensus_author(records),
        language: language.map(|l| l.code().to_string()),
        genre: genre_for(language, fallback_genre),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::DEFAULT_GENRE;

    fn record(artist: Option<&str>, comment: Option<&str>) -> FileTagRecord {
        let mut r = FileTagRecord::new("x.mp3");
        if let Some(a) = artist {
            r.tags.insert("Artist".into(), a.into());
        }
        if let Some(c) = comment {
            r.tags.insert("Comment".into(), c.into());
        }
        r
    }

    #[test]
    fn test_majority_artist_wins() {
        let records = vec![
            record(Some("karel čapek"), None),
            record(Some("karel čapek"), None),
            record(Some("K. Capek"), None),
        ];
        let consensus = build_consensus(&records, DEFAULT_GENRE);
        assert_eq!(consensus.author.as_deref(), Some("Karel Capek"));
    }

    #[test]
    fn test_artist_tie_resolves_to_first_seen() {
        let records = vec![record(Some("b"), None), record(Some("a"), None)];
        let consensus = build_consensus(&records, DEFAULT_GENRE);
        assert_eq!(consensus.author.as_deref(), Some("B"));
    }

    #[test]
    fn test_blank_artists_do_not_vote() {
        let records = vec![record(Some(""), None), record(Some("   "), None), record(None, None)];
        let consensus = build_consensus(&records, DEFAULT_GENRE);
        assert_eq!(consensus.author, None);
    }

    #[test]
    fn test_language_and_genre_from_comments() {
        let records = vec![
            record(None, Some("autor: Karel Čapek")),
            record(None, Some("autor")),
            record(None, Some("autor dila")),
            record(None, Some("preklad: Jozef")),
        ];
        let consensus = build_consensus(&records, DEFAULT_GENRE);
        assert_eq!(consensus.language.as_deref(), Some("cz"));
        assert_eq!(consensus.genre, "audiokniha");
    }

    #[test]
    fn test_undetermined_language_uses_fallback_genre() {
        let records = vec![record(None, None), record(None, Some("no markers"))];
        let consensus = build_consensus(&records, "audiobook");
        assert_eq!(consensus.language, None);
        assert_eq!(consensus.genre, "audiobook");
    }
}
