//! Per-file change detection between the current and suggested tag blocks.
//!
//! Purely a presentation helper: the suggestion data itself never changes
//! based on what differs.

use crate::suggest::types::FileSuggestion;

/// The reviewed fields, in report order.
pub const DIFF_FIELDS: [&str; 8] = [
    "Title",
    "Artist",
    "AlbumArtist",
    "Performer",
    "Genre",
    "Track",
    "Date",
    "Translator",
];

/// Outcome of comparing one file's current and suggested blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Every field matches after trimming.
    Unchanged,
    /// Fields whose trimmed values differ, in [`DIFF_FIELDS`] order.
    Changed(Vec<&'static str>),
}

/// Current and suggested value of a named field.
pub fn field_pair<'a>(file: &'a FileSuggestion, field: &str) -> (&'a str, &'a str) {
    match field {
        "Title" => (&file.current.title, &file.suggested.title),
        "Artist" => (&file.current.artist, &file.suggested.artist),
        "AlbumArtist" => (&file.current.album_artist, &file.suggested.album_artist),
        "Performer" => (&file.current.performer, &file.suggested.performer),
        "Genre" => (&file.current.genre, &file.suggested.genre),
        "Track" => (&file.current.track, &file.suggested.track),
        "Date" => (&file.current.date, &file.suggested.date),
        "Translator" => (&file.current.translator, &file.suggested.translator),
        _ => ("", ""),
    }
}

/// Compare the two blocks field by field. A field differs when its string
/// forms are unequal after trimming surrounding whitespace.
pub fn diff_fields(file: &FileSuggestion) -> DiffOutcome {
    let changed: Vec<&'static str> = DIFF_FIELDS
        .iter()
        .copied()
        .filter(|field| {
            let (current, suggested) = field_pair(file, field);
            current.trim() != suggested.trim()
        })
        .collect();

    if changed.is_empty() {
        DiffOutcome::Unchanged
    } else {
        DiffOutcome::Changed(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggest::types::TagSet;

    fn suggestion(current: TagSet, suggested: TagSet) -> FileSuggestion {
        FileSuggestion {
            file: "01.mp3".to_string(),
            current,
            suggested,
        }
    }

    #[test]
    fn test_identical_blocks_are_unchanged() {
        let block = TagSet {
            title: "Track 1".into(),
            track: "1".into(),
            ..Default::default()
        };
        assert_eq!(diff_fields(&suggestion(block.clone(), block)), DiffOutcome::Unchanged);
    }

    #[test]
    fn test_whitespace_only_difference_is_ignored() {
        let current = TagSet {
            title: "  Track 1  ".into(),
            ..Default::default()
        };
        let suggested = TagSet {
            title: "Track 1".into(),
            ..Default::default()
        };
        assert_eq!(diff_fields(&suggestion(current, suggested)), DiffOutcome::Unchanged);
    }

    #[test]
    fn test_case_difference_counts() {
        let current = TagSet {
            title: "track 1".into(),
            ..Default::default()
        };
        let suggested = TagSet {
            title: "Track 1".into(),
            ..Default::default()
        };
        assert_eq!(
            diff_fields(&suggestion(current, suggested)),
            DiffOutcome::Changed(vec!["Title"])
        );
    }

    #[test]
    fn test_changed_fields_keep_report_order() {
        let current = TagSet::default();
        let suggested = TagSet {
            translator: "Someone".into(),
            artist: "Author".into(),
            track: "1".into(),
            ..Default::default()
        };
        assert_eq!(
            diff_fields(&suggestion(current, suggested)),
            DiffOutcome::Changed(vec!["Artist", "Track", "Translator"])
        );
    }
}
