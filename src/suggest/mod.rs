// src/suggest/mod.rs
//! Suggestion assembly: the gather-then-infer pipeline for one folder.
//!
//! All per-file records are gathered before any inference runs, because the
//! consensus and the track order are folder-wide. The build itself is a
//! pure function of (records, playlist, options) and never touches the
//! filesystem.

pub mod consensus;
pub mod types;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::language::DEFAULT_GENRE;
use crate::narrator::extract_narrator;
use crate::normalize::{strip_diacritics, title_case};
use crate::track_order::resolve_order;
use consensus::build_consensus;
use types::{FileSuggestion, FileTagRecord, FolderConsensus, FolderSuggestion, TagSet};

/// Track-number prefix plus trailing separators, as found in filenames like
/// "03 - Kapitola.mp3" or "07_kapitola.mp3".
static NUM_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*[-_.]*\s*").unwrap());

/// Tunables for one folder's suggestion build.
#[derive(Debug, Clone)]
pub struct SuggestOptions {
    /// Genre used when the folder language cannot be determined.
    pub fallback_genre: String,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            fallback_genre: DEFAULT_GENRE.to_string(),
        }
    }
}

/// Build the complete suggestion aggregate for one folder.
///
/// The result's `files` sequence follows the resolved track order and is a
/// permutation of `records`: nothing is dropped or duplicated, even for
/// files absent from the playlist or without a numeric prefix.
pub fn build_folder_suggestion(
    folder: &str,
    records: &[FileTagRecord],
    playlist: Option<&[String]>,
    options: &SuggestOptions,
) -> FolderSuggestion {
    let consensus = build_consensus(records, &options.fallback_genre);

    let basenames: Vec<String> = records.iter().map(|r| r.basename().to_string()).collect();
    let order = resolve_order(&basenames, playlist);

    let files = order
        .basenames
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            records
                .iter()
                .find(|r| r.basename() == name.as_str())
                .map(|record| build_file_suggestion(record, idx + 1, &consensus))
        })
        .collect();

    FolderSuggestion {
        folder: folder.to_string(),
        consensus,
        order_source: order.source,
        files,
    }
}

/// One file's suggestion at its 1-based resolved position.
fn build_file_suggestion(
    record: &FileTagRecord,
    position: usize,
    consensus: &FolderConsensus,
) -> FileSuggestion {
    let current = TagSet {
        title: record.title().unwrap_or_default().to_string(),
        artist: record.artist().unwrap_or_default().to_string(),
        album_artist: record.album_artist().unwrap_or_default().to_string(),
        performer: record.performer().unwrap_or_default().to_string(),
        genre: record.genre().unwrap_or_default().to_string(),
        track: record.track().unwrap_or_default().to_string(),
        date: record.date().unwrap_or_default().to_string(),
        translator: record.translator().unwrap_or_default().to_string(),
    };

    // The consensus always wins when one exists; the per-file artist tag is
    // only a fallback for consensus-less folders.
    let artist = consensus
        .author
        .clone()
        .or_else(|| record.artist().map(title_case))
        .unwrap_or_default();

    let genre = if !consensus.genre.is_empty() {
        consensus.genre.clone()
    } else {
        record.genre().map(strip_diacritics).unwrap_or_default()
    };

    // Every suggested text field is diacritic-stripped exactly once here,
    // whatever its source; stripping is idempotent, so already-normalized
    // values pass through unchanged.
    let suggested = TagSet {
        title: strip_diacritics(&title_from_basename(record.basename())),
        album_artist: strip_diacritics(&artist),
        artist: strip_diacritics(&artist),
        performer: strip_diacritics(&extract_narrator(record.comment().unwrap_or_default())),
        genre: strip_diacritics(&genre),
        track: position.to_string(),
        date: suggested_date(record),
        translator: strip_diacritics(record.translator().unwrap_or_default()),
    };

    FileSuggestion {
        file: record.basename().to_string(),
        current,
        suggested,
    }
}

/// Suggested title comes from the filename, not the existing tag: strip the
/// extension, the leading track-number prefix and diacritics, then tidy up.
fn title_from_basename(basename: &str) -> String {
    let stem = basename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(basename);
    let stripped = NUM_PREFIX.replace(stem, "");
    strip_diacritics(&stripped).trim().replace('_', " ")
}

/// Date source chain: a positive-integer Year tag, else CreateDate, else
/// DateTimeOriginal. A Year that does not parse (or is zero) simply falls
/// through; it is never an error.
fn suggested_date(record: &FileTagRecord) -> String {
    if let Some(year) = record.get(&["Year"]) {
        if let Ok(value) = year.trim().parse::<i64>() {
            if value > 0 {
                return value.to_string();
            }
        }
    }
    record
        .get(&["CreateDate"])
        .or_else(|| record.get(&["DateTimeOriginal"]))
        .unwrap_or_default()
        .to_string()
}
