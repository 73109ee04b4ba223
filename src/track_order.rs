//! Track-order resolution
//!
//! Position suggestions come from the strongest available ordering signal:
//! a playlist when the folder ships one, numeric filename prefixes
//! otherwise, lexical order as the last resort. Whatever the source, every
//! actual file appears in the result exactly once.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which signal produced the resolved order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    Playlist,
    Filename,
}

impl OrderSource {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderSource::Playlist => "playlist",
            OrderSource::Filename => "filename",
        }
    }
}

/// Leading track number, e.g. "01 - Intro.mp3" or " 7_kapitola.mp3".
static LEADING_NUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)").unwrap());

/// A total order over a folder's basenames.
#[derive(Debug, Clone)]
pub struct ResolvedOrder {
    pub basenames: Vec<String>,
    pub source: OrderSource,
}

/// Resolve the track order for a folder's files.
pub fn resolve_order(files: &[String], playlist: Option<&[String]>) -> ResolvedOrder {
    match playlist {
        Some(entries) => ResolvedOrder {
            basenames: order_from_playlist(files, entries),
            source: OrderSource::Playlist,
        },
        None => ResolvedOrder {
            basenames: order_from_filenames(files),
            source: OrderSource::Filename,
        },
    }
}

/// Playlist order restricted to files that actually exist (stale entries
/// are silently dropped, repeats collapse to the first occurrence), with
/// unlisted files appended in lexical order.
fn order_from_playlist(files: &[String], entries: &[String]) -> Vec<String> {
    let mut order: Vec<String> = Vec::with_capacity(files.len());
    for entry in entries {
        if files.contains(entry) && !order.contains(entry) {
            order.push(entry.clone());
        }
    }
    let mut rest: Vec<String> = files
        .iter()
        .filter(|f| !order.contains(*f))
        .cloned()
        .collect();
    rest.sort();
    order.extend(rest);
    order
}

/// Numeric-prefixed files ascending by parsed value (stable, so ties keep
/// input order), then the remaining files in lexical order.
fn order_from_filenames(files: &[String]) -> Vec<String> {
    let mut numbered: Vec<(u64, &String)> = Vec::new();
    let mut plain: Vec<&String> = Vec::new();
    for file in files {
        match track_number_prefix(file) {
            Some(n) => numbered.push((n, file)),
            None => plain.push(file),
        }
    }
    numbered.sort_by_key(|(n, _)| *n);
    plain.sort();
    numbered
        .into_iter()
        .map(|(_, f)| f.clone())
        .chain(plain.into_iter().cloned())
        .collect()
}

/// Parse the leading numeric prefix of a basename, if any.
pub fn track_number_prefix(basename: &str) -> Option<u64> {
    LEADING_NUM
        .captures(basename)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_playlist_order_with_appended_files() {
        let files = names(&["a.mp3", "b.mp3", "c.mp3"]);
        let playlist = names(&["b.mp3", "a.mp3"]);
        let order = resolve_order(&files, Some(&playlist));
        assert_eq!(order.basenames, names(&["b.mp3", "a.mp3", "c.mp3"]));
        assert_eq!(order.source, OrderSource::Playlist);
    }

    #[test]
    fn test_playlist_stale_entries_dropped() {
        let files = names(&["a.mp3", "b.mp3"]);
        let playlist = names(&["gone.mp3", "b.mp3", "b.mp3", "a.mp3"]);
        let order = resolve_order(&files, Some(&playlist));
        assert_eq!(order.basenames, names(&["b.mp3", "a.mp3"]));
    }

    #[test]
    fn test_numeric_prefix_order() {
        let files = names(&["2 - Two.mp3", "10 - Ten.mp3", "1 - One.mp3", "intro.mp3"]);
        let order = resolve_order(&files, None);
        assert_eq!(
            order.basenames,
            names(&["1 - One.mp3", "2 - Two.mp3", "10 - Ten.mp3", "intro.mp3"])
        );
        assert_eq!(order.source, OrderSource::Filename);
    }

    #[test]
    fn test_numeric_ties_keep_input_order() {
        let files = names(&["01 b.mp3", "1 a.mp3"]);
        let order = resolve_order(&files, None);
        assert_eq!(order.basenames, names(&["01 b.mp3", "1 a.mp3"]));
    }

    #[test]
    fn test_every_file_appears_exactly_once() {
        let files = names(&["03.mp3", "x.mp3", "01.mp3", "02.mp3"]);
        for playlist in [None, Some(names(&["02.mp3", "missing.mp3"]))] {
            let order = resolve_order(&files, playlist.as_deref());
            let mut sorted = order.basenames.clone();
            sorted.sort();
            let mut expected = files.clone();
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_track_number_prefix() {
        assert_eq!(track_number_prefix("01 - Intro.mp3"), Some(1));
        assert_eq!(track_number_prefix("  12_kapitola.mp3"), Some(12));
        assert_eq!(track_number_prefix("intro.mp3"), None);
    }
}
