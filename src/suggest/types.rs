// src/suggest/types.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::track_order::OrderSource;

/// One audio file's currently-stored metadata, as discovered.
///
/// Immutable once loaded; the raw `tags` mapping keeps extraction order and
/// carries vendor-specific keys next to the canonical ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTagRecord {
    /// Path of the source file.
    pub path: String,
    /// Raw tag key → value mapping.
    pub tags: IndexMap<String, String>,
}

impl FileTagRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tags: IndexMap::new(),
        }
    }

    /// Final path component.
    pub fn basename(&self) -> &str {
        self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path)
    }

    /// First present value among the given key spellings.
    pub fn get(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.tags.get(*key))
            .map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(&["Title", "TITLE"])
    }

    pub fn artist(&self) -> Option<&str> {
        self.get(&["Artist", "ARTIST"])
    }

    pub fn album_artist(&self) -> Option<&str> {
        self.get(&["AlbumArtist", "Albumartist"])
    }

    pub fn performer(&self) -> Option<&str> {
        self.get(&["Performer"])
    }

    pub fn genre(&self) -> Option<&str> {
        self.get(&["Genre"])
    }

    pub fn comment(&self) -> Option<&str> {
        self.get(&["Comment", "COMMENT"])
    }

    pub fn track(&self) -> Option<&str> {
        self.get(&["Track", "TrackNumber"])
    }

    pub fn date(&self) -> Option<&str> {
        self.get(&["Date", "Year"])
    }

    pub fn translator(&self) -> Option<&str> {
        self.get(&["Translator", "TRANSLATOR"])
    }
}

/// The eight reviewed fields; used for both the current and the suggested
/// block of a [`FileSuggestion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagSet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub album_artist: String,
    #[serde(default)]
    pub performer: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub translator: String,
}

/// Folder-scoped consensus values, computed once per folder and shared by
/// every file suggestion in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConsensus {
    /// Majority author, title-cased; never `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Inferred language code ("cz", "sk", "en"); None when undetermined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Genre derived from the language (or the configured fallback).
    pub genre: String,
}

/// Per-file output: the current values next to the suggested ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSuggestion {
    /// Basename of the audio file.
    pub file: String,
    pub current: TagSet,
    pub suggested: TagSet,
}

/// The aggregate result for one folder. `files` follows the resolved track
/// order and is always a permutation of the input record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderSuggestion {
    pub folder: String,
    pub consensus: FolderConsensus,
    pub order_source: OrderSource,
    pub files: Vec<FileSuggestion>,
}
