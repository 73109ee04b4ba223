//! Playlist discovery and parsing
//!
//! A folder may ship an .m3u/.m3u8 listing the intended playback order.
//! Entries are reduced to basenames; the order resolver treats them as
//! hints only, so stale or duplicate entries are harmless.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const PLAYLIST_EXTENSIONS: &[&str] = &["m3u", "m3u8"];

/// Read the folder's playlist order, if one exists.
///
/// When several playlists are present, the first in lexical order wins.
/// No playlist file at all yields `Ok(None)`.
pub fn read_playlist_order(folder: &Path) -> Result<Option<Vec<String>>> {
    let mut playlists: Vec<PathBuf> = fs::read_dir(folder)
        .with_context(|| format!("Failed to list {}", folder.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| PLAYLIST_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    playlists.sort();

    let Some(path) = playlists.first() else {
        return Ok(None);
    };

    // Legacy playlists are often windows-1250; lossy decoding is fine since
    // only the basename bytes have to line up with the directory listing.
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(parse_playlist(&String::from_utf8_lossy(&bytes))))
}

/// Parse playlist text into ordered basenames: lines trimmed, blanks and
/// `#` comment/directive lines dropped, path components stripped.
fn parse_playlist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.rsplit(['/', '\\'])
                .next()
                .unwrap_or(line)
                .to_string()
        })
        .collect()
}
