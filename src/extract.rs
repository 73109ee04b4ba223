//! Embedded-tag extraction
//!
//! The engine's input contract is a per-file key → value record; this
//! module fills it from whatever tags lofty can read. Canonical keys are
//! inserted first, then every remaining tag item under its raw key name, so
//! vendor-specific fields (TRANSLATOR, CreateDate, ...) stay reachable
//! through the record's raw mapping.

use anyhow::Result;
use indexmap::IndexMap;
use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, ItemValue, Tag};
use std::path::Path;

use crate::suggest::types::FileTagRecord;

/// Read one audio file's tags into a [`FileTagRecord`].
///
/// Missing tags are simply absent entries. An unreadable file is an error
/// for the caller to log and skip; it never aborts the folder.
pub fn read_tag_record(path: &Path) -> Result<FileTagRecord> {
    let tagged_file = Probe::open(path)?.read()?;

    let mut record = FileTagRecord::new(path.to_string_lossy().to_string());
    if let Some(tag) = tagged_file.primary_tag() {
        collect_tag(tag, &mut record.tags);
    }

    Ok(record)
}

fn collect_tag(tag: &Tag, tags: &mut IndexMap<String, String>) {
    if let Some(title) = tag.title() {
        tags.insert("Title".to_string(), title.to_string());
    }
    if let Some(artist) = tag.artist() {
        tags.insert("Artist".to_string(), artist.to_string());
    }
    if let Some(album) = tag.album() {
        tags.insert("Album".to_string(), album.to_string());
    }
    if let Some(genre) = tag.genre() {
        tags.insert("Genre".to_string(), genre.to_string());
    }
    if let Some(comment) = tag.comment() {
        tags.insert("Comment".to_string(), comment.to_string());
    }
    if let Some(year) = tag.year() {
        tags.insert("Year".to_string(), year.to_string());
    }
    if let Some(track) = tag.track() {
        tags.insert("Track".to_string(), track.to_string());
    }
    if let Some(album_artist) = tag.get_string(&ItemKey::AlbumArtist) {
        tags.insert("AlbumArtist".to_string(), album_artist.to_string());
    }
    if let Some(performer) = tag.get_string(&ItemKey::Performer) {
        tags.insert("Performer".to_string(), performer.to_string());
    }
    if let Some(date) = tag.get_string(&ItemKey::RecordingDate) {
        tags.insert("Date".to_string(), date.to_string());
    }

    // Everything else under its raw key; custom TXXX/Vorbis fields arrive
    // here as ItemKey::Unknown with their original spelling.
    for item in tag.items() {
        let key = match item.key() {
            ItemKey::Unknown(name) => name.clone(),
            other => format!("{:?}", other),
        };
        let value = match item.value() {
            ItemValue::Text(text) => text.to_string(),
            ItemValue::Locator(locator) => locator.to_string(),
            ItemValue::Binary(_) => continue,
        };
        if value.is_empty() {
            continue;
        }
        tags.entry(key).or_insert(value);
    }
}
