//! Review output: console diff, persisted JSON document, CSV table.
//!
//! Everything here is presentation and persistence of a finished
//! [`FolderSuggestion`]; nothing feeds back into the inference.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::diff::{diff_fields, field_pair, DiffOutcome};
use crate::suggest::types::FolderSuggestion;

pub const SUGGESTIONS_FILE: &str = "_tags_suggestions.json";
pub const REPORT_CSV_FILE: &str = "_tags_report.csv";

/// Persisted wrapper around a [`FolderSuggestion`].
///
/// `version` and `scanned_at` are additive fields; consumers that read only
/// the suggestion mapping are unaffected by them.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionDocument {
    pub version: String,
    pub scanned_at: DateTime<Utc>,
    #[serde(flatten)]
    pub suggestion: FolderSuggestion,
}

impl SuggestionDocument {
    pub fn new(suggestion: FolderSuggestion) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scanned_at: Utc::now(),
            suggestion,
        }
    }
}

/// Write the suggestion document into the scanned folder as pretty JSON.
/// serde_json emits UTF-8 without escaping non-ASCII, so any characters the
/// diff view shows survive the round trip.
pub fn save_suggestions(folder: &Path, document: &SuggestionDocument) -> Result<()> {
    let path = folder.join(SUGGESTIONS_FILE);
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    file: &'a str,
    field: &'a str,
    current: &'a str,
    suggested: &'a str,
}

/// One CSV row per changed field, mirroring the console review.
pub fn save_report_csv(folder: &Path, suggestion: &FolderSuggestion) -> Result<()> {
    let path = folder.join(REPORT_CSV_FILE);
    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    for file in &suggestion.files {
        if let DiffOutcome::Changed(fields) = diff_fields(file) {
            for field in fields {
                let (current, suggested) = field_pair(file, field);
                writer.serialize(ReportRow {
                    file: &file.file,
                    field,
                    current,
                    suggested,
                })?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Print the folder review: consensus header, then each file's changed
/// fields (or a no-change marker).
pub fn print_review(suggestion: &FolderSuggestion) {
    println!("\n=== {} ===", suggestion.folder);
    println!(
        "author: {}  language: {}  genre: {}  order: {}",
        suggestion.consensus.author.as_deref().unwrap_or("-"),
        suggestion.consensus.language.as_deref().unwrap_or("-"),
        suggestion.consensus.genre,
        suggestion.order_source.as_str(),
    );

    for file in &suggestion.files {
        match diff_fields(file) {
            DiffOutcome::Unchanged => println!("  {:<40} (no change)", file.file),
            DiffOutcome::Changed(fields) => {
                println!("  {}", file.file);
                for field in fields {
                    let (current, suggested) = field_pair(file, field);
                    println!("    {:<12} {:?} -> {:?}", field, current, suggested);
                }
            }
        }
    }
}
