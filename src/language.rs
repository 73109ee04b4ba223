//! Folder language inference and genre derivation
//!
//! Comment tags are the only usable language signal in this corpus, so the
//! folder language is a keyword vote across all per-file comments. The
//! genre follows from the language through a fixed table.

use indexmap::IndexMap;

use crate::normalize::strip_diacritics;

/// Inferred content language of a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Czech,
    Slovak,
    /// No voting markers produce this yet; it exists so the genre table is
    /// total over the languages the corpus contains.
    #[allow(dead_code)]
    English,
}

impl Language {
    /// Short code used in the persisted consensus.
    pub fn code(self) -> &'static str {
        match self {
            Language::Czech => "cz",
            Language::Slovak => "sk",
            Language::English => "en",
        }
    }
}

/// Genre suggested when no language can be inferred.
///
/// The primary target corpus is Czech-language audiobooks; the bias is
/// deliberate and overridable through `Config::default_genre`.
pub const DEFAULT_GENRE: &str = "audiokniha";

/// Czech markers are checked first: a comment matching one casts a Czech
/// vote and is never also counted as Slovak.
const CZECH_MARKERS: &[&str] = &["cte", "uvod", "autor"];
const SLOVAK_MARKERS: &[&str] = &["citaj", "preklad"];

/// Classify a single comment by keyword containment, or None without a
/// marker. Matching happens on the diacritic-stripped lowercase text.
fn classify_comment(comment: &str) -> Option<Language> {
    let normalized = strip_diacritics(comment).to_lowercase();
    if CZECH_MARKERS.iter().any(|m| normalized.contains(m)) {
        return Some(Language::Czech);
    }
    if SLOVAK_MARKERS.iter().any(|m| normalized.contains(m)) {
        return Some(Language::Slovak);
    }
    None
}

/// Vote a folder language from all per-file comments.
///
/// Plurality wins; a tie resolves to the language whose first vote came
/// earlier, so the result is reproducible for identical input order. No
/// votes at all yields None (undetermined, not Czech).
pub fn infer_language<'a, I>(comments: I) -> Option<Language>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut votes: IndexMap<Language, usize> = IndexMap::new();
    for comment in comments {
        if let Some(language) = classify_comment(comment) {
            *votes.entry(language).or_insert(0) += 1;
        }
    }

    let mut best: Option<(Language, usize)> = None;
    for (language, count) in votes {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((language, count)),
        }
    }
    best.map(|(language, _)| language)
}

/// Fixed genre table keyed by inferred language.
///
/// `fallback` is used for the undetermined case; callers normally pass the
/// configured default ([`DEFAULT_GENRE`] unless overridden).
pub fn genre_for(language: Option<Language>, fallback: &str) -> String {
    match language {
        Some(Language::Czech) => "audiokniha".to_string(),
        Some(Language::Slovak) => "audiokniha (SK)".to_string(),
        Some(Language::English) => "audiobook".to_string(),
        None => fallback.to_string(),
    }
}
