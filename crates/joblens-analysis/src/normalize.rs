//! Canonicalization of free-text tokens: keywords, city names, and
//! remote-status labels.
//!
//! Normalization never fails. Input that matches no alias falls back to a
//! sanitized form of itself.

use joblens_core::aliases::fold;
use joblens_core::{AliasTable, AliasTables};

/// Canonical keyword for `raw`: the alias target if the folded token is a
/// known variant, otherwise the folded token itself.
#[must_use]
pub fn normalize_keyword(raw: &str, aliases: &AliasTable) -> String {
    aliases
        .get(raw)
        .map_or_else(|| fold(raw), ToString::to_string)
}

/// Canonical city name for `raw`: the alias target if known, otherwise the
/// trimmed input in title case.
#[must_use]
pub fn normalize_city(raw: &str, aliases: &AliasTable) -> String {
    aliases
        .get(raw)
        .map_or_else(|| title_case(raw.trim()), ToString::to_string)
}

/// Lowercases `s` and capitalizes the first letter of every word. A word
/// starts at any alphanumeric character not preceded by another one.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Work arrangement parsed from the free-text remote-status column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RemoteStatus {
    Remote,
    Hybrid,
    OnSite,
    /// Unrecognized label, kept trimmed but otherwise verbatim.
    Other(String),
}

impl RemoteStatus {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            RemoteStatus::Remote => "Remote",
            RemoteStatus::Hybrid => "Hybrid",
            RemoteStatus::OnSite => "On-site",
            RemoteStatus::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a remote-status label onto the three known arrangements.
///
/// Matching is exact after trimming and case-folding.
#[must_use]
pub fn normalize_remote_status(raw: &str) -> RemoteStatus {
    match fold(raw).as_str() {
        "remote" => RemoteStatus::Remote,
        "hybrid" => RemoteStatus::Hybrid,
        "on-site" | "onsite" | "on site" | "office" => RemoteStatus::OnSite,
        _ => RemoteStatus::Other(raw.trim().to_string()),
    }
}

/// Normalizer bound to a fixed pair of alias tables.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    tables: AliasTables,
}

impl TextNormalizer {
    #[must_use]
    pub fn new(tables: AliasTables) -> Self {
        Self { tables }
    }

    #[must_use]
    pub fn tables(&self) -> &AliasTables {
        &self.tables
    }

    #[must_use]
    pub fn keyword(&self, raw: &str) -> String {
        normalize_keyword(raw, &self.tables.keywords)
    }

    #[must_use]
    pub fn city(&self, raw: &str) -> String {
        normalize_city(raw, &self.tables.cities)
    }
}
