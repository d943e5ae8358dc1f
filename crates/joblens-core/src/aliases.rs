//! Alias tables mapping textual variants to a canonical form.
//!
//! Two independent tables exist: one for technology/skill keywords and one for
//! city/region names. Built-in defaults cover common variants; a YAML file can
//! extend or override them without code changes.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Built-in keyword variants. Keys are folded; values are canonical and
/// already lowercase so that normalizing a canonical keyword is a no-op.
pub const KEYWORD_ALIASES: &[(&str, &str)] = &[
    ("reactjs", "react"),
    ("react.js", "react"),
    ("react js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("nextjs", "next.js"),
    ("next", "next.js"),
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("node js", "node.js"),
    ("expressjs", "express"),
    ("express.js", "express"),
    ("js", "javascript"),
    ("ecmascript", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("python3", "python"),
    ("golang", "go"),
    ("k8s", "kubernetes"),
    ("kube", "kubernetes"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("amazon web services", "aws"),
    ("google cloud", "gcp"),
    ("google cloud platform", "gcp"),
    ("ms azure", "azure"),
    ("microsoft azure", "azure"),
    ("ci/cd", "ci-cd"),
    ("cicd", "ci-cd"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("tailwindcss", "tailwind"),
    ("tailwind css", "tailwind"),
    ("c sharp", "c#"),
    ("csharp", "c#"),
    ("cpp", "c++"),
    ("dotnet", ".net"),
    ("gql", "graphql"),
];

/// Built-in city/region variants, keyed by folded name.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("nyc", "New York"),
    ("new york", "New York"),
    ("new york city", "New York"),
    ("sf", "San Francisco"),
    ("san fran", "San Francisco"),
    ("la", "Los Angeles"),
    ("los angeles", "Los Angeles"),
    ("london", "London"),
    ("berlin", "Berlin"),
    ("amsterdam", "Amsterdam"),
    ("barcelona", "Barcelona"),
    ("madrid", "Madrid"),
    ("paris", "Paris"),
    ("munich", "Munich"),
    ("münchen", "Munich"),
    ("zurich", "Zurich"),
    ("zürich", "Zurich"),
];

/// Folds a raw token into an alias-table key: trimmed and lowercased.
#[must_use]
pub fn fold(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// An immutable folded-key → canonical-value lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Builds a table, folding every key. Later duplicates win.
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (fold(k.as_ref()), v.into()))
                .collect(),
        }
    }

    /// Looks up the canonical form of `raw`, folding it first.
    #[must_use]
    pub fn get(&self, raw: &str) -> Option<&str> {
        self.entries.get(&fold(raw)).map(String::as_str)
    }

    /// Returns a new table with `overrides` layered on top of `self`.
    #[must_use]
    pub fn with_overrides(mut self, overrides: AliasTable) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The pair of alias tables used by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTables {
    pub keywords: AliasTable,
    pub cities: AliasTable,
}

impl AliasTables {
    /// The built-in keyword and city tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            keywords: AliasTable::new(KEYWORD_ALIASES.iter().copied()),
            cities: AliasTable::new(CITY_ALIASES.iter().copied()),
        }
    }
}

impl Default for AliasTables {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Default, Deserialize)]
struct AliasFile {
    #[serde(default)]
    keywords: BTreeMap<String, String>,
    #[serde(default)]
    cities: BTreeMap<String, String>,
}

/// Load alias overrides from a YAML file and merge them over the built-ins.
///
/// The file has two optional mappings, `keywords` and `cities`. Keyword
/// canonical values are folded so they stay stable under normalization.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_alias_tables(path: &Path) -> Result<AliasTables, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AliasFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let tables = parse_alias_tables(&content)?;
    tracing::debug!(
        path = %path.display(),
        keywords = tables.keywords.len(),
        cities = tables.cities.len(),
        "loaded alias tables"
    );
    Ok(tables)
}

fn parse_alias_tables(content: &str) -> Result<AliasTables, ConfigError> {
    // An empty document deserializes to unit, not to an empty mapping.
    let file: AliasFile = if content.trim().is_empty() {
        AliasFile::default()
    } else {
        serde_yaml::from_str(content)?
    };

    validate_section("keywords", &file.keywords)?;
    validate_section("cities", &file.cities)?;

    let builtin = AliasTables::builtin();
    let keywords = AliasTable::new(file.keywords.iter().map(|(k, v)| (k, fold(v))));
    let cities = AliasTable::new(file.cities.iter().map(|(k, v)| (k, v.trim().to_string())));

    Ok(AliasTables {
        keywords: builtin.keywords.with_overrides(keywords),
        cities: builtin.cities.with_overrides(cities),
    })
}

fn validate_section(section: &str, entries: &BTreeMap<String, String>) -> Result<(), ConfigError> {
    for (alias, canonical) in entries {
        if alias.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{section}: alias must be non-empty"
            )));
        }
        if canonical.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{section}: alias '{alias}' has an empty canonical value"
            )));
        }
    }
    Ok(())
}
