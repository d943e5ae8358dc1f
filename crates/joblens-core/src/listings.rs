use serde::{Deserialize, Serialize};

/// One job-posting row.
///
/// Field names follow the spreadsheet's logical column headers. Every field is
/// optional in the source and decodes to an empty string when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    /// Free-text salary, e.g. `"€70k-€90k"` or `"Competitive"`.
    #[serde(rename = "Salary")]
    pub salary: String,
    /// Comma-separated keyword list, e.g. `"React, Node.js"`.
    #[serde(rename = "Keywords")]
    pub keywords: String,
    /// Free-text location, e.g. `"Berlin, Germany"`.
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Remote Status")]
    pub remote_status: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Company Size")]
    pub company_size: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Lead Source")]
    pub lead_source: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl Listing {
    /// Column headers in spreadsheet order.
    pub const COLUMNS: [&'static str; 11] = [
        "Job Title",
        "Company",
        "Salary",
        "Keywords",
        "Location",
        "Remote Status",
        "Industry",
        "Company Size",
        "Priority",
        "Lead Source",
        "URL",
    ];

    /// Every field value in [`Listing::COLUMNS`] order.
    #[must_use]
    pub fn fields(&self) -> [&str; 11] {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.salary.as_str(),
            self.keywords.as_str(),
            self.location.as_str(),
            self.remote_status.as_str(),
            self.industry.as_str(),
            self.company_size.as_str(),
            self.priority.as_str(),
            self.lead_source.as_str(),
            self.url.as_str(),
        ]
    }

    /// The raw keyword tokens, trimmed, with blanks dropped.
    pub fn keyword_tokens(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

/// Self-assessed skill level. Ordered from least to most proficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub const ALL: [Proficiency; 3] = [
        Proficiency::Beginner,
        Proficiency::Intermediate,
        Proficiency::Advanced,
    ];

    /// Parses a level label case-insensitively. Unknown labels yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "beginner" => Some(Proficiency::Beginner),
            "intermediate" => Some(Proficiency::Intermediate),
            "advanced" => Some(Proficiency::Advanced),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the user's skill inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(rename = "Skill")]
    pub name: String,
    /// Raw proficiency text as entered; see [`Skill::level`].
    #[serde(rename = "Proficiency")]
    pub proficiency: String,
}

impl Skill {
    pub const COLUMNS: [&'static str; 2] = ["Skill", "Proficiency"];

    pub fn new(name: impl Into<String>, proficiency: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            proficiency: proficiency.into(),
        }
    }

    /// The parsed proficiency level, if the text names a known level.
    #[must_use]
    pub fn level(&self) -> Option<Proficiency> {
        Proficiency::parse(&self.proficiency)
    }

    /// The proficiency as it should be displayed: the canonical level name when
    /// recognized, the trimmed raw text otherwise, `None` when blank.
    #[must_use]
    pub fn proficiency_label(&self) -> Option<String> {
        if let Some(level) = self.level() {
            return Some(level.label().to_string());
        }
        let trimmed = self.proficiency.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_deserializes_with_missing_fields_as_empty() {
        let listing: Listing =
            serde_json::from_str(r#"{"Job Title": "Engineer", "Salary": "80k"}"#).unwrap();
        assert_eq!(listing.title, "Engineer");
        assert_eq!(listing.salary, "80k");
        assert_eq!(listing.keywords, "");
        assert_eq!(listing.remote_status, "");
    }

    #[test]
    fn listing_ignores_unknown_columns() {
        let listing: Listing =
            serde_json::from_str(r#"{"Keywords": "Rust", "Notes": "call back"}"#).unwrap();
        assert_eq!(listing.keywords, "Rust");
    }

    #[test]
    fn listing_serializes_with_column_names() {
        let listing = Listing {
            remote_status: "Remote".to_string(),
            ..Listing::default()
        };
        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["Remote Status"], "Remote");
        assert_eq!(value["Job Title"], "");
    }

    #[test]
    fn fields_follow_column_order() {
        let listing = Listing {
            title: "t".to_string(),
            url: "u".to_string(),
            ..Listing::default()
        };
        let fields = listing.fields();
        assert_eq!(fields[0], "t");
        assert_eq!(fields[10], "u");
        assert_eq!(Listing::COLUMNS[10], "URL");
    }

    #[test]
    fn keyword_tokens_trim_and_skip_blanks() {
        let listing = Listing {
            keywords: " React, ,Node.js ,".to_string(),
            ..Listing::default()
        };
        let tokens: Vec<&str> = listing.keyword_tokens().collect();
        assert_eq!(tokens, vec!["React", "Node.js"]);
    }

    #[test]
    fn proficiency_parses_case_insensitively() {
        assert_eq!(Proficiency::parse(" advanced "), Some(Proficiency::Advanced));
        assert_eq!(Proficiency::parse("BEGINNER"), Some(Proficiency::Beginner));
        assert_eq!(Proficiency::parse("expert"), None);
    }

    #[test]
    fn proficiency_is_ordered() {
        assert!(Proficiency::Beginner < Proficiency::Intermediate);
        assert!(Proficiency::Intermediate < Proficiency::Advanced);
    }

    #[test]
    fn skill_proficiency_label_prefers_canonical_level() {
        assert_eq!(
            Skill::new("Rust", "intermediate").proficiency_label().as_deref(),
            Some("Intermediate")
        );
        assert_eq!(
            Skill::new("Rust", " Expert ").proficiency_label().as_deref(),
            Some("Expert")
        );
        assert_eq!(Skill::new("Rust", "  ").proficiency_label(), None);
    }
}
