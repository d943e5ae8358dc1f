//! One-shot analysis of a listings/skills snapshot.

use joblens_core::{
    load_alias_tables, AliasTables, AppConfig, ConfigError, Listing, Skill,
    DEFAULT_DEMAND_FRACTION,
};
use serde::{Deserialize, Serialize};

use crate::keywords::keyword_frequencies;
use crate::location::location_breakdown;
use crate::normalize::TextNormalizer;
use crate::salary::salary_stats;
use crate::skill_gap::skill_gaps;
use crate::types::{KeywordFrequency, LocationBreakdown, SalaryStats, SkillGapResult};

/// Tunables for an analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub aliases: AliasTables,
    /// Fraction of the top keyword count that marks a keyword high-demand.
    pub demand_fraction: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            aliases: AliasTables::builtin(),
            demand_fraction: DEFAULT_DEMAND_FRACTION,
        }
    }
}

impl AnalysisConfig {
    /// Builds the analysis settings from application config, loading the alias
    /// override file when one is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the alias file cannot be loaded.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let aliases = match &config.aliases_path {
            Some(path) => load_alias_tables(path)?,
            None => AliasTables::builtin(),
        };
        Ok(Self {
            aliases,
            demand_fraction: config.demand_fraction,
        })
    }
}

/// Everything the dashboard shows, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub listing_count: usize,
    pub keywords: Vec<KeywordFrequency>,
    pub salary: SalaryStats,
    pub locations: LocationBreakdown,
    pub skill_gap: SkillGapResult,
}

/// Runs every analysis over the given snapshot.
///
/// Keyword, salary, and location analyses are independent; the skill-gap
/// classification consumes the keyword frequencies.
#[must_use]
pub fn analyze(listings: &[Listing], skills: &[Skill], config: &AnalysisConfig) -> AnalysisReport {
    let normalizer = TextNormalizer::new(config.aliases.clone());

    let keywords = keyword_frequencies(listings, &normalizer);
    let salary = salary_stats(listings);
    let locations = location_breakdown(listings, &normalizer);
    let skill_gap = skill_gaps(&keywords, skills, &normalizer, config.demand_fraction);

    tracing::debug!(
        listings = listings.len(),
        skills = skills.len(),
        keywords = keywords.len(),
        "analysis complete"
    );

    AnalysisReport {
        listing_count: listings.len(),
        keywords,
        salary,
        locations,
        skill_gap,
    }
}
