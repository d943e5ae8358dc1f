//! Skill-gap classification of market keywords against the user's skills.
//!
//! A keyword is high-demand when its count reaches a fixed fraction of the
//! most frequent keyword's count. Combined with whether the user lists the
//! skill, that yields one of three buckets:
//!
//! | | user has it | user lacks it |
//! |---|---|---|
//! | high demand | strength | gap |
//! | low demand | low demand | not surfaced |

use std::collections::{HashMap, HashSet};

use joblens_core::{Proficiency, Skill};
use serde::{Deserialize, Serialize};

use crate::normalize::TextNormalizer;
use crate::types::{
    Heatmap, HeatmapChip, HeatmapRow, KeywordFrequency, SkillGapEntry, SkillGapResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    Strength,
    Gap,
    LowDemand,
    /// Low-demand keyword the user does not have; not actionable.
    Unclassified,
}

/// Assigns the bucket for one keyword.
#[must_use]
pub fn classify(high_demand: bool, user_has_skill: bool) -> Classification {
    match (high_demand, user_has_skill) {
        (true, true) => Classification::Strength,
        (true, false) => Classification::Gap,
        (false, true) => Classification::LowDemand,
        (false, false) => Classification::Unclassified,
    }
}

/// The count a keyword must reach to be high-demand: `fraction` of the top
/// count. `None` when there are no keywords, meaning nothing qualifies.
#[must_use]
pub fn demand_threshold(frequencies: &[KeywordFrequency], fraction: f64) -> Option<f64> {
    frequencies
        .iter()
        .map(|f| f.count)
        .max()
        .map(|top| f64::from(top) * fraction)
}

/// Classifies every market keyword against the user's skills.
///
/// Skill names go through the same keyword normalization as the market
/// keywords. If a skill is listed twice, the later proficiency wins. User
/// skills that never appear in the market are appended to `low_demand` with a
/// count of zero, in the order they were listed.
#[must_use]
pub fn skill_gaps(
    frequencies: &[KeywordFrequency],
    skills: &[Skill],
    normalizer: &TextNormalizer,
    fraction: f64,
) -> SkillGapResult {
    let mut order: Vec<String> = Vec::new();
    let mut proficiency_by_skill: HashMap<String, Option<String>> = HashMap::new();
    for skill in skills {
        let name = normalizer.keyword(&skill.name);
        if name.is_empty() {
            continue;
        }
        if proficiency_by_skill
            .insert(name.clone(), skill.proficiency_label())
            .is_none()
        {
            order.push(name);
        }
    }

    let threshold = demand_threshold(frequencies, fraction);
    let mut result = SkillGapResult::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for frequency in frequencies {
        seen.insert(frequency.keyword.as_str());
        let high_demand = threshold.is_some_and(|t| f64::from(frequency.count) >= t);
        let proficiency = proficiency_by_skill.get(&frequency.keyword);

        let entry = || SkillGapEntry {
            keyword: frequency.keyword.clone(),
            count: frequency.count,
            proficiency: proficiency.cloned().flatten(),
        };

        match classify(high_demand, proficiency.is_some()) {
            Classification::Strength => result.strengths.push(entry()),
            Classification::Gap => result.gaps.push(entry()),
            Classification::LowDemand => result.low_demand.push(entry()),
            Classification::Unclassified => {}
        }
    }

    for name in order {
        if seen.contains(name.as_str()) {
            continue;
        }
        let proficiency = proficiency_by_skill.remove(&name).flatten();
        result.low_demand.push(SkillGapEntry {
            keyword: name,
            count: 0,
            proficiency,
        });
    }

    tracing::debug!(
        keywords = frequencies.len(),
        skills = skills.len(),
        threshold = ?threshold,
        strengths = result.strengths.len(),
        gaps = result.gaps.len(),
        low_demand = result.low_demand.len(),
        "classified skill gaps"
    );

    result
}

/// Row labels of the heatmap grid, top to bottom.
pub const HEATMAP_ROWS: [&str; 2] = ["High Demand", "Low / No Demand"];

/// Column shown for entries without a recognized proficiency.
pub const NOT_LISTED: &str = "Not Listed";

impl SkillGapResult {
    /// Lays the buckets out as demand tier × proficiency.
    ///
    /// Strengths and gaps form the high-demand row, low-demand entries the
    /// other. Entries whose proficiency is missing or unrecognized land in the
    /// `"Not Listed"` column.
    #[must_use]
    pub fn heatmap(&self) -> Heatmap {
        let columns: Vec<String> = std::iter::once(NOT_LISTED.to_string())
            .chain(Proficiency::ALL.iter().map(|level| level.label().to_string()))
            .collect();

        let row = |label: &str, buckets: &[(&[SkillGapEntry], Classification)]| {
            let mut cells = vec![Vec::new(); columns.len()];
            for (entries, category) in buckets {
                for entry in *entries {
                    cells[heatmap_column(entry)].push(HeatmapChip {
                        keyword: entry.keyword.clone(),
                        count: entry.count,
                        category: *category,
                    });
                }
            }
            HeatmapRow {
                label: label.to_string(),
                cells,
            }
        };

        let rows = vec![
            row(
                HEATMAP_ROWS[0],
                &[
                    (self.strengths.as_slice(), Classification::Strength),
                    (self.gaps.as_slice(), Classification::Gap),
                ],
            ),
            row(
                HEATMAP_ROWS[1],
                &[(self.low_demand.as_slice(), Classification::LowDemand)],
            ),
        ];

        Heatmap { columns, rows }
    }
}

fn heatmap_column(entry: &SkillGapEntry) -> usize {
    entry
        .proficiency
        .as_deref()
        .and_then(Proficiency::parse)
        .and_then(|level| Proficiency::ALL.iter().position(|l| *l == level))
        .map_or(0, |i| i + 1)
}

#[cfg(test)]
#[path = "skill_gap_test.rs"]
mod tests;
