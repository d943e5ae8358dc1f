//! Output contracts of the analysis engine.
//!
//! Field names serialize in camelCase because the charts and tables that
//! consume these values expect that shape.

use serde::{Deserialize, Serialize};

/// How often a canonical keyword occurs across all listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: u32,
}

/// A parsed salary range in whole currency units. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

impl SalaryRange {
    /// `(min + max) / 2`, rounded half up.
    #[must_use]
    pub fn midpoint(self) -> u64 {
        mean_of_two(self.min, self.max)
    }
}

/// Rounded (half up) mean of two non-negative integers without overflow.
pub(crate) fn mean_of_two(a: u64, b: u64) -> u64 {
    a / 2 + b / 2 + (a % 2 + b % 2 + 1) / 2
}

/// One listing's contribution to the salary chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryPoint {
    pub title: String,
    pub min: u64,
    pub max: u64,
    pub midpoint: u64,
}

/// Salary summary over all listings with a parseable salary.
///
/// The scalar fields are all `None` together exactly when `data` is empty.
/// `min` and `max` are the extreme midpoints, not the extreme range bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStats {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub average: Option<u64>,
    pub median: Option<u64>,
    /// Sorted by midpoint, ascending.
    pub data: Vec<SalaryPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCount {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    pub name: String,
    pub count: u32,
}

/// Two independent breakdowns, each sorted by count, highest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBreakdown {
    pub remote_breakdown: Vec<RemoteCount>,
    pub city_breakdown: Vec<CityCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGapEntry {
    pub keyword: String,
    /// Market occurrences; `0` for user skills never seen in any listing.
    pub count: u32,
    pub proficiency: Option<String>,
}

/// Market keywords and user skills partitioned into three disjoint buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapResult {
    /// High-demand keywords the user has.
    pub strengths: Vec<SkillGapEntry>,
    /// High-demand keywords the user lacks.
    pub gaps: Vec<SkillGapEntry>,
    /// Skills the user has that the market asks for rarely or never.
    pub low_demand: Vec<SkillGapEntry>,
}

/// Skill-gap entries laid out as demand tier × proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    /// `"Not Listed"` followed by each proficiency level, lowest first.
    pub columns: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub label: String,
    /// One cell per column, in column order.
    pub cells: Vec<Vec<HeatmapChip>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapChip {
    pub keyword: String,
    pub count: u32,
    pub category: crate::skill_gap::Classification,
}
