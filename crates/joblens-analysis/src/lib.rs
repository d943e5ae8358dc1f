//! The joblens analysis engine.
//!
//! Turns raw job listings into keyword demand, salary statistics, location
//! breakdowns, and a skill-gap classification against the user's inventory.
//! Every operation is a pure function of its inputs: nothing here performs I/O
//! or keeps state between calls, and malformed fields degrade to "skipped"
//! rather than producing errors.

pub mod filter;
pub mod keywords;
pub mod location;
pub mod normalize;
pub mod report;
pub mod salary;
pub mod skill_gap;
pub mod types;

mod tally;

pub use filter::{distinct_keywords, filter_listings, ListingFilter};
pub use keywords::keyword_frequencies;
pub use location::location_breakdown;
pub use normalize::{
    normalize_city, normalize_keyword, normalize_remote_status, RemoteStatus, TextNormalizer,
};
pub use report::{analyze, AnalysisConfig, AnalysisReport};
pub use salary::{parse_salary, salary_stats};
pub use skill_gap::{classify, demand_threshold, skill_gaps, Classification};
pub use types::{
    CityCount, Heatmap, HeatmapChip, HeatmapRow, KeywordFrequency, LocationBreakdown,
    RemoteCount, SalaryPoint, SalaryRange, SalaryStats, SkillGapEntry, SkillGapResult,
};
