use std::path::PathBuf;

/// Fraction of the top keyword count a keyword must reach to count as
/// high-demand in the skill-gap classification.
pub const DEFAULT_DEMAND_FRACTION: f64 = 0.33;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML file whose entries are merged over the built-in alias tables.
    pub aliases_path: Option<PathBuf>,
    pub jobs_path: PathBuf,
    pub skills_path: PathBuf,
    pub demand_fraction: f64,
}
