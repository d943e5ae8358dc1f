//! Shared data contracts and configuration for joblens.
//!
//! Listings and skills arrive as loosely-typed spreadsheet rows; this crate
//! turns them into typed records, owns the alias tables used for
//! canonicalization, and loads application configuration from the
//! environment.

pub mod aliases;
mod app_config;
mod config;
pub mod listings;
pub mod records;

use thiserror::Error;

pub use aliases::{load_alias_tables, AliasTable, AliasTables};
pub use app_config::{AppConfig, Environment, DEFAULT_DEMAND_FRACTION};
pub use config::{load_app_config, load_app_config_from_env};
pub use listings::{Listing, Proficiency, Skill};
pub use records::{load_listings, load_skills, records_from_rows, InputError, Record};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read alias file {path}: {source}")]
    AliasFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse alias file: {0}")]
    AliasFileParse(#[from] serde_yaml::Error),

    #[error("alias validation failed: {0}")]
    Validation(String),
}
