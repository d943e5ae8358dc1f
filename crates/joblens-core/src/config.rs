use crate::app_config::{AppConfig, Environment, DEFAULT_DEMAND_FRACTION};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("JOBLENS_ENV", "development"))?;
    let log_level = or_default("JOBLENS_LOG_LEVEL", "info");
    let aliases_path = lookup("JOBLENS_ALIASES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let jobs_path = PathBuf::from(or_default("JOBLENS_JOBS_PATH", "./data/jobs.csv"));
    let skills_path = PathBuf::from(or_default("JOBLENS_SKILLS_PATH", "./data/skills.csv"));
    let demand_fraction = parse_demand_fraction(&or_default(
        "JOBLENS_DEMAND_FRACTION",
        &DEFAULT_DEMAND_FRACTION.to_string(),
    ))?;

    Ok(AppConfig {
        env,
        log_level,
        aliases_path,
        jobs_path,
        skills_path,
        demand_fraction,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "JOBLENS_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

/// Parse the skill-gap demand fraction. Must be finite and within `(0, 1]`.
fn parse_demand_fraction(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "JOBLENS_DEMAND_FRACTION".to_string(),
        reason,
    };

    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid(e.to_string()))?;

    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(invalid(format!("{value} is outside (0, 1]")));
    }

    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
