use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "JOBLENS_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.aliases_path.is_none());
    assert_eq!(cfg.jobs_path, PathBuf::from("./data/jobs.csv"));
    assert_eq!(cfg.skills_path, PathBuf::from("./data/skills.csv"));
    assert!((cfg.demand_fraction - DEFAULT_DEMAND_FRACTION).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("JOBLENS_ENV", "production");
    map.insert("JOBLENS_LOG_LEVEL", "debug");
    map.insert("JOBLENS_ALIASES_PATH", "/etc/joblens/aliases.yaml");
    map.insert("JOBLENS_JOBS_PATH", "/tmp/jobs.json");
    map.insert("JOBLENS_SKILLS_PATH", "/tmp/skills.json");
    map.insert("JOBLENS_DEMAND_FRACTION", "0.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.aliases_path,
        Some(PathBuf::from("/etc/joblens/aliases.yaml"))
    );
    assert_eq!(cfg.jobs_path, PathBuf::from("/tmp/jobs.json"));
    assert_eq!(cfg.skills_path, PathBuf::from("/tmp/skills.json"));
    assert!((cfg.demand_fraction - 0.5).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_blank_aliases_path_is_none() {
    let mut map = HashMap::new();
    map.insert("JOBLENS_ALIASES_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.aliases_path.is_none());
}

#[test]
fn build_app_config_rejects_non_numeric_fraction() {
    let mut map = HashMap::new();
    map.insert("JOBLENS_DEMAND_FRACTION", "a third");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBLENS_DEMAND_FRACTION"),
        "expected InvalidEnvVar(JOBLENS_DEMAND_FRACTION), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_fraction() {
    let mut map = HashMap::new();
    map.insert("JOBLENS_DEMAND_FRACTION", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JOBLENS_DEMAND_FRACTION"),
        "expected InvalidEnvVar(JOBLENS_DEMAND_FRACTION), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_fraction_above_one() {
    let mut map = HashMap::new();
    map.insert("JOBLENS_DEMAND_FRACTION", "1.5");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn build_app_config_accepts_fraction_of_one() {
    let mut map = HashMap::new();
    map.insert("JOBLENS_DEMAND_FRACTION", "1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.demand_fraction - 1.0).abs() < f64::EPSILON);
}
