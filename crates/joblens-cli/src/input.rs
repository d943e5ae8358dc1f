//! Resolves input paths against configuration and loads the snapshot.

use std::path::PathBuf;

use anyhow::Context;
use joblens_core::{AppConfig, Listing, Skill};

/// Load listings from `path`, or from `JOBLENS_JOBS_PATH` when not given.
pub(crate) fn listings(config: &AppConfig, path: Option<PathBuf>) -> anyhow::Result<Vec<Listing>> {
    let path = path.unwrap_or_else(|| config.jobs_path.clone());
    let listings = joblens_core::load_listings(&path)
        .with_context(|| format!("loading listings from {}", path.display()))?;

    if listings.is_empty() {
        tracing::warn!(path = %path.display(), "listings file has no rows");
    } else {
        tracing::info!(path = %path.display(), count = listings.len(), "loaded listings");
    }
    Ok(listings)
}

/// Load the skill inventory from `path`, or from `JOBLENS_SKILLS_PATH` when
/// not given.
pub(crate) fn skills(config: &AppConfig, path: Option<PathBuf>) -> anyhow::Result<Vec<Skill>> {
    let path = path.unwrap_or_else(|| config.skills_path.clone());
    let skills = joblens_core::load_skills(&path)
        .with_context(|| format!("loading skills from {}", path.display()))?;

    if skills.is_empty() {
        tracing::warn!(path = %path.display(), "skills file has no rows");
    } else {
        tracing::info!(path = %path.display(), count = skills.len(), "loaded skills");
    }
    Ok(skills)
}
