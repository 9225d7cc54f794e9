use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ProjectCatalog;
use crate::models::SiteProfile;
use crate::parsers::{builtin_profile, parse_profile_file};
use crate::utils::resolve_profile_path;

/// Where a profile came from, for `stats` output and logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    File(PathBuf),
    Builtin,
}

/// A validated profile and the catalog built from its projects
#[derive(Debug, Clone)]
pub struct LoadedProfile {
    pub profile: SiteProfile,
    pub catalog: ProjectCatalog,
    pub source: ProfileSource,
}

/// Load the site profile and build its project catalog
///
/// Resolution order:
/// 1. `explicit` (the `--profile` option); any failure is an error
/// 2. The per-user profile file, if it exists; a broken file is logged and the built-in
///    profile is used instead
/// 3. The built-in profile
pub fn load_profile(explicit: Option<&Path>) -> Result<LoadedProfile> {
    if let Some(path) = explicit {
        return load_from_file(path);
    }

    if let Some(path) = resolve_profile_path(None) {
        match load_from_file(&path) {
            Ok(loaded) => return Ok(loaded),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid user profile");
            }
        }
    }

    let profile = builtin_profile()?;
    let catalog = ProjectCatalog::new(profile.projects.clone())
        .context("Built-in profile has an invalid project catalog")?;
    Ok(LoadedProfile { profile, catalog, source: ProfileSource::Builtin })
}

fn load_from_file(path: &Path) -> Result<LoadedProfile> {
    let profile = parse_profile_file(path)?;
    let catalog = ProjectCatalog::new(profile.projects.clone())
        .with_context(|| format!("Invalid project catalog in {}", path.display()))?;

    tracing::info!(path = %path.display(), projects = catalog.len(), "Using profile file");
    Ok(LoadedProfile { profile, catalog, source: ProfileSource::File(path.to_path_buf()) })
}
