use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::{PROFILE_VERSION, SiteProfile};
use crate::utils::validate_file_size;

/// Profile compiled into the binary, used when no profile file is configured
const BUILTIN_PROFILE: &str = include_str!("../../assets/profile.json");

/// Parse a profile JSON file
///
/// The file size is checked on the opened handle before reading, and the schema
/// version must match [`PROFILE_VERSION`].
pub fn parse_profile_file(path: &Path) -> Result<SiteProfile> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open profile file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let profile: SiteProfile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse profile file: {}", path.display()))?;

    check_version(&profile)?;
    tracing::debug!(path = %path.display(), projects = profile.projects.len(), "Loaded profile");
    Ok(profile)
}

/// Parse a profile from an in-memory JSON string
pub fn parse_profile_str(json: &str) -> Result<SiteProfile> {
    let profile: SiteProfile = serde_json::from_str(json).context("Failed to parse profile JSON")?;
    check_version(&profile)?;
    Ok(profile)
}

/// The default profile shipped with the binary
pub fn builtin_profile() -> Result<SiteProfile> {
    parse_profile_str(BUILTIN_PROFILE).context("Built-in profile is invalid")
}

fn check_version(profile: &SiteProfile) -> Result<()> {
    if profile.version != PROFILE_VERSION {
        bail!(
            "Unsupported profile version {} (expected {})",
            profile.version,
            PROFILE_VERSION
        );
    }
    Ok(())
}
