use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Directory name used under the platform config/data directories
pub const APP_DIR_NAME: &str = "portfolio-explorer";

const PROFILE_FILENAME: &str = "profile.json";

// Maximum profile file size: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Location of the user's profile override
///
/// - Linux: `~/.config/portfolio-explorer/profile.json`
/// - macOS: `~/Library/Application Support/portfolio-explorer/profile.json`
pub fn default_profile_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(config_dir.join(APP_DIR_NAME).join(PROFILE_FILENAME))
}

/// Pick the profile file to load: an explicit path wins, then the per-user file if it
/// exists. `None` means the built-in profile should be used.
pub fn resolve_profile_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    default_profile_path().ok().filter(|path| path.is_file())
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size checked is the size of the file that will be read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use portfolio_explorer::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.config/portfolio-explorer/profile.json");
/// // Returns "~/.config/portfolio-explorer/profile.json" if HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    path_str.into_owned()
}
