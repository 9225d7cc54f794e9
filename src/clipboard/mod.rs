//! Copying project links to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest link accepted for copying
const MAX_LINK_LEN: usize = 2048;

/// Seam over the system clipboard so tests never touch it
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// A link is copyable if it is a short, single-line http(s) URL
fn validate_link(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        bail!("Cannot copy an empty link");
    }

    if url.len() > MAX_LINK_LEN {
        bail!("Link too long to copy ({} bytes, max {})", url.len(), MAX_LINK_LEN);
    }

    if url.chars().any(char::is_control) {
        bail!("Link contains control characters");
    }

    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("https://") || lower.starts_with("http://")) {
        bail!("Only http(s) links can be copied: {}", url);
    }

    Ok(())
}

fn copy_with_provider(url: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_link(url)?;
    provider.set_text(url)
}

/// Copy a project link to the system clipboard
///
/// # Errors
///
/// Returns error if:
/// - The link is empty, too long, multi-line or not http(s)
/// - The system clipboard is unavailable (headless session, denied access)
pub fn copy_link(url: &str) -> Result<()> {
    // Validate before touching the clipboard so headless runs get the real error
    validate_link(url)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(url, &mut clipboard)?;
    tracing::debug!(url, "Link copied to clipboard");
    Ok(())
}
