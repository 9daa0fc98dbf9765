//! Display implementation for updater messages.
//!
//! All message text is defined here so that wording stays consistent between
//! the console output and the `tracing` output used in debug mode.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded(path) => format!("Configuration loaded from {}", path),
            Message::ConfigFileNotFound(path) => format!("Configuration file {} not found, using defaults", path),

            // === PROBE MESSAGES ===
            Message::CheckingReleases(url) => format!("Checking releases at {}", url),
            Message::UpToDate { tool, version } => format!("{} is up to date ({})", tool, version),
            Message::UpdateAvailable { latest, current } => format!(
                "latest version is {}, updating from {}",
                latest,
                current.as_deref().unwrap_or("nothing installed")
            ),

            // === FETCH MESSAGES ===
            Message::Downloading(name) => format!("downloading {}", name),
            Message::Extracting(entry) => format!("extracting {}", entry),
            Message::AssetNotFound { tag, platform, variant } => format!(
                "Release {} has no asset matching both '{}' and '{}'; nothing was downloaded",
                tag, platform, variant
            ),

            // === MARKER MESSAGES ===
            Message::MarkerWritten(version) => format!("Version marker set to {}", version),
            Message::MarkerNotAdvanced(version) => {
                format!("Version marker not advanced to {}; the next run will try again", version)
            }

            // === RESULT MESSAGES ===
            Message::UpdateCompleted { tool, version } => format!("{} has been successfully updated to version {}!", tool, version),
            Message::UpdateFailed(reason) => format!("Update failed: {}", reason),
        };
        write!(f, "{}", s)
    }
}
