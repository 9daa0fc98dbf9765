/// Every user-facing message emitted by the updater.
///
/// Variants carry the values they interpolate; the text itself lives in the
/// `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigLoaded(String), // path
    ConfigFileNotFound(String),

    // === PROBE MESSAGES ===
    CheckingReleases(String), // url
    UpToDate {
        tool: String,
        version: String,
    },
    UpdateAvailable {
        latest: String,
        current: Option<String>,
    },

    // === FETCH MESSAGES ===
    Downloading(String), // asset name
    Extracting(String),  // entry name
    AssetNotFound {
        tag: String,
        platform: String,
        variant: String,
    },

    // === MARKER MESSAGES ===
    MarkerWritten(String),
    MarkerNotAdvanced(String),

    // === RESULT MESSAGES ===
    UpdateCompleted {
        tool: String,
        version: String,
    },
    UpdateFailed(String),
}
