//! Configuration for an update run.
//!
//! Every path, URL and matching rule the pipeline uses comes from [`Config`],
//! which is passed down to each stage instead of living in global constants.
//!
//! ## Resolution
//!
//! 1. Built-in defaults ([`Config::default`]), which install the extended
//!    `linux-amd64` build of Hugo into the working directory.
//! 2. A JSON file: the path given on the command line, else
//!    `$HUGO_UPDATER_CONFIG`, else `hugo_updater.json` if it exists.
//! 3. Command-line overrides, applied by the `update` command.
//!
//! Fields missing from the file keep their default values.
//!
//! ```rust,no_run
//! use hugo_updater::libs::config::Config;
//!
//! let config = Config::load(None)?;
//! println!("Installing into {}", config.binary_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::app_metadata::default_releases_url;
use crate::libs::asset::AssetMatcher;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration file picked up from the working directory when present.
pub const CONFIG_FILE_NAME: &str = "hugo_updater.json";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "HUGO_UPDATER_CONFIG";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Releases listing endpoint, returning a JSON array of releases.
    pub releases_url: String,

    /// File holding the last installed version.
    pub marker_path: PathBuf,

    /// Where the extracted binary is installed.
    pub binary_path: PathBuf,

    /// Name of the entry to extract from the release archive.
    pub entry_name: String,

    /// Substrings selecting the asset to download.
    pub asset: AssetMatcher,

    /// Upper bound in seconds for each HTTP request, body included.
    pub timeout_secs: u64,

    /// Upper bound in seconds for establishing a connection.
    pub connect_timeout_secs: u64,

    /// Fail with exit code 3 instead of warning when no asset matches.
    pub strict_asset_match: bool,

    /// Write the marker even when no asset matched.
    ///
    /// When off, the marker only advances after a binary is installed.
    pub always_write_marker: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            releases_url: default_releases_url(),
            marker_path: PathBuf::from("hugo_version.txt"),
            binary_path: PathBuf::from("hugo"),
            entry_name: "hugo".to_string(),
            asset: AssetMatcher::default(),
            timeout_secs: 300,
            connect_timeout_secs: 30,
            strict_asset_match: false,
            always_write_marker: false,
        }
    }
}

impl Config {
    /// Reads a configuration file, returning defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Loads the configuration following the resolution order described in
    /// the module documentation.
    ///
    /// A file named explicitly, by argument or environment, must exist. The
    /// implicit `hugo_updater.json` is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let named = explicit.map(Path::to_path_buf).or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        let path = match named {
            Some(path) if !path.exists() => bail!("configuration file {} does not exist", path.display()),
            Some(path) => path,
            None => PathBuf::from(CONFIG_FILE_NAME),
        };

        if !path.exists() {
            msg_debug!(Message::ConfigFileNotFound(path.display().to_string()));
            return Ok(Config::default());
        }

        let config = Self::read(&path)?;
        msg_debug!(Message::ConfigLoaded(path.display().to_string()));
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
