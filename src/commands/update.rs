use crate::{
    libs::{
        asset::AssetMatcher,
        config::Config,
        messages::Message,
        update::{UpdateOutcome, Updater},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Default, Args)]
pub struct UpdateArgs {
    /// Configuration file (defaults to $HUGO_UPDATER_CONFIG, then ./hugo_updater.json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Releases listing endpoint
    #[arg(long, value_name = "URL")]
    pub releases_url: Option<String>,

    /// Version marker file
    #[arg(long, value_name = "FILE")]
    pub marker: Option<PathBuf>,

    /// Install location of the extracted binary
    #[arg(long, value_name = "FILE")]
    pub binary: Option<PathBuf>,

    /// Archive entry to extract
    #[arg(long, value_name = "NAME")]
    pub entry: Option<String>,

    /// Platform substring the asset name must contain
    #[arg(long)]
    pub platform: Option<String>,

    /// Build variant substring the asset name must contain
    #[arg(long)]
    pub variant: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Fail when no asset matches instead of printing a warning
    #[arg(long)]
    pub strict: bool,

    /// Record the new version even when no asset was installed
    #[arg(long)]
    pub legacy_marker: bool,
}

impl UpdateArgs {
    /// Applies the flags given on the command line on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.releases_url {
            config.releases_url = url.clone();
        }
        if let Some(marker) = &self.marker {
            config.marker_path = marker.clone();
        }
        if let Some(binary) = &self.binary {
            config.binary_path = binary.clone();
        }
        if let Some(entry) = &self.entry {
            config.entry_name = entry.clone();
        }
        if self.platform.is_some() || self.variant.is_some() {
            config.asset = AssetMatcher::new(
                self.platform.clone().unwrap_or(config.asset.platform),
                self.variant.clone().unwrap_or(config.asset.variant),
            );
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        config.strict_asset_match |= self.strict;
        config.always_write_marker |= self.legacy_marker;
        config
    }
}

/// Checks for a newer stable release and installs it when needed.
pub async fn cmd(args: UpdateArgs) -> Result<()> {
    let config = args.apply(Config::load(args.config.as_deref())?);
    let tool = config.entry_name.clone();
    let mut updater = Updater::new(config)?;

    match updater.run().await? {
        UpdateOutcome::UpToDate { version } => {
            msg_info!(Message::UpToDate { tool, version });
        }
        UpdateOutcome::Installed { version, .. } => {
            msg_success!(Message::UpdateCompleted { tool, version });
        }
        UpdateOutcome::AssetMissing { .. } => {}
    }

    Ok(())
}
