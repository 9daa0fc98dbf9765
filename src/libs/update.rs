//! The update pipeline: probe, compare, fetch, record.
//!
//! [`Updater::check_for_latest_release`] probes the listing and compares it
//! with the local marker; [`Updater::perform_update`] downloads and installs
//! the matching asset and records the new version. [`Updater::run`] chains the
//! two and stops early when the installation is current.

use crate::api::github::{Release, ReleasesClient};
use crate::libs::archive::extract_entry;
use crate::libs::asset::select_asset;
use crate::libs::config::Config;
use crate::libs::error::{UpdateError, UpdateResult};
use crate::libs::marker::{compare, read_marker, write_marker, VersionStatus};
use crate::libs::messages::Message;
use crate::libs::release::{latest_stable, normalize_version};
use crate::{msg_debug, msg_info, msg_print, msg_warning};

/// What a run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The marker and binary already match the latest stable release.
    UpToDate { version: String },
    /// The binary was replaced and the marker advanced.
    Installed { version: String, bytes: u64 },
    /// No asset matched the configured platform; nothing was downloaded.
    AssetMissing { version: String, marker_written: bool },
}

#[derive(Debug)]
pub struct Updater {
    client: ReleasesClient,
    config: Config,
    release: Option<Release>,
    pub current_version: Option<String>,
    pub latest_version: Option<String>,
}

impl Updater {
    pub fn new(config: Config) -> UpdateResult<Self> {
        let client = ReleasesClient::new(config.timeout(), config.connect_timeout())?;
        Ok(Self {
            client,
            config,
            release: None,
            current_version: None,
            latest_version: None,
        })
    }

    /// Probes the listing for the newest stable release and compares it with
    /// the local marker and binary.
    pub async fn check_for_latest_release(&mut self) -> UpdateResult<VersionStatus> {
        msg_debug!(Message::CheckingReleases(self.config.releases_url.clone()));
        let releases = self.client.fetch_releases(&self.config.releases_url).await?;
        tracing::debug!(count = releases.len(), "parsed release listing");

        let release = latest_stable(releases)?;
        let latest = normalize_version(&release.tag_name).trim().to_string();
        let current = read_marker(&self.config.marker_path)?;
        let status = compare(current.as_deref(), &latest, &self.config.binary_path);
        tracing::debug!(tag = %release.tag_name, current = ?current, status = ?status, "compared versions");

        self.release = Some(release);
        self.current_version = current;
        self.latest_version = Some(latest);
        Ok(status)
    }

    /// Downloads and installs the asset of the probed release, then records
    /// its version in the marker.
    ///
    /// Probes first if [`check_for_latest_release`](Self::check_for_latest_release)
    /// has not run yet. When no asset matches, strict mode fails with
    /// [`UpdateError::NoMatchingAsset`]; otherwise a warning is printed and
    /// the marker is left alone unless `always_write_marker` is set.
    pub async fn perform_update(&mut self) -> UpdateResult<UpdateOutcome> {
        if self.release.is_none() {
            self.check_for_latest_release().await?;
        }
        let (Some(release), Some(version)) = (self.release.as_ref(), self.latest_version.clone()) else {
            return Err(UpdateError::EmptyReleaseSet);
        };
        let config = &self.config;

        let Some(asset) = select_asset(&release.assets, &config.asset) else {
            if config.strict_asset_match {
                return Err(UpdateError::NoMatchingAsset {
                    tag: release.tag_name.clone(),
                    platform: config.asset.platform.clone(),
                    variant: config.asset.variant.clone(),
                });
            }

            msg_warning!(Message::AssetNotFound {
                tag: release.tag_name.clone(),
                platform: config.asset.platform.clone(),
                variant: config.asset.variant.clone(),
            });
            if config.always_write_marker {
                write_marker(&config.marker_path, &version)?;
                msg_debug!(Message::MarkerWritten(version.clone()));
            } else {
                msg_info!(Message::MarkerNotAdvanced(version.clone()));
            }
            return Ok(UpdateOutcome::AssetMissing {
                version,
                marker_written: config.always_write_marker,
            });
        };

        msg_print!(Message::Downloading(asset.name.clone()));
        let archive = self.client.download(&asset.browser_download_url).await?;

        msg_print!(Message::Extracting(config.entry_name.clone()));
        let bytes = extract_entry(&archive, &config.entry_name, &config.binary_path)?;
        tracing::debug!(bytes, path = %config.binary_path.display(), "installed binary");

        write_marker(&config.marker_path, &version)?;
        msg_debug!(Message::MarkerWritten(version.clone()));

        Ok(UpdateOutcome::Installed { version, bytes })
    }

    /// Runs the whole pipeline once.
    pub async fn run(&mut self) -> UpdateResult<UpdateOutcome> {
        let status = self.check_for_latest_release().await?;
        let latest = self.latest_version.clone().unwrap_or_default();

        if status == VersionStatus::UpToDate {
            return Ok(UpdateOutcome::UpToDate { version: latest });
        }

        msg_print!(Message::UpdateAvailable {
            latest,
            current: self.current_version.clone(),
        });
        self.perform_update().await
    }
}
