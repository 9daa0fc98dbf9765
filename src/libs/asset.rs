//! Selection of the downloadable asset for the configured platform.

use crate::api::github::Asset;
use serde::{Deserialize, Serialize};

/// Substrings an asset name must contain to be installed.
///
/// The two parts are kept separate so that another platform can be targeted
/// from configuration alone, for example `darwin-universal.pkg` or
/// `linux-arm64.tar.gz`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AssetMatcher {
    /// Platform and archive suffix, e.g. `linux-amd64.tar.gz`.
    pub platform: String,
    /// Build variant, e.g. `extended`.
    pub variant: String,
}

impl Default for AssetMatcher {
    fn default() -> Self {
        Self {
            platform: "linux-amd64.tar.gz".to_string(),
            variant: "extended".to_string(),
        }
    }
}

impl AssetMatcher {
    pub fn new(platform: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            variant: variant.into(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        name.contains(&self.platform) && name.contains(&self.variant)
    }
}

/// Returns the first asset, in listing order, whose name satisfies `matcher`.
///
/// Any later matches are ignored.
pub fn select_asset<'a>(assets: &'a [Asset], matcher: &AssetMatcher) -> Option<&'a Asset> {
    assets.iter().find(|asset| matcher.matches(&asset.name))
}
