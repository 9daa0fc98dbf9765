//! Choosing the release to install from a releases listing.

use crate::api::github::Release;
use crate::libs::error::{UpdateError, UpdateResult};

/// Returns the most recently created release that is not a pre-release.
///
/// Releases are ordered by `created_at`, newest first. The sort is stable, so
/// releases sharing a timestamp keep their listing order. An empty listing, or
/// one made only of pre-releases, yields [`UpdateError::EmptyReleaseSet`].
pub fn latest_stable(mut releases: Vec<Release>) -> UpdateResult<Release> {
    releases.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    releases.into_iter().find(|release| !release.prerelease).ok_or(UpdateError::EmptyReleaseSet)
}

/// Strips a single leading `v` from a release tag.
///
/// `v0.123.4` becomes `0.123.4`; a tag without the prefix is returned as is.
/// Only one `v` is removed and the match is case-sensitive.
pub fn normalize_version(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}
