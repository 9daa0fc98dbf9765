//! Package metadata generated by `build.rs` from `Cargo.toml`.

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// `User-Agent` sent with every request. The GitHub API rejects requests without one.
pub fn user_agent() -> String {
    format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION)
}

/// Releases listing of the upstream project named in `[package.metadata]`.
pub fn default_releases_url() -> String {
    format!("https://api.github.com/repos/{}/{}/releases", APP_METADATA_OWNER, APP_METADATA_REPO)
}
