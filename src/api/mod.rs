//! Clients for the remote release-hosting service.

pub mod github;

pub use github::{Asset, Release, ReleasesClient};
