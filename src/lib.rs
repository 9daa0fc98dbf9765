//! # hugo-updater
//!
//! Keeps a local Hugo binary in step with the latest stable upstream release.
//!
//! One run probes the GitHub releases listing, compares the newest stable
//! release with the version recorded in a local marker file and, when they
//! differ or the binary is missing, downloads the extended `linux-amd64`
//! archive and extracts the `hugo` executable from it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hugo_updater::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
