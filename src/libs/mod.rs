//! Core library modules for the updater.
//!
//! - **Pipeline**: [`update`] drives a run from probe to marker write
//! - **Stages**: [`release`] selection, [`marker`] comparison, [`asset`]
//!   matching and [`archive`] extraction
//! - **Infrastructure**: [`config`], [`error`], [`messages`] and build
//!   [`app_metadata`]
//!
//! ```rust,no_run
//! use hugo_updater::libs::config::Config;
//! use hugo_updater::libs::update::Updater;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut updater = Updater::new(Config::load(None)?)?;
//! let outcome = updater.run().await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod app_metadata;
pub mod archive;
pub mod asset;
pub mod config;
pub mod error;
pub mod marker;
pub mod messages;
pub mod release;
pub mod update;
