pub mod update;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;

/// Installs or refreshes the Hugo binary from the latest stable GitHub release.
///
/// Run without arguments to use the defaults; every flag overrides the
/// corresponding configuration value.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub update: update::UpdateArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::from_args(std::env::args_os())?;
        update::cmd(cli.update).await
    }

    /// Parses command-line arguments.
    ///
    /// `--help` and `--version` print and exit with status 0. A usage error is
    /// returned as an error, so it exits with status 1 instead of clap's 2,
    /// which is reserved for unreadable listings and archives.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => Err(e.into()),
        }
    }
}
