use dotenv::dotenv;
use hugo_updater::commands::Cli;
use hugo_updater::libs::error::exit_code;
use hugo_updater::libs::messages::{macros::is_debug_mode, Message};
use hugo_updater::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before the debug flag is read and cached.
    let _ = dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hugo_updater=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::UpdateFailed(format!("{:#}", e)));
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}
