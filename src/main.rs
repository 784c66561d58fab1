//! Process entry point: logging setup, argument handling, and hand-off to
//! the platform main.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "macos")]
mod macos_main;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // `--reset` restores the persisted preferences to their defaults
    // (top-right corner, default size and colors) before starting.
    let reset = std::env::args().any(|arg| arg == "--reset");

    #[cfg(target_os = "macos")]
    return macos_main::run(reset);

    #[cfg(not(target_os = "macos"))]
    {
        let _ = reset;
        anyhow::bail!("inputfloat is a macOS application");
    }
}
