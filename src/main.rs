use anyhow::Result;
use duree::commands::Cli;
use duree::libs::messages::macros::{is_debug_mode, DEBUG_ENV_VAR};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("duree=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
        tracing::debug!("debug output enabled via {} or RUST_LOG", DEBUG_ENV_VAR);
    }

    Cli::menu()
}
