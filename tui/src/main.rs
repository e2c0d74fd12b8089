use anyhow::Result;
use aura_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - only log warnings, to stderr
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    // Optional: load .env (ignore errors if missing)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    aura_tui::run_studio(config).await
}
