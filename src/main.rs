use anyhow::{Context, Result};
use kindie_hub::config::Config;
use kindie_hub::db::Database;
use kindie_hub::i18n::TranslationValidator;
use kindie_hub::server::{self, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kindie_hub=info".parse()?),
        )
        .init();

    info!("Starting K-Indie Hub");

    let config = Config::from_env()?;

    // Missing translations fall back at runtime; surface them at startup
    let report = TranslationValidator::validate();
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        for e in &report.errors {
            warn!("{}", e);
        }
        anyhow::bail!("Message tables are inconsistent");
    }

    let db = Database::connect(&config.database_url).await?;
    let purged = db.purge_expired_sessions().await?;
    if purged > 0 {
        info!("Purged {} expired sessions", purged);
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    let state = AppState::new(db.clone(), config)?;
    server::serve(listener, state).await?;

    db.close().await;
    Ok(())
}
