//! Database bootstrap for the survey core.
//!
//! Loads configuration from TOML file (~/.config/dics-survey/config.toml),
//! runs migrations, and seeds the default admin account. The presentation
//! layer connects to the same database afterwards.

use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use dics_survey::infrastructure::database::migrator::Migrator;
use dics_survey::{
    default_config_path, init_database, seed_default_admin, AppConfig, DatabaseConfig,
    SeaOrmStoreProvider,
};
use dics_survey::domain::StoreProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("DICS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Seed ───────────────────────────────────────────────────
    let stores = SeaOrmStoreProvider::new(db.clone());
    match seed_default_admin(stores.credentials(), &app_cfg.admin).await {
        Ok(true) => info!("Default admin seeded: {}", app_cfg.admin.email),
        Ok(false) => info!("Admin account already present, nothing to do"),
        Err(e) => {
            error!("Failed to seed default admin: {}", e);
            return Err(e.into());
        }
    }

    db.close().await?;
    info!("Bootstrap complete: {}", db_config.url);
    Ok(())
}
