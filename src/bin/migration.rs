use casa_admin::migrator::run_migration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let database_url = std::env::var("APP__DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .unwrap_or_else(|_| "sqlite://casa_admin.db?mode=rwc".to_string());

    info!("Starting database migration against {}", database_url);
    run_migration(&database_url).await?;
    info!("Migration completed successfully");

    Ok(())
}
