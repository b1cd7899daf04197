use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    extractor::ExtractorClient,
    notifier::NotifierClient,
    worker::{WorkerJobHandler, WorkerPool, WorkerPoolConfig},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the extraction service client with the configured request timeout
pub fn build_extractor_client(config: &Config) -> ExtractorClient {
    ExtractorClient::new(
        config.extractor_url.clone(),
        Duration::from_secs(config.extraction_timeout_seconds),
    )
}

/// Build the notification sink client
pub fn build_notifier_client(config: &Config) -> NotifierClient {
    NotifierClient::new(config.notifier_url.clone())
}

/// Build and start the analysis worker pool
pub async fn start_worker_pool(
    config: &Config,
    db: DatabaseConnection,
    extractor: ExtractorClient,
) -> Result<WorkerPool, Error> {
    let pool_config = WorkerPoolConfig::new(config.workers);
    let handler = WorkerJobHandler::new(db.clone(), extractor);
    let pool = WorkerPool::new(pool_config, db, handler);

    pool.start().await?;

    Ok(pool)
}
