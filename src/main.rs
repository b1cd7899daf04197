use habilita::server::{config::Config, error::Error, scheduler::Scheduler, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Engine exited with error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let extractor = startup::build_extractor_client(&config);
    let notifier = startup::build_notifier_client(&config);

    Scheduler::new(db.clone(), notifier).await?.start().await?;
    let pool = startup::start_worker_pool(&config, db, extractor).await?;

    tracing::info!("Engine started");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    pool.stop().await?;

    Ok(())
}
