//! One-shot seeding tool
//!
//! Populates the store with the demo data set. Run manually against live
//! credentials; not part of the runtime library.

use brisa_data::{Config, DbService, init_logger, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment (dotenv, logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("Brisa seed starting...");

    let config = Config::from_env();
    let service = DbService::connect(&config).await?;

    seed::seed_sample_data(&service.db).await?;

    tracing::info!("Sample data imported");
    Ok(())
}
