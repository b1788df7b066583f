//! Seeds dummy sellers.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed_sellers
//! ```

use seed_data::config::SeedConfig;
use seed_data::db::{self, Seeder};
use seed_data::generators::SellerGenerator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::connect().await?;
    tracing::info!("Connected to database");

    let config = SeedConfig::default();
    let mut rng = rand::thread_rng();
    let sellers = SellerGenerator::new().generate_batch(config.seller_count, &mut rng);

    let seeder = Seeder::new(pool);
    match seeder.seed_sellers(&sellers).await {
        Ok(count) => tracing::info!("Seed completed! {count} sellers inserted"),
        Err(e) => tracing::error!("Seeding failed, batch rolled back: {e}"),
    }

    Ok(())
}
