//! Seeds dummy car-sale listings.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed_listings
//! ```

use seed_data::config::SeedConfig;
use seed_data::db::{self, Seeder};
use seed_data::generators::ListingGenerator;
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
    let listings = ListingGenerator::new().generate_batch(config.listing_count, &mut rng);

    let seeder = Seeder::new(pool);
    match seeder.seed_listings(&listings).await {
        Ok(count) => tracing::info!("Seed completed! {count} listings inserted"),
        Err(e) => tracing::error!("Seeding failed, batch rolled back: {e}"),
    }

    Ok(())
}
