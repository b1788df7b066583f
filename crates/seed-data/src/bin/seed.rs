//! Default seed script - fills all three marketplace tables.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use seed_data::config::SeedConfig;
use seed_data::db::{self, SeedError, Seeder};
use seed_data::generators::{BidGenerator, ListingGenerator, SellerGenerator};
use tracing_subscriber::EnvFilter;

async fn run(seeder: &Seeder, config: &SeedConfig) -> Result<(), SeedError> {
    let mut rng = rand::thread_rng();

    let sellers = SellerGenerator::new().generate_batch(config.seller_count, &mut rng);
    let listings = ListingGenerator::new().generate_batch(config.listing_count, &mut rng);
    let bids = BidGenerator::new().generate_batch(config.bid_count, &mut rng);

    seeder.seed_sellers(&sellers).await?;
    seeder.seed_listings(&listings).await?;
    seeder.seed_bids(&bids).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Sellers: {}", sellers.len());
    tracing::info!("  Listings: {}", listings.len());
    tracing::info!("  Bids: {}", bids.len());

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::connect().await?;
    tracing::info!("Connected to database");

    let seeder = Seeder::new(pool);
    if let Err(e) = run(&seeder, &SeedConfig::default()).await {
        tracing::error!("Seeding failed, current batch rolled back: {e}");
    }

    Ok(())
}
