//! Database seeding utilities.

use sqlx::{PgPool, Postgres, Transaction};
use thiserror::Error;
use tracing::info;

use crate::generators::{GeneratedBid, GeneratedListing, GeneratedSeller};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database seeder for inserting generated dummy data.
///
/// Each `seed_*` method runs its whole batch inside a single transaction:
/// either every row is committed or, on the first failed insert, the
/// transaction is rolled back and none are.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Seeds sellers into the database.
    pub async fn seed_sellers(&self, sellers: &[GeneratedSeller]) -> Result<u64, SeedError> {
        info!("Seeding {} sellers...", sellers.len());

        let mut tx = self.pool.begin().await?;
        match Self::insert_sellers(&mut tx, sellers).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }

        info!("Seeded {} sellers", sellers.len());
        Ok(sellers.len() as u64)
    }

    /// Inserts the seller batch against the open transaction.
    async fn insert_sellers(
        tx: &mut Transaction<'_, Postgres>,
        sellers: &[GeneratedSeller],
    ) -> Result<(), SeedError> {
        for seller in sellers {
            sqlx::query(
                r#"
                INSERT INTO sellers (name, phone_number, email, kota_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&seller.name)
            .bind(&seller.phone_number)
            .bind(&seller.email)
            .bind(seller.kota_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Seeds car-sale listings into the database.
    pub async fn seed_listings(&self, listings: &[GeneratedListing]) -> Result<u64, SeedError> {
        info!("Seeding {} listings...", listings.len());

        let mut tx = self.pool.begin().await?;
        match Self::insert_listings(&mut tx, listings).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }

        info!("Seeded {} listings", listings.len());
        Ok(listings.len() as u64)
    }

    /// Inserts the listing batch against the open transaction.
    async fn insert_listings(
        tx: &mut Transaction<'_, Postgres>,
        listings: &[GeneratedListing],
    ) -> Result<(), SeedError> {
        for listing in listings {
            sqlx::query(
                r#"
                INSERT INTO cars_sell (product_id, seller_id, is_bid, date_post)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(listing.product_id)
            .bind(listing.seller_id)
            .bind(listing.is_bid)
            .bind(listing.date_post)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Seeds bids into the database.
    pub async fn seed_bids(&self, bids: &[GeneratedBid]) -> Result<u64, SeedError> {
        info!("Seeding {} bids...", bids.len());

        let mut tx = self.pool.begin().await?;
        match Self::insert_bids(&mut tx, bids).await {
            Ok(()) => tx.commit().await?,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        }

        info!("Seeded {} bids", bids.len());
        Ok(bids.len() as u64)
    }

    /// Inserts the bid batch against the open transaction.
    ///
    /// The nullable `next_bid_price`/`next_bid_date` pair is bound from the
    /// one `next_bid` option, keeping the two columns null or set together.
    async fn insert_bids(
        tx: &mut Transaction<'_, Postgres>,
        bids: &[GeneratedBid],
    ) -> Result<(), SeedError> {
        for bid in bids {
            sqlx::query(
                r#"
                INSERT INTO bids (buyer_id, car_sell_id, first_bid_price, first_bid_date,
                                  next_bid_price, next_bid_date)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(bid.buyer_id)
            .bind(bid.car_sell_id)
            .bind(bid.first_bid_price)
            .bind(bid.first_bid_date)
            .bind(bid.next_bid.map(|next| next.price))
            .bind(bid.next_bid.map(|next| next.date))
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Clears all seeded dummy data.
    ///
    /// **WARNING**: This deletes all rows from the three tables. Use with
    /// caution.
    pub async fn clear_all(&self) -> Result<(), SeedError> {
        info!("Clearing all seeded data...");

        // Order matters due to foreign key constraints
        sqlx::query("DELETE FROM bids").execute(&self.pool).await?;
        sqlx::query("DELETE FROM cars_sell")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM sellers")
            .execute(&self.pool)
            .await?;

        info!("All data cleared");
        Ok(())
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
