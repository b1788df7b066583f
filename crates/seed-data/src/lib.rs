//! Dummy data generation for the OtoBid marketplace.
//!
//! This crate provides generators and a transactional seeder for filling a
//! development database with sellers, car-sale listings, and bids.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = seed_data::db::connect().await?;
//! let seeder = Seeder::new(pool);
//!
//! let mut rng = rand::thread_rng();
//! let sellers = SellerGenerator::new().generate_batch(50, &mut rng);
//! seeder.seed_sellers(&sellers).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DateWindow, SeedConfig, Window};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{
        BidGenerator, GeneratedBid, GeneratedListing, GeneratedSeller, ListingGenerator,
        SellerGenerator,
    };
}
