//! Car-sale listing generation.

use std::ops::RangeInclusive;

use rand::Rng;
use time::Date;

use crate::config::{DateWindow, Window};

/// Generated car-sale listing ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedListing {
    pub product_id: i32,
    pub seller_id: i32,
    pub is_bid: bool,
    pub date_post: Date,
}

/// Configuration for listing generation.
#[derive(Debug, Clone)]
pub struct ListingGenConfig {
    /// Range product identifiers are drawn from (not validated against
    /// existing products).
    pub product_id_range: RangeInclusive<i32>,
    /// Range seller identifiers are drawn from (not validated against
    /// existing sellers).
    pub seller_id_range: RangeInclusive<i32>,
    /// Window posting dates fall in.
    pub window: DateWindow,
}

impl Default for ListingGenConfig {
    fn default() -> Self {
        Self {
            product_id_range: 1..=50,
            seller_id_range: 1..=50,
            window: Window::Q1_2024,
        }
    }
}

/// Generates car-sale listings open for bidding.
pub struct ListingGenerator {
    config: ListingGenConfig,
}

impl ListingGenerator {
    /// Creates a new listing generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ListingGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ListingGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single listing. Every generated listing is open for
    /// bidding.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedListing {
        GeneratedListing {
            product_id: rng.gen_range(self.config.product_id_range.clone()),
            seller_id: rng.gen_range(self.config.seller_id_range.clone()),
            is_bid: true,
            date_post: self.config.window.random_date(rng),
        }
    }

    /// Generates multiple listings.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedListing> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for ListingGenerator {
    fn default() -> Self {
        Self::new()
    }
}
