//! Bid generation with optional follow-up bids.

use std::ops::RangeInclusive;

use rand::Rng;
use time::{Date, Duration};

use crate::config::{DateWindow, Window};

/// A later bid raising an earlier one.
#[derive(Debug, Clone, Copy)]
pub struct FollowUpBid {
    pub price: i64,
    pub date: Date,
}

/// Generated bid ready for database insertion.
///
/// `next_bid` maps to the nullable `next_bid_price`/`next_bid_date` column
/// pair. Both columns are bound from this one `Option`, so they are null
/// together or set together.
#[derive(Debug, Clone)]
pub struct GeneratedBid {
    pub buyer_id: i32,
    pub car_sell_id: i32,
    pub first_bid_price: i64,
    pub first_bid_date: Date,
    pub next_bid: Option<FollowUpBid>,
}

/// Configuration for bid generation.
#[derive(Debug, Clone)]
pub struct BidGenConfig {
    /// Range buyer identifiers are drawn from (not validated against
    /// existing buyers).
    pub buyer_id_range: RangeInclusive<i32>,
    /// Range listing identifiers are drawn from (not validated against
    /// existing listings).
    pub listing_id_range: RangeInclusive<i32>,
    /// First bid price in rupiah.
    pub first_price_range: RangeInclusive<i64>,
    /// Amount a follow-up bid raises the first by.
    pub raise_range: RangeInclusive<i64>,
    /// Days between the first bid and its follow-up.
    pub follow_up_gap_days: RangeInclusive<i64>,
    /// Probability that a bid gets a follow-up.
    pub follow_up_probability: f64,
    /// Window first bid dates fall in.
    pub window: DateWindow,
}

impl Default for BidGenConfig {
    fn default() -> Self {
        Self {
            buyer_id_range: 1..=50,
            listing_id_range: 1..=250,
            first_price_range: 90_000_000..=400_000_000,
            raise_range: 100_000..=10_000_000,
            follow_up_gap_days: 1..=30,
            follow_up_probability: 0.5,
            window: Window::Q1_2024,
        }
    }
}

/// Generates bids on car-sale listings.
pub struct BidGenerator {
    config: BidGenConfig,
}

impl BidGenerator {
    /// Creates a new bid generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: BidGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: BidGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single bid.
    ///
    /// The raise amount is strictly positive and the gap is at least one
    /// day, so a follow-up always has a higher price and a later date than
    /// the first bid.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedBid {
        let first_bid_price = rng.gen_range(self.config.first_price_range.clone());
        let first_bid_date = self.config.window.random_date(rng);

        let next_bid = if rng.r#gen::<f64>() < self.config.follow_up_probability {
            let raise = rng.gen_range(self.config.raise_range.clone());
            let gap = rng.gen_range(self.config.follow_up_gap_days.clone());
            Some(FollowUpBid {
                price: first_bid_price + raise,
                date: first_bid_date + Duration::days(gap),
            })
        } else {
            None
        };

        GeneratedBid {
            buyer_id: rng.gen_range(self.config.buyer_id_range.clone()),
            car_sell_id: rng.gen_range(self.config.listing_id_range.clone()),
            first_bid_price,
            first_bid_date,
            next_bid,
        }
    }

    /// Generates multiple bids.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedBid> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for BidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bid_fields_in_range() {
        let bid_gen = BidGenerator::new();
        let mut rng = rand::thread_rng();

        for bid in bid_gen.generate_batch(200, &mut rng) {
            assert!((1..=50).contains(&bid.buyer_id));
            assert!((1..=250).contains(&bid.car_sell_id));
            assert!((90_000_000..=400_000_000).contains(&bid.first_bid_price));
            assert!(Window::Q1_2024.contains(bid.first_bid_date));
        }
    }

    #[test]
    fn test_follow_up_raises_price_and_date() {
        let bid_gen = BidGenerator::new();
        let mut rng = rand::thread_rng();

        for bid in bid_gen.generate_batch(500, &mut rng) {
            if let Some(next) = bid.next_bid {
                assert!(next.price > bid.first_bid_price);
                let gap = (next.date - bid.first_bid_date).whole_days();
                assert!((1..=30).contains(&gap));
            }
        }
    }

    #[test]
    fn test_follow_up_frequency() {
        let bid_gen = BidGenerator::new();
        let mut rng = rand::thread_rng();

        let bids = bid_gen.generate_batch(500, &mut rng);
        let with_follow_up = bids.iter().filter(|b| b.next_bid.is_some()).count();

        // 50% probability: expect both kinds, with a generous margin
        assert!(with_follow_up > 150);
        assert!(with_follow_up < 350);
    }

    #[test]
    fn test_follow_up_probability_extremes() {
        let mut rng = rand::thread_rng();

        let always = BidGenerator::with_config(BidGenConfig {
            follow_up_probability: 1.0,
            ..Default::default()
        });
        assert!(always
            .generate_batch(50, &mut rng)
            .iter()
            .all(|b| b.next_bid.is_some()));

        let never = BidGenerator::with_config(BidGenConfig {
            follow_up_probability: 0.0,
            ..Default::default()
        });
        assert!(never
            .generate_batch(50, &mut rng)
            .iter()
            .all(|b| b.next_bid.is_none()));
    }
}
