//! Configuration types for dummy data generation.

use serde::{Deserialize, Serialize};
use time::macros::date;
use time::{Date, Duration};

/// Calendar window for generated dates, inclusive on both ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateWindow {
    /// First day of the window.
    pub start: Date,
    /// Last day of the window.
    pub end: Date,
}

impl DateWindow {
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Number of whole days between the endpoints.
    pub fn day_span(&self) -> i64 {
        (self.end - self.start).whole_days()
    }

    /// Returns a random date within the window, endpoints included.
    pub fn random_date(&self, rng: &mut impl rand::Rng) -> Date {
        self.start + Duration::days(rng.gen_range(0..=self.day_span()))
    }

    /// Whether the date falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Pre-defined date windows for dummy data generation.
#[derive(Debug, Clone, Copy)]
pub struct Window;

impl Window {
    /// First quarter of 2024 - all generated posting and bid dates fall here.
    pub const Q1_2024: DateWindow = DateWindow::new(date!(2024 - 01 - 01), date!(2024 - 03 - 31));
}

/// Batch counts for a full seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of sellers to generate.
    pub seller_count: usize,

    /// Number of car-sale listings to generate.
    pub listing_count: usize,

    /// Number of bids to generate.
    pub bid_count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seller_count: 50,
            listing_count: 250,
            bid_count: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_endpoints_reachable() {
        let window = Window::Q1_2024;
        let mut rng = rand::thread_rng();

        let mut seen_start = false;
        let mut seen_end = false;
        for _ in 0..2000 {
            let date = window.random_date(&mut rng);
            assert!(window.contains(date));
            seen_start |= date == window.start;
            seen_end |= date == window.end;
        }

        // 91 possible days, 2000 draws: both endpoints should show up
        assert!(seen_start);
        assert!(seen_end);
    }

    #[test]
    fn test_default_counts() {
        let config = SeedConfig::default();
        assert_eq!(config.seller_count, 50);
        assert_eq!(config.listing_count, 250);
        assert_eq!(config.bid_count, 500);
    }
}
