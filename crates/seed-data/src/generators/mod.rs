//! Entity generators for dummy marketplace data.
//!
//! - [`SellerGenerator`]: Generate sellers with fake contact details
//! - [`ListingGenerator`]: Generate car-sale listings open for bidding
//! - [`BidGenerator`]: Generate bids with optional follow-up bids

pub mod bid;
pub mod listing;
pub mod seller;

pub use bid::{BidGenConfig, BidGenerator, FollowUpBid, GeneratedBid};
pub use listing::{GeneratedListing, ListingGenConfig, ListingGenerator};
pub use seller::{GeneratedSeller, KOTA_IDS, SellerGenConfig, SellerGenerator};
