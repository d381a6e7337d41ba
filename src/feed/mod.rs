// Price feed: fetches one day of raw prices per zone.

pub mod fetcher;
pub mod traits;

pub use fetcher::ElprisetFeed;
pub use traits::{PriceFeed, PriceRequest};
