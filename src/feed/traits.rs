use crate::model::{FeedError, Zone};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRequest {
    pub date: NaiveDate,
    pub zone: Zone,
}

/// Source of one day's raw price payload for a zone.
#[async_trait::async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch(&self, req: &PriceRequest) -> Result<String, FeedError>;
}
