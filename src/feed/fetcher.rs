use crate::config::AppConfig;
use crate::feed::traits::{PriceFeed, PriceRequest};
use crate::model::FeedError;
use chrono::Datelike;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Client for the elprisetjustnu.se day-ahead price API.
pub struct ElprisetFeed {
    client: Client,
    base_url: String,
}

impl ElprisetFeed {
    pub fn new(config: &AppConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, req: &PriceRequest) -> String {
        format!(
            "{}/api/v1/prices/{:04}/{:02}-{:02}_{}.json",
            self.base_url,
            req.date.year(),
            req.date.month(),
            req.date.day(),
            req.zone
        )
    }
}

#[async_trait::async_trait]
impl PriceFeed for ElprisetFeed {
    async fn fetch(&self, req: &PriceRequest) -> Result<String, FeedError> {
        let url = self.build_url(req);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FeedError::NotFound);
        }
        if !status.is_success() {
            return Err(FeedError::InvalidResponse(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Zone;
    use chrono::NaiveDate;
    use mockito::Server;

    fn feed_for(url: String) -> ElprisetFeed {
        let config = AppConfig {
            api_base_url: url,
            ..AppConfig::default()
        };
        ElprisetFeed::new(&config).unwrap()
    }

    fn request() -> PriceRequest {
        PriceRequest {
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            zone: Zone::SE3,
        }
    }

    #[test]
    fn url_is_zero_padded() {
        let feed = feed_for("https://example.test/".to_string());
        assert_eq!(
            feed.build_url(&request()),
            "https://example.test/api/v1/prices/2025/03-07_SE3.json"
        );
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/prices/2025/03-07_SE3.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let body = feed_for(server.url()).fetch(&request()).await.unwrap();

        assert_eq!(body, "[]");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_maps_404_to_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/prices/2025/03-07_SE3.json")
            .with_status(404)
            .create_async()
            .await;

        let result = feed_for(server.url()).fetch(&request()).await;

        assert!(matches!(result, Err(FeedError::NotFound)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_reports_server_errors() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/prices/2025/03-07_SE3.json")
            .with_status(503)
            .create_async()
            .await;

        let result = feed_for(server.url()).fetch(&request()).await;

        assert!(matches!(result, Err(FeedError::InvalidResponse(503))));
        mock.assert_async().await;
    }
}
