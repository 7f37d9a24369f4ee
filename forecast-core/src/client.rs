use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use tracing::debug;

use crate::{
    config::{Config, Location},
    model::Forecast,
    parser,
};

/// HTTP client for the forecast endpoint.
///
/// One GET per call: no caching and no retries.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.base_url.as_str(), config.api_key()?))
    }

    fn url(&self, location: &Location, api_key: &str) -> String {
        format!(
            "{}/forecast/{}/{},{}",
            self.base_url, api_key, location.latitude, location.longitude
        )
    }

    /// Fetch the raw JSON payload for `location`.
    pub async fn fetch_raw(&self, location: &Location) -> Result<String> {
        debug!(url = %self.url(location, "<redacted>"), "requesting forecast");

        let res = self
            .http
            .get(self.url(location, &self.api_key))
            .send()
            .await
            .context("Failed to send forecast request")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read forecast response body")?;
        debug!(%status, bytes = body.len(), "forecast response received");

        if !status.is_success() {
            return Err(anyhow!(
                "Forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }

    /// Fetch and parse the forecast for `location`.
    pub async fn fetch(&self, location: &Location) -> Result<Forecast> {
        let body = self.fetch_raw(location).await?;
        let forecast = parser::parse(&body).context("Failed to parse forecast JSON")?;
        Ok(forecast)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
