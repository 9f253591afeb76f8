//! HTTP download of the source CSVs.

use crate::datasets::Dataset;
use crate::error::{CovidDataError, Result};
use log::{info, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

const MAX_TRIES: u32 = 3;
const INITIAL_BACKOFF_MILLIS: u64 = 1000;

/// Client for one upstream data root.
pub struct DatasetClient {
    client: Client,
    base_url: String,
}

impl DatasetClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Download one dataset as text, retrying with exponential backoff.
    ///
    /// The error from the final attempt is returned when every try fails.
    pub async fn fetch(&self, dataset: Dataset) -> Result<String> {
        let url = dataset.url(&self.base_url);
        let mut sleep_millis = INITIAL_BACKOFF_MILLIS;
        let mut last_error = CovidDataError::EmptyResponse(dataset.to_string());

        for attempt in 1..=MAX_TRIES {
            match self.fetch_once(dataset, &url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!(
                        "Attempt {}/{}: fetching {} failed: {}",
                        attempt, MAX_TRIES, dataset, e
                    );
                    last_error = e;
                }
            }

            if attempt < MAX_TRIES {
                info!(
                    "Sleeping for {} milliseconds before retry for {}",
                    sleep_millis, dataset
                );
                tokio::time::sleep(Duration::from_millis(sleep_millis)).await;
                sleep_millis *= 2;
            }
        }

        warn!("All attempts failed for {}", dataset);
        Err(last_error)
    }

    async fn fetch_once(&self, dataset: Dataset, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(CovidDataError::BadStatus {
                dataset: dataset.to_string(),
                status: response.status().as_u16(),
            });
        }
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(CovidDataError::EmptyResponse(dataset.to_string()));
        }
        Ok(body)
    }
}
