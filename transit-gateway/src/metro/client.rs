//! Metro schedule HTTP client.

use std::time::Duration;

use tracing::debug;

use crate::domain::{LineCode, StationCode};

use super::convert::{StationBoard, convert_schedule};
use super::error::MetroError;
use super::types::ScheduleResponse;

/// Default base URL for the metro schedule API.
const DEFAULT_BASE_URL: &str = "https://rt.data.gov.hk";

/// Path of the schedule endpoint.
const SCHEDULE_PATH: &str = "/v1/transport/mtr/getSchedule.php";

/// Maximum number of body characters kept in error values.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the metro client.
#[derive(Debug, Clone)]
pub struct MetroConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MetroConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl MetroConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Metro real-time schedule client.
#[derive(Debug, Clone)]
pub struct MetroClient {
    http: reqwest::Client,
    base_url: String,
}

impl MetroClient {
    /// Create a new metro client with the given configuration.
    pub fn new(config: MetroConfig) -> Result<Self, MetroError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the raw schedule for one station on one line.
    pub async fn get_schedule_raw(
        &self,
        line: &LineCode,
        station: &StationCode,
    ) -> Result<ScheduleResponse, MetroError> {
        let url = format!("{}{}", self.base_url, SCHEDULE_PATH);
        debug!(%line, %station, "fetching metro schedule");

        let response = self
            .http
            .get(&url)
            .query(&[("line", line.as_str()), ("sta", station.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetroError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MetroError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_LIMIT).collect()),
        })
    }

    /// Fetch one station's schedule with parsed times.
    pub async fn get_station_board(
        &self,
        line: &LineCode,
        station: &StationCode,
    ) -> Result<StationBoard, MetroError> {
        let response = self.get_schedule_raw(line, station).await?;
        convert_schedule(&response, line, station)
    }
}
