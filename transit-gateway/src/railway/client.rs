//! Railway ticket-query HTTP client.
//!
//! Queries remaining tickets between two stations on a given date. The
//! upstream has a history of certificate problems, so certificate
//! verification can be switched off for this client instance only.

use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::StationCode;

use super::error::RailwayError;
use super::types::{LeftTicketData, LeftTicketResponse};

/// Default base URL for the railway ticket API.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn";

/// Path of the ticket query endpoint.
const QUERY_PATH: &str = "/otn/leftTicket/queryG";

/// Maximum number of body characters kept in error values.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the railway client.
#[derive(Debug, Clone)]
pub struct RailwayConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification for this client
    pub accept_invalid_certs: bool,
}

impl Default for RailwayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: true,
        }
    }
}

impl RailwayConfig {
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

    /// Enable or disable TLS certificate verification.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// Parameters of a single ticket query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketQuery {
    pub train_date: NaiveDate,
    pub from_station: StationCode,
    pub to_station: StationCode,
}

impl TicketQuery {
    /// Query parameters in the order the API expects them.
    fn params(&self) -> [(&'static str, String); 4] {
        [
            (
                "leftTicketDTO.train_date",
                self.train_date.format("%Y-%m-%d").to_string(),
            ),
            ("leftTicketDTO.from_station", self.from_station.to_string()),
            ("leftTicketDTO.to_station", self.to_station.to_string()),
            ("purpose_codes", "ADULT".to_string()),
        ]
    }
}

/// Railway ticket-query client.
#[derive(Debug, Clone)]
pub struct RailwayClient {
    http: reqwest::Client,
    base_url: String,
}

impl RailwayClient {
    /// Create a new railway client with the given configuration.
    pub fn new(config: RailwayConfig) -> Result<Self, RailwayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Query remaining tickets for one date and station pair.
    ///
    /// Returns the raw records; an empty `result` list is not an error here.
    pub async fn query_tickets(&self, query: &TicketQuery) -> Result<LeftTicketData, RailwayError> {
        let url = format!("{}{}", self.base_url, QUERY_PATH);
        debug!(
            from = %query.from_station,
            to = %query.to_station,
            date = %query.train_date,
            "querying railway tickets"
        );

        let response = self.http.get(&url).query(&query.params()).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RailwayError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: LeftTicketResponse =
            serde_json::from_str(&body).map_err(|e| RailwayError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(ERROR_BODY_LIMIT).collect()),
            })?;

        debug!(records = parsed.data.result.len(), "railway query returned");
        Ok(parsed.data)
    }
}
