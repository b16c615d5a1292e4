//! Railway ticket-query response DTOs.
//!
//! The ticket query wraps its payload in a JSON envelope, but each train is
//! reported as a single `|`-delimited string rather than an object. Decoding
//! those strings is the job of [`super::extract`].

use std::collections::HashMap;

use serde::Deserialize;

/// Top-level response from `leftTicket/queryG`.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketResponse {
    /// HTTP status echoed by the API.
    pub httpstatus: Option<u16>,

    /// Whether the query succeeded.
    pub status: Option<bool>,

    /// Query results.
    pub data: LeftTicketData,
}

/// The `data` member of a ticket query response.
#[derive(Debug, Clone, Deserialize)]
pub struct LeftTicketData {
    /// One delimited record per train, in the API's order.
    #[serde(default)]
    pub result: Vec<String>,

    /// Opaque flag field.
    pub flag: Option<String>,

    /// Station telecode → display name for every code referenced in `result`.
    #[serde(default)]
    pub map: HashMap<String, String>,
}
