//! Application state for the web layer.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::metro::{MetroClient, MetroError};
use crate::railway::{RailwayClient, RailwayError, TicketQuery};

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to create railway client: {0}")]
    Railway(#[from] RailwayError),

    #[error("failed to create metro client: {0}")]
    Metro(#[from] MetroError),
}

/// Shared application state.
///
/// Holds the upstream clients; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Railway ticket-query client
    pub railway: Arc<RailwayClient>,

    /// Metro schedule client
    pub metro: Arc<MetroClient>,

    /// Date and station pair for the railway endpoint
    pub ticket_query: TicketQuery,
}

impl AppState {
    /// Create a new app state.
    pub fn new(railway: RailwayClient, metro: MetroClient, ticket_query: TicketQuery) -> Self {
        Self {
            railway: Arc::new(railway),
            metro: Arc::new(metro),
            ticket_query,
        }
    }

    /// Build the clients described by `config`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, StateError> {
        let railway = RailwayClient::new(config.railway.clone())?;
        let metro = MetroClient::new(config.metro.clone())?;
        Ok(Self::new(railway, metro, config.ticket_query))
    }
}
