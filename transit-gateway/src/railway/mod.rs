//! Railway ticket-query client.
//!
//! Wraps the 12306 `leftTicket/queryG` endpoint, which lists the trains
//! running between two stations on a date. Each train comes back as one
//! `|`-delimited record whose fields are identified only by position.

mod client;
mod error;
mod extract;
mod names;
mod types;

pub use client::{RailwayClient, RailwayConfig, TicketQuery};
pub use error::RailwayError;
pub use extract::{DELIMITER, ExtractError, TicketSummary, TrainRecord, index};
pub use names::display_name;
pub use types::{LeftTicketData, LeftTicketResponse};
