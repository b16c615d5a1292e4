//! Web layer for the transit gateway.
//!
//! Provides the HTTP endpoints, the response envelope, and static file serving.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::{Envelope, MessageResponse, Status};
pub use error::AppError;
pub use routes::create_router;
pub use state::{AppState, StateError};
