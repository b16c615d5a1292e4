//! Transit gateway server.
//!
//! A small HTTP service that calls a railway ticket API and a metro
//! real-time schedule API, and answers "when is the next train?" with a
//! simplified JSON payload.

pub mod config;
pub mod domain;
pub mod metro;
pub mod railway;
pub mod telemetry;
pub mod web;
