//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path as UrlPath, State},
    handler::HandlerWithoutStateExt,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{MethodRouter, get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::metro::{MatchError, MetroTrip, NextTrain, TRAVEL_TIME_ESTIMATE, plan_trip};
use crate::railway::{TicketSummary, TrainRecord, display_name};

use super::dto::{Envelope, MessageResponse};
use super::error::AppError;
use super::state::AppState;

/// Message returned when the railway query lists no trains.
const NO_TRAINS_MESSAGE: &str = "No train information available";

/// Message returned when the destination has no arrivals to match.
const NO_MATCH_MESSAGE: &str = "No matching trains found";

/// Create the application router.
///
/// Paths not handled by a route are served from `static_dir`. On `/` an
/// `index.html` in `static_dir` takes precedence over the greeting.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let root = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(greeting());
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route_service("/", root)
        .route("/health", get(health))
        .route("/api", get(api_index))
        .route("/api/", get(api_index))
        .route("/api/item/:id", get(get_item))
        .route("/api/item", post(create_item))
        .route("/cr/next-train-to-hk", get(next_train_to_hong_kong))
        .route("/mtr/next-train-to-hh", get(next_train_to_hung_hom))
        .route("/mtr/next-train-to-aus", get(next_train_to_austin))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `/` when no `index.html` is present.
fn greeting() -> MethodRouter {
    get(index).fallback(not_found)
}

async fn index() -> &'static str {
    "Hello World! Transit gateway is running."
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed {
        message: "Method not allowed".to_string(),
    }
}

async fn api_index() -> Json<MessageResponse> {
    Json(MessageResponse::new("API is working!"))
}

async fn get_item(UrlPath(id): UrlPath<String>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Retrieved item with ID: {id}")))
}

/// Echo a JSON body back.
///
/// Bodies that are empty or not sent as `application/json` are treated as
/// `{}`. A JSON body must be an object or an array.
async fn create_item(headers: HeaderMap, body: Bytes) -> Result<impl IntoResponse, AppError> {
    let data = if !is_json(&headers) || body.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
                message: format!("Invalid JSON: {e}"),
            })?;
        if !(value.is_object() || value.is_array()) {
            return Err(AppError::BadRequest {
                message: "Invalid JSON: expected an object or an array".to_string(),
            });
        }
        value
    };

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Item created").with_data(data)),
    ))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Summarise the first train of the configured railway query.
async fn next_train_to_hong_kong(
    State(state): State<AppState>,
) -> Result<Json<Envelope<TicketSummary>>, AppError> {
    let query = &state.ticket_query;
    let data = state.railway.query_tickets(query).await?;

    let first = data
        .result
        .first()
        .ok_or_else(|| AppError::not_found(NO_TRAINS_MESSAGE))?;
    let summary = TicketSummary::from_record(&TrainRecord::parse(first))?;

    let message = format!(
        "Next train from {} to {}",
        display_name(&query.from_station, &data.map),
        display_name(&query.to_station, &data.map)
    );
    info!(train = %summary.train_name, departs = %summary.departure_time, "{message}");

    Ok(Json(Envelope::success(summary, message)))
}

async fn next_train_to_hung_hom(
    State(state): State<AppState>,
) -> Result<Json<Envelope<NextTrain>>, AppError> {
    next_metro_train(&state, MetroTrip::AUSTIN_TO_HUNG_HOM).await
}

async fn next_train_to_austin(
    State(state): State<AppState>,
) -> Result<Json<Envelope<NextTrain>>, AppError> {
    next_metro_train(&state, MetroTrip::HUNG_HOM_TO_AUSTIN).await
}

/// Match the next departure of `trip` to its likely arrival.
///
/// Both stations are fetched concurrently; either failure fails the request.
async fn next_metro_train(
    state: &AppState,
    trip: MetroTrip,
) -> Result<Json<Envelope<NextTrain>>, AppError> {
    let (origin, destination) = tokio::try_join!(
        state
            .metro
            .get_station_board(&trip.line, &trip.origin.code),
        state
            .metro
            .get_station_board(&trip.line, &trip.destination.code),
    )?;

    let matched = plan_trip(
        origin.trains(trip.direction),
        destination.trains(trip.direction),
        origin.sys_time,
        TRAVEL_TIME_ESTIMATE,
    )
    .map_err(|e| match e {
        MatchError::NoDepartures => AppError::not_found(trip.no_departures_message()),
        MatchError::NoMatch => AppError::not_found(NO_MATCH_MESSAGE),
    })?;

    info!(
        departs = %matched.departure.reported,
        arrives = %matched.arrival.reported,
        "{}",
        trip.summary()
    );

    Ok(Json(Envelope::success(
        NextTrain::new(&trip, &matched),
        trip.summary(),
    )))
}
