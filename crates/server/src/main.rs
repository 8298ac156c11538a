// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use booki_api::{
    BookingError, BookingList, BookingRequest, FacilitySource, InMemoryBookingService,
    StaticCatalog, new_idempotency_key,
};
use booki_domain::{
    Booking, DayAvailability, DomainError, Facility, FacilityId, FilterCriteria, PriceRange,
    SlotId, SortKey, SportType, TimeSlot, format_amount, format_clock, format_iso_date,
    parse_iso_date, partition_slots,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use time::Date;
use tracing::{error, info, warn};

/// Booki Server - HTTP API for searching facilities and booking slots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Simulated booking latency in milliseconds
    #[arg(short, long, default_value_t = 0)]
    latency_ms: u64,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The booking backend and the catalog it validates against.
    service: Arc<InMemoryBookingService>,
}

/// Query parameters for GET `/facilities`.
#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    /// Free text matched against name and address.
    query: Option<String>,
    /// Sport wire name.
    sport: Option<String>,
    /// Lowest accepted price.
    min_price: Option<u32>,
    /// Highest accepted price.
    max_price: Option<u32>,
    /// Comma-separated amenity names.
    amenities: Option<String>,
    /// Sort key wire name.
    sort: Option<String>,
}

/// Query parameters carrying a calendar date.
#[derive(Debug, Deserialize)]
struct DateQuery {
    /// The date, formatted `YYYY-MM-DD`.
    date: String,
}

/// API request for POST `/bookings`.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The facility to book.
    facility_id: String,
    /// The date, formatted `YYYY-MM-DD`.
    date: String,
    /// The slot to book.
    slot_id: String,
    /// Replays the original booking when repeated. Generated if missing.
    idempotency_key: Option<String>,
}

/// A facility as listed by the search page.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FacilityResponse {
    id: String,
    name: String,
    sport: SportType,
    description: String,
    price: u32,
    price_label: String,
    rating: f64,
    review_count: u32,
    address: String,
    phone: String,
    distance_km: Option<f64>,
    amenities: Vec<String>,
    images: Vec<String>,
    available: bool,
}

/// Response for GET `/facilities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SearchResponse {
    /// Number of matching facilities.
    count: usize,
    /// The matching facilities, in result order.
    facilities: Vec<FacilityResponse>,
}

/// A time slot on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotResponse {
    id: String,
    label: String,
    start_time: String,
    end_time: String,
    price: u32,
    available: bool,
    /// `Réservé` or `Complet` for unavailable slots.
    status_label: Option<String>,
    popularity: String,
}

/// Response for GET `/facilities/{id}/slots`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SlotsResponse {
    facility_id: String,
    date: String,
    available: Vec<SlotResponse>,
    unavailable: Vec<SlotResponse>,
}

/// Response for GET `/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AvailabilityResponse {
    date: String,
    level: String,
    slots: u32,
    price: Option<u32>,
}

/// A booking as shown on the bookings page.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingResponse {
    booking_id: String,
    facility_id: String,
    date: String,
    slot_id: String,
    slot_label: String,
    status: String,
    status_label: String,
    total: u32,
    total_label: String,
}

/// Response for GET `/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BookingsResponse {
    upcoming: Vec<BookingResponse>,
    past: Vec<BookingResponse>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        let status: StatusCode = match err {
            DomainError::FacilityNotFound(_) | DomainError::SlotNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<BookingError> for HttpError {
    fn from(err: BookingError) -> Self {
        let status: StatusCode = match err {
            BookingError::SlotUnavailable { .. } => StatusCode::CONFLICT,
            BookingError::ValidationFailure { .. } => StatusCode::BAD_REQUEST,
            BookingError::NetworkFailure { .. } => {
                error!(error = %err, "Booking backend failure");
                StatusCode::BAD_GATEWAY
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

fn facility_to_response(facility: &Facility) -> FacilityResponse {
    FacilityResponse {
        id: facility.id.value().to_string(),
        name: facility.name.clone(),
        sport: facility.sport,
        description: facility.description.clone(),
        price: facility.price,
        price_label: format_amount(facility.price),
        rating: facility.rating,
        review_count: facility.review_count,
        address: facility.address.clone(),
        phone: facility.phone.clone(),
        distance_km: facility.distance_km,
        amenities: facility
            .amenities
            .iter()
            .map(|amenity| amenity.name.clone())
            .collect(),
        images: facility.images.clone(),
        available: facility.available,
    }
}

fn slot_to_response(slot: &TimeSlot) -> SlotResponse {
    SlotResponse {
        id: slot.id.value().to_string(),
        label: slot.label(),
        start_time: format_clock(slot.start_time),
        end_time: format_clock(slot.end_time),
        price: slot.price,
        available: slot.available,
        status_label: (!slot.available).then(|| slot.unavailable_label().to_string()),
        popularity: slot.effective_popularity().label().to_string(),
    }
}

fn booking_to_response(booking: &Booking) -> BookingResponse {
    BookingResponse {
        booking_id: booking.booking_id.value().to_string(),
        facility_id: booking.facility_id.value().to_string(),
        date: format_iso_date(booking.date),
        slot_id: booking.slot.id.value().to_string(),
        slot_label: booking.slot.label(),
        status: booking.status.as_str().to_string(),
        status_label: booking.status.label().to_string(),
        total: booking.total,
        total_label: format_amount(booking.total),
    }
}

/// Builds search criteria from query parameters.
fn parse_search_query(query: &SearchQuery) -> Result<(FilterCriteria, Option<SortKey>), HttpError> {
    let sport: Option<SportType> = query
        .sport
        .as_deref()
        .filter(|sport| !sport.is_empty())
        .map(SportType::from_str)
        .transpose()?;

    let any: PriceRange = PriceRange::any();
    let price_range: PriceRange = PriceRange::new(
        query.min_price.unwrap_or_else(|| any.min()),
        query.max_price.unwrap_or_else(|| any.max()),
    )?;

    let amenities = query
        .amenities
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect();

    let sort: Option<SortKey> = query
        .sort
        .as_deref()
        .filter(|sort| !sort.is_empty())
        .map(SortKey::from_str)
        .transpose()?;

    Ok((
        FilterCriteria {
            query: query.query.clone().unwrap_or_default(),
            sport,
            price_range,
            amenities,
        },
        sort,
    ))
}

/// Handler for GET `/facilities` endpoint.
///
/// Filters and sorts the catalog.
async fn handle_search_facilities(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, HttpError> {
    info!(query = ?query, "Handling search_facilities request");

    let (criteria, sort): (FilterCriteria, Option<SortKey>) = parse_search_query(&query)?;
    let facilities: Vec<Facility> = app_state.service.catalog().search(&criteria, sort);

    Ok(Json(SearchResponse {
        count: facilities.len(),
        facilities: facilities.iter().map(facility_to_response).collect(),
    }))
}

/// Handler for GET `/facilities/{id}` endpoint.
async fn handle_get_facility(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<String>,
) -> Result<Json<FacilityResponse>, HttpError> {
    info!(facility_id = %facility_id, "Handling get_facility request");

    let facility: &Facility = app_state
        .service
        .catalog()
        .find(&FacilityId::new(&facility_id))?;

    Ok(Json(facility_to_response(facility)))
}

/// Handler for GET `/facilities/{id}/slots` endpoint.
///
/// Lists the day's slots split into available and unavailable.
async fn handle_list_slots(
    AxumState(app_state): AxumState<AppState>,
    Path(facility_id): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<SlotsResponse>, HttpError> {
    info!(facility_id = %facility_id, date = %query.date, "Handling list_slots request");

    let date: Date = parse_iso_date(&query.date)?;
    let slots: Vec<TimeSlot> = app_state
        .service
        .slots(&FacilityId::new(&facility_id), date)
        .await?;
    let (available, unavailable) = partition_slots(&slots);

    Ok(Json(SlotsResponse {
        facility_id,
        date: format_iso_date(date),
        available: available.into_iter().map(slot_to_response).collect(),
        unavailable: unavailable.into_iter().map(slot_to_response).collect(),
    }))
}

/// Handler for GET `/availability` endpoint.
async fn handle_get_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(date = %query.date, "Handling get_availability request");

    let date: Date = parse_iso_date(&query.date)?;
    let catalog: &StaticCatalog = app_state.service.catalog();
    let day: DayAvailability = catalog.day(date).unwrap_or_else(DayAvailability::closed);

    Ok(Json(AvailabilityResponse {
        date: format_iso_date(date),
        level: catalog.level(date).as_str().to_string(),
        slots: day.slots,
        price: day.price,
    }))
}

/// Handler for POST `/bookings` endpoint.
///
/// Books a slot. Unknown facilities are reported before the slot is checked.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), HttpError> {
    info!(
        facility_id = %req.facility_id,
        slot_id = %req.slot_id,
        date = %req.date,
        "Handling create_booking request"
    );

    let facility_id: FacilityId = FacilityId::new(&req.facility_id);
    app_state.service.catalog().find(&facility_id)?;
    let date: Date = parse_iso_date(&req.date)?;

    let request: BookingRequest = BookingRequest {
        facility_id,
        date,
        slot_id: SlotId::new(&req.slot_id),
        idempotency_key: req.idempotency_key.unwrap_or_else(new_idempotency_key),
    };

    let booking: Booking = app_state.service.book(request).await.inspect_err(|err| {
        warn!(error = %err, "Booking rejected");
    })?;

    Ok((StatusCode::CREATED, Json(booking_to_response(&booking))))
}

/// Handler for GET `/bookings` endpoint.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
) -> Json<BookingsResponse> {
    info!("Handling list_bookings request");

    let list: BookingList = app_state.service.list_bookings().await;

    Json(BookingsResponse {
        upcoming: list.upcoming.iter().map(booking_to_response).collect(),
        past: list.past.iter().map(booking_to_response).collect(),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/facilities", get(handle_search_facilities))
        .route("/facilities/{id}", get(handle_get_facility))
        .route("/facilities/{id}/slots", get(handle_list_slots))
        .route("/availability", get(handle_get_availability))
        .route(
            "/bookings",
            get(handle_list_bookings).post(handle_create_booking),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Booki Server");

    let mut service: InMemoryBookingService = InMemoryBookingService::default();
    if args.latency_ms > 0 {
        info!(latency_ms = args.latency_ms, "Simulating booking latency");
        service = service.with_latency(Duration::from_millis(args.latency_ms));
    }

    let app_state: AppState = AppState {
        service: Arc::new(service),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
