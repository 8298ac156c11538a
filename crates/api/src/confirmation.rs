// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking confirmation.

use crate::catalog::{FacilitySource, StaticCatalog};
use crate::error::BookingError;
use booki::ConfirmationRequest;
use booki_domain::{
    Booking, BookingId, BookingStatus, DomainError, FacilityId, PriceBreakdown, SlotId, TimeSlot,
    calculate_price_breakdown, find_slot, partition_bookings,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// A request to book one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The facility being booked.
    pub facility_id: FacilityId,
    /// The booked date.
    pub date: Date,
    /// The booked slot.
    pub slot_id: SlotId,
    /// Identifies this attempt; repeating a key replays the original result.
    pub idempotency_key: String,
}

impl BookingRequest {
    /// Creates a request for a wizard confirmation with a fresh idempotency key.
    #[must_use]
    pub fn from_confirmation(request: ConfirmationRequest) -> Self {
        Self {
            facility_id: request.facility_id,
            date: request.date,
            slot_id: request.slot_id,
            idempotency_key: new_idempotency_key(),
        }
    }
}

/// Generates a unique idempotency key.
#[must_use]
pub fn new_idempotency_key() -> String {
    let timestamp: i64 = OffsetDateTime::now_utc().unix_timestamp();
    format!("idem_{timestamp}_{}", rand::random::<u64>())
}

/// Confirms bookings with the booking backend.
pub trait BookingConfirmer: Send + Sync {
    /// Books the requested slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be booked or the backend fails.
    fn confirm(
        &self,
        request: BookingRequest,
    ) -> impl Future<Output = Result<BookingId, BookingError>> + Send;
}

/// Bookings split the way the bookings page shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingList {
    /// Bookings still to be played.
    pub upcoming: Vec<Booking>,
    /// Played or cancelled bookings.
    pub past: Vec<Booking>,
}

type SlotKey = (FacilityId, Date, SlotId);

#[derive(Debug, Default)]
struct Ledger {
    bookings: Vec<Booking>,
    by_key: HashMap<String, BookingId>,
    taken: HashSet<SlotKey>,
    sequence: u64,
}

/// An in-memory booking backend.
///
/// Slots are validated against the facility source on every request, so a
/// retried confirmation is re-checked rather than blindly accepted.
#[derive(Debug)]
pub struct InMemoryBookingService<S: FacilitySource = StaticCatalog> {
    catalog: S,
    latency: Option<Duration>,
    ledger: Mutex<Ledger>,
}

impl<S: FacilitySource> InMemoryBookingService<S> {
    /// Creates a service over a facility source.
    #[must_use]
    pub fn new(catalog: S) -> Self {
        Self {
            catalog,
            latency: None,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    /// Delays every confirmation by the given duration.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Returns the facility source.
    #[must_use]
    pub const fn catalog(&self) -> &S {
        &self.catalog
    }

    /// Adds existing bookings, e.g. history imported from elsewhere.
    pub async fn seed(&self, bookings: Vec<Booking>) {
        let mut ledger = self.ledger.lock().await;
        for booking in bookings {
            if booking.status == BookingStatus::Upcoming {
                ledger.taken.insert((
                    booking.facility_id.clone(),
                    booking.date,
                    booking.slot.id.clone(),
                ));
            }
            ledger.bookings.push(booking);
        }
    }

    /// Books a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The facility or slot does not exist
    /// - The slot is unavailable or already booked
    pub async fn book(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let mut ledger = self.ledger.lock().await;

        if let Some(booking_id) = ledger.by_key.get(&request.idempotency_key)
            && let Some(existing) = ledger
                .bookings
                .iter()
                .find(|booking| &booking.booking_id == booking_id)
        {
            if existing.facility_id != request.facility_id
                || existing.date != request.date
                || existing.slot.id != request.slot_id
            {
                warn!(
                    idempotency_key = %request.idempotency_key,
                    booking_id = %existing.booking_id,
                    "Idempotency key reused for a different booking"
                );
                return Err(BookingError::ValidationFailure {
                    field: String::from("idempotency_key"),
                    message: format!(
                        "key '{}' already belongs to booking {}",
                        request.idempotency_key, existing.booking_id
                    ),
                });
            }
            debug!(
                idempotency_key = %request.idempotency_key,
                booking_id = %existing.booking_id,
                "Replaying booking for repeated idempotency key"
            );
            return Ok(existing.clone());
        }

        let slots: Vec<TimeSlot> = self.catalog.slots(&request.facility_id, request.date)?;
        let slot: &TimeSlot = find_slot(&slots, &request.facility_id, &request.slot_id)?;

        let key: SlotKey = (
            request.facility_id.clone(),
            request.date,
            request.slot_id.clone(),
        );
        if !slot.available || ledger.taken.contains(&key) {
            warn!(
                facility_id = %request.facility_id,
                slot_id = %request.slot_id,
                "Slot is not available"
            );
            return Err(BookingError::SlotUnavailable {
                slot_id: request.slot_id,
            });
        }

        let price: PriceBreakdown = calculate_price_breakdown(slot.price)?;
        ledger.sequence += 1;
        let booking_id: BookingId = BookingId::new(&format!(
            "BK{}{}",
            OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000,
            ledger.sequence
        ));

        let booking: Booking = Booking {
            booking_id: booking_id.clone(),
            facility_id: request.facility_id,
            date: request.date,
            slot: slot.clone(),
            status: BookingStatus::Upcoming,
            total: price.total,
        };

        ledger.taken.insert(key);
        ledger.by_key.insert(request.idempotency_key, booking_id.clone());
        ledger.bookings.push(booking.clone());

        info!(
            booking_id = %booking_id,
            facility_id = %booking.facility_id,
            slot_id = %booking.slot.id,
            total = booking.total,
            "Booking confirmed"
        );

        Ok(booking)
    }

    /// Returns the slots of a facility on a date, with booked slots reserved.
    ///
    /// # Errors
    ///
    /// Returns an error if no facility has the given id.
    pub async fn slots(
        &self,
        facility_id: &FacilityId,
        date: Date,
    ) -> Result<Vec<TimeSlot>, DomainError> {
        let slots: Vec<TimeSlot> = self.catalog.slots(facility_id, date)?;
        let ledger = self.ledger.lock().await;
        Ok(slots
            .into_iter()
            .map(|slot| {
                let key: SlotKey = (facility_id.clone(), date, slot.id.clone());
                if ledger.taken.contains(&key) {
                    slot.reserved()
                } else {
                    slot
                }
            })
            .collect())
    }

    /// Lists every booking, split into upcoming and past.
    pub async fn list_bookings(&self) -> BookingList {
        let ledger = self.ledger.lock().await;
        let (upcoming, past) = partition_bookings(&ledger.bookings);
        BookingList {
            upcoming: upcoming.into_iter().cloned().collect(),
            past: past.into_iter().cloned().collect(),
        }
    }
}

impl Default for InMemoryBookingService<StaticCatalog> {
    fn default() -> Self {
        Self::new(StaticCatalog::reference())
    }
}

impl<S: FacilitySource> BookingConfirmer for InMemoryBookingService<S> {
    async fn confirm(&self, request: BookingRequest) -> Result<BookingId, BookingError> {
        self.book(request).await.map(|booking| booking.booking_id)
    }
}
