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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod booking;
mod catalog;
mod error;
mod payment;
mod pricing;
mod search;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{
    AvailabilityCalendar, AvailabilityLevel, DayAvailability, LIMITED_SLOT_THRESHOLD,
    partition_slots,
};
pub use booking::{Booking, BookingStatus, partition_bookings};
pub use catalog::{
    AMENITY_NAMES, generate_day_slots, reference_availability, reference_facilities,
};
pub use payment::{
    CardDetails, PaymentDetails, PaymentMethod, validate_card_number, validate_cvc,
    validate_expiry, validate_payment_details,
};
pub use pricing::{
    CURRENCY, PriceBreakdown, SERVICE_FEE_PERCENT, calculate_price_breakdown,
    calculate_service_fee, format_amount,
};
pub use search::{
    FilterCriteria, PriceRange, SortKey, filter_facilities, search_facilities, sort_facilities,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Amenity, BookingId, DaySchedule, Facility, FacilityId, OpeningHours, Popularity, SlotId,
    SportType, TimeSlot, format_clock,
};
pub use validation::{find_slot, format_iso_date, parse_iso_date};
