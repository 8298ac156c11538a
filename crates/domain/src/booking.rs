// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{BookingId, FacilityId, TimeSlot};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Where a booking stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Confirmed and not yet played.
    Upcoming,
    /// Played.
    Completed,
    /// Cancelled before it was played.
    Cancelled,
}

impl BookingStatus {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the label shown on the bookings page.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "À venir",
            Self::Completed => "Terminé",
            Self::Cancelled => "Annulé",
        }
    }

    /// Returns whether the booking belongs in the history tab.
    #[must_use]
    pub const fn is_past(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

/// A confirmed reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The booking identifier shown to the user.
    pub booking_id: BookingId,
    /// The booked facility.
    pub facility_id: FacilityId,
    /// The booked date.
    pub date: Date,
    /// The booked slot.
    pub slot: TimeSlot,
    /// Current status.
    pub status: BookingStatus,
    /// Amount charged, service fee included.
    pub total: u32,
}

/// Splits bookings into `(upcoming, past)`, preserving order.
#[must_use]
pub fn partition_bookings(bookings: &[Booking]) -> (Vec<&Booking>, Vec<&Booking>) {
    bookings
        .iter()
        .partition(|booking| !booking.status.is_past())
}
