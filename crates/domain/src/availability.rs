// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar availability and slot partitioning.
//!
//! ## Invariants
//!
//! - A date with no known availability is unavailable
//! - A date with 2 or fewer open slots is limited
//! - Dates before "today" are never selectable

use crate::types::TimeSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Open slots at or below this count mark a date as limited.
pub const LIMITED_SLOT_THRESHOLD: u32 = 2;

/// Availability summary for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    /// Whether the facility takes bookings on this date.
    pub available: bool,
    /// Number of open slots.
    pub slots: u32,
    /// Headline price for the date, if open.
    pub price: Option<u32>,
}

impl DayAvailability {
    /// Creates an open date.
    #[must_use]
    pub const fn open(slots: u32, price: u32) -> Self {
        Self {
            available: true,
            slots,
            price: Some(price),
        }
    }

    /// Creates a closed date.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            available: false,
            slots: 0,
            price: None,
        }
    }

    /// Classifies this date for the calendar.
    #[must_use]
    pub const fn level(&self) -> AvailabilityLevel {
        if !self.available {
            AvailabilityLevel::Unavailable
        } else if self.slots <= LIMITED_SLOT_THRESHOLD {
            AvailabilityLevel::Limited
        } else {
            AvailabilityLevel::Available
        }
    }
}

/// How a date is rendered in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityLevel {
    /// Plenty of slots left.
    Available,
    /// Only a few slots left.
    Limited,
    /// Closed, full or unknown.
    Unavailable,
}

impl AvailabilityLevel {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Limited => "limited",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Per-date availability lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityCalendar {
    days: BTreeMap<Date, DayAvailability>,
}

impl AvailabilityCalendar {
    /// Builds a calendar from `(date, availability)` pairs.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (Date, DayAvailability)>) -> Self {
        Self {
            days: entries.into_iter().collect(),
        }
    }

    /// Returns the availability recorded for a date.
    #[must_use]
    pub fn day(&self, date: Date) -> Option<&DayAvailability> {
        self.days.get(&date)
    }

    /// Classifies a date; unknown dates are unavailable.
    #[must_use]
    pub fn level(&self, date: Date) -> AvailabilityLevel {
        self.day(date)
            .map_or(AvailabilityLevel::Unavailable, DayAvailability::level)
    }

    /// Checks whether a date can be picked in the calendar.
    ///
    /// Past dates are disabled regardless of availability.
    #[must_use]
    pub fn is_selectable(date: Date, today: Date) -> bool {
        date >= today
    }
}

/// Splits slots into `(available, unavailable)`, preserving order.
#[must_use]
pub fn partition_slots(slots: &[TimeSlot]) -> (Vec<&TimeSlot>, Vec<&TimeSlot>) {
    slots.iter().partition(|slot| slot.available)
}
