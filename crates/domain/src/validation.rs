// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{FacilityId, SlotId, TimeSlot};
use time::Date;
use time::macros::format_description;

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Looks up a slot by id in a day's slot list.
///
/// # Errors
///
/// Returns an error if no slot has the given id.
pub fn find_slot<'a>(
    slots: &'a [TimeSlot],
    facility_id: &FacilityId,
    slot_id: &SlotId,
) -> Result<&'a TimeSlot, DomainError> {
    slots
        .iter()
        .find(|slot| &slot.id == slot_id)
        .ok_or_else(|| DomainError::SlotNotFound {
            facility_id: facility_id.value().to_string(),
            slot_id: slot_id.value().to_string(),
        })
}
