// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility data sources.

use booki_domain::{
    AvailabilityCalendar, AvailabilityLevel, DayAvailability, DaySchedule, DomainError, Facility,
    FacilityId, FilterCriteria, SortKey, TimeSlot, generate_day_slots, reference_availability,
    reference_facilities, search_facilities,
};
use time::Date;

/// Read access to the facilities that can be booked.
pub trait FacilitySource: Send + Sync {
    /// Returns the facilities matching the criteria, optionally sorted.
    fn search(&self, criteria: &FilterCriteria, sort: Option<SortKey>) -> Vec<Facility>;

    /// Looks up a facility by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no facility has the given id.
    fn find(&self, id: &FacilityId) -> Result<&Facility, DomainError>;

    /// Returns the bookable slots of a facility on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if no facility has the given id.
    fn slots(&self, id: &FacilityId, date: Date) -> Result<Vec<TimeSlot>, DomainError>;

    /// Returns the calendar entry for a date, if one is recorded.
    fn day(&self, date: Date) -> Option<DayAvailability>;

    /// Classifies a date for the calendar.
    fn level(&self, date: Date) -> AvailabilityLevel {
        self.day(date)
            .map_or(AvailabilityLevel::Unavailable, |day| day.level())
    }
}

/// A fixed, in-memory facility list with a shared availability calendar.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    facilities: Vec<Facility>,
    calendar: AvailabilityCalendar,
}

impl StaticCatalog {
    /// Creates a catalog over the given facilities and calendar.
    #[must_use]
    pub const fn new(facilities: Vec<Facility>, calendar: AvailabilityCalendar) -> Self {
        Self {
            facilities,
            calendar,
        }
    }

    /// Creates the catalog shipped with the app.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(
            reference_facilities(),
            AvailabilityCalendar::new(reference_availability()),
        )
    }

    /// Returns every facility in catalog order.
    #[must_use]
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl FacilitySource for StaticCatalog {
    fn search(&self, criteria: &FilterCriteria, sort: Option<SortKey>) -> Vec<Facility> {
        search_facilities(&self.facilities, criteria, sort)
    }

    fn find(&self, id: &FacilityId) -> Result<&Facility, DomainError> {
        self.facilities
            .iter()
            .find(|facility| &facility.id == id)
            .ok_or_else(|| DomainError::FacilityNotFound(id.value().to_string()))
    }

    fn slots(&self, id: &FacilityId, date: Date) -> Result<Vec<TimeSlot>, DomainError> {
        let facility: &Facility = self.find(id)?;
        let closed: bool = self.calendar.day(date).is_some_and(|day| !day.available);

        let schedule: &DaySchedule = facility.opening_hours.for_weekday(date.weekday());

        // Closed days and hours outside the schedule are still listed, as full
        Ok(generate_day_slots()
            .into_iter()
            .map(|slot| {
                let open: bool = schedule.is_open_at(slot.start_time)
                    && slot.end_time <= schedule.close;
                if facility.available && !closed && open {
                    slot
                } else {
                    slot.unavailable()
                }
            })
            .collect())
    }

    fn day(&self, date: Date) -> Option<DayAvailability> {
        self.calendar.day(date).copied()
    }
}
