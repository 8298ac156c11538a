// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FacilitySource, StaticCatalog};
use booki_domain::{
    AvailabilityCalendar, AvailabilityLevel, DaySchedule, DomainError, Facility, FacilityId,
    FilterCriteria, OpeningHours, SortKey, SportType, TimeSlot, reference_availability,
    reference_facilities,
};
use time::macros::{date, time};

fn ids(facilities: &[Facility]) -> Vec<&str> {
    facilities.iter().map(|facility| facility.id.value()).collect()
}

#[test]
fn test_search_without_criteria_returns_catalog_order() {
    let catalog: StaticCatalog = StaticCatalog::reference();

    let results: Vec<Facility> = catalog.search(&FilterCriteria::default(), None);

    assert_eq!(ids(&results), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_search_filters_then_sorts() {
    let catalog: StaticCatalog = StaticCatalog::reference();
    let mut criteria: FilterCriteria = FilterCriteria::default();
    criteria.toggle_amenity("Parking", true);
    criteria.toggle_amenity("Éclairage", true);

    let results: Vec<Facility> = catalog.search(&criteria, Some(SortKey::Price));

    assert_eq!(ids(&results), vec!["4", "1", "3", "2"]);
}

#[test]
fn test_search_by_sport() {
    let catalog: StaticCatalog = StaticCatalog::reference();
    let criteria: FilterCriteria = FilterCriteria {
        sport: Some(SportType::Tennis),
        ..FilterCriteria::default()
    };

    let results: Vec<Facility> = catalog.search(&criteria, None);

    assert_eq!(ids(&results), vec!["3"]);
}

#[test]
fn test_find_unknown_facility_fails() {
    let catalog: StaticCatalog = StaticCatalog::reference();

    let result: Result<&Facility, DomainError> = catalog.find(&FacilityId::new("99"));

    assert_eq!(
        result.unwrap_err(),
        DomainError::FacilityNotFound(String::from("99"))
    );
}

#[test]
fn test_open_day_lists_reference_slots() {
    let catalog: StaticCatalog = StaticCatalog::reference();

    let slots: Vec<TimeSlot> = catalog
        .slots(&FacilityId::new("1"), date!(2024 - 01 - 20))
        .unwrap();

    assert_eq!(slots.len(), 14);
    assert_eq!(slots.iter().filter(|slot| slot.available).count(), 11);
}

#[test]
fn test_closed_day_lists_only_full_slots() {
    let catalog: StaticCatalog = StaticCatalog::reference();

    let slots: Vec<TimeSlot> = catalog
        .slots(&FacilityId::new("1"), date!(2024 - 01 - 18))
        .unwrap();

    assert_eq!(slots.len(), 14);
    assert!(slots.iter().all(|slot| !slot.available));
}

#[test]
fn test_unavailable_facility_lists_only_full_slots() {
    let catalog: StaticCatalog = StaticCatalog::reference();

    let slots: Vec<TimeSlot> = catalog
        .slots(&FacilityId::new("3"), date!(2024 - 01 - 20))
        .unwrap();

    assert!(slots.iter().all(|slot| !slot.available));
}

/// The reference catalog with facility 1 open 10:00-20:00 and closed on Sundays.
fn create_short_hours_catalog() -> StaticCatalog {
    let mut facilities: Vec<Facility> = reference_facilities();
    let mut hours: OpeningHours =
        OpeningHours::every_day(DaySchedule::open(time!(10:00), time!(20:00)));
    hours.sunday.closed = true;
    facilities[0].opening_hours = hours;
    StaticCatalog::new(facilities, AvailabilityCalendar::new(reference_availability()))
}

#[test]
fn test_slots_outside_opening_hours_are_full() {
    let catalog: StaticCatalog = create_short_hours_catalog();

    let slots: Vec<TimeSlot> = catalog
        .slots(&FacilityId::new("1"), date!(2024 - 01 - 20))
        .unwrap();

    assert_eq!(slots.len(), 14);
    assert!(!slots[0].available);
    assert!(!slots[1].available);
    assert!(slots[2].available);
    assert!(slots[10].available);
    assert!(!slots[12].available);
    assert!(!slots[13].available);
}

#[test]
fn test_weekly_closing_day_lists_only_full_slots() {
    let catalog: StaticCatalog = create_short_hours_catalog();

    // 2024-01-21 is a Sunday
    let slots: Vec<TimeSlot> = catalog
        .slots(&FacilityId::new("1"), date!(2024 - 01 - 21))
        .unwrap();

    assert!(slots.iter().all(|slot| !slot.available));
}

#[test]
fn test_calendar_levels() {
    let catalog: StaticCatalog = StaticCatalog::reference();

    assert_eq!(
        catalog.level(date!(2024 - 01 - 20)),
        AvailabilityLevel::Available
    );
    assert_eq!(
        catalog.level(date!(2024 - 01 - 25)),
        AvailabilityLevel::Limited
    );
    assert_eq!(
        catalog.level(date!(2024 - 01 - 18)),
        AvailabilityLevel::Unavailable
    );
    assert_eq!(
        catalog.level(date!(2024 - 03 - 01)),
        AvailabilityLevel::Unavailable
    );
    assert_eq!(
        catalog.day(date!(2024 - 01 - 20)).and_then(|day| day.price),
        Some(18000)
    );
}
