// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DaySchedule, DomainError, OpeningHours, Popularity, SportType, TimeSlot};
use time::Weekday;
use time::macros::time;

#[test]
fn test_sport_type_parse_is_case_insensitive() {
    assert_eq!("padel".parse::<SportType>().unwrap(), SportType::Padel);
    assert_eq!("Football".parse::<SportType>().unwrap(), SportType::Football);
    assert_eq!(" TENNIS ".parse::<SportType>().unwrap(), SportType::Tennis);
    assert_eq!(
        "basketball".parse::<SportType>().unwrap(),
        SportType::Basketball
    );
}

#[test]
fn test_sport_type_rejects_unknown() {
    let result = "curling".parse::<SportType>();
    assert!(matches!(result, Err(DomainError::UnknownSportType(_))));
}

#[test]
fn test_sport_type_round_trips_through_display() {
    for sport in SportType::ALL {
        assert_eq!(sport.to_string().parse::<SportType>().unwrap(), sport);
    }
}

#[test]
fn test_sport_type_wire_names() {
    assert_eq!(SportType::Padel.as_str(), "padel");
    assert_eq!(SportType::Basketball.to_string(), "basketball");
}

#[test]
fn test_popularity_labels() {
    assert_eq!(Popularity::Low.label(), "Calme");
    assert_eq!(Popularity::Medium.label(), "Populaire");
    assert_eq!(Popularity::High.label(), "Très demandé");
    assert!(matches!(
        "extreme".parse::<Popularity>(),
        Err(DomainError::InvalidPopularity(_))
    ));
}

#[test]
fn test_slot_without_popularity_reads_as_medium() {
    let slot = TimeSlot::new("slot-1", time!(9:00), time!(10:00), 12000);
    assert_eq!(slot.popularity, None);
    assert_eq!(slot.effective_popularity(), Popularity::Medium);
}

#[test]
fn test_slot_label_pads_hours() {
    let slot = TimeSlot::new("slot-1", time!(9:00), time!(10:00), 12000);
    assert_eq!(slot.label(), "09:00 - 10:00");
}

#[test]
fn test_reserved_slot_is_unavailable() {
    let full = TimeSlot::new("slot-3", time!(11:00), time!(12:00), 15000).unavailable();
    let reserved = TimeSlot::new("slot-7", time!(15:00), time!(16:00), 15000).reserved();

    assert!(!full.available);
    assert!(!reserved.available);
    assert_eq!(full.unavailable_label(), "Complet");
    assert_eq!(reserved.unavailable_label(), "Réservé");
}

#[test]
fn test_day_schedule_open_interval_is_half_open() {
    let schedule = DaySchedule::open(time!(8:00), time!(22:00));
    assert!(schedule.is_open_at(time!(8:00)));
    assert!(schedule.is_open_at(time!(21:59)));
    assert!(!schedule.is_open_at(time!(22:00)));
    assert!(!schedule.is_open_at(time!(7:30)));
}

#[test]
fn test_opening_hours_by_weekday() {
    let mut hours = OpeningHours::every_day(DaySchedule::open(time!(8:00), time!(22:00)));
    hours.sunday.closed = true;

    assert!(!hours.for_weekday(Weekday::Monday).closed);
    assert!(hours.for_weekday(Weekday::Sunday).closed);
    assert!(!hours.for_weekday(Weekday::Sunday).is_open_at(time!(10:00)));
}
