// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data served by the in-memory backend.
//!
//! The catalog is static: four facilities around Dakar, a fourteen-slot day
//! template, and a fortnight of calendar availability.

use crate::availability::DayAvailability;
use crate::types::{
    Amenity, DaySchedule, Facility, FacilityId, OpeningHours, Popularity, SportType, TimeSlot,
};
use time::Date;
use time::macros::{date, time};

/// Amenity names offered as search filters.
pub const AMENITY_NAMES: [&str; 6] = [
    "Parking",
    "Douches",
    "WiFi",
    "Vestiaires",
    "Éclairage",
    "Club House",
];

fn image(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=800&h=600&auto=format&fit=crop")
}

/// Returns the reference facility list.
#[must_use]
pub fn reference_facilities() -> Vec<Facility> {
    vec![
        Facility {
            id: FacilityId::new("1"),
            name: String::from("Complexe Sportif Almadies"),
            sport: SportType::Padel,
            description: String::from("Court de padel moderne avec éclairage LED"),
            price: 15000,
            rating: 4.8,
            review_count: 142,
            images: vec![image("photo-1554068865-24cecd4e34b8")],
            address: String::from("Almadies, Dakar"),
            phone: String::from("+221 77 123 45 67"),
            distance_km: Some(2.1),
            amenities: vec![
                Amenity::new("1", "Parking"),
                Amenity::new("2", "Douches"),
                Amenity::new("3", "WiFi"),
            ],
            opening_hours: OpeningHours::every_day(DaySchedule::open(
                time!(8:00),
                time!(22:00),
            )),
            available: true,
        },
        Facility {
            id: FacilityId::new("2"),
            name: String::from("Terrain de Football Parcelles"),
            sport: SportType::Football,
            description: String::from("Terrain de football 5v5 avec gazon synthétique"),
            price: 25000,
            rating: 4.6,
            review_count: 89,
            images: vec![image("photo-1431324155629-1a6deb1dec8d")],
            address: String::from("Parcelles Assainies, Dakar"),
            phone: String::from("+221 77 987 65 43"),
            distance_km: Some(3.5),
            amenities: vec![
                Amenity::new("1", "Vestiaires"),
                Amenity::new("2", "Éclairage"),
            ],
            opening_hours: OpeningHours::every_day(DaySchedule::open(
                time!(7:00),
                time!(23:00),
            )),
            available: true,
        },
        Facility {
            id: FacilityId::new("3"),
            name: String::from("Tennis Club Dakar"),
            sport: SportType::Tennis,
            description: String::from("Courts de tennis professionnels en terre battue"),
            price: 18000,
            rating: 4.7,
            review_count: 65,
            images: vec![image("photo-1622279457486-62dcc4a431d6")],
            address: String::from("Plateau, Dakar"),
            phone: String::from("+221 77 555 12 34"),
            distance_km: Some(1.8),
            amenities: vec![
                Amenity::new("1", "Club House"),
                Amenity::new("2", "Parking"),
            ],
            opening_hours: OpeningHours::every_day(DaySchedule::open(
                time!(6:00),
                time!(21:00),
            )),
            available: false,
        },
        Facility {
            id: FacilityId::new("4"),
            name: String::from("Basketball Court Yoff"),
            sport: SportType::Basketball,
            description: String::from("Terrain de basket extérieur rénové"),
            price: 12000,
            rating: 4.4,
            review_count: 37,
            images: vec![image("photo-1546519638-68e109498ffc")],
            address: String::from("Yoff, Dakar"),
            phone: String::from("+221 77 456 78 90"),
            distance_km: None,
            amenities: vec![Amenity::new("1", "Éclairage")],
            opening_hours: OpeningHours::every_day(DaySchedule::open(
                time!(8:00),
                time!(22:00),
            )),
            available: true,
        },
    ]
}

/// Generates the slot template for one day.
///
/// Slots run hourly from 08:00 to 22:00 and are identified `slot-0` to `slot-13`.
#[must_use]
pub fn generate_day_slots() -> Vec<TimeSlot> {
    let template = [
        (8, 12000, Popularity::Low, SlotState::Open),
        (9, 12000, Popularity::Medium, SlotState::Open),
        (10, 15000, Popularity::High, SlotState::Open),
        (11, 15000, Popularity::High, SlotState::Full),
        (12, 15000, Popularity::Medium, SlotState::Open),
        (13, 12000, Popularity::Low, SlotState::Open),
        (14, 15000, Popularity::Medium, SlotState::Open),
        (15, 15000, Popularity::High, SlotState::Reserved),
        (16, 18000, Popularity::High, SlotState::Open),
        (17, 18000, Popularity::High, SlotState::Open),
        (18, 20000, Popularity::High, SlotState::Open),
        (19, 20000, Popularity::High, SlotState::Full),
        (20, 18000, Popularity::Medium, SlotState::Open),
        (21, 15000, Popularity::Low, SlotState::Open),
    ];

    template
        .iter()
        .enumerate()
        .filter_map(|(index, &(hour, price, popularity, state))| {
            let start = time::Time::from_hms(hour, 0, 0).ok()?;
            let end = time::Time::from_hms(hour + 1, 0, 0).ok()?;
            let slot = TimeSlot::new(&format!("slot-{index}"), start, end, price)
                .with_popularity(popularity);
            Some(match state {
                SlotState::Open => slot,
                SlotState::Full => slot.unavailable(),
                SlotState::Reserved => slot.reserved(),
            })
        })
        .collect()
}

#[derive(Clone, Copy)]
enum SlotState {
    Open,
    Full,
    Reserved,
}

/// Returns the calendar availability known to the backend.
///
/// Dates outside this table are treated as unavailable.
#[must_use]
pub fn reference_availability() -> Vec<(Date, DayAvailability)> {
    vec![
        (date!(2024 - 01 - 15), DayAvailability::open(8, 15000)),
        (date!(2024 - 01 - 16), DayAvailability::open(6, 15000)),
        (date!(2024 - 01 - 17), DayAvailability::open(12, 15000)),
        (date!(2024 - 01 - 18), DayAvailability::closed()),
        (date!(2024 - 01 - 19), DayAvailability::open(4, 18000)),
        (date!(2024 - 01 - 20), DayAvailability::open(10, 18000)),
        (date!(2024 - 01 - 21), DayAvailability::open(8, 15000)),
        (date!(2024 - 01 - 22), DayAvailability::open(12, 15000)),
        (date!(2024 - 01 - 23), DayAvailability::open(6, 15000)),
        (date!(2024 - 01 - 24), DayAvailability::closed()),
        (date!(2024 - 01 - 25), DayAvailability::open(2, 18000)),
        (date!(2024 - 01 - 26), DayAvailability::open(8, 18000)),
    ]
}
