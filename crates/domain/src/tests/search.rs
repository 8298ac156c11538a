// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Amenity, DaySchedule, DomainError, Facility, FacilityId, FilterCriteria, OpeningHours,
    PriceRange, SortKey, SportType, filter_facilities, reference_facilities, search_facilities,
    sort_facilities,
};
use time::macros::time;

fn create_test_facility(id: &str, sport: SportType, price: u32, amenities: &[&str]) -> Facility {
    Facility {
        id: FacilityId::new(id),
        name: format!("Facility {id}"),
        sport,
        description: String::new(),
        price,
        rating: 4.0,
        review_count: 0,
        images: Vec::new(),
        address: String::from("Dakar"),
        phone: String::new(),
        distance_km: None,
        amenities: amenities
            .iter()
            .enumerate()
            .map(|(index, name)| Amenity::new(&index.to_string(), name))
            .collect(),
        opening_hours: OpeningHours::every_day(DaySchedule::open(time!(8:00), time!(22:00))),
        available: true,
    }
}

fn ids(facilities: &[Facility]) -> Vec<&str> {
    facilities.iter().map(|f| f.id.value()).collect()
}

#[test]
fn test_empty_criteria_is_identity() {
    let facilities = reference_facilities();
    let criteria = FilterCriteria::default();

    let results = filter_facilities(&facilities, &criteria);

    assert_eq!(results, facilities);
}

#[test]
fn test_query_matches_name_case_insensitively() {
    let facilities = reference_facilities();
    let criteria = FilterCriteria {
        query: String::from("TENNIS"),
        ..FilterCriteria::default()
    };

    let results = filter_facilities(&facilities, &criteria);

    assert_eq!(ids(&results), vec!["3"]);
}

#[test]
fn test_query_matches_address() {
    let facilities = reference_facilities();
    let criteria = FilterCriteria {
        query: String::from("parcelles"),
        ..FilterCriteria::default()
    };

    let results = filter_facilities(&facilities, &criteria);

    assert_eq!(ids(&results), vec!["2"]);
}

#[test]
fn test_query_matching_every_address_keeps_all() {
    let facilities = reference_facilities();
    let criteria = FilterCriteria {
        query: String::from("dakar"),
        ..FilterCriteria::default()
    };

    assert_eq!(filter_facilities(&facilities, &criteria).len(), facilities.len());
}

#[test]
fn test_sport_filter_is_exact() {
    let facilities = reference_facilities();
    let criteria = FilterCriteria {
        sport: Some(SportType::Padel),
        ..FilterCriteria::default()
    };

    let results = filter_facilities(&facilities, &criteria);

    assert_eq!(ids(&results), vec!["1"]);
}

#[test]
fn test_price_range_bounds_are_inclusive() {
    let facilities = vec![
        create_test_facility("a", SportType::Padel, 9999, &[]),
        create_test_facility("b", SportType::Padel, 10000, &[]),
        create_test_facility("c", SportType::Padel, 20000, &[]),
        create_test_facility("d", SportType::Padel, 20001, &[]),
    ];
    let criteria = FilterCriteria {
        price_range: PriceRange::new(10000, 20000).unwrap(),
        ..FilterCriteria::default()
    };

    let results = filter_facilities(&facilities, &criteria);

    assert_eq!(ids(&results), vec!["b", "c"]);
}

#[test]
fn test_price_range_rejects_inverted_bounds() {
    assert_eq!(
        PriceRange::new(50000, 10000),
        Err(DomainError::InvalidPriceRange {
            min: 50000,
            max: 10000
        })
    );
}

#[test]
fn test_amenity_filter_uses_any_match() {
    let facilities = vec![
        create_test_facility("a", SportType::Padel, 15000, &["Parking"]),
        create_test_facility("b", SportType::Padel, 15000, &["WiFi"]),
        create_test_facility("c", SportType::Padel, 15000, &["Parking", "WiFi"]),
        create_test_facility("d", SportType::Padel, 15000, &["Douches"]),
    ];
    let mut criteria = FilterCriteria::default();
    criteria.toggle_amenity("Parking", true);
    criteria.toggle_amenity("WiFi", true);

    let results = filter_facilities(&facilities, &criteria);

    assert_eq!(ids(&results), vec!["a", "b", "c"]);
}

#[test]
fn test_unchecking_amenity_restores_results() {
    let facilities = reference_facilities();
    let mut criteria = FilterCriteria::default();
    criteria.toggle_amenity("WiFi", true);
    assert_eq!(ids(&filter_facilities(&facilities, &criteria)), vec!["1"]);

    criteria.toggle_amenity("WiFi", false);
    assert!(criteria.amenities.is_empty());
    assert_eq!(filter_facilities(&facilities, &criteria).len(), facilities.len());
}

#[test]
fn test_amenity_names_match_exactly() {
    let facilities = vec![create_test_facility("a", SportType::Padel, 15000, &["Parking"])];
    let mut criteria = FilterCriteria::default();
    criteria.toggle_amenity("parking", true);

    assert!(filter_facilities(&facilities, &criteria).is_empty());
}

#[test]
fn test_predicates_are_conjunctive() {
    let facilities = reference_facilities();
    let mut criteria = FilterCriteria {
        query: String::from("dakar"),
        sport: Some(SportType::Tennis),
        price_range: PriceRange::new(10000, 50000).unwrap(),
        ..FilterCriteria::default()
    };
    criteria.toggle_amenity("Parking", true);
    assert_eq!(ids(&filter_facilities(&facilities, &criteria)), vec!["3"]);

    criteria.price_range = PriceRange::new(10000, 17000).unwrap();
    assert!(filter_facilities(&facilities, &criteria).is_empty());
}

#[test]
fn test_sort_by_distance_puts_unknown_last() {
    let mut facilities = reference_facilities();
    sort_facilities(&mut facilities, SortKey::Distance);
    assert_eq!(ids(&facilities), vec!["3", "1", "2", "4"]);
}

#[test]
fn test_sort_by_price_rating_and_name() {
    let mut facilities = reference_facilities();

    sort_facilities(&mut facilities, SortKey::Price);
    assert_eq!(ids(&facilities), vec!["4", "1", "3", "2"]);

    sort_facilities(&mut facilities, SortKey::Rating);
    assert_eq!(ids(&facilities), vec!["1", "3", "2", "4"]);

    sort_facilities(&mut facilities, SortKey::Name);
    assert_eq!(ids(&facilities), vec!["4", "1", "3", "2"]);
}

#[test]
fn test_search_filters_before_sorting() {
    let facilities = reference_facilities();
    let criteria = FilterCriteria {
        price_range: PriceRange::new(12000, 18000).unwrap(),
        ..FilterCriteria::default()
    };

    let results = search_facilities(&facilities, &criteria, Some(SortKey::Price));

    assert_eq!(ids(&results), vec!["4", "1", "3"]);
}

#[test]
fn test_sort_key_parse() {
    assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Rating);
    assert!(matches!(
        "popularity".parse::<SortKey>(),
        Err(DomainError::InvalidSortKey(_))
    ));
}
