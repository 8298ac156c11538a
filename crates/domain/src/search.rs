// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility search and filtering.
//!
//! Filtering is a pure conjunction of four predicates:
//! - text: case-insensitive substring of the name or the address
//! - sport: exact match when a sport is selected
//! - price: inclusive range
//! - amenities: at least one selected amenity is offered
//!
//! The amenity predicate is an any-match, so checking more amenities widens the
//! result instead of narrowing it.
//!
//! The facility list is small and static, so every criterion change re-runs
//! the whole pipeline.

use crate::error::DomainError;
use crate::types::{Facility, SportType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Inclusive price bounds in CFA francs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Creates a price range.
    ///
    /// # Errors
    ///
    /// Returns an error if `min` is greater than `max`.
    pub const fn new(min: u32, max: u32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range that admits every price.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Checks whether a price falls within the bounds.
    #[must_use]
    pub const fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::any()
    }
}

/// Result ordering offered by the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Nearest first; facilities without a distance go last.
    #[default]
    Distance,
    /// Cheapest first.
    Price,
    /// Best rated first.
    Rating,
    /// Alphabetical, ignoring case.
    Name,
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Self::Distance),
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            _ => Err(DomainError::InvalidSortKey(s.to_string())),
        }
    }
}

/// The search page criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free text matched against name and address.
    pub query: String,
    /// Selected sport, if any.
    pub sport: Option<SportType>,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// Selected amenity names.
    pub amenities: BTreeSet<String>,
}

impl FilterCriteria {
    /// Checks or unchecks an amenity.
    pub fn toggle_amenity(&mut self, name: &str, checked: bool) {
        if checked {
            self.amenities.insert(name.to_string());
        } else {
            self.amenities.remove(name);
        }
    }

    /// Checks whether a facility satisfies every criterion.
    #[must_use]
    pub fn matches(&self, facility: &Facility) -> bool {
        self.matches_query(facility)
            && self.matches_sport(facility)
            && self.price_range.contains(facility.price)
            && self.matches_amenities(facility)
    }

    fn matches_query(&self, facility: &Facility) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        facility.name.to_lowercase().contains(&needle)
            || facility.address.to_lowercase().contains(&needle)
    }

    fn matches_sport(&self, facility: &Facility) -> bool {
        self.sport.is_none_or(|sport| facility.sport == sport)
    }

    fn matches_amenities(&self, facility: &Facility) -> bool {
        self.amenities.is_empty()
            || self
                .amenities
                .iter()
                .any(|amenity| facility.has_amenity(amenity))
    }
}

/// Narrows a facility list to those matching the criteria.
///
/// Input order is preserved.
#[must_use]
pub fn filter_facilities(facilities: &[Facility], criteria: &FilterCriteria) -> Vec<Facility> {
    facilities
        .iter()
        .filter(|facility| criteria.matches(facility))
        .cloned()
        .collect()
}

/// Sorts facilities in place. The sort is stable.
pub fn sort_facilities(facilities: &mut [Facility], key: SortKey) {
    match key {
        SortKey::Distance => {
            facilities.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
        }
        SortKey::Price => facilities.sort_by_key(|facility| facility.price),
        SortKey::Rating => facilities.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => facilities.sort_by_key(|facility| facility.name.to_lowercase()),
    }
}

fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filters, then sorts when a key is given.
#[must_use]
pub fn search_facilities(
    facilities: &[Facility],
    criteria: &FilterCriteria,
    sort: Option<SortKey>,
) -> Vec<Facility> {
    let mut results = filter_facilities(facilities, criteria);
    if let Some(key) = sort {
        sort_facilities(&mut results, key);
    }
    results
}
