// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Time, Weekday};

/// The sports a facility can be booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SportType {
    /// Padel courts.
    Padel,
    /// Football pitches (mostly 5v5).
    Football,
    /// Tennis courts.
    Tennis,
    /// Basketball courts.
    Basketball,
}

impl SportType {
    /// All supported sports, in display order.
    pub const ALL: [Self; 4] = [Self::Padel, Self::Football, Self::Tennis, Self::Basketball];

    /// Returns the lowercase wire name of this sport.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Padel => "padel",
            Self::Football => "football",
            Self::Tennis => "tennis",
            Self::Basketball => "basketball",
        }
    }
}

impl FromStr for SportType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "padel" => Ok(Self::Padel),
            "football" => Ok(Self::Football),
            "tennis" => Ok(Self::Tennis),
            "basketball" => Ok(Self::Basketball),
            _ => Err(DomainError::UnknownSportType(s.to_string())),
        }
    }
}

impl std::fmt::Display for SportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a facility in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacilityId(String);

impl FacilityId {
    /// Creates a new `FacilityId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a time slot within a day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(String);

impl SlotId {
    /// Creates a new `SlotId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier handed back when a booking is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(String);

impl BookingId {
    /// Creates a new `BookingId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How much demand a slot usually sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Popularity {
    /// Quiet hours.
    Low,
    /// Regular demand.
    #[default]
    Medium,
    /// Peak hours.
    High,
}

impl Popularity {
    /// Returns the lowercase wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the label shown next to a slot.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Calme",
            Self::Medium => "Populaire",
            Self::High => "Très demandé",
        }
    }
}

impl FromStr for Popularity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::InvalidPopularity(s.to_string())),
        }
    }
}

/// A bookable one-hour interval on a given day.
///
/// Slots are generated per day and never mutated afterwards. A slot that is not
/// `available` stays unavailable for that day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The slot identifier (unique within a day).
    pub id: SlotId,
    /// Start of the interval.
    pub start_time: Time,
    /// End of the interval.
    pub end_time: Time,
    /// Price in CFA francs.
    pub price: u32,
    /// Whether the slot can still be booked.
    pub available: bool,
    /// Whether an unavailable slot is held by a reservation (as opposed to full).
    pub reserved: bool,
    /// Usual demand for this hour, if known.
    pub popularity: Option<Popularity>,
}

impl TimeSlot {
    /// Creates a new available slot.
    ///
    /// # Arguments
    ///
    /// * `id` - The slot identifier
    /// * `start_time` - Start of the interval
    /// * `end_time` - End of the interval
    /// * `price` - Price in CFA francs
    #[must_use]
    pub fn new(id: &str, start_time: Time, end_time: Time, price: u32) -> Self {
        Self {
            id: SlotId::new(id),
            start_time,
            end_time,
            price,
            available: true,
            reserved: false,
            popularity: None,
        }
    }

    /// Marks the slot as full.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Marks the slot as held by an existing reservation.
    #[must_use]
    pub const fn reserved(mut self) -> Self {
        self.available = false;
        self.reserved = true;
        self
    }

    /// Sets the slot popularity.
    #[must_use]
    pub const fn with_popularity(mut self, popularity: Popularity) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Returns the popularity, treating unknown demand as medium.
    #[must_use]
    pub fn effective_popularity(&self) -> Popularity {
        self.popularity.unwrap_or_default()
    }

    /// Returns the status label for an unavailable slot.
    #[must_use]
    pub const fn unavailable_label(&self) -> &'static str {
        if self.reserved { "Réservé" } else { "Complet" }
    }

    /// Returns the `HH:MM - HH:MM` label of this slot.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            format_clock(self.start_time),
            format_clock(self.end_time)
        )
    }
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// A facility amenity such as parking or showers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amenity {
    /// The amenity identifier.
    pub id: String,
    /// The display name, also used for filtering.
    pub name: String,
    /// Whether the amenity is currently offered.
    pub available: bool,
}

impl Amenity {
    /// Creates a new available amenity.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            available: true,
        }
    }
}

/// Opening hours for one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Opening time.
    pub open: Time,
    /// Closing time.
    pub close: Time,
    /// Whether the facility is closed all day.
    pub closed: bool,
}

impl DaySchedule {
    /// Creates an open day.
    #[must_use]
    pub const fn open(open: Time, close: Time) -> Self {
        Self {
            open,
            close,
            closed: false,
        }
    }

    /// Checks whether a time of day falls within opening hours.
    #[must_use]
    pub fn is_open_at(&self, at: Time) -> bool {
        !self.closed && at >= self.open && at < self.close
    }
}

/// Weekly opening hours of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Monday schedule.
    pub monday: DaySchedule,
    /// Tuesday schedule.
    pub tuesday: DaySchedule,
    /// Wednesday schedule.
    pub wednesday: DaySchedule,
    /// Thursday schedule.
    pub thursday: DaySchedule,
    /// Friday schedule.
    pub friday: DaySchedule,
    /// Saturday schedule.
    pub saturday: DaySchedule,
    /// Sunday schedule.
    pub sunday: DaySchedule,
}

impl OpeningHours {
    /// Uses the same schedule every day of the week.
    #[must_use]
    pub const fn every_day(schedule: DaySchedule) -> Self {
        Self {
            monday: schedule,
            tuesday: schedule,
            wednesday: schedule,
            thursday: schedule,
            friday: schedule,
            saturday: schedule,
            sunday: schedule,
        }
    }

    /// Returns the schedule for a weekday.
    #[must_use]
    pub const fn for_weekday(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }
}

/// A bookable sports venue ("terrain").
///
/// Facilities are read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// The facility identifier.
    pub id: FacilityId,
    /// The display name.
    pub name: String,
    /// The sport played here.
    pub sport: SportType,
    /// A short description.
    pub description: String,
    /// Hourly base price in CFA francs.
    pub price: u32,
    /// Average rating out of 5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Image URLs.
    pub images: Vec<String>,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Distance from the user in kilometres, when known.
    pub distance_km: Option<f64>,
    /// Amenities offered.
    pub amenities: Vec<Amenity>,
    /// Weekly opening hours.
    pub opening_hours: OpeningHours,
    /// Whether the facility currently accepts bookings.
    pub available: bool,
}

impl Facility {
    /// Checks whether the facility offers an amenity with the given name.
    #[must_use]
    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenities.iter().any(|amenity| amenity.name == name)
    }
}
