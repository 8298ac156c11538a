// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Sport type is not one of the supported sports.
    UnknownSportType(String),
    /// Slot popularity label is not recognized.
    InvalidPopularity(String),
    /// Sort key is not recognized.
    InvalidSortKey(String),
    /// Booking status is not recognized.
    InvalidBookingStatus(String),
    /// Price range bounds are inverted.
    InvalidPriceRange {
        /// The lower bound.
        min: u32,
        /// The upper bound.
        max: u32,
    },
    /// Facility does not exist in the catalog.
    FacilityNotFound(String),
    /// Slot does not exist in the daily schedule.
    SlotNotFound {
        /// The facility the slot was requested for.
        facility_id: String,
        /// The slot identifier.
        slot_id: String,
    },
    /// Amount arithmetic overflowed.
    AmountOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Payment method is not recognized.
    InvalidPaymentMethod(String),
    /// Card number failed the checksum or length check.
    InvalidCardNumber,
    /// Card expiry is malformed or in the past.
    InvalidCardExpiry(String),
    /// Card verification code is malformed.
    InvalidCvc,
    /// Card details are required for card payments.
    MissingCardDetails,
    /// Mobile money payments require a phone number.
    MissingPhoneNumber {
        /// The payment method that required it.
        method: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSportType(value) => write!(f, "Unknown sport type: '{value}'"),
            Self::InvalidPopularity(value) => write!(f, "Invalid popularity: '{value}'"),
            Self::InvalidSortKey(value) => write!(f, "Invalid sort key: '{value}'"),
            Self::InvalidBookingStatus(value) => write!(f, "Invalid booking status: '{value}'"),
            Self::InvalidPriceRange { min, max } => {
                write!(
                    f,
                    "Invalid price range: minimum {min} is greater than maximum {max}"
                )
            }
            Self::FacilityNotFound(id) => write!(f, "Facility '{id}' not found"),
            Self::SlotNotFound {
                facility_id,
                slot_id,
            } => {
                write!(
                    f,
                    "Slot '{slot_id}' not found for facility '{facility_id}'"
                )
            }
            Self::AmountOverflow { operation } => {
                write!(f, "Amount overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidPaymentMethod(value) => write!(f, "Invalid payment method: '{value}'"),
            Self::InvalidCardNumber => write!(f, "Invalid card number"),
            Self::InvalidCardExpiry(value) => write!(f, "Invalid card expiry: '{value}'"),
            Self::InvalidCvc => write!(f, "Card verification code must be 3 or 4 digits"),
            Self::MissingCardDetails => write!(f, "Card details are required for card payment"),
            Self::MissingPhoneNumber { method } => {
                write!(f, "Phone number is required for {method} payment")
            }
        }
    }
}

impl std::error::Error for DomainError {}
