// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the controller and its collaborators.

use booki::CoreError;
use booki_domain::{DomainError, SlotId};
use thiserror::Error;
use time::Date;

/// User-facing message for a slot that was taken in the meantime.
pub const SLOT_UNAVAILABLE_MESSAGE: &str =
    "Le créneau sélectionné n'est plus disponible. Veuillez choisir un autre horaire.";

/// User-facing message for a failed network call.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Une erreur réseau s'est produite. Vérifiez votre connexion et réessayez.";

/// User-facing message for any other booking failure.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Une erreur est survenue lors de la réservation. Veuillez réessayer.";

/// Failures reported by the booking confirmation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The slot was booked by someone else or is closed.
    #[error("Slot '{slot_id}' is no longer available")]
    SlotUnavailable {
        /// The requested slot.
        slot_id: SlotId,
    },
    /// The booking backend could not be reached.
    #[error("Network failure: {reason}")]
    NetworkFailure {
        /// What went wrong.
        reason: String,
    },
    /// The request was rejected as malformed.
    #[error("Invalid booking request for field '{field}': {message}")]
    ValidationFailure {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },
}

impl BookingError {
    /// Returns the message shown in the confirmation modal.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::SlotUnavailable { .. } => SLOT_UNAVAILABLE_MESSAGE,
            Self::NetworkFailure { .. } => NETWORK_FAILURE_MESSAGE,
            Self::ValidationFailure { .. } => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        let field: &str = match &err {
            DomainError::FacilityNotFound(_) => "facility_id",
            DomainError::SlotNotFound { .. } => "slot_id",
            DomainError::DateParseError { .. } => "date",
            _ => "request",
        };
        Self::ValidationFailure {
            field: String::from(field),
            message: err.to_string(),
        }
    }
}

/// Errors returned by the booking wizard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The state machine rejected the command.
    Transition(CoreError),
    /// The date is in the past.
    DateNotSelectable {
        /// The rejected date.
        date: Date,
    },
    /// The confirmation was abandoned because the user left the wizard.
    Cancelled,
    /// The state machine produced a result the controller cannot act on.
    Internal {
        /// A description of the problem.
        message: String,
    },
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transition(err) => write!(f, "Transition rejected: {err}"),
            Self::DateNotSelectable { date } => write!(f, "Date {date} can no longer be booked"),
            Self::Cancelled => write!(f, "Booking confirmation was cancelled"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for WizardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transition(err) => Some(err),
            Self::DateNotSelectable { .. } | Self::Cancelled | Self::Internal { .. } => None,
        }
    }
}

impl From<CoreError> for WizardError {
    fn from(err: CoreError) -> Self {
        Self::Transition(err)
    }
}
