// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use booki_domain::{
    BookingId, FacilityId, PriceBreakdown, SlotId, TimeSlot, calculate_price_breakdown,
};
use time::Date;

/// The step the booking wizard is on.
///
/// Steps are strictly ordered and only move one step at a time:
/// - `Date` → `Time` when a date is selected
/// - `Time` → `Summary` when a slot is selected
/// - `Summary` → `Time` and `Time` → `Date` when going back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Choosing a date in the calendar.
    #[default]
    Date,
    /// Choosing a time slot on the selected date.
    Time,
    /// Reviewing and confirming the booking.
    Summary,
}

impl WizardStep {
    /// Returns the lowercase name of this step.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Summary => "summary",
        }
    }

    /// Returns the 1-based position of this step.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Date => 1,
            Self::Time => 2,
            Self::Summary => 3,
        }
    }

    /// Returns the heading shown for this step.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Date => "Choisir une date",
            Self::Time => "Sélectionner un créneau",
            Self::Summary => "Confirmer la réservation",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the confirmation modal is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalStatus {
    /// The confirmation call is in flight.
    #[default]
    Pending,
    /// The booking was confirmed.
    Success {
        /// The identifier of the new booking.
        booking_id: BookingId,
    },
    /// The booking failed.
    Error {
        /// A message for the user.
        message: String,
    },
}

impl ModalStatus {
    /// Returns the lowercase name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}

/// The confirmation modal.
///
/// The modal opens in `Pending` when confirmation begins and is closed by an
/// explicit dismissal. Closing keeps the last status so the caller can react
/// to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    /// Whether the modal is visible.
    pub is_open: bool,
    /// The current status.
    pub status: ModalStatus,
}

impl ModalState {
    /// A visible modal in the pending state.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            is_open: true,
            status: ModalStatus::Pending,
        }
    }

    /// Returns the booking identifier if the modal reports success.
    #[must_use]
    pub const fn booking_id(&self) -> Option<&BookingId> {
        match &self.status {
            ModalStatus::Success { booking_id } => Some(booking_id),
            _ => None,
        }
    }

    /// Returns the error message if the modal reports a failure.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            ModalStatus::Error { message } => Some(message),
            _ => None,
        }
    }

    /// Returns a closed copy of this modal.
    #[must_use]
    pub(crate) fn closed(&self) -> Self {
        Self {
            is_open: false,
            status: self.status.clone(),
        }
    }
}

/// The booking wizard state for one facility.
///
/// The state is only changed through [`crate::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    /// The facility being booked.
    pub facility_id: FacilityId,
    /// The selected date.
    pub selected_date: Option<Date>,
    /// The selected slot. Only set while `selected_date` is set.
    pub selected_slot: Option<TimeSlot>,
    /// The current step.
    pub step: WizardStep,
    /// The confirmation modal.
    pub modal: ModalState,
    /// Whether a confirmation call is in flight.
    pub is_confirming: bool,
}

impl WizardState {
    /// Creates the initial state for a facility.
    ///
    /// # Arguments
    ///
    /// * `facility_id` - The facility being booked
    #[must_use]
    pub fn new(facility_id: FacilityId) -> Self {
        Self {
            facility_id,
            selected_date: None,
            selected_slot: None,
            step: WizardStep::Date,
            modal: ModalState::default(),
            is_confirming: false,
        }
    }

    /// Returns the booking summary once a date and slot are selected.
    #[must_use]
    pub fn summary(&self) -> Option<BookingSummary> {
        let date = self.selected_date?;
        let slot = self.selected_slot.clone()?;
        let price = calculate_price_breakdown(slot.price).ok()?;
        Some(BookingSummary {
            facility_id: self.facility_id.clone(),
            date,
            slot,
            price,
        })
    }
}

/// The recap shown on the summary step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    /// The facility being booked.
    pub facility_id: FacilityId,
    /// The selected date.
    pub date: Date,
    /// The selected slot.
    pub slot: TimeSlot,
    /// What the user will pay.
    pub price: PriceBreakdown,
}

/// What the booking collaborator is asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    /// The facility being booked.
    pub facility_id: FacilityId,
    /// The booked date.
    pub date: Date,
    /// The booked slot.
    pub slot_id: SlotId,
}

/// A side effect requested by a transition.
///
/// The state machine never performs side effects itself; the caller carries
/// them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Leave the wizard through the navigation history.
    NavigateBack,
    /// Go to the bookings list.
    OpenBookings {
        /// Whether to wait for the modal's closing animation first.
        delayed: bool,
    },
    /// Ask the booking collaborator to confirm.
    RequestConfirmation(ConfirmationRequest),
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// changing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The state after the transition.
    pub new_state: WizardState,
    /// A side effect for the caller to perform, if any.
    pub effect: Option<Effect>,
}
