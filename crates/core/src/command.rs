// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use booki_domain::{BookingId, TimeSlot};
use time::Date;

/// How a confirmation call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    /// The booking was created.
    Confirmed(BookingId),
    /// The booking was refused or the call failed.
    Failed {
        /// A message for the user.
        message: String,
    },
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request wizard state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a date in the calendar, or clear it.
    SelectDate {
        /// The picked date.
        date: Option<Date>,
    },
    /// Pick a time slot, or clear the pick.
    SelectSlot {
        /// The picked slot.
        slot: Option<TimeSlot>,
    },
    /// Go one step back.
    GoBack,
    /// Edit the slot from the summary.
    EditSlot,
    /// Start confirming the selected booking.
    BeginConfirmation,
    /// Report the end of the confirmation call.
    CompleteConfirmation {
        /// The call outcome.
        outcome: ConfirmationOutcome,
    },
    /// Close a failed confirmation and pick another slot.
    Retry,
    /// Close the modal.
    DismissModal,
    /// Close a successful confirmation and open the bookings list.
    ViewBookings,
    /// Leave the wizard and start over.
    Reset,
}

impl Command {
    /// Returns the name of this command for errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectDate { .. } => "SelectDate",
            Self::SelectSlot { .. } => "SelectSlot",
            Self::GoBack => "GoBack",
            Self::EditSlot => "EditSlot",
            Self::BeginConfirmation => "BeginConfirmation",
            Self::CompleteConfirmation { .. } => "CompleteConfirmation",
            Self::Retry => "Retry",
            Self::DismissModal => "DismissModal",
            Self::ViewBookings => "ViewBookings",
            Self::Reset => "Reset",
        }
    }
}
