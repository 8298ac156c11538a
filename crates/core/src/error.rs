// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::WizardStep;
use booki_domain::SlotId;

/// Errors that can occur during wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Confirmation was requested without a complete selection.
    IncompleteSelection {
        /// What is missing.
        missing: &'static str,
    },
    /// A confirmation call is already in flight.
    ConfirmationInFlight,
    /// A confirmation result arrived with no confirmation in flight.
    NoConfirmationPending,
    /// A slot was picked with no date selected.
    NoDateSelected,
    /// The picked slot cannot be booked.
    SlotUnavailable {
        /// The slot that was picked.
        slot_id: SlotId,
    },
    /// The command is not valid on the current step.
    InvalidStep {
        /// The command that was rejected.
        command: &'static str,
        /// The step the wizard is on.
        step: WizardStep,
    },
    /// The command does not apply to the modal as it currently is.
    InvalidModalState {
        /// The command that was rejected.
        command: &'static str,
        /// The modal status name.
        status: &'static str,
        /// Whether the modal was open.
        is_open: bool,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteSelection { missing } => {
                write!(f, "Cannot confirm booking: no {missing} selected")
            }
            Self::ConfirmationInFlight => {
                write!(f, "A booking confirmation is already in progress")
            }
            Self::NoConfirmationPending => write!(f, "No booking confirmation is in progress"),
            Self::NoDateSelected => write!(f, "A date must be selected before a slot"),
            Self::SlotUnavailable { slot_id } => {
                write!(f, "Slot '{slot_id}' is not available")
            }
            Self::InvalidStep { command, step } => {
                write!(f, "Command {command} is not valid on the {step} step")
            }
            Self::InvalidModalState {
                command,
                status,
                is_open,
            } => {
                let visibility = if *is_open { "open" } else { "closed" };
                write!(
                    f,
                    "Command {command} is not valid while the modal is {visibility} ({status})"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}
