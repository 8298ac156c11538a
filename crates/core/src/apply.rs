// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, ConfirmationOutcome};
use crate::error::CoreError;
use crate::state::{
    ConfirmationRequest, Effect, ModalState, ModalStatus, TransitionResult, WizardState,
    WizardStep,
};
use booki_domain::TimeSlot;
use time::Date;

/// Applies a command to the current wizard state, producing a new state.
///
/// This function is pure and deterministic. It does not mutate the input
/// state and never performs side effects; any effect the caller must carry
/// out is returned alongside the new state.
///
/// While a confirmation is in flight, every command except
/// [`Command::CompleteConfirmation`] and [`Command::Reset`] is rejected.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any effect
/// * `Err(CoreError)` if the command is invalid in the current state
///
/// # Errors
///
/// Returns an error if:
/// - A confirmation is in flight and the command would change the selection
/// - A slot is picked without a date, or the slot cannot be booked
/// - Confirmation is requested without a complete selection
/// - The command does not apply to the current step or modal
pub fn apply(state: &WizardState, command: Command) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();

    if state.is_confirming
        && !matches!(
            command,
            Command::CompleteConfirmation { .. } | Command::Reset
        )
    {
        return Err(CoreError::ConfirmationInFlight);
    }

    match command {
        Command::SelectDate { date } => Ok(select_date(state, date)),
        Command::SelectSlot { slot } => select_slot(state, slot),
        Command::GoBack => Ok(go_back(state)),
        Command::EditSlot => {
            if state.step != WizardStep::Summary {
                return Err(CoreError::InvalidStep {
                    command: command_name,
                    step: state.step,
                });
            }
            Ok(transition(WizardState {
                step: WizardStep::Time,
                ..state.clone()
            }))
        }
        Command::BeginConfirmation => begin_confirmation(state),
        Command::CompleteConfirmation { outcome } => {
            if !state.is_confirming {
                return Err(CoreError::NoConfirmationPending);
            }

            let status: ModalStatus = match outcome {
                ConfirmationOutcome::Confirmed(booking_id) => ModalStatus::Success { booking_id },
                ConfirmationOutcome::Failed { message } => ModalStatus::Error { message },
            };

            Ok(transition(WizardState {
                modal: ModalState {
                    is_open: true,
                    status,
                },
                is_confirming: false,
                ..state.clone()
            }))
        }
        Command::Retry => {
            require_open_modal(state, command_name, |status| {
                matches!(status, ModalStatus::Error { .. })
            })?;

            // The failed slot is dropped; the date stays so the user can pick again
            Ok(transition(WizardState {
                selected_slot: None,
                step: WizardStep::Time,
                modal: state.modal.closed(),
                ..state.clone()
            }))
        }
        Command::DismissModal => {
            require_open_modal(state, command_name, |_| true)?;

            let effect: Option<Effect> = match state.modal.status {
                ModalStatus::Success { .. } => Some(Effect::OpenBookings { delayed: true }),
                _ => None,
            };

            Ok(TransitionResult {
                new_state: WizardState {
                    modal: state.modal.closed(),
                    ..state.clone()
                },
                effect,
            })
        }
        Command::ViewBookings => {
            require_open_modal(state, command_name, |status| {
                matches!(status, ModalStatus::Success { .. })
            })?;

            Ok(TransitionResult {
                new_state: WizardState {
                    modal: state.modal.closed(),
                    ..state.clone()
                },
                effect: Some(Effect::OpenBookings { delayed: false }),
            })
        }
        Command::Reset => Ok(transition(WizardState::new(state.facility_id.clone()))),
    }
}

const fn transition(new_state: WizardState) -> TransitionResult {
    TransitionResult {
        new_state,
        effect: None,
    }
}

fn select_date(state: &WizardState, date: Option<Date>) -> TransitionResult {
    // Any date change invalidates the picked slot
    let step: WizardStep = if date.is_some() {
        WizardStep::Time
    } else {
        WizardStep::Date
    };

    transition(WizardState {
        selected_date: date,
        selected_slot: None,
        step,
        ..state.clone()
    })
}

fn select_slot(state: &WizardState, slot: Option<TimeSlot>) -> Result<TransitionResult, CoreError> {
    if state.selected_date.is_none() {
        return Err(CoreError::NoDateSelected);
    }
    if state.step != WizardStep::Time {
        return Err(CoreError::InvalidStep {
            command: "SelectSlot",
            step: state.step,
        });
    }

    match slot {
        None => Ok(transition(WizardState {
            selected_slot: None,
            ..state.clone()
        })),
        Some(slot) => {
            if !slot.available {
                return Err(CoreError::SlotUnavailable { slot_id: slot.id });
            }
            Ok(transition(WizardState {
                selected_slot: Some(slot),
                step: WizardStep::Summary,
                ..state.clone()
            }))
        }
    }
}

fn go_back(state: &WizardState) -> TransitionResult {
    match state.step {
        WizardStep::Summary => transition(WizardState {
            step: WizardStep::Time,
            ..state.clone()
        }),
        WizardStep::Time => transition(WizardState {
            selected_slot: None,
            step: WizardStep::Date,
            ..state.clone()
        }),
        WizardStep::Date => TransitionResult {
            new_state: state.clone(),
            effect: Some(Effect::NavigateBack),
        },
    }
}

fn begin_confirmation(state: &WizardState) -> Result<TransitionResult, CoreError> {
    let Some(date) = state.selected_date else {
        return Err(CoreError::IncompleteSelection { missing: "date" });
    };
    let Some(slot) = state.selected_slot.as_ref() else {
        return Err(CoreError::IncompleteSelection { missing: "slot" });
    };
    if state.step != WizardStep::Summary {
        return Err(CoreError::InvalidStep {
            command: "BeginConfirmation",
            step: state.step,
        });
    }
    // A booked selection stays booked until the wizard is reset
    if state.modal.is_open || matches!(state.modal.status, ModalStatus::Success { .. }) {
        return Err(CoreError::InvalidModalState {
            command: "BeginConfirmation",
            status: state.modal.status.as_str(),
            is_open: state.modal.is_open,
        });
    }

    let request: ConfirmationRequest = ConfirmationRequest {
        facility_id: state.facility_id.clone(),
        date,
        slot_id: slot.id.clone(),
    };

    Ok(TransitionResult {
        new_state: WizardState {
            modal: ModalState::pending(),
            is_confirming: true,
            ..state.clone()
        },
        effect: Some(Effect::RequestConfirmation(request)),
    })
}

fn require_open_modal(
    state: &WizardState,
    command: &'static str,
    accepts: impl Fn(&ModalStatus) -> bool,
) -> Result<(), CoreError> {
    if state.modal.is_open && accepts(&state.modal.status) {
        return Ok(());
    }
    Err(CoreError::InvalidModalState {
        command,
        status: state.modal.status.as_str(),
        is_open: state.modal.is_open,
    })
}
