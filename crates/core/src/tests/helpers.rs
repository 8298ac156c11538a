// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, WizardState, apply};
use booki_domain::{FacilityId, TimeSlot};
use time::Date;
use time::macros::{date, time};

pub fn create_test_state() -> WizardState {
    WizardState::new(FacilityId::new("1"))
}

pub const fn create_test_date() -> Date {
    date!(2024 - 01 - 20)
}

pub fn create_test_slot() -> TimeSlot {
    TimeSlot::new("slot-1", time!(9:00), time!(10:00), 12000)
}

pub fn create_unavailable_slot() -> TimeSlot {
    TimeSlot::new("slot-3", time!(11:00), time!(12:00), 15000).unavailable()
}

/// Returns a state on the summary step with the test date and slot.
pub fn create_summary_state() -> WizardState {
    let state: WizardState = create_test_state();
    let state: WizardState = apply(
        &state,
        Command::SelectDate {
            date: Some(create_test_date()),
        },
    )
    .unwrap()
    .new_state;
    apply(
        &state,
        Command::SelectSlot {
            slot: Some(create_test_slot()),
        },
    )
    .unwrap()
    .new_state
}

/// Returns a state with a confirmation in flight.
pub fn create_pending_state() -> WizardState {
    apply(&create_summary_state(), Command::BeginConfirmation)
        .unwrap()
        .new_state
}
