// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_summary_state, create_test_date, create_test_slot, create_test_state,
    create_unavailable_slot,
};
use crate::{Command, CoreError, Effect, TransitionResult, WizardState, WizardStep, apply};
use booki_domain::SlotId;
use time::macros::date;

#[test]
fn test_initial_state_is_date_step() {
    let state: WizardState = create_test_state();

    assert_eq!(state.step, WizardStep::Date);
    assert!(state.selected_date.is_none());
    assert!(state.selected_slot.is_none());
    assert!(!state.modal.is_open);
    assert!(!state.is_confirming);
}

#[test]
fn test_step_numbers_and_titles() {
    assert_eq!(WizardStep::Date.number(), 1);
    assert_eq!(WizardStep::Time.number(), 2);
    assert_eq!(WizardStep::Summary.number(), 3);
    assert_eq!(WizardStep::Date.title(), "Choisir une date");
    assert_eq!(WizardStep::Time.title(), "Sélectionner un créneau");
    assert_eq!(WizardStep::Summary.title(), "Confirmer la réservation");
}

#[test]
fn test_select_date_advances_to_time() {
    let state: WizardState = create_test_state();

    let result: TransitionResult = apply(
        &state,
        Command::SelectDate {
            date: Some(create_test_date()),
        },
    )
    .unwrap();

    assert_eq!(result.new_state.step, WizardStep::Time);
    assert_eq!(result.new_state.selected_date, Some(create_test_date()));
    assert!(result.effect.is_none());
}

#[test]
fn test_select_date_does_not_mutate_input() {
    let state: WizardState = create_test_state();
    let before: WizardState = state.clone();

    let _ = apply(
        &state,
        Command::SelectDate {
            date: Some(create_test_date()),
        },
    )
    .unwrap();

    assert_eq!(state, before);
}

#[test]
fn test_clearing_date_returns_to_date_step() {
    let state: WizardState = create_summary_state();

    let result: TransitionResult = apply(&state, Command::SelectDate { date: None }).unwrap();

    assert_eq!(result.new_state.step, WizardStep::Date);
    assert!(result.new_state.selected_date.is_none());
    assert!(result.new_state.selected_slot.is_none());
}

#[test]
fn test_changing_date_clears_slot() {
    let state: WizardState = create_summary_state();

    let result: TransitionResult = apply(
        &state,
        Command::SelectDate {
            date: Some(date!(2024 - 01 - 22)),
        },
    )
    .unwrap();

    assert_eq!(result.new_state.step, WizardStep::Time);
    assert_eq!(result.new_state.selected_date, Some(date!(2024 - 01 - 22)));
    assert!(result.new_state.selected_slot.is_none());
}

#[test]
fn test_select_slot_advances_to_summary() {
    let state: WizardState = create_summary_state();

    assert_eq!(state.step, WizardStep::Summary);
    assert_eq!(state.selected_slot, Some(create_test_slot()));
}

#[test]
fn test_select_slot_without_date_fails() {
    let state: WizardState = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::SelectSlot {
            slot: Some(create_test_slot()),
        },
    );

    assert_eq!(result, Err(CoreError::NoDateSelected));
}

#[test]
fn test_select_unavailable_slot_fails() {
    let state: WizardState = apply(
        &create_test_state(),
        Command::SelectDate {
            date: Some(create_test_date()),
        },
    )
    .unwrap()
    .new_state;

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::SelectSlot {
            slot: Some(create_unavailable_slot()),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::SlotUnavailable {
            slot_id: SlotId::new("slot-3"),
        })
    );
}

#[test]
fn test_clearing_slot_stays_on_time_step() {
    let state: WizardState = apply(&create_summary_state(), Command::EditSlot)
        .unwrap()
        .new_state;

    let result: TransitionResult = apply(&state, Command::SelectSlot { slot: None }).unwrap();

    assert_eq!(result.new_state.step, WizardStep::Time);
    assert!(result.new_state.selected_slot.is_none());
    assert_eq!(result.new_state.selected_date, Some(create_test_date()));
}

#[test]
fn test_select_slot_on_summary_step_fails() {
    let state: WizardState = create_summary_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::SelectSlot {
            slot: Some(create_test_slot()),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::InvalidStep {
            command: "SelectSlot",
            step: WizardStep::Summary,
        })
    );
}

#[test]
fn test_go_back_from_summary_keeps_slot() {
    let state: WizardState = create_summary_state();

    let result: TransitionResult = apply(&state, Command::GoBack).unwrap();

    assert_eq!(result.new_state.step, WizardStep::Time);
    assert_eq!(result.new_state.selected_slot, Some(create_test_slot()));
    assert!(result.effect.is_none());
}

#[test]
fn test_go_back_from_time_clears_slot() {
    let state: WizardState = apply(&create_summary_state(), Command::GoBack)
        .unwrap()
        .new_state;

    let result: TransitionResult = apply(&state, Command::GoBack).unwrap();

    assert_eq!(result.new_state.step, WizardStep::Date);
    assert!(result.new_state.selected_slot.is_none());
    assert_eq!(result.new_state.selected_date, Some(create_test_date()));
}

#[test]
fn test_go_back_from_date_navigates_back() {
    let state: WizardState = create_test_state();

    let result: TransitionResult = apply(&state, Command::GoBack).unwrap();

    assert_eq!(result.new_state, state);
    assert_eq!(result.effect, Some(Effect::NavigateBack));
}

#[test]
fn test_edit_slot_returns_to_time_step() {
    let state: WizardState = create_summary_state();

    let result: TransitionResult = apply(&state, Command::EditSlot).unwrap();

    assert_eq!(result.new_state.step, WizardStep::Time);
    assert_eq!(result.new_state.selected_slot, Some(create_test_slot()));
}

#[test]
fn test_edit_slot_outside_summary_fails() {
    let state: WizardState = create_test_state();

    let result: Result<TransitionResult, CoreError> = apply(&state, Command::EditSlot);

    assert!(matches!(result, Err(CoreError::InvalidStep { .. })));
}

#[test]
fn test_summary_includes_service_fee() {
    let state: WizardState = create_summary_state();

    let summary = state.summary().unwrap();

    assert_eq!(summary.date, create_test_date());
    assert_eq!(summary.price.base_price, 12000);
    assert_eq!(summary.price.service_fee, 600);
    assert_eq!(summary.price.total, 12600);
}

#[test]
fn test_summary_requires_selection() {
    assert!(create_test_state().summary().is_none());
}

#[test]
fn test_reset_returns_initial_state() {
    let state: WizardState = create_summary_state();

    let result: TransitionResult = apply(&state, Command::Reset).unwrap();

    assert_eq!(result.new_state, create_test_state());
}
