// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, ConfirmationOutcome};
pub use error::CoreError;
pub use state::{
    BookingSummary, ConfirmationRequest, Effect, ModalState, ModalStatus, TransitionResult,
    WizardState, WizardStep,
};

/// Applies a sequence of commands, stopping at the first rejected one.
///
/// Effects produced along the way are returned in order.
///
/// # Errors
///
/// Returns the first error produced by [`apply`].
pub fn apply_all(
    state: &WizardState,
    commands: impl IntoIterator<Item = Command>,
) -> Result<(WizardState, Vec<Effect>), CoreError> {
    let mut current: WizardState = state.clone();
    let mut effects: Vec<Effect> = Vec::new();
    for command in commands {
        let result: TransitionResult = apply(&current, command)?;
        current = result.new_state;
        effects.extend(result.effect);
    }
    Ok((current, effects))
}
