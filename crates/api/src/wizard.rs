// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking wizard controller.
//!
//! The controller owns the wizard state, runs commands through the pure
//! state machine and carries out the effects it requests: calling the
//! booking backend and navigating.

use crate::confirmation::{BookingConfirmer, BookingRequest};
use crate::error::{GENERIC_FAILURE_MESSAGE, WizardError};
use crate::navigation::{BOOKINGS_PATH, Navigator};
use booki::{
    BookingSummary, Command, ConfirmationOutcome, ConfirmationRequest, Effect, ModalStatus,
    TransitionResult, WizardState, apply,
};
use booki_domain::{AvailabilityCalendar, BookingId, FacilityId, TimeSlot};
use std::time::Duration;
use time::Date;
use tokio::sync::{Mutex, MutexGuard};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

/// Controller settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardConfig {
    /// How long to wait for the modal to close before redirecting.
    pub redirect_delay: Duration,
    /// Where to go after a successful booking.
    pub bookings_path: String,
    /// Dates before this one cannot be selected. Unset, any date is accepted.
    pub today: Option<Date>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_millis(300),
            bookings_path: String::from(BOOKINGS_PATH),
            today: None,
        }
    }
}

#[derive(Debug)]
struct Session {
    state: WizardState,
    in_flight: Option<CancellationToken>,
}

impl Session {
    /// Settles a confirmation whose caller stopped waiting for it.
    ///
    /// The abandoned attempt is reported as failed so the user can retry.
    fn settle_abandoned(&mut self) {
        if !self
            .in_flight
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            return;
        }
        self.in_flight = None;

        let outcome: ConfirmationOutcome = ConfirmationOutcome::Failed {
            message: String::from(GENERIC_FAILURE_MESSAGE),
        };
        if let Ok(result) = apply(&self.state, Command::CompleteConfirmation { outcome }) {
            warn!(facility_id = %self.state.facility_id, "Abandoned confirmation marked as failed");
            self.state = result.new_state;
        }
    }
}

/// Drives the booking wizard for one facility.
///
/// All mutations go through one lock, which is never held while the booking
/// backend is being called.
#[derive(Debug)]
pub struct BookingWizard<C: BookingConfirmer, N: Navigator> {
    confirmer: C,
    navigator: N,
    config: WizardConfig,
    session: Mutex<Session>,
}

impl<C: BookingConfirmer, N: Navigator> BookingWizard<C, N> {
    /// Creates a wizard in its initial state.
    ///
    /// # Arguments
    ///
    /// * `facility_id` - The facility being booked
    /// * `confirmer` - The booking backend
    /// * `navigator` - Page navigation
    /// * `config` - Controller settings
    #[must_use]
    pub fn new(facility_id: FacilityId, confirmer: C, navigator: N, config: WizardConfig) -> Self {
        Self {
            confirmer,
            navigator,
            config,
            session: Mutex::new(Session {
                state: WizardState::new(facility_id),
                in_flight: None,
            }),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub async fn state(&self) -> WizardState {
        self.session().await.state.clone()
    }

    /// Returns the booking summary once a date and slot are selected.
    #[must_use]
    pub async fn summary(&self) -> Option<BookingSummary> {
        self.session().await.state.summary()
    }

    /// Returns the navigator.
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Selects a date, or clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is before [`WizardConfig::today`] or a
    /// confirmation is in flight.
    pub async fn select_date(&self, date: Option<Date>) -> Result<(), WizardError> {
        if let (Some(date), Some(today)) = (date, self.config.today)
            && !AvailabilityCalendar::is_selectable(date, today)
        {
            debug!(%date, %today, "Past date rejected");
            return Err(WizardError::DateNotSelectable { date });
        }
        self.run(Command::SelectDate { date }).await
    }

    /// Selects a slot, or clears it.
    ///
    /// # Errors
    ///
    /// Returns an error if no date is selected, the slot is unavailable, or a
    /// confirmation is in flight.
    pub async fn select_slot(&self, slot: Option<TimeSlot>) -> Result<(), WizardError> {
        self.run(Command::SelectSlot { slot }).await
    }

    /// Goes one step back, leaving the wizard from the first step.
    ///
    /// # Errors
    ///
    /// Returns an error if a confirmation is in flight.
    pub async fn go_back(&self) -> Result<(), WizardError> {
        self.run(Command::GoBack).await
    }

    /// Returns from the summary to the slot list.
    ///
    /// # Errors
    ///
    /// Returns an error if the wizard is not on the summary step.
    pub async fn edit_slot(&self) -> Result<(), WizardError> {
        self.run(Command::EditSlot).await
    }

    /// Confirms the selected booking.
    ///
    /// Backend failures are not errors here: they end up in the modal, and
    /// the final modal status is returned either way.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The selection is incomplete
    /// - A confirmation is already in flight
    /// - The user left the wizard before the backend answered
    ///
    /// Dropping the returned future before it completes abandons the
    /// attempt; the wizard then reports it as failed.
    pub async fn confirm(&self) -> Result<ModalStatus, WizardError> {
        let (request, token): (ConfirmationRequest, CancellationToken) = {
            let mut session = self.session().await;
            let result: TransitionResult = apply(&session.state, Command::BeginConfirmation)
                .inspect_err(|err| warn!(error = %err, "Confirmation rejected"))?;

            let Some(Effect::RequestConfirmation(request)) = result.effect else {
                return Err(WizardError::Internal {
                    message: String::from("confirmation started without a request"),
                });
            };

            let token: CancellationToken = CancellationToken::new();
            session.state = result.new_state;
            session.in_flight = Some(token.clone());
            (request, token)
        };
        let abandoned: DropGuard = token.clone().drop_guard();

        let request: BookingRequest = BookingRequest::from_confirmation(request);
        info!(
            facility_id = %request.facility_id,
            slot_id = %request.slot_id,
            idempotency_key = %request.idempotency_key,
            "Confirming booking"
        );

        let result = tokio::select! {
            () = token.cancelled() => {
                info!("Booking confirmation cancelled");
                return Err(WizardError::Cancelled);
            }
            result = self.confirmer.confirm(request) => result,
        };

        let outcome: ConfirmationOutcome = match result {
            Ok(booking_id) => {
                info!(booking_id = %booking_id, "Booking confirmed");
                ConfirmationOutcome::Confirmed(booking_id)
            }
            Err(err) => {
                warn!(error = %err, "Booking failed");
                ConfirmationOutcome::Failed {
                    message: err.user_message().to_string(),
                }
            }
        };

        let mut session = self.session.lock().await;
        // The user may have left while the backend was answering
        if token.is_cancelled() {
            return Err(WizardError::Cancelled);
        }
        session.in_flight = None;
        abandoned.disarm();
        let result: TransitionResult =
            apply(&session.state, Command::CompleteConfirmation { outcome })?;
        session.state = result.new_state;
        Ok(session.state.modal.status.clone())
    }

    /// Closes a failed confirmation and goes back to the slot list.
    ///
    /// # Errors
    ///
    /// Returns an error if the modal is not showing a failure.
    pub async fn retry(&self) -> Result<(), WizardError> {
        self.run(Command::Retry).await
    }

    /// Closes the modal, redirecting to the bookings list after a success.
    ///
    /// The redirect waits for [`WizardConfig::redirect_delay`].
    ///
    /// # Errors
    ///
    /// Returns an error if the modal is closed or a confirmation is in flight.
    pub async fn dismiss_modal(&self) -> Result<(), WizardError> {
        self.run(Command::DismissModal).await
    }

    /// Closes a successful confirmation and opens the bookings list.
    ///
    /// # Errors
    ///
    /// Returns an error if the modal is not showing a success.
    pub async fn view_bookings(&self) -> Result<(), WizardError> {
        self.run(Command::ViewBookings).await
    }

    /// Leaves the wizard, cancelling any confirmation in flight.
    pub async fn leave(&self) {
        let mut session = self.session.lock().await;
        if let Some(token) = session.in_flight.take() {
            token.cancel();
        }
        session.state = WizardState::new(session.state.facility_id.clone());
        debug!(facility_id = %session.state.facility_id, "Wizard reset");
    }

    /// Returns the booking id shown in the modal, if any.
    #[must_use]
    pub async fn booking_id(&self) -> Option<BookingId> {
        self.session().await.state.modal.booking_id().cloned()
    }

    async fn session(&self) -> MutexGuard<'_, Session> {
        let mut session = self.session.lock().await;
        session.settle_abandoned();
        session
    }

    async fn run(&self, command: Command) -> Result<(), WizardError> {
        let command_name: &'static str = command.name();
        let effect: Option<Effect> = {
            let mut session = self.session().await;
            let result: TransitionResult =
                apply(&session.state, command).inspect_err(|err| {
                    debug!(command = command_name, error = %err, "Command rejected");
                })?;
            session.state = result.new_state;
            result.effect
        };

        if let Some(effect) = effect {
            self.perform(effect).await;
        }
        Ok(())
    }

    async fn perform(&self, effect: Effect) {
        match effect {
            Effect::NavigateBack => self.navigator.back(),
            Effect::OpenBookings { delayed } => {
                if delayed {
                    tokio::time::sleep(self.config.redirect_delay).await;
                }
                info!(path = %self.config.bookings_path, "Opening bookings");
                self.navigator.push(&self.config.bookings_path);
                self.leave().await;
            }
            Effect::RequestConfirmation(request) => {
                warn!(slot_id = %request.slot_id, "Ignoring confirmation outside confirm");
            }
        }
    }
}
