// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingConfirmer, BookingError, BookingRequest, BookingWizard, InMemoryBookingService,
    Navigator, WizardConfig,
};
use booki_domain::{BookingId, FacilityId, SlotId, TimeSlot};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use time::Date;
use time::macros::{date, time};

/// A navigator that records every call.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.events.lock().unwrap().push(format!("push:{path}"));
    }

    fn back(&self) {
        self.events.lock().unwrap().push(String::from("back"));
    }
}

/// What a [`FakeConfirmer`] answers.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Succeed,
    Fail(BookingError),
    Hang,
}

/// A booking backend that counts calls and answers with a fixed outcome.
#[derive(Debug, Clone)]
pub struct FakeConfirmer {
    outcome: FakeOutcome,
    calls: Arc<AtomicUsize>,
    keys: Arc<Mutex<Vec<String>>>,
}

impl FakeConfirmer {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Idempotency keys received, in call order.
    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }
}

impl BookingConfirmer for FakeConfirmer {
    async fn confirm(&self, request: BookingRequest) -> Result<BookingId, BookingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keys
            .lock()
            .unwrap()
            .push(request.idempotency_key.clone());
        tokio::task::yield_now().await;
        match &self.outcome {
            FakeOutcome::Succeed => Ok(BookingId::new(&format!("BK-{}", request.slot_id))),
            FakeOutcome::Fail(err) => Err(err.clone()),
            FakeOutcome::Hang => std::future::pending().await,
        }
    }
}

pub const fn create_test_date() -> Date {
    date!(2024 - 01 - 20)
}

pub fn create_test_slot() -> TimeSlot {
    TimeSlot::new("slot-1", time!(9:00), time!(10:00), 12000)
}

pub fn create_test_request(slot_id: &str, idempotency_key: &str) -> BookingRequest {
    BookingRequest {
        facility_id: FacilityId::new("1"),
        date: create_test_date(),
        slot_id: SlotId::new(slot_id),
        idempotency_key: String::from(idempotency_key),
    }
}

pub fn create_test_wizard<C: BookingConfirmer>(
    confirmer: C,
) -> BookingWizard<C, RecordingNavigator> {
    create_configured_wizard(confirmer, WizardConfig::default())
}

pub fn create_configured_wizard<C: BookingConfirmer>(
    confirmer: C,
    config: WizardConfig,
) -> BookingWizard<C, RecordingNavigator> {
    BookingWizard::new(
        FacilityId::new("1"),
        confirmer,
        RecordingNavigator::default(),
        config,
    )
}

pub fn create_service_wizard() -> BookingWizard<InMemoryBookingService, RecordingNavigator> {
    create_test_wizard(InMemoryBookingService::default())
}

/// Drives a wizard to the summary step with the test date and slot.
pub async fn select_test_booking<C: BookingConfirmer>(
    wizard: &BookingWizard<C, RecordingNavigator>,
) {
    wizard.select_date(Some(create_test_date())).await.unwrap();
    wizard.select_slot(Some(create_test_slot())).await.unwrap();
}
