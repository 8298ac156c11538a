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

mod catalog;
mod confirmation;
mod error;
mod navigation;
mod wizard;

#[cfg(test)]
mod tests;

pub use catalog::{FacilitySource, StaticCatalog};
pub use confirmation::{
    BookingConfirmer, BookingList, BookingRequest, InMemoryBookingService, new_idempotency_key,
};
pub use error::{
    BookingError, GENERIC_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE, SLOT_UNAVAILABLE_MESSAGE,
    WizardError,
};
pub use navigation::{BOOKINGS_PATH, Navigator};
pub use wizard::{BookingWizard, WizardConfig};
