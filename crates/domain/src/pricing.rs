// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking price breakdown.
//!
//! All amounts are whole CFA francs. The service fee is 5 % of the base
//! price, rounded half-up.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Service fee in percent of the base price.
pub const SERVICE_FEE_PERCENT: u64 = 5;

/// Currency label appended to formatted amounts.
pub const CURRENCY: &str = "CFA";

/// The amounts shown on the booking summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The slot price.
    pub base_price: u32,
    /// The service fee.
    pub service_fee: u32,
    /// What the user pays.
    pub total: u32,
}

/// Computes the price breakdown for a slot price.
///
/// # Errors
///
/// Returns an error if the total does not fit in a `u32`.
pub fn calculate_price_breakdown(base_price: u32) -> Result<PriceBreakdown, DomainError> {
    let service_fee = calculate_service_fee(base_price);
    let total = base_price
        .checked_add(service_fee)
        .ok_or_else(|| DomainError::AmountOverflow {
            operation: format!("adding service fee {service_fee} to {base_price}"),
        })?;

    Ok(PriceBreakdown {
        base_price,
        service_fee,
        total,
    })
}

/// Computes the service fee for a base price.
#[must_use]
pub fn calculate_service_fee(base_price: u32) -> u32 {
    let fee = (u64::from(base_price) * SERVICE_FEE_PERCENT + 50) / 100;
    // 5 % of a u32 always fits in a u32
    u32::try_from(fee).unwrap_or(u32::MAX)
}

/// Formats an amount with space-grouped thousands, e.g. `12 600 CFA`.
#[must_use]
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    format!("{grouped} {CURRENCY}")
}
