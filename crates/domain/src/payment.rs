// Copyright (C) 2026 Booki contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment detail validation.
//!
//! These checks run before details are handed to a payment provider. Talking
//! to the provider is not handled here.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// How a booking is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Orange Money mobile wallet.
    OrangeMoney,
    /// Wave mobile wallet.
    Wave,
    /// Debit or credit card.
    CreditCard,
    /// Paid on site.
    Cash,
}

impl PaymentMethod {
    /// Returns the snake case wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OrangeMoney => "orange_money",
            Self::Wave => "wave",
            Self::CreditCard => "credit_card",
            Self::Cash => "cash",
        }
    }

    /// Returns whether this method pays from a phone-bound wallet.
    #[must_use]
    pub const fn is_mobile_money(&self) -> bool {
        matches!(self, Self::OrangeMoney | Self::Wave)
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orange_money" => Ok(Self::OrangeMoney),
            "wave" => Ok(Self::Wave),
            "credit_card" | "card" => Ok(Self::CreditCard),
            "cash" => Ok(Self::Cash),
            _ => Err(DomainError::InvalidPaymentMethod(s.to_string())),
        }
    }
}

/// Card details as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// The card number, possibly with spaces.
    pub number: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// The verification code.
    pub cvc: String,
}

/// Everything needed to validate a payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    /// The chosen method.
    pub method: PaymentMethod,
    /// Amount in CFA francs.
    pub amount: u32,
    /// Wallet phone number for mobile money.
    pub phone_number: Option<String>,
    /// Card details for card payments.
    pub card: Option<CardDetails>,
}

/// Validates payment details for the chosen method.
///
/// # Arguments
///
/// * `details` - The payment details to check
/// * `today` - The current date, used for card expiry
///
/// # Errors
///
/// Returns an error if:
/// - A mobile money payment has no phone number
/// - A card payment has no card details, or any card field is invalid
pub fn validate_payment_details(details: &PaymentDetails, today: Date) -> Result<(), DomainError> {
    match details.method {
        PaymentMethod::OrangeMoney | PaymentMethod::Wave => {
            let has_phone = details
                .phone_number
                .as_deref()
                .is_some_and(|phone| !phone.trim().is_empty());
            if !has_phone {
                return Err(DomainError::MissingPhoneNumber {
                    method: details.method.as_str(),
                });
            }
            Ok(())
        }
        PaymentMethod::CreditCard => {
            let card = details.card.as_ref().ok_or(DomainError::MissingCardDetails)?;
            if !validate_card_number(&card.number) {
                return Err(DomainError::InvalidCardNumber);
            }
            if !validate_expiry(&card.expiry, today) {
                return Err(DomainError::InvalidCardExpiry(card.expiry.clone()));
            }
            if !validate_cvc(&card.cvc) {
                return Err(DomainError::InvalidCvc);
            }
            Ok(())
        }
        PaymentMethod::Cash => Ok(()),
    }
}

/// Checks a card number with the Luhn algorithm.
///
/// Non-digit characters are ignored. Numbers with fewer than 12 or more than 19
/// digits are rejected.
#[must_use]
pub fn validate_card_number(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    if !(12..=19).contains(&digits.len()) {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &digit)| {
            if index % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// Checks an `MM/YY` expiry against the current month.
#[must_use]
pub fn validate_expiry(expiry: &str, today: Date) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let (Ok(month), Ok(year)) = (month.trim().parse::<u8>(), year.trim().parse::<i32>()) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    let current_year = today.year() % 100;
    let current_month = u8::from(today.month());
    year > current_year || (year == current_year && month >= current_month)
}

/// Checks that a verification code is 3 or 4 digits.
#[must_use]
pub fn validate_cvc(cvc: &str) -> bool {
    (3..=4).contains(&cvc.len()) && cvc.chars().all(|c| c.is_ascii_digit())
}
