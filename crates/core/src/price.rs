//! Ticket price value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A strictly positive, finite amount in raw monetary units.
///
/// No currency is attached; the amount is whatever unit the ticket office
/// charges in.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Validate and wrap an amount.
    ///
    /// Zero, negative, NaN and infinite amounts are rejected with
    /// [`DomainError::InvalidArgument`].
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "price must be greater than 0 (got {amount})"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Renders the amount with at least one decimal digit (`15.0`, `20.5`).
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", format_amount(self.0))
    }
}

/// Report rendering for raw amounts, shared by price lines and totals.
///
/// Amounts in `[1e-3, 1e7)` (and zero) print as plain decimals with at least
/// one fractional digit (`15.0`, `20.5`). Outside that range the reports switch
/// to scientific notation with a `.0`-padded mantissa (`1.0E7`, `2.5E-4`).
pub fn format_amount(amount: f64) -> String {
    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) || !amount.is_finite() {
        return format!("{amount:?}");
    }

    let scientific = format!("{amount:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
