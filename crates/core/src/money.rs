//! Money rounding.
//!
//! Prices flow through the client as [`rust_decimal::Decimal`]; the ERP's
//! price lists carry two decimal places. Rounding happens on commit/blur,
//! never on every keystroke.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a price to 2 decimal places, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
