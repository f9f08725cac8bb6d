//! Tier-resolved pricing and input coercion rules.
//!
//! Pure functions; the stateful editing session lives in [`crate::editor`].

use rust_decimal::Decimal;

use crate::product::Tier;

/// The best-matching tier for a quantity: among tiers whose threshold is at
/// or below `quantity`, the one with the highest threshold. `None` when no
/// tier qualifies. Duplicate thresholds resolve to the last one listed.
pub fn tier_for_quantity(tiers: &[Tier], quantity: i64) -> Option<&Tier> {
    tiers
        .iter()
        .filter(|t| t.qty <= quantity)
        .max_by_key(|t| t.qty)
}

/// Effective unit price for a quantity: the qualifying tier's price when
/// tier discounts are enabled and one qualifies, else the base price.
pub fn resolve_unit_price(
    base_price: Decimal,
    tiers: &[Tier],
    quantity: i64,
    tiers_enabled: bool,
) -> Decimal {
    if !tiers_enabled {
        return base_price;
    }
    tier_for_quantity(tiers, quantity)
        .map(|t| t.price)
        .unwrap_or(base_price)
}

/// The floor a manually entered price is validated against: the
/// tier-resolved price when discounts are enabled and a tier qualifies,
/// otherwise the base price.
pub fn minimum_allowed_price(
    base_price: Decimal,
    tiers: &[Tier],
    quantity: i64,
    tiers_enabled: bool,
) -> Decimal {
    resolve_unit_price(base_price, tiers, quantity, tiers_enabled)
}

/// A manual price is valid only at or above the floor.
pub fn validate_manual_price(entered: Decimal, minimum_allowed: Decimal) -> bool {
    entered >= minimum_allowed
}

/// Clamp a requested quantity to `[0, in_stock]`.
pub fn clamp_quantity(raw: i64, in_stock: i64) -> i64 {
    raw.clamp(0, in_stock.max(0))
}

/// Coerce free-typed quantity input: digits only, anything unparseable is 0,
/// then clamped to available stock.
pub fn parse_quantity(text: &str, in_stock: i64) -> i64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let raw = digits.parse::<i64>().unwrap_or(0);
    clamp_quantity(raw, in_stock)
}

/// Coerce free-typed price input: keep digits and at most one decimal point.
pub fn sanitize_price_input(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut parts = cleaned.split('.');
    let integer = parts.next().unwrap_or("");
    match parts.next() {
        Some(fraction) => format!("{integer}.{fraction}"),
        None => integer.to_string(),
    }
}
