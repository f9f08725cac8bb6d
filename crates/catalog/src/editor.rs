//! One product-detail editing session: quantity, tier toggle, manual price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fieldsales_core::round_money;

use crate::pricing;
use crate::product::Product;

/// Where the current unit price came from.
///
/// A manual edit suspends automatic recomputation; toggling tier discounts
/// hands control back to `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    Auto,
    Manual,
}

/// Why a line cannot be confirmed into the cart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LineError {
    #[error("product is out of stock")]
    OutOfStock,
    #[error("quantity must be greater than zero")]
    InvalidQuantity,
    #[error("price must be greater than zero")]
    InvalidPrice,
    #[error("price is below the minimum allowed ({minimum})")]
    BelowMinimum { minimum: Decimal },
}

/// A confirmed, validated line ready to be staged into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDraft {
    pub item_code: String,
    pub item_name: String,
    pub bar_code: String,
    pub quantity: i64,
    /// Undiscounted base unit price (the customer's price list).
    pub price_list: Decimal,
    /// Effective unit price actually charged.
    pub unit_price: Decimal,
    pub tax_code: String,
}

/// Editing state for one product while its detail dialog is open.
///
/// The unit price recomputes from the tier schedule whenever the quantity or
/// the tier toggle changes, unless the operator has typed a price by hand;
/// that manual value sticks until tier discounts are toggled again. Invalid
/// manual prices are flagged, never auto-corrected.
#[derive(Debug, Clone)]
pub struct LineEditor {
    product: Product,
    quantity: i64,
    tiers_enabled: bool,
    source: PriceSource,
    price_text: String,
    unit_price: Decimal,
    price_valid: bool,
}

impl LineEditor {
    pub fn new(product: Product) -> Self {
        let mut editor = Self {
            product,
            quantity: 1,
            tiers_enabled: true,
            source: PriceSource::Auto,
            price_text: String::new(),
            unit_price: Decimal::ZERO,
            price_valid: true,
        };
        editor.recompute();
        editor
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// The price exactly as it should appear in the input field.
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    pub fn price_valid(&self) -> bool {
        self.price_valid
    }

    pub fn tiers_enabled(&self) -> bool {
        self.tiers_enabled
    }

    pub fn source(&self) -> PriceSource {
        self.source
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// The floor manual prices are validated against.
    pub fn minimum_allowed(&self) -> Decimal {
        pricing::minimum_allowed_price(
            self.product.price,
            &self.product.tiers,
            self.quantity,
            self.tiers_enabled,
        )
    }

    /// Set the quantity directly (clamped to `[0, in_stock]`).
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = pricing::clamp_quantity(quantity, self.product.in_stock);
        self.recompute();
    }

    /// Free-typed quantity input; non-numeric text coerces to 0.
    pub fn type_quantity(&mut self, text: &str) {
        self.quantity = pricing::parse_quantity(text, self.product.in_stock);
        self.recompute();
    }

    /// The +/- buttons: never below 1, never above available stock.
    pub fn step_quantity(&mut self, delta: i64) {
        self.quantity = if delta >= 0 {
            (self.quantity + delta).min(self.product.in_stock.max(0))
        } else {
            (self.quantity + delta).max(1)
        };
        self.recompute();
    }

    /// Free-typed price input. Marks the price as manually edited, which
    /// suspends automatic recomputation. Not rounded or validated yet; that
    /// happens on [`commit_price`](Self::commit_price).
    pub fn type_price(&mut self, text: &str) {
        self.source = PriceSource::Manual;
        self.price_text = pricing::sanitize_price_input(text);
        self.unit_price = self.price_text.parse().unwrap_or(Decimal::ZERO);
    }

    /// Commit the typed price (the input's blur): unparseable text falls
    /// back to the base price, the value is rounded to 2 decimal places and
    /// checked against the floor.
    pub fn commit_price(&mut self) {
        let value = self
            .price_text
            .parse::<Decimal>()
            .unwrap_or(self.product.price);
        let value = round_money(value);
        self.unit_price = value;
        self.price_text = format_money(value);
        self.price_valid = pricing::validate_manual_price(value, self.minimum_allowed());
    }

    /// Toggle tier discounts. This also ends any manual override: pricing
    /// returns to automatic and recomputes immediately.
    pub fn toggle_tier_discounts(&mut self) {
        self.tiers_enabled = !self.tiers_enabled;
        self.source = PriceSource::Auto;
        self.recompute();
    }

    fn recompute(&mut self) {
        if self.source == PriceSource::Manual {
            return;
        }
        let price = pricing::resolve_unit_price(
            self.product.price,
            &self.product.tiers,
            self.quantity,
            self.tiers_enabled,
        );
        self.unit_price = price;
        self.price_text = format_money(price);
        self.price_valid = true;
    }

    /// Validate the session and produce a line for the cart.
    pub fn confirm(&self) -> Result<LineDraft, LineError> {
        if self.product.in_stock <= 0 {
            return Err(LineError::OutOfStock);
        }
        if self.quantity <= 0 {
            return Err(LineError::InvalidQuantity);
        }
        if !self.price_valid {
            return Err(LineError::BelowMinimum {
                minimum: self.minimum_allowed(),
            });
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(LineError::InvalidPrice);
        }

        Ok(LineDraft {
            item_code: self.product.item_code.clone(),
            item_name: self.product.item_name.clone(),
            bar_code: self.product.bar_code_or_item_code(),
            quantity: self.quantity,
            price_list: self.product.price,
            unit_price: self.unit_price,
            tax_code: self.product.tax_code.clone(),
        })
    }
}

fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}
