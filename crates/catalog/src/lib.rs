//! Product catalog domain: wire types and the per-product pricing engine.
//!
//! Everything here is pure and deterministic (no IO, no HTTP). The editor in
//! [`editor`] models one product-detail editing session: tier-resolved
//! pricing, manual override with a validation floor, and stock-constrained
//! quantities.

pub mod editor;
pub mod pricing;
pub mod product;

pub use editor::{LineDraft, LineEditor, LineError, PriceSource};
pub use pricing::{
    clamp_quantity, minimum_allowed_price, parse_quantity, resolve_unit_price,
    sanitize_price_input, tier_for_quantity, validate_manual_price,
};
pub use product::{Category, GroupCode, Product, Tier, WarehouseStock};
