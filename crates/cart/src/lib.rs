//! Cart domain: the staged order lines and the persisted store that owns
//! them for the session.
//!
//! The cart is the single source of truth for what will be submitted. It is
//! deliberately dumb: `add_line` does not deduplicate — routing repeated
//! item codes through `update_quantity` is the checkout flow's job.

pub mod cart;
pub mod store;

pub use cart::{Cart, CartLine};
pub use store::CartStore;
