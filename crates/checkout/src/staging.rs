//! Adding a product to the cart from the catalog.
//!
//! The cart itself never deduplicates; this is the layer that consolidates a
//! repeat add into the existing line and enforces the stock ceiling across
//! the combined quantity.

use thiserror::Error;

use fieldsales_cart::{Cart, CartLine, CartStore};
use fieldsales_storage::SnapshotStore;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// The requested quantity (alone or combined with the line already in
    /// the cart) exceeds what is in stock.
    #[error("only {available} units in stock")]
    InsufficientStock { available: i64 },
}

/// How the line landed in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedLine {
    Added,
    /// Merged into an existing line; `quantity` is the new combined total.
    Consolidated { quantity: i64 },
}

/// Stage a confirmed line into the cart. A line for the same item code is
/// consolidated by summing quantities and taking the new line's unit price
/// (it reflects the discount tier for the combined quantity as recomputed by
/// the editor).
pub fn stage_line<S: SnapshotStore<Cart>>(
    store: &mut CartStore<S>,
    line: CartLine,
    in_stock: i64,
) -> Result<StagedLine, StageError> {
    let existing = store.cart().line(&line.item_code).map(|l| l.quantity);
    match existing {
        Some(current) => {
            let combined = current + line.quantity;
            if combined > in_stock {
                return Err(StageError::InsufficientStock { available: in_stock });
            }
            store.update_quantity(&line.item_code, combined, line.unit_price);
            tracing::debug!(item = %line.item_code, quantity = combined, "cart line consolidated");
            Ok(StagedLine::Consolidated { quantity: combined })
        }
        None => {
            if line.quantity > in_stock {
                return Err(StageError::InsufficientStock { available: in_stock });
            }
            tracing::debug!(item = %line.item_code, quantity = line.quantity, "cart line added");
            store.add_line(line);
            Ok(StagedLine::Added)
        }
    }
}
