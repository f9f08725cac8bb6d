//! Persisted cart store: load once at startup, save after every mutation.

use rust_decimal::Decimal;

use fieldsales_core::DocEntry;
use fieldsales_storage::SnapshotStore;

use crate::cart::{Cart, CartLine};

/// Owns the session's authoritative cart and keeps a snapshot behind the
/// persistence port. Snapshot failures are logged, never fatal: a cart that
/// cannot be persisted still works for the session.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: SnapshotStore<Cart>> CartStore<S> {
    /// Restore the persisted cart, or start empty when there is none (or the
    /// snapshot cannot be read).
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load persisted cart; starting empty");
                Cart::new()
            }
        };
        Self { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_line(&mut self, line: CartLine) {
        self.cart.add_line(line);
        self.persist();
    }

    pub fn update_quantity(&mut self, item_code: &str, quantity: i64, unit_price: Decimal) {
        self.cart.update_quantity(item_code, quantity, unit_price);
        self.persist();
    }

    pub fn remove_line(&mut self, item_code: &str) {
        self.cart.remove_line(item_code);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn load_lines(&mut self, lines: Vec<CartLine>) {
        self.cart.load_lines(lines);
        self.persist();
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.cart.set_edit_mode(edit_mode);
        self.persist();
    }

    pub fn set_doc_entry(&mut self, doc_entry: DocEntry) {
        self.cart.set_doc_entry(doc_entry);
        self.persist();
    }

    pub fn begin_edit(&mut self, doc_entry: DocEntry, lines: Vec<CartLine>) {
        self.cart.begin_edit(doc_entry, lines);
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.cart) {
            tracing::warn!(error = %err, "failed to persist cart snapshot");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsales_storage::InMemoryStore;

    fn line(item_code: &str, quantity: i64) -> CartLine {
        CartLine {
            item_code: item_code.into(),
            item_name: format!("Item {item_code}"),
            bar_code: item_code.into(),
            quantity,
            price_list: "100".parse().unwrap(),
            unit_price: "90".parse().unwrap(),
            tax_code: "ISV15".into(),
        }
    }

    #[test]
    fn mutations_are_persisted_and_survive_reopen() {
        let storage: InMemoryStore<Cart> = InMemoryStore::new();

        let mut store = CartStore::open(&storage);
        assert!(store.cart().is_empty());
        store.add_line(line("A", 5));
        assert!(storage.is_persisted());
        let token = store.cart().request_id().unwrap();
        drop(store);

        let reopened = CartStore::open(&storage);
        assert_eq!(reopened.cart().line_count(), 1);
        assert_eq!(reopened.cart().line("A").unwrap().quantity, 5);
        // The draft's idempotency token rides the snapshot too.
        assert_eq!(reopened.cart().request_id(), Some(token));
    }

    #[test]
    fn clear_persists_the_empty_cart() {
        let storage: InMemoryStore<Cart> = InMemoryStore::new();
        let mut store = CartStore::open(&storage);
        store.add_line(line("A", 5));
        store.clear();
        drop(store);

        let reopened = CartStore::open(&storage);
        assert!(reopened.cart().is_empty());
        assert!(reopened.cart().request_id().is_none());
    }
}
