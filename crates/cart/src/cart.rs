//! The cart model and its atomic operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fieldsales_catalog::LineDraft;
use fieldsales_core::{DocEntry, RequestId};

/// One product line staged for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_code: String,
    pub item_name: String,
    pub bar_code: String,
    pub quantity: i64,
    /// Undiscounted base unit price (the customer's price list).
    pub price_list: Decimal,
    /// Effective unit price actually charged (post discount/override).
    pub unit_price: Decimal,
    pub tax_code: String,
}

impl From<LineDraft> for CartLine {
    fn from(draft: LineDraft) -> Self {
        Self {
            item_code: draft.item_code,
            item_name: draft.item_name,
            bar_code: draft.bar_code,
            quantity: draft.quantity,
            price_list: draft.price_list,
            unit_price: draft.unit_price,
            tax_code: draft.tax_code,
        }
    }
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The staged order: lines plus submission-mode metadata.
///
/// `request_id` is the draft's idempotency token. It is minted when the cart
/// first becomes non-empty in new-order mode, reused for the draft's whole
/// lifetime, and dropped when the cart empties again. Edit-mode carts never
/// carry one; the remote order is addressed by `doc_entry` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
    edit_mode: bool,
    doc_entry: Option<DocEntry>,
    request_id: Option<RequestId>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_code: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item_code == item_code)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn doc_entry(&self) -> Option<DocEntry> {
        self.doc_entry
    }

    pub fn request_id(&self) -> Option<RequestId> {
        self.request_id
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Append a line. No deduplication: the caller must check for an
    /// existing line with the same item code and route to
    /// [`update_quantity`](Self::update_quantity) instead.
    pub fn add_line(&mut self, line: CartLine) {
        if self.lines.is_empty() && !self.edit_mode && self.request_id.is_none() {
            self.request_id = Some(RequestId::generate());
        }
        self.lines.push(line);
    }

    /// Replace quantity and unit price on the matching line; no-op when the
    /// item code is not in the cart.
    pub fn update_quantity(&mut self, item_code: &str, quantity: i64, unit_price: Decimal) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_code == item_code) {
            line.quantity = quantity;
            line.unit_price = unit_price;
        }
    }

    /// Remove the matching line; no-op when absent. Removing the last line
    /// ends the draft, so the idempotency token is dropped with it.
    pub fn remove_line(&mut self, item_code: &str) {
        self.lines.retain(|l| l.item_code != item_code);
        if self.lines.is_empty() && !self.edit_mode {
            self.request_id = None;
        }
    }

    /// Empty the cart and reset all submission-mode metadata.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.edit_mode = false;
        self.doc_entry = None;
        self.request_id = None;
    }

    /// Bulk-replace the cart contents (entering edit mode against a fetched
    /// order). Any draft idempotency token is discarded.
    pub fn load_lines(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
        self.request_id = None;
    }

    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
    }

    pub fn set_doc_entry(&mut self, doc_entry: DocEntry) {
        self.doc_entry = Some(doc_entry);
    }

    /// Convenience for the edit flow: load a fetched order's lines and mark
    /// the cart as editing that document.
    pub fn begin_edit(&mut self, doc_entry: DocEntry, lines: Vec<CartLine>) {
        self.set_edit_mode(true);
        self.set_doc_entry(doc_entry);
        self.load_lines(lines);
    }
}
