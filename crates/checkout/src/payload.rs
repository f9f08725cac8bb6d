//! The order submission payload, shaped exactly as the ERP expects it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fieldsales_cart::{Cart, CartLine};
use fieldsales_core::{DocEntry, RequestId};
use fieldsales_customers::{Customer, CustomerAddress};

/// One payload line. `priceList` carries the undiscounted base price,
/// `priceAfterVAT` the effective unit price actually charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayloadLine {
    pub item_code: String,
    pub bar_code: String,
    pub quantity: i64,
    pub price_list: Decimal,
    #[serde(rename = "priceAfterVAT")]
    pub price_after_vat: Decimal,
    pub tax_code: String,
}

impl From<&CartLine> for OrderPayloadLine {
    fn from(line: &CartLine) -> Self {
        Self {
            item_code: line.item_code.clone(),
            // The ERP rejects empty barcodes; "N/D" is its no-data marker.
            bar_code: if line.bar_code.is_empty() {
                "N/D".to_string()
            } else {
                line.bar_code.clone()
            },
            quantity: line.quantity,
            price_list: line.price_list,
            price_after_vat: line.unit_price,
            tax_code: line.tax_code.clone(),
        }
    }
}

/// The only persisted/transmitted artifact of a checkout: the body of the
/// create/update call. `requestId` is present for new orders only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    pub card_code: String,
    pub pay_to_code: String,
    pub comments: String,
    pub lines: Vec<OrderPayloadLine>,
}

/// A prepared submission: create a new order, or update an existing one
/// addressed by its document id (no idempotency token in that case).
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionRequest {
    Create { payload: OrderPayload },
    Update { doc_entry: DocEntry, payload: OrderPayload },
}

impl SubmissionRequest {
    pub fn payload(&self) -> &OrderPayload {
        match self {
            SubmissionRequest::Create { payload } => payload,
            SubmissionRequest::Update { payload, .. } => payload,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, SubmissionRequest::Update { .. })
    }
}

pub(crate) fn build_submission(
    cart: &Cart,
    customer: &Customer,
    address: &CustomerAddress,
    comments: &str,
    doc_entry_for_edit: Option<DocEntry>,
) -> SubmissionRequest {
    let lines = cart.lines().iter().map(OrderPayloadLine::from).collect();
    let payload = OrderPayload {
        request_id: if doc_entry_for_edit.is_some() {
            None
        } else {
            cart.request_id()
        },
        card_code: customer.card_code.clone(),
        pay_to_code: address.address_name.clone(),
        comments: comments.to_string(),
        lines,
    };

    match doc_entry_for_edit {
        Some(doc_entry) => SubmissionRequest::Update { doc_entry, payload },
        None => SubmissionRequest::Create { payload },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(bar_code: &str) -> CartLine {
        CartLine {
            item_code: "100234".into(),
            item_name: "Aceite 1L".into(),
            bar_code: bar_code.into(),
            quantity: 5,
            price_list: "100".parse().unwrap(),
            unit_price: "90".parse().unwrap(),
            tax_code: "ISV15".into(),
        }
    }

    #[test]
    fn serializes_with_the_erp_field_names() {
        let payload = OrderPayload {
            request_id: None,
            card_code: "C0205".into(),
            pay_to_code: "ENTREGA 1".into(),
            comments: String::new(),
            lines: vec![(&line("7421000000015")).into()],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("requestId").is_none()); // omitted, not null
        assert_eq!(json["cardCode"], "C0205");
        assert_eq!(json["payToCode"], "ENTREGA 1");
        let first = &json["lines"][0];
        assert_eq!(first["priceAfterVAT"], 90.0);
        assert_eq!(first["priceList"], 100.0);
        assert_eq!(first["itemCode"], "100234");
    }

    #[test]
    fn empty_bar_code_becomes_the_no_data_marker() {
        let payload_line = OrderPayloadLine::from(&line(""));
        assert_eq!(payload_line.bar_code, "N/D");
    }
}
