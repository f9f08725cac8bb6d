//! Received-payment (incoming payment) endpoints, read-only.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use fieldsales_core::{DocEntry, DocNum, Paginated};

use crate::error::ApiError;
use crate::http::ApiClient;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    #[serde(alias = "DocEntry")]
    pub doc_entry: DocEntry,
    pub doc_num: DocNum,
    pub card_code: String,
    pub card_name: String,
    pub doc_date: NaiveDate,
    pub doc_total: Decimal,
}

/// An invoice (partially) settled by a payment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidInvoice {
    pub doc_entry: DocEntry,
    pub doc_num: DocNum,
    pub applied_amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetail {
    #[serde(alias = "DocEntry")]
    pub doc_entry: DocEntry,
    pub card_code: String,
    pub card_name: String,
    pub doc_date: NaiveDate,
    pub doc_total: Decimal,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub invoices: Vec<PaidInvoice>,
}

impl ApiClient {
    /// Payments received by the session's sales employee.
    pub async fn received_payments(&self, page: u32) -> Result<Paginated<PaymentSummary>, ApiError> {
        let slp = self.session().sales_person_code();
        self.get_json(
            &format!("/Payments/received/{slp}"),
            &[
                ("page", page.to_string()),
                ("pageSize", self.config().page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn payment_detail(&self, doc_entry: DocEntry) -> Result<PaymentDetail, ApiError> {
        self.get_json(&format!("/Payments/{doc_entry}"), &[]).await
    }
}
