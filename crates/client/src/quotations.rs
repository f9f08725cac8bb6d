//! Quotation (order) endpoints: open-order listing, detail for editing, and
//! create/update submission.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use fieldsales_cart::CartLine;
use fieldsales_checkout::OrderPayload;
use fieldsales_core::{DocEntry, DocNum, Paginated};

use crate::error::ApiError;
use crate::http::ApiClient;

/// One row of the open-orders list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationSummary {
    #[serde(alias = "DocEntry")]
    pub doc_entry: DocEntry,
    pub doc_num: DocNum,
    pub card_code: String,
    pub card_name: String,
    pub doc_date: NaiveDate,
    pub doc_total: Decimal,
    pub vat_sum: Decimal,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_code: String,
    #[serde(default)]
    pub item_description: String,
    #[serde(default)]
    pub bar_code: Option<String>,
    pub quantity: i64,
    /// Base (undiscounted) unit price from the customer's price list.
    #[serde(default)]
    pub price_list: Decimal,
    /// Effective unit price charged on the line.
    #[serde(rename = "priceAfterVAT")]
    pub price_after_vat: Decimal,
    #[serde(default)]
    pub tax_code: String,
}

/// A full order as fetched for editing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(alias = "DocEntry")]
    pub doc_entry: DocEntry,
    pub card_code: String,
    pub card_name: String,
    #[serde(default)]
    pub comments: Option<String>,
    pub vat_sum: Decimal,
    pub doc_total: Decimal,
    pub lines: Vec<OrderLine>,
}

impl OrderDetail {
    /// Pre-tax total; the API only reports the tax-inclusive `docTotal`.
    pub fn subtotal(&self) -> Decimal {
        self.doc_total - self.vat_sum
    }

    /// Lines in cart form, ready for `CartStore::begin_edit`.
    pub fn to_cart_lines(&self) -> Vec<CartLine> {
        self.lines
            .iter()
            .map(|line| CartLine {
                item_code: line.item_code.clone(),
                item_name: line.item_description.clone(),
                bar_code: line.bar_code.clone().unwrap_or_default(),
                quantity: line.quantity,
                price_list: line.price_list,
                unit_price: line.price_after_vat,
                tax_code: line.tax_code.clone(),
            })
            .collect()
    }
}

/// Submission acknowledgement. The backend is inconsistent about casing
/// here, hence the alias.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubmitResponse {
    #[serde(alias = "DocEntry")]
    pub doc_entry: DocEntry,
}

impl ApiClient {
    /// Open orders for the signed-in sales employee, one page at a time.
    pub async fn open_orders(&self, page: u32) -> Result<Paginated<QuotationSummary>, ApiError> {
        let slp = self.session().sales_person_code();
        self.get_json(
            &format!("/Quotations/open/{slp}"),
            &[
                ("page", page.to_string()),
                ("pageSize", self.config().page_size.to_string()),
            ],
        )
        .await
    }

    pub async fn order_detail(&self, doc_entry: DocEntry) -> Result<OrderDetail, ApiError> {
        self.get_json(&format!("/Quotations/{doc_entry}"), &[]).await
    }

    pub(crate) async fn create_order(&self, payload: &OrderPayload) -> Result<DocEntry, ApiError> {
        let resp: SubmitResponse = self
            .post_json(
                "/Quotations/Order",
                payload,
                Some(self.config().submit_timeout),
            )
            .await?;
        Ok(resp.doc_entry)
    }

    pub(crate) async fn update_order(
        &self,
        doc_entry: DocEntry,
        payload: &OrderPayload,
    ) -> Result<DocEntry, ApiError> {
        let resp: SubmitResponse = self
            .post_json(
                &format!("/Quotations/{doc_entry}"),
                payload,
                Some(self.config().submit_timeout),
            )
            .await?;
        Ok(resp.doc_entry)
    }
}
