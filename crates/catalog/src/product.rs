//! Catalog wire types, shaped after the ERP's camelCase JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A volume-discount rule: unit price at or above a quantity threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub qty: i64,
    pub price: Decimal,
    #[serde(default)]
    pub percent: Option<Decimal>,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Per-warehouse availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStock {
    pub warehouse_name: String,
    pub in_stock: i64,
}

/// Category/group code. The API is inconsistent about whether this is a
/// number or a string, so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupCode {
    Number(i64),
    Text(String),
}

impl core::fmt::Display for GroupCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GroupCode::Number(n) => write!(f, "{n}"),
            GroupCode::Text(s) => f.write_str(s),
        }
    }
}

/// A catalog category tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub code: String,
    pub name: String,
}

/// A catalog product as returned by the search/discount endpoints.
///
/// `price` is the price-list (base) price for the selected customer's price
/// list; `tiers` carry the volume discounts. Most fields are optional or
/// defaulted because the ERP omits them freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub item_code: String,
    pub item_name: String,
    #[serde(default)]
    pub group_code: Option<GroupCode>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub in_stock: i64,
    #[serde(default)]
    pub committed: i64,
    #[serde(default)]
    pub ordered: i64,
    pub price: Decimal,
    #[serde(default)]
    pub has_discount: bool,
    #[serde(default)]
    pub tax_type: Option<String>,
    #[serde(default)]
    pub tax_code: String,
    #[serde(default)]
    pub bar_code: Option<String>,
    #[serde(default)]
    pub sales_unit: Option<String>,
    #[serde(default)]
    pub sales_items_per_unit: Option<Decimal>,
    #[serde(default)]
    pub tiers: Vec<Tier>,
    #[serde(default)]
    pub ws: Vec<WarehouseStock>,
}

impl Product {
    /// Barcode to put on an order line; the ERP wants *something*, so the
    /// item code stands in when no barcode is on file.
    pub fn bar_code_or_item_code(&self) -> String {
        match &self.bar_code {
            Some(code) if !code.is_empty() => code.clone(),
            _ => self.item_code.clone(),
        }
    }
}
