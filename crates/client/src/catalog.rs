//! Product catalog endpoints.
//!
//! The backend is inconsistent about list envelopes: depending on the route
//! (and its version) a product list arrives as a paged object with `items`,
//! an object with `data`, or a bare array. [`ProductsResponse`] absorbs all
//! three.

use serde::Deserialize;

use fieldsales_catalog::{Category, Product};
use fieldsales_core::Paginated;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Fallbacks for catalog routes that require customer context even when the
/// app has no selection yet.
const DEFAULT_CARD_CODE: &str = "205";
const DEFAULT_PRICE_LIST: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProductsResponse {
    Paged(Paginated<Product>),
    Wrapped {
        #[serde(alias = "items")]
        data: Vec<Product>,
    },
    Flat(Vec<Product>),
}

impl ProductsResponse {
    /// Normalize to a page; envelope-less shapes report the fetched length
    /// and no grand total.
    pub fn into_page(self, page: u32, page_size: u32) -> Paginated<Product> {
        match self {
            ProductsResponse::Paged(paged) => paged,
            ProductsResponse::Wrapped { data } | ProductsResponse::Flat(data) => Paginated {
                page,
                page_size,
                items: data,
                total: None,
            },
        }
    }
}

impl ApiClient {
    /// Full-text product search with customer-specific pricing applied.
    /// `group_code` narrows the search to one category tab.
    pub async fn search_products(
        &self,
        term: &str,
        card_code: Option<&str>,
        price_list: Option<i64>,
        group_code: Option<&str>,
        page: u32,
    ) -> Result<Paginated<Product>, ApiError> {
        let mut query = self.catalog_query(card_code, price_list, group_code, page);
        query.push(("q", term.to_string()));
        let resp: ProductsResponse = self.get_json("/Catalog/products/search", &query).await?;
        Ok(resp.into_page(page, self.config().page_size))
    }

    /// Products carrying a discount schedule for the given customer.
    pub async fn discounted_products(
        &self,
        card_code: Option<&str>,
        price_list: Option<i64>,
        group_code: Option<&str>,
        page: u32,
    ) -> Result<Paginated<Product>, ApiError> {
        let query = self.catalog_query(card_code, price_list, group_code, page);
        let resp: ProductsResponse = self
            .get_json("/Catalog/products/discounted-by-customer", &query)
            .await?;
        Ok(resp.into_page(page, self.config().page_size))
    }

    fn catalog_query(
        &self,
        card_code: Option<&str>,
        price_list: Option<i64>,
        group_code: Option<&str>,
        page: u32,
    ) -> Vec<(&'static str, String)> {
        let mut query = vec![
            (
                "cardCode",
                card_code.unwrap_or(DEFAULT_CARD_CODE).to_string(),
            ),
            (
                "priceList",
                price_list.unwrap_or(DEFAULT_PRICE_LIST).to_string(),
            ),
            ("page", page.to_string()),
            ("pageSize", self.config().page_size.to_string()),
        ];
        if let Some(group_code) = group_code {
            query.push(("groupCode", group_code.to_string()));
        }
        query
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/sap/items/categories", &[]).await
    }
}
