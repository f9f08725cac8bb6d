//! Customer endpoints, scoped to the signed-in sales employee.

use fieldsales_core::Paginated;
use fieldsales_customers::{Customer, CustomerAddress};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// Customers assigned to the session's sales employee.
    pub async fn customers(&self, page: u32) -> Result<Paginated<Customer>, ApiError> {
        self.get_json(
            "/Customers/by-sales-emp",
            &[
                ("slpCode", self.session().sales_person_code().to_string()),
                ("page", page.to_string()),
                ("pageSize", self.config().page_size.to_string()),
            ],
        )
        .await
    }

    /// Delivery addresses for one customer; `addressName` is what order
    /// payloads carry as `payToCode`.
    pub async fn customer_addresses(
        &self,
        card_code: &str,
    ) -> Result<Vec<CustomerAddress>, ApiError> {
        self.get_json(&format!("/Customers/{card_code}/addresses"), &[])
            .await
    }
}
