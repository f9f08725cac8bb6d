//! Customers and delivery addresses as the ERP returns them, plus the
//! client-side selection state.

use serde::{Deserialize, Serialize};

/// A business partner assigned to the sales employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub card_code: String,
    pub card_name: String,
    #[serde(default, rename = "federalTaxID")]
    pub federal_tax_id: Option<String>,
    /// Price list number resolving catalog prices for this customer.
    pub price_list_num: i64,
}

/// A delivery address on file for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    #[serde(default)]
    pub row_num: i64,
    /// Address key; goes into the order payload as `payToCode`.
    pub address_name: String,
    #[serde(default)]
    pub address_type: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

/// Currently chosen customer and delivery address.
///
/// Feeds both catalog fetches (price list resolution) and the checkout
/// payload. Serializable so it can ride the same snapshot persistence as
/// the cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerSelection {
    customer: Option<Customer>,
    address: Option<CustomerAddress>,
}

impl CustomerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn address(&self) -> Option<&CustomerAddress> {
        self.address.as_ref()
    }

    /// Choose a customer. Switching customers drops any previously chosen
    /// address, since addresses belong to a customer.
    pub fn select_customer(&mut self, customer: Customer) {
        let switching = self
            .customer
            .as_ref()
            .is_none_or(|current| current.card_code != customer.card_code);
        if switching {
            self.address = None;
        }
        self.customer = Some(customer);
    }

    pub fn select_address(&mut self, address: CustomerAddress) {
        self.address = Some(address);
    }

    /// Clear both customer and address (order submitted or selection reset).
    pub fn clear(&mut self) {
        self.customer = None;
        self.address = None;
    }

    /// The selected customer's price list, if any.
    pub fn price_list(&self) -> Option<i64> {
        self.customer.as_ref().map(|c| c.price_list_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(code: &str) -> Customer {
        Customer {
            card_code: code.into(),
            card_name: format!("Customer {code}"),
            federal_tax_id: None,
            price_list_num: 1,
        }
    }

    fn address(name: &str) -> CustomerAddress {
        CustomerAddress {
            row_num: 0,
            address_name: name.into(),
            address_type: None,
            street: None,
            country: None,
            state: None,
            state_name: None,
            city_name: None,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn switching_customer_drops_the_address() {
        let mut selection = CustomerSelection::new();
        selection.select_customer(customer("205"));
        selection.select_address(address("ENTREGA 1"));
        assert!(selection.address().is_some());

        selection.select_customer(customer("318"));
        assert!(selection.address().is_none());
        assert_eq!(selection.customer().unwrap().card_code, "318");
    }

    #[test]
    fn reselecting_same_customer_keeps_the_address() {
        let mut selection = CustomerSelection::new();
        selection.select_customer(customer("205"));
        selection.select_address(address("ENTREGA 1"));
        selection.select_customer(customer("205"));
        assert!(selection.address().is_some());
    }

    #[test]
    fn clear_empties_both() {
        let mut selection = CustomerSelection::new();
        selection.select_customer(customer("205"));
        selection.select_address(address("ENTREGA 1"));
        selection.clear();
        assert_eq!(selection, CustomerSelection::default());
    }

    #[test]
    fn customer_deserializes_from_erp_shape() {
        let json = r#"{
            "cardCode": "C0205",
            "cardName": "Comercial La Ceiba",
            "federalTaxID": "08011985123960",
            "priceListNum": 2
        }"#;
        let parsed: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.price_list_num, 2);
        assert_eq!(parsed.federal_tax_id.as_deref(), Some("08011985123960"));
    }
}
