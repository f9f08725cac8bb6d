//! Order totals with Honduran sales tax (ISV).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fieldsales_cart::Cart;
use fieldsales_core::round_money;

/// ISV rate applied to the whole order: 15%.
pub fn isv_rate() -> Decimal {
    Decimal::new(15, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Subtotal from effective line prices, tax on top, both money-rounded.
pub fn order_totals(cart: &Cart) -> OrderTotals {
    let subtotal = round_money(cart.subtotal());
    let tax = round_money(subtotal * isv_rate());
    OrderTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsales_cart::CartLine;

    fn line(item_code: &str, quantity: i64, unit_price: &str) -> CartLine {
        CartLine {
            item_code: item_code.into(),
            item_name: format!("Item {item_code}"),
            bar_code: item_code.into(),
            quantity,
            price_list: "100".parse().unwrap(),
            unit_price: unit_price.parse().unwrap(),
            tax_code: "ISV15".into(),
        }
    }

    #[test]
    fn tax_is_fifteen_percent_of_the_subtotal() {
        let mut cart = Cart::new();
        cart.add_line(line("A", 5, "90"));
        let totals = order_totals(&cart);
        assert_eq!(totals.subtotal, "450.00".parse().unwrap());
        assert_eq!(totals.tax, "67.50".parse().unwrap());
        assert_eq!(totals.total, "517.50".parse().unwrap());
    }

    #[test]
    fn tax_rounds_half_away_from_zero() {
        let mut cart = Cart::new();
        // 10.03 * 0.15 = 1.5045 -> 1.50; 10.05 * 0.15 = 1.5075 -> 1.51
        cart.add_line(line("A", 1, "10.03"));
        assert_eq!(order_totals(&cart).tax, "1.50".parse().unwrap());

        let mut cart = Cart::new();
        cart.add_line(line("B", 1, "10.05"));
        assert_eq!(order_totals(&cart).tax, "1.51".parse().unwrap());
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = order_totals(&Cart::new());
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }
}
