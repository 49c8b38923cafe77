use rust_decimal::Decimal;
use serde::Serialize;

use super::entities::{ComputedItem, Currency, FeeBasis, FeeItem, Parameters};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub items: Vec<ComputedItem>,
    pub container_subtotal: Decimal,
    pub shipment_subtotal: Decimal,
    pub total: Decimal,
}

impl QuoteBreakdown {
    /// Sum of home-currency amounts for one basis.
    pub fn subtotal_for(&self, basis: FeeBasis) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.fee.basis == basis)
            .map(|item| item.rmb_amount)
            .fold(Decimal::ZERO, saturating_add)
    }
}

/// Computes every fee line and the aggregate totals, in input order.
pub fn compute(params: &Parameters, items: &[FeeItem]) -> QuoteBreakdown {
    let items: Vec<ComputedItem> = items.iter().map(|fee| compute_item(fee, params)).collect();

    let mut breakdown = QuoteBreakdown {
        items,
        ..QuoteBreakdown::default()
    };
    breakdown.container_subtotal = breakdown.subtotal_for(FeeBasis::PerContainer);
    breakdown.shipment_subtotal = breakdown.subtotal_for(FeeBasis::PerShipment);
    breakdown.total = saturating_add(breakdown.container_subtotal, breakdown.shipment_subtotal);
    breakdown
}

pub fn compute_item(fee: &FeeItem, params: &Parameters) -> ComputedItem {
    let original_amount = original_amount(fee, params);
    let rmb_amount = to_home_currency(original_amount, fee.currency, params.exchange_rate);
    ComputedItem {
        fee: fee.clone(),
        original_amount,
        rmb_amount,
    }
}

/// Amount in the fee's own currency.
pub fn original_amount(fee: &FeeItem, params: &Parameters) -> Decimal {
    match fee.basis {
        FeeBasis::PerContainer => {
            saturating_mul(fee.unit_price, Decimal::from(params.containers_for(fee.container_class)))
        }
        FeeBasis::PerShipment | FeeBasis::Parameter => fee.unit_price,
    }
}

pub fn to_home_currency(amount: Decimal, currency: Currency, exchange_rate: Decimal) -> Decimal {
    match currency {
        Currency::Rmb => amount,
        Currency::Usd => saturating_mul(amount, exchange_rate),
    }
}

/// Out-of-range amounts pin to the nearest representable bound.
fn saturating_mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| bound_for(lhs.is_sign_negative() != rhs.is_sign_negative()))
}

fn saturating_add(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_add(rhs).unwrap_or_else(|| bound_for(lhs.is_sign_negative()))
}

fn bound_for(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ContainerClass;
    use rust_decimal_macros::dec;

    fn params() -> Parameters {
        Parameters {
            gp20_count: 1,
            gp40_count: 1,
            exchange_rate: dec!(7.1),
        }
    }

    fn fee(basis: FeeBasis, code: &str, price: Decimal, currency: Currency) -> FeeItem {
        FeeItem::new(code, basis, code, code, price, currency)
    }

    #[test]
    fn general_container_fee_uses_both_counts() {
        let item = compute_item(
            &fee(FeeBasis::PerContainer, "OF", dec!(850), Currency::Usd),
            &params(),
        );
        assert_eq!(item.original_amount, dec!(1700));
        assert_eq!(item.rmb_amount, dec!(12070.00));
    }

    #[test]
    fn gp20_fee_uses_gp20_count() {
        let p = Parameters {
            gp20_count: 3,
            ..params()
        };
        let item = compute_item(&fee(FeeBasis::PerContainer, "THC-20", dec!(850), Currency::Rmb), &p);
        assert_eq!(item.original_amount, dec!(2550));
        assert_eq!(item.rmb_amount, dec!(2550));
    }

    #[test]
    fn gp40_fee_uses_gp40_count() {
        let p = Parameters {
            gp40_count: 4,
            ..params()
        };
        let item = compute_item(&fee(FeeBasis::PerContainer, "THC-40", dec!(1250), Currency::Rmb), &p);
        assert_eq!(item.original_amount, dec!(5000));
    }

    #[test]
    fn shipment_fee_ignores_counts() {
        let p = Parameters {
            gp20_count: 9,
            gp40_count: 0,
            exchange_rate: dec!(7.1),
        };
        let doc = compute_item(&fee(FeeBasis::PerShipment, "DOC", dec!(500), Currency::Rmb), &p);
        assert_eq!(doc.original_amount, dec!(500));
        assert_eq!(doc.rmb_amount, dec!(500));

        let clearance = compute_item(
            &fee(FeeBasis::PerShipment, "CLEARANCE", dec!(450), Currency::Usd),
            &params(),
        );
        assert_eq!(clearance.original_amount, dec!(450));
        assert_eq!(clearance.rmb_amount, dec!(3195.00));
    }

    #[test]
    fn dispatch_follows_tag_not_code() {
        let tagged = fee(FeeBasis::PerContainer, "THC-20", dec!(100), Currency::Rmb)
            .with_container_class(ContainerClass::Gp40);
        let p = Parameters {
            gp20_count: 1,
            gp40_count: 5,
            exchange_rate: dec!(7.1),
        };
        assert_eq!(original_amount(&tagged, &p), dec!(500));
    }

    #[test]
    fn zero_containers_zero_amount() {
        let p = Parameters {
            gp20_count: 0,
            gp40_count: 0,
            exchange_rate: dec!(7.1),
        };
        let item = compute_item(&fee(FeeBasis::PerContainer, "OF", dec!(850), Currency::Usd), &p);
        assert_eq!(item.rmb_amount, Decimal::ZERO);
    }

    #[test]
    fn parameter_items_stay_out_of_subtotals() {
        let items = vec![
            fee(FeeBasis::PerShipment, "DOC", dec!(500), Currency::Rmb),
            fee(FeeBasis::Parameter, "RATE", dec!(99), Currency::Usd),
        ];
        let breakdown = compute(&params(), &items);
        assert_eq!(breakdown.items.len(), 2);
        assert_eq!(breakdown.items[1].original_amount, dec!(99));
        assert_eq!(breakdown.container_subtotal, Decimal::ZERO);
        assert_eq!(breakdown.shipment_subtotal, dec!(500));
        assert_eq!(breakdown.total, dec!(500));
    }

    #[test]
    fn empty_fee_list() {
        let breakdown = compute(&params(), &[]);
        assert!(breakdown.items.is_empty());
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn preserves_input_order_and_is_repeatable() {
        let items = vec![
            fee(FeeBasis::PerShipment, "DOC", dec!(500), Currency::Rmb),
            fee(FeeBasis::PerContainer, "OF", dec!(850), Currency::Usd),
            fee(FeeBasis::PerContainer, "THC-20", dec!(850), Currency::Rmb),
        ];
        let first = compute(&params(), &items);
        let codes: Vec<_> = first.items.iter().map(|i| i.fee.code.as_str()).collect();
        assert_eq!(codes, ["DOC", "OF", "THC-20"]);
        assert_eq!(first, compute(&params(), &items));
    }

    #[test]
    fn huge_amounts_saturate_instead_of_overflowing() {
        let rate = Parameters {
            exchange_rate: Decimal::MAX,
            ..params()
        };
        let of = compute_item(&fee(FeeBasis::PerContainer, "OF", dec!(850), Currency::Usd), &rate);
        assert_eq!(of.rmb_amount, Decimal::MAX);

        let two_boxes = Parameters {
            gp20_count: 2,
            ..params()
        };
        let thc = compute_item(&fee(FeeBasis::PerContainer, "THC-20", dec!(50000000000000000000000000000), Currency::Rmb), &two_boxes);
        assert_eq!(thc.original_amount, Decimal::MAX);

        let refund = compute_item(&fee(FeeBasis::PerContainer, "OF", Decimal::MIN, Currency::Usd), &params());
        assert_eq!(refund.original_amount, Decimal::MIN);
    }

    #[test]
    fn subtotals_saturate_at_the_bound() {
        let items = vec![
            fee(FeeBasis::PerShipment, "DOC", Decimal::MAX, Currency::Rmb),
            fee(FeeBasis::PerShipment, "CUS", dec!(350), Currency::Rmb),
            fee(FeeBasis::PerContainer, "OF", Decimal::MAX, Currency::Rmb),
        ];
        let breakdown = compute(&params(), &items);
        assert_eq!(breakdown.shipment_subtotal, Decimal::MAX);
        assert_eq!(breakdown.container_subtotal, Decimal::MAX);
        assert_eq!(breakdown.total, Decimal::MAX);
    }
}
