use dioxus::prelude::*;
use rust_decimal::Decimal;

use super::basis_badge::BasisBadge;
use crate::domain::{ContainerClass, Currency, FeeBasis};
use crate::util::{format_money, round_money};

#[derive(Clone, PartialEq)]
pub struct FeeRow {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub basis: FeeBasis,
    pub container_class: ContainerClass,
    /// Text shown in the unit price input; may be a half-typed number.
    pub price_input: String,
    pub currency: Currency,
    pub original_amount: Decimal,
    pub rmb_amount: Decimal,
}

#[derive(Clone, Copy, PartialEq)]
pub struct FeeTotals {
    pub container_subtotal: Decimal,
    pub shipment_subtotal: Decimal,
    pub total: Decimal,
}

#[component]
pub fn FeeTable(
    rows: Vec<FeeRow>,
    totals: FeeTotals,
    editable: bool,
    on_price_change: EventHandler<(String, String)>,
) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        table {
            class: "fee-table",
            thead {
                tr {
                    th { "费用名称 / 描述" }
                    th { "计费依据" }
                    th { "单价" }
                    th { "货币" }
                    th { "原币合计" }
                    th { class: "num", "人民币合计" }
                }
            }
            tbody {
                for row in rows {
                    FeeRowView {
                        row,
                        editable,
                        on_price_change,
                    }
                }
                if is_empty {
                    tr {
                        td {
                            colspan: "6",
                            class: "hint",
                            "No fee items configured."
                        }
                    }
                }
            }
            tfoot {
                SummaryRow { label: "按柜计费类小计:", amount: totals.container_subtotal, row_class: "subtotal-row" }
                SummaryRow { label: "按票计费类小计:", amount: totals.shipment_subtotal, row_class: "subtotal-row" }
                SummaryRow { label: "总费用合计 (Total Amount):", amount: totals.total, row_class: "total-row" }
            }
        }
    }
}

#[component]
fn SummaryRow(label: &'static str, amount: Decimal, row_class: &'static str) -> Element {
    rsx! {
        tr {
            class: "{row_class}",
            td { colspan: "5", class: "num", "{label}" }
            td { class: "num", "¥ {format_money(amount)}" }
        }
    }
}

fn meta_text(row: &FeeRow) -> String {
    let mut meta = row.code.clone();
    if row.basis == FeeBasis::PerContainer {
        meta.push_str(&format!(" · {}", row.container_class.label()));
    }
    if let Some(description) = &row.description {
        meta.push_str(&format!(" • {description}"));
    }
    meta
}

#[component]
fn FeeRowView(row: FeeRow, editable: bool, on_price_change: EventHandler<(String, String)>) -> Element {
    let fee_id = row.id.clone();
    let meta = meta_text(&row);
    let original = format!("{:.2}", round_money(row.original_amount));
    let rmb = format_money(row.rmb_amount);

    rsx! {
        tr {
            td {
                div { class: "fee-name", "{row.name}" }
                div { class: "fee-meta", "{meta}" }
            }
            td { BasisBadge { basis: row.basis } }
            td {
                input {
                    class: "input-small",
                    r#type: "number",
                    inputmode: "decimal",
                    disabled: !editable,
                    value: "{row.price_input}",
                    oninput: move |evt| on_price_change.call((fee_id.clone(), evt.value())),
                }
            }
            td { "{row.currency.code()}" }
            td { "{original}" }
            td { class: "num", "¥ {rmb}" }
        }
    }
}
