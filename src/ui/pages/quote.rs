use std::collections::HashMap;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    domain::{ParamField, Quote, QuoteBreakdown, QuoteSession, QuoteStatus, SessionError},
    ui::{
        components::{
            fee_table::{FeeRow, FeeTable, FeeTotals},
            kpi_card::KpiCard,
            notice::{notify, NoticeBoard, NoticeTone},
        },
        theme,
    },
    util::format_money,
};

#[component]
pub fn QuotePage() -> Element {
    let mut state = use_context::<Signal<QuoteSession>>();
    let notices = use_context::<Signal<NoticeBoard>>();

    let initial = state.with(|st| st.params.clone());
    let mut gp20_input = use_signal(|| initial.gp20_count.to_string());
    let mut gp40_input = use_signal(|| initial.gp40_count.to_string());
    let mut rate_input = use_signal(|| initial.exchange_rate.to_string());
    // Raw text per fee id, so half-typed numbers survive re-rendering.
    let mut price_drafts = use_signal(HashMap::<String, String>::new);
    let mut export_preview = use_signal(|| None::<String>);

    let session = state();
    let breakdown = session.breakdown();
    let editable = session.is_editable();
    let status = session.status;

    let rows = fee_rows(&breakdown, &price_drafts());
    let totals = FeeTotals {
        container_subtotal: breakdown.container_subtotal,
        shipment_subtotal: breakdown.shipment_subtotal,
        total: breakdown.total,
    };
    let gp20_text = gp20_input();
    let gp40_text = gp40_input();
    let rate_text = rate_input();
    let total_display = format!("¥ {}", format_money(breakdown.total));

    let on_price_change = move |(fee_id, raw): (String, String)| {
        price_drafts.with_mut(|drafts| {
            drafts.insert(fee_id.clone(), raw.clone());
        });
        state.with_mut(|st| {
            if !st.set_unit_price(&fee_id, &raw) {
                warn!(fee = %fee_id, "Price edit for unknown fee");
            }
        });
    };

    let on_save_draft = move |_| {
        let result = state.with_mut(|st| st.save_draft());
        report_transition(notices, result, "草稿已保存，可再次编辑。");
    };

    let on_submit = move |_| {
        let result = state.with_mut(|st| st.submit());
        report_transition(notices, result, "正式报价单已提交。");
    };

    let on_mark_reviewed = move |_| {
        let result = state.with_mut(|st| st.mark_reviewed());
        report_transition(notices, result, "报价单已审核。");
    };

    let on_reset = move |_| {
        state.with_mut(|st| st.reset_fees());
        price_drafts.set(HashMap::new());
        notify(notices, NoticeTone::Info, "已恢复默认费用单价。");
    };

    let on_export = move |_| {
        let quote = state.with(|st| st.to_quote());
        match export_json(&quote, &state.with(|st| st.breakdown())) {
            Ok(json) => export_preview.set(Some(json)),
            Err(err) => notify(notices, NoticeTone::Error, format!("导出失败: {err}")),
        }
    };

    rsx! {
        div {
            section { class: "grid-3",
                div { class: "card",
                    label { class: "label", "供应商名称" }
                    input {
                        class: "input",
                        r#type: "text",
                        disabled: !editable,
                        value: "{session.supplier_name}",
                        oninput: move |evt| state.with_mut(|st| st.set_supplier_name(evt.value())),
                    }
                    label { class: "label", "航线" }
                    input {
                        class: "input",
                        r#type: "text",
                        disabled: !editable,
                        placeholder: "e.g. Shanghai - Los Angeles",
                        value: "{session.route}",
                        oninput: move |evt| state.with_mut(|st| st.set_route(evt.value())),
                    }
                }
                div { class: "card",
                    label { class: "label", "USD 兑 RMB 汇率" }
                    div {
                        span { class: "hint", "1 : " }
                        input {
                            class: "input",
                            r#type: "number",
                            inputmode: "decimal",
                            disabled: !editable,
                            value: "{rate_text}",
                            oninput: move |evt| {
                                let raw = evt.value();
                                state.with_mut(|st| st.set_param(ParamField::ExchangeRate, &raw));
                                rate_input.set(raw);
                            },
                        }
                    }
                }
                KpiCard {
                    title: "预计人民币总额".to_string(),
                    value: total_display,
                    description: Some(format!("状态: {}", theme::status_label(status))),
                    accent: true,
                }
            }

            section { class: "panel",
                div { class: "panel-header",
                    h2 { "测算参数 (柜量统计)" }
                }
                div { class: "grid-2",
                    div {
                        label { class: "label", "20GP 小柜数量" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "0",
                            disabled: !editable,
                            value: "{gp20_text}",
                            oninput: move |evt| {
                                let raw = evt.value();
                                state.with_mut(|st| st.set_param(ParamField::Gp20Count, &raw));
                                gp20_input.set(raw);
                            },
                        }
                    }
                    div {
                        label { class: "label", "40GP/HQ 大柜数量" }
                        input {
                            class: "input",
                            r#type: "number",
                            min: "0",
                            disabled: !editable,
                            value: "{gp40_text}",
                            oninput: move |evt| {
                                let raw = evt.value();
                                state.with_mut(|st| st.set_param(ParamField::Gp40Count, &raw));
                                gp40_input.set(raw);
                            },
                        }
                    }
                }
            }

            section { class: "panel",
                div { class: "panel-header",
                    h2 { "费用报价详情" }
                    div {
                        span { class: "hint", "所有价格变动将实时更新至总额 " }
                        button {
                            class: "btn btn-secondary",
                            disabled: !editable,
                            onclick: on_reset,
                            "恢复默认"
                        }
                    }
                }
                FeeTable {
                    rows,
                    totals,
                    editable,
                    on_price_change,
                }
            }

            if let Some(json) = export_preview() {
                section { class: "panel",
                    div { class: "panel-header",
                        h2 { "导出数据 (JSON)" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| export_preview.set(None),
                            "关闭"
                        }
                    }
                    pre { class: "export", "{json}" }
                }
            }

            div { class: "action-bar",
                div {
                    p { "填写须知 " span { class: "status-pill", "{theme::status_label(status)}" } }
                    p { class: "hint", "请确保所有必填项已完成。保存为草稿后可再次编辑。" }
                }
                div {
                    button { class: "btn btn-secondary", onclick: on_export, "导出数据" }
                    " "
                    button {
                        class: "btn btn-secondary",
                        disabled: !editable,
                        onclick: on_save_draft,
                        "保存草稿"
                    }
                    " "
                    if status == QuoteStatus::Submitted {
                        button { class: "btn btn-primary", onclick: on_mark_reviewed, "标记已审核" }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: !editable,
                            onclick: on_submit,
                            "提交正式报价单"
                        }
                    }
                }
            }
        }
    }
}

fn fee_rows(breakdown: &QuoteBreakdown, drafts: &HashMap<String, String>) -> Vec<FeeRow> {
    breakdown
        .items
        .iter()
        .map(|item| FeeRow {
            id: item.fee.id.clone(),
            name: item.fee.name.clone(),
            code: item.fee.code.clone(),
            description: item.fee.description.clone(),
            basis: item.fee.basis,
            container_class: item.fee.container_class,
            price_input: drafts
                .get(&item.fee.id)
                .cloned()
                .unwrap_or_else(|| item.fee.unit_price.to_string()),
            currency: item.fee.currency,
            original_amount: item.original_amount,
            rmb_amount: item.rmb_amount,
        })
        .collect()
}

fn report_transition(
    notices: Signal<NoticeBoard>,
    result: Result<Quote, SessionError>,
    success: &str,
) {
    match result {
        Ok(quote) => {
            info!(quote = %quote.id, status = ?quote.status, supplier = %quote.supplier_name, "Quote status saved");
            notify(notices, NoticeTone::Success, success);
        }
        Err(err) => {
            warn!(error = %err, "Quote status change rejected");
            notify(notices, NoticeTone::Error, err.to_string());
        }
    }
}

#[derive(serde::Serialize)]
struct QuoteExport<'a> {
    quote: &'a Quote,
    breakdown: &'a QuoteBreakdown,
}

/// Pretty JSON of the quote and its computed breakdown.
pub fn export_json(quote: &Quote, breakdown: &QuoteBreakdown) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&QuoteExport { quote, breakdown })
}
