use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, accent: bool) -> Element {
    rsx! {
        div {
            class: "{theme::kpi_card(accent)}",
            div { class: "kpi-title label", "{title}" }
            div { class: "kpi-value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-desc", "{desc}" }
            }
        }
    }
}
