use dioxus::prelude::*;

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        div { class: "placeholder",
            h3 { "仪表盘正在开发中" }
            p { "请先点击左侧“报价单管理”开始体验供应商报价功能。" }
        }
    }
}
