use dioxus::prelude::*;

use crate::app::Route;
use crate::util::version::{version_label, APP_SHORT_NAME};

#[component]
pub fn Shell(title: &'static str, children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "layout",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    div { class: "sidebar-logo", "🚚" }
                    span { "{APP_SHORT_NAME}" }
                }
                nav { class: "sidebar-nav",
                    NavButton {
                        active: matches!(current_route, Route::Dashboard {}),
                        onclick: move |_| { nav.push(Route::Dashboard {}); },
                        label: "仪表盘",
                    }
                    NavButton {
                        active: current_route.is_quote_editor(),
                        onclick: move |_| { nav.push(Route::QuoteEditor {}); },
                        label: "报价单管理",
                    }
                    button { class: "nav-item", disabled: true, title: "Coming soon", "供应商准入" }
                    button { class: "nav-item", disabled: true, title: "Coming soon", "系统参数" }
                }
                div { class: "sidebar-footer",
                    p { "物流部管理员" }
                    p { "{version_label()}" }
                }
            }
            main { class: "main",
                header { class: "topbar",
                    h1 { "{title}" }
                }
                div { class: "content",
                    {children}
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
