use dioxus::prelude::*;
use tracing::info;

use crate::{
    config::QuoteConfig,
    domain::QuoteSession,
    ui::{
        components::notice::{NoticeBoard, NoticeStack},
        pages::{DashboardPage, QuotePage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    QuoteEditor {},
    #[route("/quote")]
    QuoteCalculator {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(|| {
        let config = QuoteConfig::load_or_default();
        let session = QuoteSession::new(&config);
        info!(
            quote = %session.quote_id,
            fees = session.fees.len(),
            "Opened quote session"
        );
        session
    });
    use_context_provider(|| state);

    let notices = use_signal(NoticeBoard::default);
    use_context_provider(|| notices);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        NoticeStack {}
    }
}

#[component]
pub fn QuoteEditor() -> Element {
    rsx! { Shell { title: "创建报价单", QuotePage {} } }
}

#[component]
pub fn QuoteCalculator() -> Element {
    rsx! { QuoteEditor {} }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { title: "业务概览", DashboardPage {} } }
}

impl Route {
    pub fn is_quote_editor(&self) -> bool {
        matches!(self, Route::QuoteEditor {} | Route::QuoteCalculator {})
    }
}
