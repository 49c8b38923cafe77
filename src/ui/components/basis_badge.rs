use dioxus::prelude::*;

use crate::domain::FeeBasis;
use crate::ui::theme;

#[component]
pub fn BasisBadge(basis: FeeBasis) -> Element {
    rsx! {
        span {
            class: "{theme::basis_badge(basis)}",
            "{basis.label()}"
        }
    }
}
