//! Shared class helpers so pages and components style domain states the same way.

use crate::domain::{FeeBasis, QuoteStatus};

pub fn basis_badge(basis: FeeBasis) -> &'static str {
    match basis {
        FeeBasis::PerContainer => "badge badge-container",
        FeeBasis::PerShipment => "badge badge-shipment",
        FeeBasis::Parameter => "badge badge-parameter",
    }
}

pub fn status_label(status: QuoteStatus) -> &'static str {
    match status {
        QuoteStatus::Draft => "草稿",
        QuoteStatus::Submitted => "已提交",
        QuoteStatus::Reviewed => "已审核",
    }
}

pub fn kpi_card(accent: bool) -> &'static str {
    if accent {
        "card-accent"
    } else {
        "card"
    }
}
