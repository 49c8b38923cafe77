use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::debug;

use super::calculation::{compute, QuoteBreakdown};
use super::entities::{FeeItem, Parameters, Quote, QuoteStatus};
use crate::config::QuoteConfig;
use crate::util::{parse_count_or_zero, parse_decimal_or_zero};

/// Editable parameter fields on the quote form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Gp20Count,
    Gp40Count,
    ExchangeRate,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("supplier name is required before submitting")]
    MissingSupplier,
    #[error("quote is {from:?} and cannot move to {to:?}")]
    InvalidTransition { from: QuoteStatus, to: QuoteStatus },
}

/// The one editable quote held by the UI. The engine stays a pure function of
/// `params` and `fees`.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteSession {
    pub quote_id: String,
    pub supplier_name: String,
    pub route: String,
    pub params: Parameters,
    pub fees: Vec<FeeItem>,
    pub status: QuoteStatus,
    pub created_at: String,
    default_fees: Vec<FeeItem>,
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new(&QuoteConfig::default())
    }
}

impl QuoteSession {
    pub fn new(config: &QuoteConfig) -> Self {
        let fees = config.fee_items();
        Self {
            quote_id: uuid::Uuid::new_v4().to_string(),
            supplier_name: config.supplier_name.clone(),
            route: config.route.clone(),
            params: config.params.clone(),
            default_fees: fees.clone(),
            fees,
            status: QuoteStatus::Draft,
            created_at: now_rfc3339(),
        }
    }

    pub fn breakdown(&self) -> QuoteBreakdown {
        compute(&self.params, &self.fees)
    }

    pub fn is_editable(&self) -> bool {
        self.status == QuoteStatus::Draft
    }

    pub fn set_param(&mut self, field: ParamField, raw: &str) {
        match field {
            ParamField::Gp20Count => self.params.gp20_count = parse_count_or_zero(raw),
            ParamField::Gp40Count => self.params.gp40_count = parse_count_or_zero(raw),
            ParamField::ExchangeRate => self.params.exchange_rate = parse_decimal_or_zero(raw),
        }
        debug!(?field, raw, params = ?self.params, "Quote parameter updated");
    }

    /// Returns false when no fee carries `fee_id`.
    pub fn set_unit_price(&mut self, fee_id: &str, raw: &str) -> bool {
        let Some(fee) = self.fees.iter_mut().find(|fee| fee.id == fee_id) else {
            return false;
        };
        fee.unit_price = parse_decimal_or_zero(raw);
        debug!(fee = %fee.code, unit_price = %fee.unit_price, "Unit price updated");
        true
    }

    pub fn set_supplier_name(&mut self, name: impl Into<String>) {
        self.supplier_name = name.into();
    }

    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = route.into();
    }

    pub fn reset_fees(&mut self) {
        self.fees = self.default_fees.clone();
    }

    pub fn to_quote(&self) -> Quote {
        Quote {
            id: self.quote_id.clone(),
            supplier_name: self.supplier_name.clone(),
            route: self.route.clone(),
            params: self.params.clone(),
            items: self.fees.clone(),
            status: self.status,
            created_at: self.created_at.clone(),
        }
    }

    /// Keeps the quote as an editable draft.
    pub fn save_draft(&mut self) -> Result<Quote, SessionError> {
        self.transition(QuoteStatus::Draft, QuoteStatus::Draft)?;
        Ok(self.to_quote())
    }

    pub fn submit(&mut self) -> Result<Quote, SessionError> {
        if self.supplier_name.trim().is_empty() {
            return Err(SessionError::MissingSupplier);
        }
        self.transition(QuoteStatus::Draft, QuoteStatus::Submitted)?;
        Ok(self.to_quote())
    }

    pub fn mark_reviewed(&mut self) -> Result<Quote, SessionError> {
        self.transition(QuoteStatus::Submitted, QuoteStatus::Reviewed)?;
        Ok(self.to_quote())
    }

    fn transition(&mut self, expected: QuoteStatus, to: QuoteStatus) -> Result<(), SessionError> {
        if self.status != expected {
            return Err(SessionError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        debug!(quote = %self.quote_id, from = ?self.status, to = ?to, "Quote status change");
        self.status = to;
        Ok(())
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
