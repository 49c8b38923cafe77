//! Quote domain: fee entities, the editable session and the pure calculation engine.

pub mod app_state;
pub mod calculation;
pub mod entities;

pub use app_state::{ParamField, QuoteSession, SessionError};
pub use calculation::{compute, compute_item, original_amount, to_home_currency, QuoteBreakdown};
pub use entities::{
    ComputedItem, ContainerClass, Currency, FeeBasis, FeeItem, Parameters, Quote, QuoteStatus,
};
