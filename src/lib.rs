//! LogiSRM quote calculator.
//!
//! Library crate exposing the quote domain, configuration and the Dioxus UI
//! for the binary entry point and integration tests.

pub mod app;
pub mod config;
pub mod domain;
pub mod ui;
pub mod util;
