//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Parsing of forecast payloads into current/hourly/daily records
//! - Icon classification and display formatting of those records
//! - Configuration & the HTTP client for the forecast endpoint
//!
//! Parsing and formatting are synchronous and hold no shared state, so they can
//! run on whichever thread received the payload.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod icon;
pub mod model;
pub mod parser;

pub use client::ForecastClient;
pub use config::{Config, Location};
pub use error::ForecastError;
pub use icon::{IconCategory, classify};
pub use model::{CurrentConditions, DailyConditions, Forecast, HourlyConditions};
pub use parser::parse;
