//! Core types and utilities for the feedback frontend
//!
//! Everything in this crate is presentation-agnostic: wire types for the
//! backend REST API, configuration loading, the shared error type, and the
//! pure aggregation functions that turn a submission list plus an analytics
//! summary into chart-ready rows.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]

pub mod analytics;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use types::{AnalyticsSummary, RecommendedAction, Submission, SubmissionList};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`, falling back to `info`.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
