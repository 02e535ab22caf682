pub mod client;

use std::fmt::Write;

use async_trait::async_trait;
use thiserror::Error;

use crate::probe::result::ProbeOutcome;

pub use client::HttpReporter;

/// Query appended to the base URL on every report, followed by the latency.
const REPORT_QUERY: &str = "status=up&msg=OK&ping=";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid report URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed")]
    Http(#[from] reqwest::Error),
}

/// Sends one status report to the collector.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Issue the report and return the HTTP status code.
    async fn send(&self, url: &str) -> Result<u16, ReportError>;
}

/// Build the report URL for a probe outcome.
///
/// The outcome is interpolated as-is, without any encoding.
pub fn report_url(base_url: &str, outcome: &ProbeOutcome) -> String {
    format!("{base_url}?{REPORT_QUERY}{outcome}")
}

/// Render an error followed by its chain of causes.
pub fn describe(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
