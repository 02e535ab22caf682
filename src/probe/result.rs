use std::fmt;

/// Sentinel reported when no latency could be determined.
pub const UNAVAILABLE: &str = "N/A";

/// Result of a single probe.
///
/// The average is kept exactly as the probe tool printed it. It is never
/// parsed as a number and may carry a unit suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Average(String),
    Unavailable,
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Average(token) => f.write_str(token),
            ProbeOutcome::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}
