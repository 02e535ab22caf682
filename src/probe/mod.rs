pub mod ping;
pub mod result;

pub mod prelude {
    pub use super::Prober;
    pub use super::ping::{PingProber, parse_average};
    pub use super::result::ProbeOutcome;
}

use async_trait::async_trait;

use result::ProbeOutcome;

/// Measures round-trip latency to a host.
///
/// Implementations never fail: anything that prevents a measurement is
/// reported as [`ProbeOutcome::Unavailable`].
#[async_trait]
pub trait Prober: Send + Sync {
    async fn measure(&self, host: &str) -> ProbeOutcome;
}
