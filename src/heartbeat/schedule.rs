use std::time::Duration;

use async_trait::async_trait;

/// When the next report cycle happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// A single cycle, then exit.
    Once,
    /// Repeat forever with a fixed pause between cycles.
    Every(Duration),
}

impl Schedule {
    pub fn from_interval(seconds: u64) -> Self {
        match seconds {
            0 => Schedule::Once,
            n => Schedule::Every(Duration::from_secs(n)),
        }
    }
}

/// Pause between cycles.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
