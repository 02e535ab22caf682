pub mod schedule;

use crate::config::{AppConfig, ConfigError};
use crate::logger::EventLog;
use crate::probe::Prober;
use crate::report::{Reporter, describe, report_url};

pub use schedule::{Schedule, Sleeper, TokioSleeper};

/// Drives probe → report cycles according to the configured interval.
pub struct Heartbeat<'a> {
    config: &'a AppConfig,
    prober: &'a dyn Prober,
    reporter: &'a dyn Reporter,
    sleeper: &'a dyn Sleeper,
    log: &'a dyn EventLog,
}

impl<'a> Heartbeat<'a> {
    pub fn new(
        config: &'a AppConfig,
        prober: &'a dyn Prober,
        reporter: &'a dyn Reporter,
        sleeper: &'a dyn Sleeper,
        log: &'a dyn EventLog,
    ) -> Self {
        Self {
            config,
            prober,
            reporter,
            sleeper,
            log,
        }
    }

    /// Write the startup banner, validate the configuration and run.
    ///
    /// An incomplete configuration is logged and returned without probing
    /// or reporting anything.
    pub async fn start(&self) -> Result<(), ConfigError> {
        self.log.append("START");
        self.log.append(&format!("ISP: {}", self.config.isp));
        self.log.append(&format!("BASE_URL: {}", self.config.base_url));

        if let Err(e) = self.config.validate() {
            self.log.append(&e.to_string());
            return Err(e);
        }

        self.run().await;
        Ok(())
    }

    /// Probe the host once and push the result.
    ///
    /// Failures are written to the event log and never stop the caller.
    pub async fn run_cycle(&self) {
        let outcome = self.prober.measure(&self.config.isp).await;
        tracing::debug!(host = %self.config.isp, %outcome, "Probe finished");

        let url = report_url(&self.config.base_url, &outcome);
        self.log.append(&format!("FULL_URL: {url}"));

        match self.reporter.send(&url).await {
            Ok(status) => self.log.append(&format!("Response status: {status}")),
            Err(e) => self
                .log
                .append(&format!("Failed to execute HTTP request: {}", describe(&e))),
        }
    }

    /// Run cycles until the schedule is exhausted.
    ///
    /// Returns after one cycle for [`Schedule::Once`]; never returns for
    /// [`Schedule::Every`].
    pub async fn run(&self) {
        let schedule = Schedule::from_interval(self.config.interval);

        loop {
            self.run_cycle().await;

            match schedule {
                Schedule::Once => break,
                Schedule::Every(period) => {
                    self.log
                        .append(&format!("Sleeping for {} seconds", period.as_secs()));
                    self.sleeper.sleep(period).await;
                }
            }
        }
    }
}
