use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::Prober;
use super::result::ProbeOutcome;

/// Program used to probe when nothing else is configured.
pub const DEFAULT_PING_PROGRAM: &str = "ping";

/// Segment of the `min/avg/max/...` summary line holding the average.
const AVERAGE_SEGMENT: usize = 4;

/// Prober that shells out to the system `ping` tool.
///
/// Sends a single echo request (`-c 1`), optionally bounded with `-W`.
#[derive(Debug, Clone)]
pub struct PingProber {
    program: String,
    wait_seconds: Option<u64>,
}

impl PingProber {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            wait_seconds: None,
        }
    }

    /// Bound the wait for the echo reply.
    pub fn with_wait(mut self, wait_seconds: Option<u64>) -> Self {
        self.wait_seconds = wait_seconds;
        self
    }

    fn args(&self, host: &str) -> Vec<String> {
        let mut args = vec!["-c".to_string(), "1".to_string()];
        if let Some(wait) = self.wait_seconds {
            args.push("-W".to_string());
            args.push(wait.to_string());
        }
        args.push(host.to_string());
        args
    }

    /// Run the probe and return stdout followed by stderr, or `None` when the
    /// program could not run or exited unsuccessfully.
    async fn combined_output(&self, host: &str) -> Option<String> {
        let output = Command::new(&self.program)
            .args(self.args(host))
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await;

        let output = match output {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "Failed to run probe");
                return None;
            }
        };

        if !output.status.success() {
            tracing::debug!(host, status = %output.status, "Probe exited unsuccessfully");
            return None;
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Some(text)
    }
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new(DEFAULT_PING_PROGRAM)
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn measure(&self, host: &str) -> ProbeOutcome {
        match self.combined_output(host).await {
            Some(output) => parse_average(&output),
            None => ProbeOutcome::Unavailable,
        }
    }
}

/// Extract the average round-trip time from ping output.
///
/// Looks for lines containing `avg` (the `min/avg/max/...` summary) and
/// returns the fifth `/`-separated segment of the first one that has it,
/// verbatim.
pub fn parse_average(output: &str) -> ProbeOutcome {
    output
        .lines()
        .filter(|line| line.contains("avg"))
        .find_map(|line| line.split('/').nth(AVERAGE_SEGMENT))
        .map(|token| ProbeOutcome::Average(token.to_string()))
        .unwrap_or(ProbeOutcome::Unavailable)
}
