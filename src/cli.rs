use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Long flags that are also accepted with a single leading dash.
const LONG_FLAGS: &[&str] = &[
    "isp",
    "base_url",
    "interval",
    "log_file",
    "config",
    "ping_wait",
    "help",
    "version",
];

/// pingbeat - ping a host and push the latency to a status endpoint
#[derive(Parser, Debug, Default)]
#[command(name = "pingbeat", version, about, long_about = None)]
pub struct Cli {
    /// Host to ping
    #[arg(long = "isp", env = "ISP")]
    pub isp: Option<String>,

    /// Base URL of the status endpoint
    #[arg(long = "base_url", env = "BASE_URL")]
    pub base_url: Option<String>,

    /// Seconds between runs; 0 runs once
    #[arg(long = "interval")]
    pub interval: Option<u64>,

    /// Path of the event log (default: log.txt)
    #[arg(long = "log_file", env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Optional YAML configuration file
    #[arg(long = "config", env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Seconds to wait for the echo reply (ping -W)
    #[arg(long = "ping_wait", env = "PING_WAIT")]
    pub ping_wait: Option<u64>,
}

impl Cli {
    /// Parse the process arguments, accepting `-isp` as well as `--isp`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite single-dash long flags (`-isp`, `-interval=5`) to their
/// double-dash form. Everything after a bare `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("--{rest}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
