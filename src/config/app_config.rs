use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use super::model::FileConfig;
use crate::cli::Cli;
use crate::logger::DEFAULT_LOG_FILE;
use crate::probe::ping::DEFAULT_PING_PROGRAM;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No ISP provided. Please provide an ISP to ping.")]
    MissingIsp,
    #[error("No BASE_URL provided. Please provide a BASE_URL for the HTTP request.")]
    MissingBaseUrl,
    #[error("BASE_URL must not contain a query string: {0}")]
    BaseUrlHasQuery(String),
    #[error("Failed to read config file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// How the probe is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub program: String,
    pub wait_seconds: Option<u64>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PING_PROGRAM.to_string(),
            wait_seconds: None,
        }
    }
}

/// Fully resolved configuration, immutable once the loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub isp: String,
    pub base_url: String,
    /// Seconds between cycles, 0 = run once.
    pub interval: u64,
    pub log_file: PathBuf,
    pub probe: ProbeSettings,
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            isp: String::new(),
            base_url: String::new(),
            interval: 0,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            probe: ProbeSettings::default(),
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Merge command-line/environment values over the optional file.
    /// Flags win over environment variables (handled by clap), which win
    /// over the file, which wins over the defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let defaults = AppConfig::default();

        AppConfig {
            isp: cli.isp.clone().or(file.isp).unwrap_or(defaults.isp),
            base_url: cli
                .base_url
                .clone()
                .or(file.base_url)
                .unwrap_or(defaults.base_url),
            interval: cli
                .interval
                .or(file.interval_seconds)
                .unwrap_or(defaults.interval),
            log_file: cli
                .log_file
                .clone()
                .or(file.log_file.map(PathBuf::from))
                .unwrap_or(defaults.log_file),
            probe: ProbeSettings {
                program: file.probe.program.unwrap_or(defaults.probe.program),
                wait_seconds: cli.ping_wait.or(file.probe.wait_seconds),
            },
            request_timeout: file.request_timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Check that the values needed to run a cycle are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.isp.is_empty() {
            return Err(ConfigError::MissingIsp);
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if self.base_url.contains('?') {
            return Err(ConfigError::BaseUrlHasQuery(self.base_url.clone()));
        }
        Ok(())
    }
}

/// Read the YAML configuration file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the application configuration.
///
/// The file named by `--config` / `CONFIG_FILE` is only read when given;
/// without it flags, environment variables and defaults are used.
pub fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config file");
            load_file(path)?
        }
        None => FileConfig::default(),
    };

    Ok(AppConfig::resolve(cli, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::ProbeFileConfig;
    use tempfile::tempdir;

    fn valid() -> AppConfig {
        AppConfig {
            isp: "1.1.1.1".into(),
            base_url: "https://status.example.com/api/push/abc".into(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(&Cli::default(), FileConfig::default());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.interval, 0);
        assert_eq!(config.log_file, PathBuf::from("log.txt"));
        assert_eq!(config.probe.program, "ping");
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_cli_wins_over_file() {
        let cli = Cli {
            isp: Some("cli.example.com".into()),
            interval: Some(0),
            ping_wait: Some(1),
            ..Cli::default()
        };
        let file = FileConfig {
            isp: Some("file.example.com".into()),
            base_url: Some("http://file/push".into()),
            interval_seconds: Some(60),
            log_file: Some("/tmp/file.txt".into()),
            request_timeout_seconds: Some(7),
            probe: ProbeFileConfig {
                program: Some("/bin/ping".into()),
                wait_seconds: Some(4),
            },
        };

        let config = AppConfig::resolve(&cli, file);
        assert_eq!(config.isp, "cli.example.com");
        assert_eq!(config.base_url, "http://file/push");
        assert_eq!(config.interval, 0);
        assert_eq!(config.log_file, PathBuf::from("/tmp/file.txt"));
        assert_eq!(config.probe.program, "/bin/ping");
        assert_eq!(config.probe.wait_seconds, Some(1));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_isp() {
        let config = AppConfig {
            isp: String::new(),
            ..valid()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingIsp));
        assert_eq!(
            err.to_string(),
            "No ISP provided. Please provide an ISP to ping."
        );
    }

    #[test]
    fn test_validate_missing_base_url() {
        let config = AppConfig {
            base_url: String::new(),
            ..valid()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUrl));
        assert_eq!(
            err.to_string(),
            "No BASE_URL provided. Please provide a BASE_URL for the HTTP request."
        );
    }

    #[test]
    fn test_validate_rejects_query_in_base_url() {
        let config = AppConfig {
            base_url: "http://collector/push?token=abc".into(),
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BaseUrlHasQuery(_))
        ));
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pingbeat.yml");
        std::fs::write(
            &path,
            "isp: 8.8.8.8\nbase_url: http://collector/push\ninterval_seconds: 30\n",
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        let config = load_config(&cli).unwrap();
        assert_eq!(config.isp, "8.8.8.8");
        assert_eq!(config.base_url, "http://collector/push");
        assert_eq!(config.interval, 30);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.yml")),
            ..Cli::default()
        };
        assert!(matches!(load_config(&cli), Err(ConfigError::File { .. })));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pingbeat.yml");
        std::fs::write(&path, "interval_seconds: soon\n").unwrap();

        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        assert!(matches!(load_config(&cli), Err(ConfigError::Parse { .. })));
    }
}
