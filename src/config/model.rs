use serde::Deserialize;

/// Optional YAML configuration file.
///
/// Every key may be omitted; command-line flags and environment variables
/// take precedence over anything set here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Host to ping.
    pub isp: Option<String>,

    /// Base URL of the status endpoint, without a query string.
    pub base_url: Option<String>,

    /// Seconds between report cycles. 0 runs a single cycle.
    pub interval_seconds: Option<u64>,

    /// Location of the event log.
    pub log_file: Option<String>,

    /// Timeout applied to the report request.
    pub request_timeout_seconds: Option<u64>,

    #[serde(default)]
    pub probe: ProbeFileConfig,
}

/// Probe section of the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeFileConfig {
    /// Ping executable, defaults to `ping`.
    pub program: Option<String>,

    /// Value passed to `ping -W`.
    pub wait_seconds: Option<u64>,
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_file_config_deserialization() {
        let yaml = r#"
                    isp: 1.1.1.1
                    base_url: https://status.example.com/api/push/abc
                    interval_seconds: 60
                    log_file: /var/log/pingbeat.txt
                    request_timeout_seconds: 10
                    probe:
                        program: /usr/bin/ping
                        wait_seconds: 2
                    "#;

        let config: FileConfig = serde_yaml::from_str(yaml).expect("Invalid YAML");
        assert_eq!(config.isp.as_deref(), Some("1.1.1.1"));
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://status.example.com/api/push/abc")
        );
        assert_eq!(config.interval_seconds, Some(60));
        assert_eq!(config.log_file.as_deref(), Some("/var/log/pingbeat.txt"));
        assert_eq!(config.request_timeout_seconds, Some(10));
        assert_eq!(config.probe.program.as_deref(), Some("/usr/bin/ping"));
        assert_eq!(config.probe.wait_seconds, Some(2));
    }

    #[test]
    fn test_file_config_keys_are_optional() {
        let config: FileConfig = serde_yaml::from_str("isp: example.com").expect("Invalid YAML");
        assert_eq!(config.isp.as_deref(), Some("example.com"));
        assert!(config.base_url.is_none());
        assert!(config.interval_seconds.is_none());
        assert!(config.probe.program.is_none());
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        let result: Result<FileConfig, _> = serde_yaml::from_str("isp: a\ntarget: b\n");
        assert!(result.is_err());
    }
}
