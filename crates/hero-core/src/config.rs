use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl RetryConfig {
    /// Base delay as a duration; `None` if negative, NaN or too large.
    pub fn base_delay(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.base_delay_secs).ok()
    }

    fn check(&self) -> Result<()> {
        if self.base_delay().is_none() {
            anyhow::bail!(
                "retry.base_delay_secs must be a non-negative number of seconds, got {}",
                self.base_delay_secs
            );
        }
        Ok(())
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

/// How request failures are surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorDisplay {
    /// Log only; regions keep whatever they showed before.
    Silent,
    /// Log and show an error state in the affected region.
    #[default]
    Region,
}

/// What to do with a response that belongs to an older search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Drop it; the last-clicked selection always wins.
    #[default]
    Discard,
    /// Apply it; each region shows whichever response arrived last.
    LastArrival,
}

/// Global configuration loaded from `~/.config/hero-widget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Base URL of the hero API server.
    pub base_url: String,
    #[serde(default)]
    pub error_display: ErrorDisplay,
    #[serde(default)]
    pub stale_responses: StalePolicy,
    /// Keep the search trigger disabled until the hero list has loaded.
    #[serde(default = "default_true")]
    pub disable_trigger_until_loaded: bool,
    /// Optional connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional total request timeout in seconds (None = no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional retry policy; if missing, each request is attempted once.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/".to_string(),
            error_display: ErrorDisplay::default(),
            stale_responses: StalePolicy::default(),
            disable_trigger_until_loaded: true,
            connect_timeout_secs: None,
            timeout_secs: None,
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hero-widget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WidgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WidgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<WidgetConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: WidgetConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    if let Some(retry) = &cfg.retry {
        retry
            .check()
            .with_context(|| format!("invalid config {}", path.display()))?;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = WidgetConfig::default();
        assert_eq!(cfg.base_url, "http://127.0.0.1:5000/");
        assert_eq!(cfg.error_display, ErrorDisplay::Region);
        assert_eq!(cfg.stale_responses, StalePolicy::Discard);
        assert!(cfg.disable_trigger_until_loaded);
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WidgetConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WidgetConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.error_display, cfg.error_display);
        assert_eq!(parsed.stale_responses, cfg.stale_responses);
    }

    #[test]
    fn config_toml_minimal_uses_defaults() {
        let cfg: WidgetConfig = toml::from_str(r#"base_url = "http://heroes.local/""#).unwrap();
        assert_eq!(cfg.error_display, ErrorDisplay::Region);
        assert_eq!(cfg.stale_responses, StalePolicy::Discard);
        assert!(cfg.disable_trigger_until_loaded);
        assert!(cfg.timeout_secs.is_none());
    }

    #[test]
    fn config_toml_legacy_behaviour() {
        let toml = r#"
            base_url = "http://heroes.local/"
            error_display = "silent"
            stale_responses = "last-arrival"
            disable_trigger_until_loaded = false
            connect_timeout_secs = 5
            timeout_secs = 30

            [retry]
            max_attempts = 2
            base_delay_secs = 0.5
            max_delay_secs = 4
        "#;
        let cfg: WidgetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.error_display, ErrorDisplay::Silent);
        assert_eq!(cfg.stale_responses, StalePolicy::LastArrival);
        assert!(!cfg.disable_trigger_until_loaded);
        assert_eq!(cfg.connect_timeout_secs, Some(5));
        assert_eq!(cfg.timeout_secs, Some(30));
        let retry = cfg.retry.as_ref().unwrap();
        assert_eq!(retry.max_attempts, 2);
        assert!((retry.base_delay_secs - 0.5).abs() < 1e-9);
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "base_url = \"http://10.0.0.2:8080/\"").unwrap();
        writeln!(f, "error_display = \"silent\"").unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.base_url, "http://10.0.0.2:8080/");
        assert_eq!(cfg.error_display, ErrorDisplay::Silent);
    }

    #[test]
    fn load_from_bad_file_names_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "error_display = 3").unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }

    #[test]
    fn load_from_rejects_infinite_retry_delay() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "base_url = \"http://heroes.local/\"").unwrap();
        writeln!(f, "[retry]").unwrap();
        writeln!(f, "max_attempts = 3").unwrap();
        writeln!(f, "base_delay_secs = inf").unwrap();
        writeln!(f, "max_delay_secs = 5").unwrap();
        let err = load_from(f.path()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid config"), "{msg}");
        assert!(msg.contains("base_delay_secs"), "{msg}");
    }

    #[test]
    fn retry_base_delay_bounds() {
        let mut retry = RetryConfig::default();
        assert_eq!(retry.base_delay(), Some(Duration::from_millis(250)));
        retry.base_delay_secs = 0.0;
        assert_eq!(retry.base_delay(), Some(Duration::ZERO));
        for bad in [-0.5, f64::NAN, f64::INFINITY, 1e300] {
            retry.base_delay_secs = bad;
            assert!(retry.base_delay().is_none(), "{bad}");
            assert!(retry.check().is_err(), "{bad}");
        }
    }
}
