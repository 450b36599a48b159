//! Runtime configuration.
//!
//! Built from defaults, then environment variables, then command-line flags.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BUGBOARD_API_URL` | `http://localhost:5255/api` |
//! | `BUGBOARD_TIMEOUT_SECS` | `10` |
//! | `BUGBOARD_NOTIFICATION_MS` | `3000` |
//! | `BUGBOARD_SPLASH_MS` | `2500` |
//! | `BUGBOARD_THEME` | `dark` |
//! | `BUGBOARD_LOG_FILE` | `<data dir>/bugboard/bugboard.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::ui::theme::ThemeMode;

pub const DEFAULT_API_URL: &str = "http://localhost:5255/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(2500);

pub const ENV_API_URL: &str = "BUGBOARD_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "BUGBOARD_TIMEOUT_SECS";
pub const ENV_NOTIFICATION_MS: &str = "BUGBOARD_NOTIFICATION_MS";
pub const ENV_SPLASH_MS: &str = "BUGBOARD_SPLASH_MS";
pub const ENV_THEME: &str = "BUGBOARD_THEME";
pub const ENV_LOG_FILE: &str = "BUGBOARD_LOG_FILE";

pub const USAGE: &str = "\
Usage: bugboard [OPTIONS]

Options:
  --api-url <URL>  Base URL of the issues API (env: BUGBOARD_API_URL)
  --dark           Start with the dark theme
  --light          Start with the light theme
  --version        Print version and exit
  -h, --help       Print this help and exit
";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL the `/Issues` path is appended to, without a trailing slash
    pub api_url: String,
    pub request_timeout: Duration,
    pub notification_ttl: Duration,
    pub splash_delay: Duration,
    pub theme: ThemeMode,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            notification_ttl: crate::state::DEFAULT_NOTIFICATION_TTL,
            splash_delay: DEFAULT_SPLASH_DELAY,
            theme: ThemeMode::default(),
            log_file: default_log_file(),
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(Config),
    Help,
    Version,
}

fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("bugboard").join("bugboard.log"))
}

fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed =
        reqwest::Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_number(var: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var: var.to_string(),
        value: value.to_string(),
    })
}

impl Config {
    /// Defaults overridden by process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config.api_url = normalize_url(&url)?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(ms) = lookup(ENV_NOTIFICATION_MS) {
            config.notification_ttl =
                Duration::from_millis(parse_number(ENV_NOTIFICATION_MS, &ms)?);
        }
        if let Some(ms) = lookup(ENV_SPLASH_MS) {
            config.splash_delay = Duration::from_millis(parse_number(ENV_SPLASH_MS, &ms)?);
        }
        if let Some(theme) = lookup(ENV_THEME) {
            config.theme =
                ThemeMode::from_name(&theme).ok_or(ConfigError::InvalidTheme(theme))?;
        }
        if let Some(path) = lookup(ENV_LOG_FILE).filter(|v| !v.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args<I, S>(mut self, args: I) -> Result<CliCommand, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliCommand::Help),
                "--version" => return Ok(CliCommand::Version),
                "--dark" => self.theme = ThemeMode::Dark,
                "--light" => self.theme = ThemeMode::Light,
                "--api-url" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue("--api-url".to_string()))?;
                    self.api_url = normalize_url(&value)?;
                }
                other => match other.strip_prefix("--api-url=") {
                    Some(value) => self.api_url = normalize_url(value)?,
                    None => return Err(ConfigError::UnknownArgument(other.to_string())),
                },
            }
        }
        Ok(CliCommand::Run(self))
    }
}
