//! # Storefront Configuration
//!
//! Flow timings, the toast bound, the demo login name and the suggestion
//! collaborator choice.
//!
//! ## Configuration Sources (in order of precedence)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Environment variables (MONNGON_*)              ← highest priority   │
//! │  2. storefront.toml in the platform config dir                          │
//! │       Linux:   ~/.config/storefront/storefront.toml                     │
//! │       macOS:   ~/Library/Application Support/vn.monngon.storefront/     │
//! │       Windows: %APPDATA%\monngon\storefront\config\                     │
//! │  3. Built-in defaults                              ← lowest priority    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! [timing]
//! login_delay_ms = 1500
//! checkout_delay_ms = 2000
//! suggestion_delay_ms = 1500
//! toast_ttl_ms = 3000
//!
//! [notifications]
//! max_toasts = 5        # omit for no cap
//!
//! [session]
//! demo_display_name = "Nguyễn Văn Thực Thần"
//!
//! [assistant]
//! provider = "canned"   # or "disabled"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use monngon_core::validation::validate_display_name;
use monngon_core::{
    DEFAULT_CHECKOUT_DELAY_MS, DEFAULT_LOGIN_DELAY_MS, DEFAULT_MAX_TOASTS,
    DEFAULT_SUGGESTION_DELAY_MS, DEFAULT_TOAST_TTL_MS, DEMO_DISPLAY_NAME,
};

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// Fixed delays of the simulated flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSettings {
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,

    #[serde(default = "default_checkout_delay")]
    pub checkout_delay_ms: u64,

    #[serde(default = "default_suggestion_delay")]
    pub suggestion_delay_ms: u64,

    /// How long a toast stays up unless dismissed.
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_ms: u64,
}

fn default_login_delay() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

fn default_checkout_delay() -> u64 {
    DEFAULT_CHECKOUT_DELAY_MS
}

fn default_suggestion_delay() -> u64 {
    DEFAULT_SUGGESTION_DELAY_MS
}

fn default_toast_ttl() -> u64 {
    DEFAULT_TOAST_TTL_MS
}

impl Default for TimingSettings {
    fn default() -> Self {
        TimingSettings {
            login_delay_ms: default_login_delay(),
            checkout_delay_ms: default_checkout_delay(),
            suggestion_delay_ms: default_suggestion_delay(),
            toast_ttl_ms: default_toast_ttl(),
        }
    }
}

impl TimingSettings {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Toasts on screen at once; the oldest is evicted beyond this.
    /// `None` keeps every toast until its TTL or dismissal.
    #[serde(default = "default_max_toasts", skip_serializing_if = "Option::is_none")]
    pub max_toasts: Option<usize>,
}

fn default_max_toasts() -> Option<usize> {
    DEFAULT_MAX_TOASTS
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            max_toasts: default_max_toasts(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Name every successful login signs in as.
    #[serde(default = "default_demo_name")]
    pub demo_display_name: String,
}

fn default_demo_name() -> String {
    DEMO_DISPLAY_NAME.to_string()
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            demo_display_name: default_demo_name(),
        }
    }
}

/// Which suggestion collaborator backs the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Fixed demo reply.
    #[default]
    Canned,

    /// No collaborator; every request gets the "not configured" reply.
    Disabled,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Canned => write!(f, "canned"),
            ProviderKind::Disabled => write!(f, "disabled"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canned" | "demo" => Ok(ProviderKind::Canned),
            "disabled" | "none" | "off" => Ok(ProviderKind::Disabled),
            other => Err(ConfigError::Invalid(format!(
                "Unknown assistant provider: '{}'. Valid options: canned, disabled",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantSettings {
    #[serde(default)]
    pub provider: ProviderKind,
}

// =============================================================================
// Root Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,

    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub assistant: AssistantSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file and environment.
    ///
    /// `config_path` defaults to [`StorefrontConfig::default_config_path`].
    /// A missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.notifications.max_toasts == Some(0) {
            return Err(ConfigError::Invalid(
                "notifications.max_toasts must be greater than 0".into(),
            ));
        }

        if self.timing.toast_ttl_ms == 0 {
            return Err(ConfigError::Invalid(
                "timing.toast_ttl_ms must be greater than 0".into(),
            ));
        }

        validate_display_name(&self.session.demo_display_name)
            .map_err(|e| ConfigError::Invalid(format!("session.demo_display_name: {}", e)))?;

        Ok(())
    }

    /// Applies `MONNGON_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |key: &str, target: &mut u64| {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<u64>() {
                    Ok(ms) => {
                        debug!(key, ms, "Overriding timing from environment");
                        *target = ms;
                    }
                    Err(_) => warn!(key, value = %raw, "Ignoring non-numeric override"),
                }
            }
        };

        millis("MONNGON_LOGIN_DELAY_MS", &mut self.timing.login_delay_ms);
        millis("MONNGON_CHECKOUT_DELAY_MS", &mut self.timing.checkout_delay_ms);
        millis("MONNGON_SUGGESTION_DELAY_MS", &mut self.timing.suggestion_delay_ms);
        millis("MONNGON_TOAST_TTL_MS", &mut self.timing.toast_ttl_ms);

        // "0" or "unbounded" lifts the cap.
        if let Some(raw) = lookup("MONNGON_MAX_TOASTS") {
            match raw.trim() {
                "0" | "unbounded" => self.notifications.max_toasts = None,
                value => match value.parse::<usize>() {
                    Ok(max) => self.notifications.max_toasts = Some(max),
                    Err(_) => warn!(value = %raw, "Ignoring non-numeric MONNGON_MAX_TOASTS"),
                },
            }
        }

        if let Some(name) = lookup("MONNGON_DEMO_NAME") {
            self.session.demo_display_name = name;
        }

        if let Some(raw) = lookup("MONNGON_ASSISTANT") {
            match raw.parse() {
                Ok(kind) => {
                    debug!(provider = %kind, "Overriding assistant provider from environment");
                    self.assistant.provider = kind;
                }
                Err(e) => warn!("{}", e),
            }
        }
    }

    /// Platform config location, `None` if no home directory is known.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("vn", "monngon", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
