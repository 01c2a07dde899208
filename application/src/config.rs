//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Platform API configuration.
    pub platform: Platform,

    /// Session storage configuration.
    pub session: Session,

    /// Agency contact block of share artifacts.
    pub contact: Contact,

    /// Console behavior configuration.
    pub console: Console,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Platform API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Platform {
    /// Base URL of the platform API.
    #[default("http://127.0.0.1:8000".to_owned())]
    pub base_url: String,

    /// Timeout applied to every request.
    #[default(time::Duration::from_secs(30))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<&Platform> for service::infra::gateway::rest::Config {
    fn from(value: &Platform) -> Self {
        Self {
            base_url: value.base_url.clone(),
            timeout: value.timeout,
        }
    }
}

/// Session storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Session {
    /// Path of the session file.
    #[default(".goimomi/session.json".to_owned())]
    pub file: String,
}

/// Agency contact block of share artifacts.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Contact {
    /// Agency name.
    #[default("Goimomi Holidays".to_owned())]
    pub name: String,

    /// Agency phone number.
    #[default("+91 90000 00000".to_owned())]
    pub phone: String,

    /// Agency email address.
    #[default("hello@goimomiholidays.example".to_owned())]
    pub email: String,
}

impl From<&Contact> for service::share::Contact {
    fn from(value: &Contact) -> Self {
        Self {
            name: value.name.clone(),
            phone: value.phone.clone(),
            email: value.email.clone(),
        }
    }
}

/// Console behavior configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Console {
    /// How long a submission success notice stays up before the enquiry
    /// form resets.
    #[default(time::Duration::from_secs(2))]
    #[serde(with = "humantime_serde")]
    pub success_display: time::Duration,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
