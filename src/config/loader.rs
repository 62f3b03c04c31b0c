// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::SERVICE_BUS_TRIGGER;
use crate::errors::ConfigError;
use crate::traits::CaptureHook;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Configuration for the wire tap.
///
/// Built once at startup and shared read-only (behind an `Arc`) by every
/// invocation. Everything except the custom hook can be loaded from YAML; all
/// keys are optional and fall back to the defaults below.
///
/// # Fields
/// * `log_level` - Level at which captured records are emitted (default `info`)
/// * `include_body` - Attach the message body to the record (default `true`)
/// * `max_body_bytes_to_log` - Cut the body to at most this many bytes (default: no cap)
/// * `include_application_properties` - Default `true`
/// * `include_user_properties` - Default `true`
/// * `trigger_binding_type` - Binding type tag that marks a queue trigger
///   (default `serviceBusTrigger`)
/// * `custom_hook` - Optional async callback run after each record is logged
///   (programmatic only)
///
/// Both property maps of a record are currently filled regardless of the two
/// `include_*_properties` flags.
///
/// # Example
/// ```yaml
/// log_level: debug
/// include_body: true
/// max_body_bytes_to_log: 4096
/// trigger_binding_type: serviceBusTrigger
/// ```
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct WireTapOptions {
    #[serde(alias = "minimum_log_level")]
    pub log_level: LogLevel,
    pub include_body: bool,
    pub max_body_bytes_to_log: Option<usize>,
    pub include_application_properties: bool,
    pub include_user_properties: bool,
    pub trigger_binding_type: String,
    #[serde(skip)]
    pub custom_hook: Option<Arc<dyn CaptureHook>>,
}

impl Default for WireTapOptions {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            include_body: true,
            max_body_bytes_to_log: None,
            include_application_properties: true,
            include_user_properties: true,
            trigger_binding_type: SERVICE_BUS_TRIGGER.to_string(),
            custom_hook: None,
        }
    }
}

impl fmt::Debug for WireTapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireTapOptions")
            .field("log_level", &self.log_level)
            .field("include_body", &self.include_body)
            .field("max_body_bytes_to_log", &self.max_body_bytes_to_log)
            .field("include_application_properties", &self.include_application_properties)
            .field("include_user_properties", &self.include_user_properties)
            .field("trigger_binding_type", &self.trigger_binding_type)
            .field("custom_hook", &self.custom_hook.is_some())
            .finish()
    }
}

impl WireTapOptions {
    /// Parse options from a YAML document and validate them.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let options: WireTapOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_binding_type.trim().is_empty() {
            return Err(ConfigError::EmptyTriggerType);
        }
        Ok(())
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_body(mut self, include_body: bool) -> Self {
        self.include_body = include_body;
        self
    }

    pub fn with_max_body_bytes(mut self, max_bytes: usize) -> Self {
        self.max_body_bytes_to_log = Some(max_bytes);
        self
    }

    pub fn with_trigger_binding_type(mut self, binding_type: impl Into<String>) -> Self {
        self.trigger_binding_type = binding_type.into();
        self
    }

    /// Install the hook that receives every successfully captured record.
    pub fn with_custom_hook(mut self, hook: impl CaptureHook + 'static) -> Self {
        self.custom_hook = Some(Arc::new(hook));
        self
    }
}

/// Log level for captured records.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Load wire tap options from a YAML file
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<WireTapOptions, ConfigError> {
    let content = fs::read_to_string(path)?;
    WireTapOptions::from_yaml_str(&content)
}
