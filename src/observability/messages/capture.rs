// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for capturing queue messages.
//!
//! This module contains message types for logging events related to:
//! * The structured record of a captured message
//! * Failure to locate or bind the triggering message
//! * Failure of the user's capture hook

use crate::config::LogLevel;
use crate::errors::CaptureError;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Level;

/// A queue message was captured; carries the serialized record.
///
/// # Log Level
/// Configured by `WireTapOptions::log_level` (default `info!`)
///
/// # Example
/// ```
/// use servicebus_wiretap::config::LogLevel;
/// use servicebus_wiretap::observability::messages::capture::MessageCaptured;
///
/// let msg = MessageCaptured {
///     handler_name: "OrderProcessing",
///     message_id: Some("msg-001"),
///     sequence_number: 42,
///     record_json: r#"{"messageId":"msg-001"}"#,
///     level: LogLevel::Info,
/// };
///
/// assert!(msg.to_string().ends_with(r#"{"messageId":"msg-001"}"#));
/// ```
pub struct MessageCaptured<'a> {
    pub handler_name: &'a str,
    pub message_id: Option<&'a str>,
    pub sequence_number: i64,
    pub record_json: &'a str,
    pub level: LogLevel,
}

impl Display for MessageCaptured<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Successfully intercepted and logged queue message: {}",
            self.record_json
        )
    }
}

impl StructuredLog for MessageCaptured<'_> {
    fn level(&self) -> Level {
        self.level.into()
    }

    fn log(&self) {
        macro_rules! captured {
            ($event:ident) => {
                tracing::$event!(
                    handler_name = self.handler_name,
                    message_id = self.message_id,
                    sequence_number = self.sequence_number,
                    "{}", self
                )
            };
        }

        match self.level {
            LogLevel::Trace => captured!(trace),
            LogLevel::Debug => captured!(debug),
            LogLevel::Info => captured!(info),
            LogLevel::Warn => captured!(warn),
            LogLevel::Error => captured!(error),
        }
    }
}

/// The handler is queue-triggered but the message could not be read.
///
/// # Log Level
/// `warn!` - Degraded behavior, invocation continues
pub struct MessageNotRetrieved<'a> {
    pub handler_name: &'a str,
    pub error: &'a CaptureError,
}

impl Display for MessageNotRetrieved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wire tap could not retrieve a queue message for handler '{}' ({}): {}. Skipping capture.",
            self.handler_name,
            self.error.kind(),
            self.error
        )
    }
}

impl StructuredLog for MessageNotRetrieved<'_> {
    fn level(&self) -> Level {
        Level::WARN
    }

    fn log(&self) {
        tracing::warn!(
            handler_name = self.handler_name,
            failure_kind = self.error.kind(),
            error = %self.error,
            "{}", self
        );
    }
}

/// The custom hook failed for a captured message. The failure is swallowed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CaptureHookFailed<'a> {
    pub message_id: Option<&'a str>,
    pub error: &'a (dyn std::error::Error + 'static),
}

impl Display for CaptureHookFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Error occurred while executing the custom hook for intercepted queue message with ID '{}': {}",
            self.message_id.unwrap_or("<none>"),
            self.error
        )
    }
}

impl StructuredLog for CaptureHookFailed<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn log(&self) {
        tracing::error!(
            message_id = self.message_id,
            error = %self.error,
            "{}", self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_level_follows_options() {
        let msg = MessageCaptured {
            handler_name: "OrderProcessing",
            message_id: None,
            sequence_number: 1,
            record_json: "{}",
            level: LogLevel::Warn,
        };
        assert_eq!(msg.level(), Level::WARN);
    }

    #[test]
    fn test_not_retrieved_names_failure_kind() {
        let error = CaptureError::BindingUnavailable {
            handler_name: "OrderProcessing".to_string(),
        };
        let msg = MessageNotRetrieved {
            handler_name: "OrderProcessing",
            error: &error,
        };

        let text = msg.to_string();
        assert!(text.contains("could not retrieve"));
        assert!(text.contains("binding_unavailable"));
        assert_eq!(msg.level(), Level::WARN);
    }

    #[test]
    fn test_hook_failure_references_message_id() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "metrics backend down");
        let msg = CaptureHookFailed {
            message_id: Some("msg-001"),
            error: &error,
        };

        assert!(msg.to_string().contains("'msg-001'"));
        assert_eq!(msg.level(), Level::ERROR);
    }
}
