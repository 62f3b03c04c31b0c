// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the wire tap's invocation lifecycle.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Level;

/// The handler is not queue-triggered, so nothing is captured.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct TapSkipped<'a> {
    pub handler_name: &'a str,
}

impl Display for TapSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Handler '{}' does not use a queue trigger. Skipping wire tap.",
            self.handler_name
        )
    }
}

impl StructuredLog for TapSkipped<'_> {
    fn level(&self) -> Level {
        Level::DEBUG
    }

    fn log(&self) {
        tracing::debug!(handler_name = self.handler_name, "{}", self);
    }
}

/// The handler is queue-triggered; capture is about to be attempted.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct TapInvoked<'a> {
    pub handler_name: &'a str,
    pub invocation_id: &'a str,
}

impl Display for TapInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wire tap invoked for queue-triggered handler '{}' (invocation {})",
            self.handler_name, self.invocation_id
        )
    }
}

impl StructuredLog for TapInvoked<'_> {
    fn level(&self) -> Level {
        Level::DEBUG
    }

    fn log(&self) {
        tracing::debug!(
            handler_name = self.handler_name,
            invocation_id = self.invocation_id,
            "{}", self
        );
    }
}

/// The rest of the pipeline failed. The original error is returned unchanged
/// after this line is written.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use servicebus_wiretap::observability::messages::tap::InvocationFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "database unavailable");
/// let msg = InvocationFailed {
///     handler_name: "OrderProcessing",
///     error: &error,
/// };
///
/// assert!(msg.to_string().contains("OrderProcessing"));
/// ```
pub struct InvocationFailed<'a> {
    pub handler_name: &'a str,
    pub error: &'a (dyn std::error::Error + 'static),
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Exception thrown in wire tap during execution of handler '{}': {}",
            self.handler_name, self.error
        )
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn log(&self) {
        tracing::error!(
            handler_name = self.handler_name,
            error = %self.error,
            "{}", self
        );
    }
}

/// The tap itself failed outside its isolation points.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct TapDefectDetected<'a> {
    pub handler_name: &'a str,
    pub error: &'a (dyn std::error::Error + 'static),
}

impl Display for TapDefectDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wire tap defect while capturing for handler '{}': {}",
            self.handler_name, self.error
        )
    }
}

impl StructuredLog for TapDefectDetected<'_> {
    fn level(&self) -> Level {
        Level::ERROR
    }

    fn log(&self) {
        tracing::error!(
            handler_name = self.handler_name,
            error = %self.error,
            "{}", self
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_message_names_handler() {
        let msg = TapSkipped {
            handler_name: "HealthCheck",
        };
        assert_eq!(msg.level(), Level::DEBUG);
        assert_eq!(
            msg.to_string(),
            "Handler 'HealthCheck' does not use a queue trigger. Skipping wire tap."
        );
    }

    #[test]
    fn test_failure_levels() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let failed = InvocationFailed {
            handler_name: "OrderProcessing",
            error: &error,
        };
        let defect = TapDefectDetected {
            handler_name: "OrderProcessing",
            error: &error,
        };

        assert_eq!(failed.level(), Level::ERROR);
        assert_eq!(defect.level(), Level::ERROR);
        assert!(failed.to_string().ends_with("boom"));
        assert!(defect.to_string().contains("defect"));
    }
}
