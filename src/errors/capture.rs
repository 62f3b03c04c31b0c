// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while locating and binding the triggering queue message.

use super::BoxError;
use thiserror::Error;

/// Reasons the capture policy could not produce a queue message.
///
/// None of these ever leave the wire tap; they are logged as warnings and the
/// invocation continues.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The handler declares no input binding with the queue trigger type.
    #[error("no '{trigger_type}' input binding found for handler '{handler_name}'")]
    NoTriggerBinding {
        handler_name: String,
        trigger_type: String,
    },

    /// The host returned no binding result, or a result without a value.
    #[error("failed to bind input to a queue message for handler '{handler_name}'")]
    BindingUnavailable { handler_name: String },

    /// The host's binding call failed (or panicked).
    #[error("exception extracting queue message for handler '{handler_name}': {source}")]
    ExtractionFailed {
        handler_name: String,
        #[source]
        source: BoxError,
    },
}

impl CaptureError {
    /// Stable tag naming the failure kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureError::NoTriggerBinding { .. } => "no_trigger_binding",
            CaptureError::BindingUnavailable { .. } => "binding_unavailable",
            CaptureError::ExtractionFailed { .. } => "extraction_failed",
        }
    }

    pub fn handler_name(&self) -> &str {
        match self {
            CaptureError::NoTriggerBinding { handler_name, .. }
            | CaptureError::BindingUnavailable { handler_name }
            | CaptureError::ExtractionFailed { handler_name, .. } => handler_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_kind_tags_are_distinct() {
        let no_binding = CaptureError::NoTriggerBinding {
            handler_name: "orders".to_string(),
            trigger_type: "serviceBusTrigger".to_string(),
        };
        let unavailable = CaptureError::BindingUnavailable {
            handler_name: "orders".to_string(),
        };
        let failed = CaptureError::ExtractionFailed {
            handler_name: "orders".to_string(),
            source: "connection reset".into(),
        };

        assert_eq!(no_binding.kind(), "no_trigger_binding");
        assert_eq!(unavailable.kind(), "binding_unavailable");
        assert_eq!(failed.kind(), "extraction_failed");
        assert_eq!(failed.handler_name(), "orders");
    }

    #[test]
    fn test_extraction_failed_keeps_cause() {
        let failed = CaptureError::ExtractionFailed {
            handler_name: "orders".to_string(),
            source: "connection reset".into(),
        };

        assert!(failed.to_string().contains("connection reset"));
        assert_eq!(failed.source().unwrap().to_string(), "connection reset");
    }
}
