// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::Instrument;

use crate::capture::CapturePolicy;
use crate::config::WireTapOptions;
use crate::errors::{panic_error, BoxError, CaptureError, TapError};
use crate::model::MessageRecord;
use crate::observability::messages::capture::{CaptureHookFailed, MessageCaptured, MessageNotRetrieved};
use crate::observability::messages::tap::{InvocationFailed, TapDefectDetected, TapInvoked, TapSkipped};
use crate::traits::{CaptureHook, InvocationContext, InvocationResult, LogSink, Middleware, Next, TracingSink};

/// Where capture ended up for one invocation, before the rest of the pipeline runs.
#[derive(Debug)]
pub enum CaptureOutcome {
    /// No input binding carries the queue trigger type.
    NotApplicable,
    /// Queue-triggered, but the message could not be read.
    ExtractFailed(CaptureError),
    /// The record was logged (and handed to the hook, if any).
    Captured(MessageRecord),
}

/// The wire tap pipeline stage.
///
/// Observes queue-triggered invocations, logs a structured record of the
/// triggering message, optionally hands the record to a user hook, and then
/// runs the rest of the pipeline exactly once. Failures to read the message
/// and hook failures are logged and absorbed; they never change the
/// invocation's result. An error from the rest of the pipeline is logged and
/// returned as the very same value.
///
/// Holds no per-invocation state, so one instance serves concurrent
/// invocations.
///
/// # Example
/// ```
/// use servicebus_wiretap::host::StaticInvocation;
/// use servicebus_wiretap::{CaptureOutcome, QueueMessage, WireTap, WireTapOptions};
///
/// # let rt = tokio::runtime::Runtime::new().unwrap();
/// # rt.block_on(async {
/// let tap = WireTap::with_tracing(WireTapOptions::default());
/// let ctx = StaticInvocation::new("OrderProcessing")
///     .with_binding("message", "serviceBusTrigger")
///     .with_message(QueueMessage { sequence_number: 7, ..Default::default() });
///
/// let outcome = tap.capture(&ctx).await.unwrap();
/// assert!(matches!(outcome, CaptureOutcome::Captured(record) if record.sequence_number == 7));
/// # });
/// ```
pub struct WireTap {
    options: Arc<WireTapOptions>,
    policy: CapturePolicy,
    sink: Arc<dyn LogSink>,
}

impl WireTap {
    pub fn new(options: Arc<WireTapOptions>, sink: Arc<dyn LogSink>) -> Self {
        let policy = CapturePolicy::new(options.trigger_binding_type.clone());
        Self {
            options,
            policy,
            sink,
        }
    }

    /// A wire tap that logs through `tracing`.
    pub fn with_tracing(options: WireTapOptions) -> Self {
        Self::new(Arc::new(options), Arc::new(TracingSink))
    }

    pub fn options(&self) -> &WireTapOptions {
        &self.options
    }

    /// Run the capture half of the tap without continuing the pipeline.
    ///
    /// Only a defect in the tap itself is returned as an error; everything that
    /// goes wrong while observing the message is logged and reported through
    /// the outcome.
    pub async fn capture(&self, ctx: &dyn InvocationContext) -> Result<CaptureOutcome, TapError> {
        let definition = ctx.function_definition();
        let handler_name = definition.name.as_str();

        if !self.policy.is_applicable(definition) {
            self.sink.write(&TapSkipped { handler_name });
            return Ok(CaptureOutcome::NotApplicable);
        }

        self.sink.write(&TapInvoked {
            handler_name,
            invocation_id: ctx.invocation_id(),
        });

        let message = match self.policy.extract_message(ctx).await {
            Ok(message) => message,
            Err(error) => {
                self.sink.write(&MessageNotRetrieved {
                    handler_name,
                    error: &error,
                });
                return Ok(CaptureOutcome::ExtractFailed(error));
            }
        };

        let record = MessageRecord::build(handler_name, ctx.invocation_id(), &message, &self.options);
        let record_json = record.to_json().map_err(|source| TapError::Defect {
            handler_name: handler_name.to_string(),
            source: Box::new(source),
        })?;

        self.sink.write(&MessageCaptured {
            handler_name,
            message_id: record.message_id.as_deref(),
            sequence_number: record.sequence_number,
            record_json: &record_json,
            level: self.options.log_level,
        });

        if let Some(hook) = &self.options.custom_hook {
            if let Err(error) = run_hook(hook.as_ref(), &record).await {
                self.sink.write(&CaptureHookFailed {
                    message_id: record.message_id.as_deref(),
                    error: &error,
                });
            }
        }

        Ok(CaptureOutcome::Captured(record))
    }
}

/// Run the user's hook, turning an error or a panic into `HookFailed`.
async fn run_hook(hook: &dyn CaptureHook, record: &MessageRecord) -> Result<(), TapError> {
    let result = AssertUnwindSafe(hook.on_captured(record))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(panic_error(panic)));

    result.map_err(|source| TapError::HookFailed {
        message_id: record.message_id.clone().unwrap_or_default(),
        source,
    })
}

#[async_trait]
impl Middleware for WireTap {
    async fn invoke(&self, ctx: &dyn InvocationContext, next: Next<'_>) -> InvocationResult {
        let handler_name = ctx.function_definition().name.as_str();
        let span = tracing::info_span!(
            "wire_tap",
            handler_name,
            invocation_id = ctx.invocation_id()
        );

        async move {
            if let Err(defect) = self.capture(ctx).await {
                self.sink.write(&TapDefectDetected {
                    handler_name,
                    error: &defect,
                });
                return Err(Box::new(defect) as BoxError);
            }

            next.run(ctx).await.map_err(|error| {
                self.sink.write(&InvocationFailed {
                    handler_name,
                    error: error.as_ref(),
                });
                error
            })
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{HTTP_TRIGGER, SERVICE_BUS_TRIGGER};
    use crate::host::StaticInvocation;
    use crate::model::QueueMessage;
    use crate::testing::{FailingHook, RecordingHook, RecordingSink, ScriptedContext};

    fn tap_with(options: WireTapOptions) -> (WireTap, RecordingSink) {
        let sink = RecordingSink::new();
        let tap = WireTap::new(Arc::new(options), Arc::new(sink.clone()));
        (tap, sink)
    }

    #[tokio::test]
    async fn test_capture_not_applicable() {
        let (tap, sink) = tap_with(WireTapOptions::default());
        let ctx = StaticInvocation::new("Health").with_binding("req", HTTP_TRIGGER);

        let outcome = tap.capture(&ctx).await.unwrap();

        assert!(matches!(outcome, CaptureOutcome::NotApplicable));
        assert_eq!(sink.entries().len(), 1);
        assert_eq!(sink.count_at(tracing::Level::DEBUG), 1);
    }

    #[tokio::test]
    async fn test_capture_extract_failed() {
        let (tap, _sink) = tap_with(WireTapOptions::default());
        let ctx = ScriptedContext::failing("Orders", "lock lost");

        let outcome = tap.capture(&ctx).await.unwrap();

        match outcome {
            CaptureOutcome::ExtractFailed(error) => assert_eq!(error.kind(), "extraction_failed"),
            other => panic!("Expected ExtractFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_capture_returns_record_and_feeds_hook() {
        let hook = RecordingHook::new();
        let (tap, _sink) = tap_with(WireTapOptions::default().with_custom_hook(hook.clone()));
        let ctx = StaticInvocation::new("Orders")
            .with_invocation_id("inv-77")
            .with_binding("message", SERVICE_BUS_TRIGGER)
            .with_message(QueueMessage {
                message_id: Some("msg-77".to_string()),
                ..Default::default()
            });

        let outcome = tap.capture(&ctx).await.unwrap();

        let record = match outcome {
            CaptureOutcome::Captured(record) => record,
            other => panic!("Expected Captured, got {:?}", other),
        };
        assert_eq!(record.invocation_id, "inv-77");
        assert_eq!(hook.records(), vec![record]);
    }

    #[tokio::test]
    async fn test_hook_failure_still_captured() {
        let (tap, sink) = tap_with(WireTapOptions::default().with_custom_hook(FailingHook("nope")));
        let ctx = StaticInvocation::new("Orders")
            .with_binding("message", SERVICE_BUS_TRIGGER)
            .with_message(QueueMessage {
                message_id: Some("msg-1".to_string()),
                ..Default::default()
            });

        let outcome = tap.capture(&ctx).await.unwrap();

        assert!(matches!(outcome, CaptureOutcome::Captured(_)));
        let failures = sink.containing("custom hook");
        assert_eq!(failures.len(), 1);
        assert!(failures[0].1.contains("'msg-1'"));
        assert!(failures[0].1.contains("nope"));
    }

    #[tokio::test]
    async fn test_trigger_type_comes_from_options() {
        let options = WireTapOptions::default().with_trigger_binding_type("queueTrigger");
        let (tap, _sink) = tap_with(options);
        let ctx = StaticInvocation::new("Orders")
            .with_binding("item", "queueTrigger")
            .with_message(QueueMessage::default());

        let outcome = tap.capture(&ctx).await.unwrap();

        assert!(matches!(outcome, CaptureOutcome::Captured(_)));
        assert_eq!(tap.options().trigger_binding_type, "queueTrigger");
    }
}
