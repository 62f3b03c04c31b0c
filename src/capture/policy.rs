// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::FutureExt;
use std::panic::AssertUnwindSafe;

use crate::errors::{panic_error, CaptureError};
use crate::model::QueueMessage;
use crate::traits::{BindingMetadata, FunctionDefinition, InvocationContext};

/// Decides whether an invocation is queue-triggered and, if so, pulls the
/// triggering message out of the host.
///
/// Applicability is a cheap metadata check and is kept separate from
/// extraction, so a skipped invocation can be told apart from a queue
/// invocation whose message could not be read.
#[derive(Debug, Clone)]
pub struct CapturePolicy {
    trigger_type: String,
}

impl CapturePolicy {
    pub fn new(trigger_type: impl Into<String>) -> Self {
        Self {
            trigger_type: trigger_type.into(),
        }
    }

    pub fn trigger_type(&self) -> &str {
        &self.trigger_type
    }

    /// True iff some input binding's type equals the trigger type, ignoring case.
    pub fn is_applicable(&self, definition: &FunctionDefinition) -> bool {
        self.trigger_binding(definition).is_some()
    }

    /// First input binding (in binding-name order) carrying the trigger type.
    pub fn trigger_binding<'a>(&self, definition: &'a FunctionDefinition) -> Option<&'a BindingMetadata> {
        definition
            .input_bindings
            .values()
            .find(|binding| binding.binding_type.eq_ignore_ascii_case(&self.trigger_type))
    }

    /// Materialize the triggering message through the host's binding mechanism.
    ///
    /// Never panics past this boundary: a failing or panicking host call is
    /// reported as [`CaptureError::ExtractionFailed`].
    pub async fn extract_message(&self, ctx: &dyn InvocationContext) -> Result<QueueMessage, CaptureError> {
        let definition = ctx.function_definition();
        let handler_name = definition.name.clone();

        let binding = self
            .trigger_binding(definition)
            .ok_or_else(|| CaptureError::NoTriggerBinding {
                handler_name: handler_name.clone(),
                trigger_type: self.trigger_type.clone(),
            })?;

        let bound = AssertUnwindSafe(ctx.bind_input(binding))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(panic_error(panic)));

        match bound {
            Ok(Some(result)) => result
                .value
                .ok_or(CaptureError::BindingUnavailable { handler_name }),
            Ok(None) => Err(CaptureError::BindingUnavailable { handler_name }),
            Err(source) => Err(CaptureError::ExtractionFailed {
                handler_name,
                source,
            }),
        }
    }
}
