// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::BoxError;
use crate::model::QueueMessage;
use crate::traits::{BindingMetadata, BindingResult, FunctionDefinition, InvocationContext};

/// An invocation context for hosts that already hold the decoded message,
/// e.g. a consumer loop that received it from the broker itself.
///
/// `bind_input` hands out a copy of the held message for any binding declared
/// on the handler, and `Ok(None)` when no message is held.
///
/// # Example
/// ```
/// use servicebus_wiretap::host::StaticInvocation;
/// use servicebus_wiretap::traits::InvocationContext;
/// use servicebus_wiretap::QueueMessage;
///
/// let ctx = StaticInvocation::new("OrderProcessing")
///     .with_binding("message", "serviceBusTrigger")
///     .with_message(QueueMessage::default());
///
/// assert_eq!(ctx.function_definition().name, "OrderProcessing");
/// assert!(!ctx.invocation_id().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct StaticInvocation {
    invocation_id: String,
    definition: FunctionDefinition,
    message: Option<QueueMessage>,
}

impl StaticInvocation {
    /// New invocation of `handler_name` with a random invocation id and no bindings.
    pub fn new(handler_name: impl Into<String>) -> Self {
        Self {
            invocation_id: Uuid::new_v4().to_string(),
            definition: FunctionDefinition::new(handler_name),
            message: None,
        }
    }

    pub fn with_invocation_id(mut self, invocation_id: impl Into<String>) -> Self {
        self.invocation_id = invocation_id.into();
        self
    }

    pub fn with_binding(mut self, name: impl Into<String>, binding_type: impl Into<String>) -> Self {
        self.definition = self.definition.with_binding(name, binding_type);
        self
    }

    pub fn with_message(mut self, message: QueueMessage) -> Self {
        self.message = Some(message);
        self
    }
}

#[async_trait]
impl InvocationContext for StaticInvocation {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn function_definition(&self) -> &FunctionDefinition {
        &self.definition
    }

    async fn bind_input(&self, binding: &BindingMetadata) -> Result<Option<BindingResult>, BoxError> {
        if !self.definition.input_bindings.contains_key(&binding.name) {
            return Err(format!(
                "binding '{}' is not declared by handler '{}'",
                binding.name, self.definition.name
            )
            .into());
        }

        Ok(self.message.clone().map(|message| BindingResult {
            value: Some(message),
        }))
    }
}
