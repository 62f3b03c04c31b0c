// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::errors::BoxError;
use crate::model::QueueMessage;

/// A named input binding declared by a handler, e.g. `serviceBusTrigger`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingMetadata {
    pub name: String,
    pub binding_type: String,
}

impl BindingMetadata {
    pub fn new(name: impl Into<String>, binding_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding_type: binding_type.into(),
        }
    }
}

/// Handler descriptor: its name plus its input bindings keyed by binding name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub name: String,
    pub input_bindings: BTreeMap<String, BindingMetadata>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_bindings: BTreeMap::new(),
        }
    }

    pub fn with_binding(mut self, name: impl Into<String>, binding_type: impl Into<String>) -> Self {
        let name = name.into();
        self.input_bindings
            .insert(name.clone(), BindingMetadata::new(name, binding_type));
        self
    }
}

/// What the host hands back from a binding request. `value` is `None` when the
/// host produced a result but could not materialize a message into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingResult {
    pub value: Option<QueueMessage>,
}

/// Per-invocation context supplied by the host that drives the pipeline.
///
/// The wire tap only reads from it. `bind_input` is the host's binding
/// mechanism; it may suspend, and returning `Ok(None)` means the host has no
/// result for that binding.
#[async_trait]
pub trait InvocationContext: Send + Sync {
    fn invocation_id(&self) -> &str;

    fn function_definition(&self) -> &FunctionDefinition;

    async fn bind_input(&self, binding: &BindingMetadata) -> Result<Option<BindingResult>, BoxError>;
}
