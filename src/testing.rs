// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test doubles for the wire tap: a recording log sink, counting and failing
//! handlers, hosts whose binding call misbehaves, and misbehaving hooks.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;

use crate::config::consts::SERVICE_BUS_TRIGGER;
use crate::errors::BoxError;
use crate::model::MessageRecord;
use crate::observability::messages::StructuredLog;
use crate::traits::{
    BindingMetadata, BindingResult, CaptureHook, FunctionDefinition, Handler, InvocationContext,
    InvocationResult, LogSink,
};

/// A sink that keeps every line it is given, with its level.
#[derive(Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .count()
    }

    /// Lines whose text contains `needle`.
    pub fn containing(&self, needle: &str) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, text)| text.contains(needle))
            .cloned()
            .collect()
    }
}

impl LogSink for RecordingSink {
    fn write(&self, entry: &dyn StructuredLog) {
        self.entries
            .lock()
            .unwrap()
            .push((entry.level(), entry.to_string()));
    }
}

/// A handler that counts calls and remembers which invocation it saw.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
    seen_invocations: Arc<Mutex<Vec<String>>>,
}

impl CountingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn seen_invocations(&self) -> Vec<String> {
        self.seen_invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, ctx: &dyn InvocationContext) -> InvocationResult {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.seen_invocations
            .lock()
            .unwrap()
            .push(ctx.invocation_id().to_string());
        Ok(())
    }
}

/// A handler that always fails with an `io::Error` carrying `message`.
#[derive(Clone)]
pub struct FailingHandler {
    pub message: String,
    count: Arc<AtomicUsize>,
}

impl FailingHandler {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(&self, _ctx: &dyn InvocationContext) -> InvocationResult {
        self.count.fetch_add(1, Ordering::SeqCst);
        Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::Other,
            self.message.clone(),
        )))
    }
}

enum BindBehavior {
    NullValue,
    Fail(String),
    Panic,
}

/// A queue-triggered invocation whose host binding call misbehaves in a
/// scripted way.
pub struct ScriptedContext {
    definition: FunctionDefinition,
    behavior: BindBehavior,
}

impl ScriptedContext {
    fn queue_triggered(handler_name: &str, behavior: BindBehavior) -> Self {
        Self {
            definition: FunctionDefinition::new(handler_name).with_binding("message", SERVICE_BUS_TRIGGER),
            behavior,
        }
    }

    /// Host returns a binding result whose value is empty.
    pub fn null_value(handler_name: &str) -> Self {
        Self::queue_triggered(handler_name, BindBehavior::NullValue)
    }

    /// Host binding call returns an error.
    pub fn failing(handler_name: &str, message: &str) -> Self {
        Self::queue_triggered(handler_name, BindBehavior::Fail(message.to_string()))
    }

    /// Host binding call panics.
    pub fn panicking(handler_name: &str) -> Self {
        Self::queue_triggered(handler_name, BindBehavior::Panic)
    }
}

#[async_trait]
impl InvocationContext for ScriptedContext {
    fn invocation_id(&self) -> &str {
        "scripted-invocation"
    }

    fn function_definition(&self) -> &FunctionDefinition {
        &self.definition
    }

    async fn bind_input(&self, _binding: &BindingMetadata) -> Result<Option<BindingResult>, BoxError> {
        match &self.behavior {
            BindBehavior::NullValue => Ok(Some(BindingResult { value: None })),
            BindBehavior::Fail(message) => Err(message.clone().into()),
            BindBehavior::Panic => panic!("binding exploded"),
        }
    }
}

/// A hook that keeps every record it receives.
#[derive(Clone, Default)]
pub struct RecordingHook {
    records: Arc<Mutex<Vec<MessageRecord>>>,
}

impl RecordingHook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<MessageRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl CaptureHook for RecordingHook {
    async fn on_captured(&self, record: &MessageRecord) -> Result<(), BoxError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// A hook that always returns an error.
pub struct FailingHook(pub &'static str);

#[async_trait]
impl CaptureHook for FailingHook {
    async fn on_captured(&self, _record: &MessageRecord) -> Result<(), BoxError> {
        Err(self.0.into())
    }
}

/// A hook that always panics.
pub struct PanickingHook;

#[async_trait]
impl CaptureHook for PanickingHook {
    async fn on_captured(&self, _record: &MessageRecord) -> Result<(), BoxError> {
        panic!("hook exploded")
    }
}
