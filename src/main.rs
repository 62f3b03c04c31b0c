// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use servicebus_wiretap::config::consts::{HTTP_TRIGGER, SERVICE_BUS_TRIGGER};
use servicebus_wiretap::host::StaticInvocation;
use servicebus_wiretap::traits::{Handler, HookFn, InvocationContext, InvocationResult};
use servicebus_wiretap::{load_options, Pipeline, QueueMessage, WireTapOptions};

/// Stands in for a user's business handler: binds its trigger message and
/// pretends to process the order.
struct OrderProcessingHandler;

#[async_trait]
impl Handler for OrderProcessingHandler {
    async fn handle(&self, ctx: &dyn InvocationContext) -> InvocationResult {
        let definition = ctx.function_definition();
        let Some(binding) = definition.input_bindings.get("message") else {
            tracing::info!(handler_name = %definition.name, "No queue message bound; nothing to process");
            return Ok(());
        };

        if let Some(message) = ctx.bind_input(binding).await?.and_then(|result| result.value) {
            tracing::info!(
                message_id = message.message_id.as_deref().unwrap_or("<none>"),
                "Processing order {}",
                message.body_text()
            );
        }
        Ok(())
    }
}

fn sample_order() -> QueueMessage {
    let mut application_properties = BTreeMap::new();
    application_properties.insert("tenant".to_string(), json!("contoso"));
    application_properties.insert("priority".to_string(), json!(2));
    application_properties.insert("retryReason".to_string(), serde_json::Value::Null);

    QueueMessage {
        message_id: Some("order-1017".to_string()),
        correlation_id: Some("checkout-5521".to_string()),
        subject: Some("order.created".to_string()),
        content_type: Some("application/json".to_string()),
        delivery_count: 1,
        enqueued_time: Some(chrono::Utc::now()),
        sequence_number: 1017,
        application_properties,
        body: br#"{"orderId":1017,"sku":"A-55","quantity":3}"#.to_vec(),
        ..Default::default()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let args: Vec<String> = env::args().collect();
    let options = match args.get(1) {
        Some(path) => load_options(path).with_context(|| format!("loading options from {}", path))?,
        None => WireTapOptions::default(),
    };

    let captured = Arc::new(AtomicUsize::new(0));
    let counter = captured.clone();
    let options = options.with_custom_hook(HookFn::new(move |record| {
        let counter = counter.clone();
        async move {
            let total = counter.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::info!(sequence_number = record.sequence_number, total, "metrics: message captured");
            Ok(())
        }
    }));

    println!("🔌 Service Bus Wire Tap Demo");
    println!("════════════════════════════");
    println!("Options: {:?}", options);
    println!();

    let pipeline = Pipeline::builder(OrderProcessingHandler)
        .with_wire_tap(options)
        .build();

    let queue_invocation = StaticInvocation::new("OrderProcessing")
        .with_binding("message", SERVICE_BUS_TRIGGER)
        .with_message(sample_order());
    pipeline
        .invoke(&queue_invocation)
        .await
        .map_err(|e| anyhow!("queue invocation failed: {e}"))?;

    let http_invocation = StaticInvocation::new("HealthCheck").with_binding("req", HTTP_TRIGGER);
    pipeline
        .invoke(&http_invocation)
        .await
        .map_err(|e| anyhow!("http invocation failed: {e}"))?;

    println!();
    println!("🎉 Demo complete! {} message(s) captured.", captured.load(Ordering::SeqCst));
    Ok(())
}
