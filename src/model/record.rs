// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::WireTapOptions;
use crate::model::QueueMessage;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Structured capture of one tapped queue message and its invocation.
///
/// Built fresh for every tapped invocation, handed to the log sink and the
/// custom hook, then dropped. Serializes with lower-camel keys; absent
/// envelope fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub timestamp: DateTime<Utc>,
    pub handler_name: String,
    pub invocation_id: String,
    pub message_id: Option<String>,
    pub correlation_id: Option<String>,
    pub subject: Option<String>,
    pub to: Option<String>,
    pub reply_to: Option<String>,
    pub reply_to_session_id: Option<String>,
    pub session_id: Option<String>,
    pub content_type: Option<String>,
    pub delivery_count: u32,
    pub enqueued_time: Option<DateTime<Utc>>,
    pub scheduled_enqueue_time: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub lock_token: Option<String>,
    pub sequence_number: i64,
    pub partition_key: Option<String>,
    pub dead_letter_source: Option<String>,
    pub enqueued_sequence_number: Option<i64>,
    pub locked_until: Option<DateTime<Utc>>,
    pub state: String,
    pub application_properties: BTreeMap<String, String>,
    /// Same content as `application_properties`, kept under the legacy name.
    pub user_properties: BTreeMap<String, String>,
    pub message_body: Option<String>,
}

impl MessageRecord {
    /// Build a record stamped with the current time.
    pub fn build(
        handler_name: &str,
        invocation_id: &str,
        message: &QueueMessage,
        options: &WireTapOptions,
    ) -> Self {
        Self::build_at(Utc::now(), handler_name, invocation_id, message, options)
    }

    /// Build a record with an explicit capture timestamp.
    ///
    /// Pure: the same inputs always produce the same record, and the message
    /// is never modified.
    pub fn build_at(
        timestamp: DateTime<Utc>,
        handler_name: &str,
        invocation_id: &str,
        message: &QueueMessage,
        options: &WireTapOptions,
    ) -> Self {
        let properties: BTreeMap<String, String> = message
            .application_properties
            .iter()
            .map(|(key, value)| (key.clone(), property_text(value)))
            .collect();

        let message_body = options.include_body.then(|| {
            let text = message.body_text();
            match options.max_body_bytes_to_log {
                Some(max_bytes) => truncate_to_bytes(&text, max_bytes).to_string(),
                None => text.into_owned(),
            }
        });

        Self {
            timestamp,
            handler_name: handler_name.to_string(),
            invocation_id: invocation_id.to_string(),
            message_id: message.message_id.clone(),
            correlation_id: message.correlation_id.clone(),
            subject: message.subject.clone(),
            to: message.to.clone(),
            reply_to: message.reply_to.clone(),
            reply_to_session_id: message.reply_to_session_id.clone(),
            session_id: message.session_id.clone(),
            content_type: message.content_type.clone(),
            delivery_count: message.delivery_count,
            enqueued_time: message.enqueued_time,
            scheduled_enqueue_time: message.scheduled_enqueue_time,
            expires_at: message.expires_at,
            lock_token: message.lock_token.clone(),
            sequence_number: message.sequence_number,
            partition_key: message.partition_key.clone(),
            dead_letter_source: message.dead_letter_source.clone(),
            enqueued_sequence_number: message.enqueued_sequence_number,
            locked_until: message.locked_until,
            state: message.state.to_string(),
            user_properties: properties.clone(),
            application_properties: properties,
            message_body,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Textual form of an application property value. `null` stays visible as the
/// literal text "null"; strings are taken verbatim.
fn property_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Longest prefix of `text` that fits in `max_bytes` and ends on a char boundary.
fn truncate_to_bytes(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
