// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A received queue message, as exposed by the message-bus client.
///
/// Optional envelope fields are `None` when the broker did not populate them.
/// The wire tap only ever reads this type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueMessage {
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
    pub state: MessageState,
    pub application_properties: BTreeMap<String, Value>,
    pub body: Vec<u8>,
}

impl QueueMessage {
    /// Body rendered as text. Invalid UTF-8 sequences are replaced.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Broker-side state of a received message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageState {
    #[default]
    Active,
    Deferred,
    Scheduled,
}

impl MessageState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageState::Active => "active",
            MessageState::Deferred => "deferred",
            MessageState::Scheduled => "scheduled",
        }
    }
}

impl fmt::Display for MessageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
