// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Queue message as handed over by the message-bus client, and the structured
//! record the wire tap builds from it.

mod message;
mod record;

pub use message::{MessageState, QueueMessage};
pub use record::MessageRecord;
