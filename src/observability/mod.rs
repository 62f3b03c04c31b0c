// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Every line the wire tap emits is a typed message from [`messages`] with a
//! `Display` implementation for the human-readable text and a
//! [`messages::StructuredLog`] implementation that knows its level and its
//! key/value fields.
//!
//! # Usage
//!
//! ```rust
//! use servicebus_wiretap::observability::messages::{tap::TapSkipped, StructuredLog};
//!
//! let msg = TapSkipped { handler_name: "HealthCheck" };
//! msg.log();
//! ```

pub mod messages;
