// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for the wire tap's log lines.
//!
//! * `tap` - invocation lifecycle: skipped, invoked, handler failure, tap defect
//! * `capture` - message capture: record emitted, message not retrieved, hook failure

use std::fmt::Display;
use tracing::Level;

pub mod capture;
pub mod tap;

/// A log line that knows its own level and structured fields.
pub trait StructuredLog: Display {
    fn level(&self) -> Level;

    /// Emit through `tracing` with structured fields.
    fn log(&self);
}
