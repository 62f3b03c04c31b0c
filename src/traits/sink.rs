// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;

/// Destination for the wire tap's log lines.
///
/// Implementations must tolerate concurrent writers and must not block
/// indefinitely. Sink failures are the sink's own concern.
pub trait LogSink: Send + Sync {
    fn write(&self, entry: &dyn StructuredLog);
}

/// Default sink: emits every entry through `tracing` with its structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, entry: &dyn StructuredLog) {
        entry.log();
    }
}
