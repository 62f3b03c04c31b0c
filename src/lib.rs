// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod capture;        // trigger applicability + message extraction
pub mod config;         // options + YAML loading
pub mod errors;         // error handling
pub mod host;           // host-side context helpers
pub mod model;          // queue message + captured record
pub mod observability;
pub mod tap;            // the wire tap stage and pipeline composition
pub mod traits;         // middleware, context, sink and hook seams

#[cfg(test)]
pub mod testing;

pub use config::{load_options, LogLevel, WireTapOptions};
pub use errors::{BoxError, CaptureError, ConfigError, TapError};
pub use model::{MessageRecord, MessageState, QueueMessage};
pub use tap::{CaptureOutcome, Pipeline, PipelineBuilder, WireTap};
