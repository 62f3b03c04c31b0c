// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod pipeline;
pub mod stage;

pub use pipeline::{Pipeline, PipelineBuilder};
pub use stage::{CaptureOutcome, WireTap};
