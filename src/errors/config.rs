// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while loading wire tap options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse options: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `trigger_binding_type` was configured as an empty string.
    #[error("trigger_binding_type must not be empty")]
    EmptyTriggerType,
}
