// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors originating inside the wire tap's own control flow.

use super::BoxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TapError {
    /// The user-supplied capture hook returned an error or panicked.
    /// Always absorbed by the tap.
    #[error("custom hook failed: {source}")]
    HookFailed {
        message_id: String,
        #[source]
        source: BoxError,
    },

    /// A failure in the tap itself, outside the extraction and hook isolation
    /// points. Logged and returned to the surrounding pipeline.
    #[error("wire tap defect in handler '{handler_name}': {source}")]
    Defect {
        handler_name: String,
        #[source]
        source: BoxError,
    },
}
