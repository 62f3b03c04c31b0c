// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod capture;
mod config;
mod tap;

pub use capture::CaptureError;
pub use config::ConfigError;
pub use tap::TapError;

/// Boxed error used at the pipeline boundary. Handler and host errors travel
/// through the tap as this exact value.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Turn a caught panic payload into an error carrying its message.
pub(crate) fn panic_error(payload: Box<dyn std::any::Any + Send>) -> BoxError {
    let message = if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic".to_string()
    };
    format!("panicked: {}", message).into()
}
