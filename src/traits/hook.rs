// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::future::Future;

use crate::errors::BoxError;
use crate::model::MessageRecord;

/// User callback invoked with every successfully captured record, after the
/// record has been logged. Failures are logged by the tap and never propagate.
#[async_trait]
pub trait CaptureHook: Send + Sync {
    async fn on_captured(&self, record: &MessageRecord) -> Result<(), BoxError>;
}

/// Adapts an async closure taking an owned record into a [`CaptureHook`].
///
/// ```rust
/// use servicebus_wiretap::traits::HookFn;
/// use servicebus_wiretap::WireTapOptions;
///
/// let options = WireTapOptions::default().with_custom_hook(HookFn::new(|record| async move {
///     println!("captured {:?}", record.message_id);
///     Ok(())
/// }));
/// assert!(options.custom_hook.is_some());
/// ```
pub struct HookFn<F> {
    func: F,
}

impl<F, Fut> HookFn<F>
where
    F: Fn(MessageRecord) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F, Fut> CaptureHook for HookFn<F>
where
    F: Fn(MessageRecord) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    async fn on_captured(&self, record: &MessageRecord) -> Result<(), BoxError> {
        (self.func)(record.clone()).await
    }
}
