// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::BoxError;
use crate::traits::InvocationContext;

/// Result of running (the rest of) a pipeline for one invocation.
pub type InvocationResult = Result<(), BoxError>;

/// The terminal step of a pipeline: the user's handler.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &dyn InvocationContext) -> InvocationResult;
}

/// A pipeline stage that wraps everything after it.
///
/// Implementations receive the continuation by value; calling [`Next::run`]
/// consumes it, so the rest of the pipeline runs at most once per invocation.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn invoke(&self, ctx: &dyn InvocationContext, next: Next<'_>) -> InvocationResult;
}

/// The remainder of a pipeline: the middleware still to run, then the handler.
pub struct Next<'a> {
    handler: &'a dyn Handler,
    remaining: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub fn new(handler: &'a dyn Handler, remaining: &'a [Arc<dyn Middleware>]) -> Self {
        Self { handler, remaining }
    }

    pub async fn run(mut self, ctx: &dyn InvocationContext) -> InvocationResult {
        match self.remaining.split_first() {
            Some((current, rest)) => {
                self.remaining = rest;
                current.invoke(ctx, self).await
            }
            None => self.handler.handle(ctx).await,
        }
    }
}
