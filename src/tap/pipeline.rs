// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::WireTapOptions;
use crate::tap::WireTap;
use crate::traits::{Handler, InvocationContext, InvocationResult, Middleware, Next};

/// An ordered chain of middleware ending in a handler.
///
/// Middleware run in registration order; each decides whether and when the
/// rest of the chain runs.
pub struct Pipeline {
    middleware: Vec<Arc<dyn Middleware>>,
    handler: Arc<dyn Handler>,
}

impl Pipeline {
    pub fn builder(handler: impl Handler + 'static) -> PipelineBuilder {
        PipelineBuilder {
            middleware: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn len(&self) -> usize {
        self.middleware.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }

    /// Run one invocation through the whole chain.
    pub async fn invoke(&self, ctx: &dyn InvocationContext) -> InvocationResult {
        Next::new(self.handler.as_ref(), &self.middleware).run(ctx).await
    }
}

pub struct PipelineBuilder {
    middleware: Vec<Arc<dyn Middleware>>,
    handler: Arc<dyn Handler>,
}

impl PipelineBuilder {
    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Register a wire tap stage that logs through `tracing`.
    pub fn with_wire_tap(self, options: WireTapOptions) -> Self {
        self.with_middleware(WireTap::with_tracing(options))
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            middleware: self.middleware,
            handler: self.handler,
        }
    }
}
