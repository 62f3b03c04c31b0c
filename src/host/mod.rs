// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host-side helpers for driving a pipeline without a full worker host.

mod static_invocation;

pub use static_invocation::StaticInvocation;
