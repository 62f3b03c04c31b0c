pub mod context;
pub mod hook;
pub mod middleware;
pub mod sink;

pub use context::{BindingMetadata, BindingResult, FunctionDefinition, InvocationContext};
pub use hook::{CaptureHook, HookFn};
pub use middleware::{Handler, InvocationResult, Middleware, Next};
pub use sink::{LogSink, TracingSink};
