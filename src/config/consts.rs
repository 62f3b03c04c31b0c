/// Binding type tag the host assigns to queue-triggered handlers.
pub const SERVICE_BUS_TRIGGER: &str = "serviceBusTrigger";
/// Binding type tag used by HTTP-triggered handlers (never tapped by default).
pub const HTTP_TRIGGER: &str = "httpTrigger";
