// Adapters layer: concrete implementations for external systems (serial device, http).

pub mod http;
pub mod serial;
