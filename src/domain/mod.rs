// Domain layer: event model and ports. No transport-specific dependencies.

pub mod model;
pub mod ports;
