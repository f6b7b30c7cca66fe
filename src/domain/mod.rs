// Domain layer: canonical records, ports and the pure normalization services.
// Nothing here performs IO.

pub mod candidates;
pub mod model;
pub mod ports;

pub mod services;
