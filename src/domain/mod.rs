// Domain layer: submission/email models and the outbound email port.

pub mod model;
pub mod ports;
