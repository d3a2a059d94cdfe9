// Domain layer: core models and ports (interfaces). No dependencies on
// adapters or transport concerns.

pub mod model;
pub mod ports;
