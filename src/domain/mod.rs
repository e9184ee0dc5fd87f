// Domain layer: harness models and ports. No filesystem or CLI dependencies here.

pub mod model;
pub mod ports;
