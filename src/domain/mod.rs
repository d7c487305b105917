// Domain layer: coordinate models and ports. Only std, serde and the crate error type.

pub mod model;
pub mod ports;
