// Domain layer: page data models and ports (interfaces). No HTTP client code here.

pub mod model;
pub mod ports;
