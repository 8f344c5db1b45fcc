// Domain layer: plain data types and the ports (interfaces) the core logic is generic over.

pub mod model;
pub mod ports;
