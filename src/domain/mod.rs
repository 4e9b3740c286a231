// Domain layer: NASA wire types, output models and ports (interfaces).

pub mod model;
pub mod ports;
pub mod upstream;
