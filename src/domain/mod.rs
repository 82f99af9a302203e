// Domain layer: models and ports. Nothing here touches the network or the clock directly.

pub mod model;
pub mod ports;
