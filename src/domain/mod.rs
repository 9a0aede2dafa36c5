// Domain layer: the values passed between pipeline steps and the ports the steps run through.

pub mod model;
pub mod ports;
