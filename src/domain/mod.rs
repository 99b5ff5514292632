// Domain layer: lead model and the ports the form controller talks through.

pub mod model;
pub mod ports;
