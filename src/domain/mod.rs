// Domain layer: profile model, render states and the ports the search flow talks through.

pub mod model;
pub mod ports;
