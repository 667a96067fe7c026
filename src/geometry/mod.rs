//! Geometry helpers shared by the simulation and renderer

mod range;

pub use range::Range2;
