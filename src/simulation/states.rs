//! Core state types for the 2D N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` is a single point mass using `NVec2`
//! - `System` holds the full body collection
//!
//! The system is exclusively owned by the driving loop and mutated in
//! place exactly once per step.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius, ignored by the physics
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, identity is the index
}
