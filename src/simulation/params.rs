//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - the rectangular domain extents,
//! - softening and gravitational constant (`epsilon`, `G`),
//! - per-step velocity damping,
//! - Barnes–Hut opening threshold and leaf capacity,
//! - random seed for the scenario initializer

#[derive(Debug, Clone)]
pub struct Parameters {
    pub width: f64, // domain extent along x, bodies live in [0, width]
    pub height: f64, // domain extent along y, bodies live in [0, height]
    pub g: f64, // gravitational constant
    pub epsilon: f64, // softening length - prevents singular forces at small separations
    pub damping: f64, // per-step velocity retention fraction, in (0, 1)
    pub theta: f64, // Barnes-Hut opening threshold (tree solver only)
    pub capacity: usize, // bodies per undivided tree node
    pub seed: u64, // deterministic seed to make runs reproducable
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            g: 1.0,
            epsilon: 3.0,
            damping: 0.99,
            theta: 0.5,
            capacity: 1,
            seed: 42,
        }
    }
}
