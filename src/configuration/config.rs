//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! a simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – solver selection and tree options
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each explicit body
//! - [`ScenarioConfig`]   – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   solver: "barnes_hut"    # or "direct"
//!   theta: 0.5              # opening threshold (tree solver only)
//!   capacity: 1             # bodies per undivided node
//!
//! parameters:
//!   width: 800.0            # domain extent along x
//!   height: 600.0           # domain extent along y
//!   G: 1.0                  # gravitational constant
//!   epsilon: 3.0            # softening length
//!   damping: 0.99           # per-step velocity retention
//!   seed: 42                # deterministic seed
//!
//! steps: 500                # how many steps the driver runs
//! random_bodies: 200        # seed this many random bodies...
//!
//! bodies: []                # ...or list them explicitly
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation, which uses different structs optimized for stepping.

use serde::Deserialize;

/// Which force solver the engine uses.
/// `solver: "direct"` or `solver: "barnes_hut"`
#[derive(Deserialize, Debug, Clone)]
pub enum SolverConfig {
    #[serde(rename = "direct")] // exact pairwise O(N^2) summation
    Direct,

    #[serde(rename = "barnes_hut")] // quadtree approximation, ~O(N log N)
    BarnesHut,
}

/// High-level engine configuration.
/// Controls the structure of the simulation.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub solver: SolverConfig, // force strategy for every step
    pub theta: Option<f64>, // Barnes-Hut opening threshold, default 0.5
    pub capacity: Option<usize>, // bodies per undivided tree node, default 1
}

/// Global numerical and physical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub width: f64,   // domain extent along x
    pub height: f64,  // domain extent along y
    #[serde(rename = "G")]
    pub g: f64,       // gravitational constant
    pub epsilon: f64, // softening - prevents singular forces at small separations
    pub damping: f64, // per-step velocity retention fraction
    pub seed: u64,    // deterministic seed to make runs reproducable
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2], // initial position in simulation units
    pub v: [f64; 2], // initial velocity in simulation units per step
    pub m: f64,      // mass of the body
    pub radius: f64, // display radius, ignored by the physics
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // solver selection and tree options
    pub parameters: ParametersConfig, // numerical and physical constants
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // explicit initial bodies, may be empty
    pub random_bodies: Option<usize>, // seed this many random bodies when `bodies` is empty
    pub steps: Option<usize>, // how many steps the driver runs, default 1
}
