//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle consumed by the driving loop:
//! - solver selection ([`SolverKind`])
//! - numerical parameters ([`Parameters`])
//! - system state ([`System`] with bodies at step 0)
//!
//! Bodies come either from an explicit list in the config or from the
//! seeded random initializer.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::configuration::config::{ScenarioConfig, SolverConfig};
use crate::simulation::forces::SolverKind;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized scenario: everything the driving loop needs to
/// start stepping.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub solver: SolverKind,
    pub parameters: Parameters,
    pub system: System,
    pub steps: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let p_cfg = &cfg.parameters;
        let defaults = Parameters::default();
        let parameters = Parameters {
            width: p_cfg.width,
            height: p_cfg.height,
            g: p_cfg.g,
            epsilon: p_cfg.epsilon,
            damping: p_cfg.damping,
            theta: cfg.engine.theta.unwrap_or(defaults.theta),
            capacity: cfg.engine.capacity.unwrap_or(defaults.capacity),
            seed: p_cfg.seed,
        };

        let solver = match cfg.engine.solver {
            SolverConfig::Direct => SolverKind::Direct,
            SolverConfig::BarnesHut => SolverKind::BarnesHut,
        };

        // Explicit bodies win; otherwise seed the random initializer.
        let system = if !cfg.bodies.is_empty() {
            System {
                bodies: cfg
                    .bodies
                    .iter()
                    .map(|bc| Body {
                        x: NVec2::new(bc.x[0], bc.x[1]),
                        v: NVec2::new(bc.v[0], bc.v[1]),
                        m: bc.m,
                        radius: bc.radius,
                    })
                    .collect(),
            }
        } else {
            let mut rng = ChaCha8Rng::seed_from_u64(parameters.seed);
            random_system(
                cfg.random_bodies.unwrap_or(0),
                parameters.width,
                parameters.height,
                &mut rng,
            )
        };

        Self {
            solver,
            parameters,
            system,
            steps: cfg.steps.unwrap_or(1),
        }
    }
}

/// Seed a system with `n` random bodies: position uniform over the
/// domain, velocity components uniform in [-1, 1], mass uniform in
/// [1, 3]. The radius only matters to a renderer and just scales with
/// mass.
pub fn random_system(n: usize, width: f64, height: f64, rng: &mut impl Rng) -> System {
    let bodies = (0..n)
        .map(|_| {
            let m = rng.random_range(1.0..=3.0);
            Body {
                x: NVec2::new(
                    rng.random_range(0.0..=width),
                    rng.random_range(0.0..=height),
                ),
                v: NVec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0)),
                m,
                radius: 2.0 * m.sqrt(),
            }
        })
        .collect();
    System { bodies }
}
