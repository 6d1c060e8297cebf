pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::region::{Quadrant, Region};
pub use simulation::quadtree::{NodeSnapshot, QuadTree, Segment};
pub use simulation::forces::{SolverKind, StepReport, step_barnes_hut, step_direct};
pub use simulation::integrator::integrate;
pub use simulation::scenario::{Scenario, random_system};

pub use configuration::config::{
    BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig, SolverConfig,
};

pub use benchmark::benchmark::bench_solvers;
