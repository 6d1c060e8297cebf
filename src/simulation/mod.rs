pub mod states;
pub mod params;
pub mod region;
pub mod quadtree;
pub mod forces;
pub mod integrator;
pub mod scenario;
