//! Force solvers for the n-body engine.
//!
//! Two interchangeable strategies compute the net force on every body
//! and then run the shared integrator:
//! - [`step_direct`]: exact pairwise softened gravity, `O(N²)`
//! - [`step_barnes_hut`]: quadtree-approximated gravity, ~`O(N log N)`
//!
//! [`SolverKind`] is the runtime selector between them; both mutate the
//! system in place and report how many interactions they evaluated.

use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::quadtree::QuadTree;
use crate::simulation::region::Region;
use crate::simulation::states::{NVec2, System};

/// Which force strategy a step uses. Both variants share the same
/// signature and the same integrator, so a driver can flip between them
/// per run (or per step) without touching anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Direct,
    BarnesHut,
}

impl SolverKind {
    /// Advance `sys` by one step with the selected strategy.
    pub fn step(self, sys: &mut System, params: &Parameters) -> StepReport {
        match self {
            SolverKind::Direct => step_direct(sys, params),
            SolverKind::BarnesHut => step_barnes_hut(sys, params),
        }
    }
}

/// What one step produced, beyond the in-place body mutation.
#[derive(Debug)]
pub struct StepReport {
    /// Force-pair evaluations performed: exactly `n·(n−1)` for the
    /// direct solver, usually far fewer for the tree solver.
    pub interactions: u64,
    /// The tree the Barnes–Hut step built, handed back for read-only
    /// inspection only. `None` for the direct solver. Never reused.
    pub tree: Option<QuadTree>,
}

/// Exact pairwise solver: every body feels every other body.
///
/// Iterates unordered pairs (i, j) with i < j and applies equal and
/// opposite softened-gravity forces, so the count comes out to exactly
/// `n·(n−1)` ordered interactions.
pub fn step_direct(sys: &mut System, params: &Parameters) -> StepReport {
    let n = sys.bodies.len();
    let mut forces = vec![NVec2::zeros(); n];
    let mut interactions: u64 = 0;

    for i in 0..n {
        let bi = &sys.bodies[i];
        let xi = bi.x;
        let mi = bi.m;

        for j in (i + 1)..n {
            let bj = &sys.bodies[j];

            // r points from i to j: i is pulled along +r, j along -r.
            let r = bj.x - xi;
            let dist_sq = r.dot(&r);

            // F = G m_i m_j / (|r|^2 + eps^2), directed along r/|r|.
            // The softening floor bounds the magnitude at |r| -> 0.
            let magnitude =
                params.g * mi * bj.m / (dist_sq + params.epsilon * params.epsilon);

            // Exactly coincident bodies have no defined direction; the
            // pair still counts but contributes nothing.
            if dist_sq > 0.0 {
                let f = r * (magnitude / dist_sq.sqrt());
                forces[i] += f;
                forces[j] -= f;
            }
            interactions += 2;
        }
    }

    integrate(sys, &forces, params);

    StepReport {
        interactions,
        tree: None,
    }
}

/// Tree solver: build a fresh quadtree over the domain, insert every
/// body, then evaluate each body against the root under the Barnes–Hut
/// criterion.
///
/// Bodies currently outside the domain are silently left out of the tree
/// (they exert and feel no tree force this step) but are still
/// integrated and reflected like everything else.
pub fn step_barnes_hut(sys: &mut System, params: &Parameters) -> StepReport {
    let domain = Region::new(
        params.width / 2.0,
        params.height / 2.0,
        params.width / 2.0,
        params.height / 2.0,
    );
    let mut tree = QuadTree::new(domain, params.capacity);

    for b in &sys.bodies {
        tree.insert(b.x, b.m);
    }

    let mut forces = vec![NVec2::zeros(); sys.bodies.len()];
    let mut interactions: u64 = 0;

    for (b, out) in sys.bodies.iter().zip(forces.iter_mut()) {
        let (f, n) = tree.calculate_force(b.x, b.m, params.theta, params.g, params.epsilon);
        *out = f;
        interactions += n;
    }

    integrate(sys, &forces, params);

    StepReport {
        interactions,
        tree: Some(tree),
    }
}
