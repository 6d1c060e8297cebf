//! Shared time-integration and boundary step.
//!
//! Both force solvers hand their accumulated per-body forces to
//! [`integrate`], which advances every body in-place: Newton's second
//! law, velocity damping, a semi-implicit Euler position update, then a
//! soft reflection off the domain edges.

use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance every body one step from its accumulated force.
///
/// Per body, in order:
/// 1. `v += f / m` (Newton's second law, per axis)
/// 2. `v *= damping` (dissipation / numerical stabilization)
/// 3. `x += v` (velocity applied before position, both solvers)
/// 4. soft boundary reflection, independently per axis: clamp into
///    `[0, width]` / `[0, height]` and halve-and-reverse the offending
///    velocity component. Deliberately lossy so bodies settle at the
///    edge instead of oscillating forever.
pub fn integrate(sys: &mut System, forces: &[NVec2], params: &Parameters) {
    for (b, f) in sys.bodies.iter_mut().zip(forces.iter()) {
        b.v += *f / b.m;
        b.v *= params.damping;
        b.x += b.v;

        if b.x.x < 0.0 {
            b.x.x = 0.0;
            b.v.x *= -0.5;
        } else if b.x.x > params.width {
            b.x.x = params.width;
            b.v.x *= -0.5;
        }

        if b.x.y < 0.0 {
            b.x.y = 0.0;
            b.v.y *= -0.5;
        } else if b.x.y > params.height {
            b.x.y = params.height;
            b.v.y *= -0.5;
        }
    }
}
