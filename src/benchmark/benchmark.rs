//! Wall-clock comparison of the two solvers.
//!
//! Builds deterministic body sets of increasing size (no rand needed)
//! and times one direct step against one Barnes–Hut step, printing the
//! elapsed time and interaction count for each.

use std::time::Instant;

use crate::simulation::forces::{step_barnes_hut, step_direct};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Deterministic scattered system: positions from sin/cos of the index,
/// folded into the domain.
fn scattered_system(n: usize, params: &Parameters) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            Body {
                x: NVec2::new(
                    (0.5 + 0.45 * (i_f * 0.37).sin()) * params.width,
                    (0.5 + 0.45 * (i_f * 0.13).cos()) * params.height,
                ),
                v: NVec2::zeros(),
                m: 1.0 + (i % 3) as f64,
                radius: 2.0,
            }
        })
        .collect();
    System { bodies }
}

pub fn bench_solvers() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200, 6400];

    let params = Parameters::default();

    for n in ns {
        // Each solver steps its own copy so both see identical input.
        let mut sys_direct = scattered_system(n, &params);
        let mut sys_tree = sys_direct.clone();

        // Warm up
        step_direct(&mut sys_direct.clone(), &params);
        step_barnes_hut(&mut sys_tree.clone(), &params);

        // Time direct
        let t0 = Instant::now();
        let direct = step_direct(&mut sys_direct, &params);
        let dt_direct = t0.elapsed().as_secs_f64();

        // Time barnes-hut
        let t1 = Instant::now();
        let tree = step_barnes_hut(&mut sys_tree, &params);
        let dt_tree = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, direct = {:8.6} s ({:9} interactions), BH = {:8.6} s ({:9} interactions)",
            dt_direct, direct.interactions, dt_tree, tree.interactions
        );
    }
}
