use quadgrav::{
    Body, NVec2, Parameters, QuadTree, Region, SolverKind, System, step_barnes_hut, step_direct,
};

/// Build a simple 2-body System separated along the x-axis, centered in
/// the default domain
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> System {
    let p = test_params();
    let cx = p.width / 2.0;
    let cy = p.height / 2.0;
    let b1 = Body {
        x: NVec2::new(cx - dist / 2.0, cy),
        v: NVec2::zeros(),
        m: m1,
        radius: 0.0,
    };
    let b2 = Body {
        x: NVec2::new(cx + dist / 2.0, cy),
        v: NVec2::zeros(),
        m: m2,
        radius: 0.0,
    };
    System {
        bodies: vec![b1, b2],
    }
}

/// Three well-separated clusters of tight bodies, all inside the domain
pub fn clustered_system(per_cluster: usize) -> System {
    let centers = [(100.0, 100.0), (700.0, 120.0), (400.0, 500.0)];
    let mut bodies = Vec::new();
    for (cx, cy) in centers {
        for k in 0..per_cluster {
            let k_f = k as f64;
            bodies.push(Body {
                x: NVec2::new(cx + (k_f * 0.7).sin() * 5.0, cy + (k_f * 1.3).cos() * 5.0),
                v: NVec2::zeros(),
                m: 1.0 + (k % 3) as f64,
                radius: 2.0,
            });
        }
    }
    System { bodies }
}

/// Default physics parameters for tests: no damping, no softening, so
/// velocities after one step read back the applied force directly
pub fn test_params() -> Parameters {
    Parameters {
        width: 800.0,
        height: 600.0,
        g: 1.0,
        epsilon: 0.0,
        damping: 1.0,
        theta: 0.5,
        capacity: 1,
        seed: 42,
    }
}

/// Fresh quadtree over the whole test domain
pub fn domain_tree(p: &Parameters) -> QuadTree {
    let region = Region::new(p.width / 2.0, p.height / 2.0, p.width / 2.0, p.height / 2.0);
    QuadTree::new(region, p.capacity)
}

// ==================================================================================
// Region tests
// ==================================================================================

#[test]
fn region_contains_is_closed_on_both_ends() {
    let r = Region::new(10.0, 10.0, 5.0, 5.0);

    assert!(r.contains(NVec2::new(10.0, 10.0)));
    assert!(r.contains(NVec2::new(5.0, 5.0)), "min corner is inside");
    assert!(r.contains(NVec2::new(15.0, 15.0)), "max corner is inside");
    assert!(!r.contains(NVec2::new(15.000001, 10.0)));
    assert!(!r.contains(NVec2::new(10.0, 4.999999)));
}

#[test]
fn region_overlaps_touching_and_disjoint() {
    let a = Region::new(0.0, 0.0, 5.0, 5.0);
    let touching = Region::new(10.0, 0.0, 5.0, 5.0); // shares the x = 5 edge
    let disjoint = Region::new(20.0, 0.0, 5.0, 5.0);
    let inside = Region::new(1.0, 1.0, 1.0, 1.0);

    assert!(a.overlaps(&touching), "closed intervals: touching overlaps");
    assert!(!a.overlaps(&disjoint));
    assert!(a.overlaps(&inside));
    assert!(inside.overlaps(&a));
}

// ==================================================================================
// Quadtree tests
// ==================================================================================

#[test]
fn insert_outside_region_fails_without_mutation() {
    let p = test_params();
    let mut tree = domain_tree(&p);

    assert!(!tree.insert(NVec2::new(-1.0, 10.0), 5.0));
    assert!(!tree.insert(NVec2::new(10.0, p.height + 1.0), 5.0));

    let snap = tree.snapshot();
    assert_eq!(snap.total_mass, 0.0);
    assert!(!snap.is_divided);
}

#[test]
fn root_com_matches_weighted_average_regardless_of_order() {
    let p = test_params();
    let sys = clustered_system(6);

    let mut forward = domain_tree(&p);
    for b in &sys.bodies {
        assert!(forward.insert(b.x, b.m));
    }

    let mut reverse = domain_tree(&p);
    for b in sys.bodies.iter().rev() {
        assert!(reverse.insert(b.x, b.m));
    }

    // Direct mass-weighted average over all inserted positions
    let total_m: f64 = sys.bodies.iter().map(|b| b.m).sum();
    let com: NVec2 = sys.bodies.iter().map(|b| b.x * b.m).sum::<NVec2>() / total_m;

    for tree in [&forward, &reverse] {
        assert!((tree.total_mass() - total_m).abs() < 1e-9);
        assert!((tree.center_of_mass() - com).norm() < 1e-9);
    }
}

#[test]
fn capacity_overflow_subdivides_once() {
    let p = test_params();
    let mut tree = domain_tree(&p);

    assert!(tree.insert(NVec2::new(100.0, 100.0), 1.0));
    assert!(!tree.snapshot().is_divided, "single body fits the leaf");

    assert!(tree.insert(NVec2::new(700.0, 500.0), 2.0));
    let snap = tree.snapshot();
    assert!(snap.is_divided);
    assert!((snap.total_mass - 3.0).abs() < 1e-12);
    assert!(!tree.boundary_segments().is_empty());
}

#[test]
fn find_node_at_point_descends_to_leaf() {
    let p = test_params();
    let mut tree = domain_tree(&p);
    for b in &clustered_system(4).bodies {
        tree.insert(b.x, b.m);
    }

    let node = tree
        .find_node_at_point(100.0, 100.0)
        .expect("point is inside the root region");
    assert!(node.region().contains(NVec2::new(100.0, 100.0)));
    assert!(!node.is_divided(), "lookup lands on a leaf");

    assert!(tree.find_node_at_point(-5.0, 100.0).is_none());
    assert!(tree.find_node_at_point(100.0, 700.0).is_none());
}

#[test]
fn tree_construction_is_deterministic() {
    let p = test_params();
    let sys = clustered_system(8);

    let mut a = domain_tree(&p);
    let mut b = domain_tree(&p);
    for body in &sys.bodies {
        a.insert(body.x, body.m);
        b.insert(body.x, body.m);
    }

    assert_eq!(a.boundary_segments(), b.boundary_segments());
    assert_eq!(a.total_mass(), b.total_mass());
    assert_eq!(a.center_of_mass(), b.center_of_mass());
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn direct_interaction_count_is_n_times_n_minus_one() {
    let p = test_params();
    for n in [0usize, 1, 2, 7, 18] {
        let mut sys = clustered_system(6);
        sys.bodies.truncate(n);
        let report = step_direct(&mut sys, &p);
        assert_eq!(report.interactions, (n * n.saturating_sub(1)) as u64);
    }
}

#[test]
fn tree_count_never_exceeds_direct_and_aggregates_clusters() {
    let p = test_params();
    let sys = clustered_system(8); // 24 bodies, spatially separated

    let n = sys.bodies.len() as u64;
    let direct_count = n * (n - 1);

    let report = step_barnes_hut(&mut sys.clone(), &p);
    assert!(report.interactions <= direct_count);
    assert!(
        report.interactions < direct_count,
        "separated clusters must be approximated: {} interactions",
        report.interactions
    );
}

#[test]
fn gravity_newton_third_law() {
    let p = test_params();
    let mut sys = two_body_system(20.0, 2.0, 3.0);
    step_direct(&mut sys, &p);

    // With damping = 1 and zero initial velocity, m*v after one step is
    // the impulse applied, so total momentum must stay zero
    let net = sys.bodies[0].v * sys.bodies[0].m + sys.bodies[1].v * sys.bodies[1].m;
    assert!(net.norm() < 1e-12, "Net momentum not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let p = test_params();
    let mut sys = two_body_system(20.0, 1.0, 1.0);
    let before = sys.clone();
    step_direct(&mut sys, &p);

    let dx = before.bodies[1].x - before.bodies[0].x;
    assert!(sys.bodies[0].v.dot(&dx) > 0.0, "body 0 not pulled toward body 1");
    assert!(sys.bodies[1].v.dot(&dx) < 0.0, "body 1 not pulled toward body 0");
}

#[test]
fn gravity_equal_masses_equal_opposite_forces() {
    let mut p = test_params();
    p.epsilon = 2.0;
    let (m, r) = (1.5, 40.0);
    let mut sys = two_body_system(r, m, m);
    step_direct(&mut sys, &p);

    // F = G m^2 / (r^2 + eps^2); velocity readback is F / m
    let expected = p.g * m * m / (r * r + p.epsilon * p.epsilon) / m;
    assert!((sys.bodies[0].v.norm() - expected).abs() < 1e-12);
    assert!((sys.bodies[1].v.norm() - expected).abs() < 1e-12);
    assert!((sys.bodies[0].v + sys.bodies[1].v).norm() < 1e-12);
}

#[test]
fn gravity_inverse_square_law() {
    let p = test_params();

    let mut sys_r = two_body_system(10.0, 1.0, 1.0);
    let mut sys_2r = two_body_system(20.0, 1.0, 1.0);
    step_direct(&mut sys_r, &p);
    step_direct(&mut sys_2r, &p);

    let ratio = sys_r.bodies[0].v.norm() / sys_2r.bodies[0].v.norm();
    assert!((ratio - 4.0).abs() < 1e-9, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_softening_prevents_blowup() {
    let mut p = test_params();
    p.epsilon = 0.1;

    let mut sys = two_body_system(1e-9, 1.0, 1.0);
    step_direct(&mut sys, &p);

    let v = sys.bodies[0].v.norm();
    assert!(v.is_finite(), "coincident bodies produced non-finite velocity");
    assert!(v < 1e9, "Softening failed; velocity too large");
}

#[test]
fn single_body_feels_no_force() {
    let p = test_params();
    let start = NVec2::new(321.0, 222.0);
    let body = Body {
        x: start,
        v: NVec2::zeros(),
        m: 2.0,
        radius: 1.0,
    };

    for solver in [SolverKind::Direct, SolverKind::BarnesHut] {
        let mut sys = System {
            bodies: vec![body.clone()],
        };
        let report = solver.step(&mut sys, &p);
        assert_eq!(report.interactions, 0, "{solver:?} found phantom interactions");
        assert_eq!(sys.bodies[0].x, start, "{solver:?} moved an isolated body");
        assert_eq!(sys.bodies[0].v, NVec2::zeros());
    }
}

#[test]
fn zero_bodies_is_fine() {
    let p = test_params();
    for solver in [SolverKind::Direct, SolverKind::BarnesHut] {
        let mut sys = System { bodies: vec![] };
        let report = solver.step(&mut sys, &p);
        assert_eq!(report.interactions, 0);
    }
}

// ==================================================================================
// Barnes-Hut vs direct
// ==================================================================================

#[test]
fn two_body_reference_scenario_matches_between_solvers() {
    // Masses {1,1} at (0,0) and (10,0), G = 1, eps = 0, theta = 0.5,
    // damping = 1: each body feels |F| = 1/100 toward the other, and the
    // tree degenerates to single-body leaves so no approximation occurs
    let p = test_params();
    let make = || System {
        bodies: vec![
            Body {
                x: NVec2::new(0.0, 0.0),
                v: NVec2::zeros(),
                m: 1.0,
                radius: 0.0,
            },
            Body {
                x: NVec2::new(10.0, 0.0),
                v: NVec2::zeros(),
                m: 1.0,
                radius: 0.0,
            },
        ],
    };

    let mut direct = make();
    step_direct(&mut direct, &p);
    // v = F/m = 0.01, along +x for body 0. The position update then
    // drags body 0 to x = 0.01, body 1 to x = 9.99
    assert!((direct.bodies[0].v.x - 0.01).abs() < 1e-12);
    assert!((direct.bodies[1].v.x + 0.01).abs() < 1e-12);
    assert!(direct.bodies[0].v.y.abs() < 1e-12);

    let mut tree = make();
    step_barnes_hut(&mut tree, &p);
    for i in 0..2 {
        assert!((tree.bodies[i].v - direct.bodies[i].v).norm() < 1e-12);
        assert!((tree.bodies[i].x - direct.bodies[i].x).norm() < 1e-12);
    }
}

#[test]
fn out_of_domain_body_is_excluded_from_tree_but_still_integrated() {
    let p = test_params();
    let mut sys = System {
        bodies: vec![
            Body {
                x: NVec2::new(-5.0, 300.0), // drifted off the left edge
                v: NVec2::zeros(),
                m: 4.0,
                radius: 1.0,
            },
            Body {
                x: NVec2::new(400.0, 300.0),
                v: NVec2::zeros(),
                m: 1.0,
                radius: 1.0,
            },
        ],
    };

    let report = step_barnes_hut(&mut sys, &p);
    let tree = report.tree.expect("tree solver returns its tree");

    // Only the in-domain body made it into the tree
    assert!((tree.total_mass() - 1.0).abs() < 1e-12);

    // The outsider still integrates: clamped back onto the edge
    assert_eq!(sys.bodies[0].x.x, 0.0);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn boundary_reflection_clamps_and_halves_velocity() {
    let p = test_params();
    let v = 5.0;
    let mut sys = System {
        bodies: vec![Body {
            x: NVec2::new(p.width - 1.0, 300.0),
            v: NVec2::new(v, 0.0),
            m: 1.0,
            radius: 1.0,
        }],
    };

    step_direct(&mut sys, &p);

    assert_eq!(sys.bodies[0].x.x, p.width);
    assert_eq!(sys.bodies[0].v.x, -0.5 * v);
}

#[test]
fn damping_scales_velocity_each_step() {
    let mut p = test_params();
    p.damping = 0.5;
    let mut sys = System {
        bodies: vec![Body {
            x: NVec2::new(400.0, 300.0),
            v: NVec2::new(2.0, -2.0),
            m: 1.0,
            radius: 1.0,
        }],
    };

    step_direct(&mut sys, &p);

    // No forces on a lone body: v is purely damped, then applied
    assert!((sys.bodies[0].v.x - 1.0).abs() < 1e-12);
    assert!((sys.bodies[0].v.y + 1.0).abs() < 1e-12);
    assert!((sys.bodies[0].x.x - 401.0).abs() < 1e-12);
    assert!((sys.bodies[0].x.y - 299.0).abs() < 1e-12);
}
