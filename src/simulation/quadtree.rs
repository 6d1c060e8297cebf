//! # Barnes–Hut Quadtree (2D)
//!
//! This module implements the **2D Barnes–Hut quadtree** used to
//! approximate gravitational forces in an `N`-body system, replacing the
//! naive `O(N²)` all-pairs sum with an approximate `O(N log N)` method
//! while preserving good accuracy for distant interactions.
//!
//! ## Core Concepts
//!
//! The key idea of Barnes–Hut is to treat a group of distant bodies as a
//! single pseudo-body located at their center of mass. For sufficiently
//! far clusters, evaluating one interaction is drastically cheaper than
//! computing many individual forces.
//!
//! - The simulation domain is recursively subdivided into 4 quadrants.
//! - Each quadrant becomes a node of the quadtree.
//! - A leaf holds at most `capacity` bodies; past that it subdivides.
//! - Each node stores:
//!   - total mass of its subtree
//!   - center of mass (COM), maintained incrementally on insert
//!   - its [`Region`] (for containment tests and node size)
//!
//! A tree is built fresh from the current body positions every step and
//! discarded afterward. Rebuilding is cheaper and simpler than repairing
//! an old tree under arbitrary body movement.

use crate::simulation::region::{Quadrant, Region};
use crate::simulation::states::NVec2;

/// Squared distance under which a node's COM is taken to be the probe
/// body itself, so it contributes no force.
const SELF_DIST_SQ: f64 = 1e-9;

/// Position + mass snapshot of one inserted body. The tree never holds
/// references back into the system's body collection.
#[derive(Debug, Clone, Copy)]
pub struct PointMass {
    pub pos: NVec2,
    pub mass: f64,
}

/// One line segment of a node boundary, for external rendering only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: NVec2,
    pub b: NVec2,
}

/// Read-only view of a single node, for debug overlays.
#[derive(Debug, Clone, Copy)]
pub struct NodeSnapshot {
    pub region: Region,
    pub center_of_mass: NVec2,
    pub total_mass: f64,
    pub is_divided: bool,
}

/// A quadtree node. Owns either up to `capacity` bodies (leaf) or four
/// child nodes covering its quadrants; a node that has subdivided holds
/// no bodies directly and never un-divides.
#[derive(Debug, Clone)]
pub struct QuadTree {
    region: Region,
    capacity: usize,
    bodies: Vec<PointMass>,
    children: Option<Box<[QuadTree; 4]>>, // NE, NW, SE, SW
    total_mass: f64,
    center_of_mass: NVec2,
}

impl QuadTree {
    /// Create an empty tree over `region` with the given leaf capacity.
    /// Capacity 1 is the canonical Barnes–Hut configuration: every leaf
    /// holds at most one body, so internal nodes are genuine aggregates.
    pub fn new(region: Region, capacity: usize) -> Self {
        Self {
            region,
            capacity,
            bodies: Vec::new(),
            children: None,
            total_mass: 0.0,
            center_of_mass: NVec2::zeros(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    pub fn center_of_mass(&self) -> NVec2 {
        self.center_of_mass
    }

    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Insert one body into the subtree rooted here.
    ///
    /// Returns `false` without mutating anything if `pos` lies outside
    /// this node's region. The caller must root the tree over the full
    /// simulation domain, or drifted bodies are silently dropped from
    /// the tree (they stay in the system and keep integrating).
    ///
    /// A leaf below capacity appends the body and folds it into the
    /// running mass-weighted COM. A leaf at capacity subdivides first,
    /// then the body is delegated to the first child whose region
    /// contains it (NE, NW, SE, SW order), and this node's own aggregate
    /// is updated after the child accepts.
    pub fn insert(&mut self, pos: NVec2, mass: f64) -> bool {
        if !self.region.contains(pos) {
            return false;
        }

        if self.children.is_none() && self.bodies.len() < self.capacity {
            self.bodies.push(PointMass { pos, mass });
            self.absorb(pos, mass);
            return true;
        }

        if self.children.is_none() {
            self.subdivide();
        }

        let children = self
            .children
            .as_mut()
            .expect("node was subdivided just above");
        for child in children.iter_mut() {
            if child.insert(pos, mass) {
                // Update our own aggregate only after a child accepted,
                // so a failed insert leaves the node untouched.
                self.absorb(pos, mass);
                return true;
            }
        }

        // Unreachable when the quadrants tile the region exactly, kept
        // as a defined answer for degenerate (zero-extent) regions.
        false
    }

    /// Incremental weighted-average COM update:
    /// `new_com = (old_com * old_mass + pos * mass) / (old_mass + mass)`.
    fn absorb(&mut self, pos: NVec2, mass: f64) {
        let new_mass = self.total_mass + mass;
        if new_mass > 0.0 {
            self.center_of_mass =
                (self.center_of_mass * self.total_mass + pos * mass) / new_mass;
        }
        self.total_mass = new_mass;
    }

    /// Split this leaf into four quadrant children and push every held
    /// body down into whichever child contains it (NE, NW, SE, SW
    /// attempt order). The node's own aggregate already accounts for
    /// those bodies and is left alone. Happens at most once per node.
    fn subdivide(&mut self) {
        let children = Box::new(
            Quadrant::ALL.map(|q| QuadTree::new(self.region.quadrant(q), self.capacity)),
        );
        self.children = Some(children);

        let bodies = std::mem::take(&mut self.bodies);
        let children = self
            .children
            .as_mut()
            .expect("children installed just above");
        for pm in bodies {
            for child in children.iter_mut() {
                if child.insert(pm.pos, pm.mass) {
                    break;
                }
            }
        }
    }

    /// Net Barnes–Hut force on a probe body at `pos` with mass `mass`
    /// from everything in this subtree, plus the number of interactions
    /// evaluated.
    ///
    /// For each node:
    /// - zero aggregate mass contributes nothing;
    /// - a COM within [`SELF_DIST_SQ`] of the probe is the probe itself
    ///   and contributes nothing (no self-force singularity);
    /// - a leaf, or an internal node with `s/d < theta` (s = full node
    ///   width, d = distance to COM), is approximated as one effective
    ///   mass at its COM: magnitude `G·m·M / (d² + ε²)` along the unit
    ///   displacement, counted as exactly 1 interaction;
    /// - otherwise all four children are visited and summed.
    ///
    /// Smaller `theta` recurses deeper (more exact, more interactions);
    /// larger `theta` approximates more aggressively.
    pub fn calculate_force(
        &self,
        pos: NVec2,
        mass: f64,
        theta: f64,
        g: f64,
        epsilon: f64,
    ) -> (NVec2, u64) {
        if self.total_mass == 0.0 {
            return (NVec2::zeros(), 0);
        }

        let r = self.center_of_mass - pos;
        let dist_sq = r.dot(&r);
        if dist_sq < SELF_DIST_SQ {
            return (NVec2::zeros(), 0);
        }

        let s = 2.0 * self.region.half_w;
        let dist = dist_sq.sqrt();

        match &self.children {
            Some(children) if s / dist >= theta => {
                // Too close to approximate: descend and sum.
                let mut force = NVec2::zeros();
                let mut interactions = 0;
                for child in children.iter() {
                    let (f, n) = child.calculate_force(pos, mass, theta, g, epsilon);
                    force += f;
                    interactions += n;
                }
                (force, interactions)
            }
            _ => {
                // Leaf, or far enough away: one effective mass at the COM.
                let magnitude =
                    g * mass * self.total_mass / (dist_sq + epsilon * epsilon);
                ((r / dist) * magnitude, 1)
            }
        }
    }

    /// Descend to the unique leaf whose region contains `(x, y)`, or
    /// `None` if the point lies outside the root region. Read-only,
    /// consumed by debug overlays, never by the solver.
    pub fn find_node_at_point(&self, x: f64, y: f64) -> Option<&QuadTree> {
        let p = NVec2::new(x, y);
        if !self.region.contains(p) {
            return None;
        }
        match &self.children {
            None => Some(self),
            Some(children) => children
                .iter()
                .find_map(|child| child.find_node_at_point(x, y)),
        }
    }

    /// Boundary segments of every divided node: the vertical and
    /// horizontal bisectors of its region, depth-first across
    /// NE, NW, SE, SW. Purely a rendering aid.
    pub fn boundary_segments(&self) -> Vec<Segment> {
        let mut out = Vec::new();
        self.collect_segments(&mut out);
        out
    }

    fn collect_segments(&self, out: &mut Vec<Segment>) {
        let Some(children) = &self.children else {
            return;
        };
        let c = self.region.center;
        out.push(Segment {
            a: NVec2::new(c.x, c.y - self.region.half_h),
            b: NVec2::new(c.x, c.y + self.region.half_h),
        });
        out.push(Segment {
            a: NVec2::new(c.x - self.region.half_w, c.y),
            b: NVec2::new(c.x + self.region.half_w, c.y),
        });
        for child in children.iter() {
            child.collect_segments(out);
        }
    }

    /// Read-only aggregate view of this node.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            region: self.region,
            center_of_mass: self.center_of_mass,
            total_mass: self.total_mass,
            is_divided: self.is_divided(),
        }
    }
}
