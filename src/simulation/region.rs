//! Axis-aligned rectangular regions used by the quadtree.
//!
//! A `Region` is an immutable value: a center point plus half-extents.
//! It answers containment and overlap queries on closed intervals and
//! hands out the four quadrant sub-regions used during subdivision.

use crate::simulation::states::NVec2;

/// Quadrants of a region, in the fixed order insertion attempts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    Ne,
    Nw,
    Se,
    Sw,
}

impl Quadrant {
    /// Fixed NE, NW, SE, SW attempt order. Tree shape (and therefore
    /// interaction counts) is deterministic only because this order is.
    pub const ALL: [Quadrant; 4] = [Quadrant::Ne, Quadrant::Nw, Quadrant::Se, Quadrant::Sw];
}

/// Axis-aligned rectangle: center plus half-width/half-height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: NVec2,
    pub half_w: f64,
    pub half_h: f64,
}

impl Region {
    pub fn new(cx: f64, cy: f64, half_w: f64, half_h: f64) -> Self {
        Self {
            center: NVec2::new(cx, cy),
            half_w,
            half_h,
        }
    }

    /// Closed-interval membership test on both axes.
    pub fn contains(&self, p: NVec2) -> bool {
        p.x >= self.center.x - self.half_w
            && p.x <= self.center.x + self.half_w
            && p.y >= self.center.y - self.half_h
            && p.y <= self.center.y + self.half_h
    }

    /// Separating-axis test on closed intervals: true unless the two
    /// rectangles are disjoint along either axis.
    pub fn overlaps(&self, other: &Region) -> bool {
        (self.center.x - other.center.x).abs() <= self.half_w + other.half_w
            && (self.center.y - other.center.y).abs() <= self.half_h + other.half_h
    }

    /// The sub-region for one quadrant: half the half-extents, centered
    /// at the parent center offset by a quarter of the parent size.
    pub fn quadrant(&self, q: Quadrant) -> Region {
        let hw = self.half_w / 2.0;
        let hh = self.half_h / 2.0;
        let (dx, dy) = match q {
            Quadrant::Ne => (hw, -hh),
            Quadrant::Nw => (-hw, -hh),
            Quadrant::Se => (hw, hh),
            Quadrant::Sw => (-hw, hh),
        };
        Region {
            center: NVec2::new(self.center.x + dx, self.center.y + dy),
            half_w: hw,
            half_h: hh,
        }
    }
}
