use paneforge_core::{Axis, Vec3};
use serde::{Deserialize, Serialize};

/// Inclusive axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bbox {
    /// A zero-size box around one point.
    #[must_use]
    pub fn point(p: Vec3) -> Self {
        Self { min: p, max: p }
    }

    /// Box spanning two arbitrary corners, in any order.
    #[must_use]
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Widens the box so it contains `p`.
    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Pushes both faces on `axis` outward by `amount` (inward when negative).
    #[must_use]
    pub fn grow(mut self, axis: Axis, amount: f64) -> Self {
        self.min.set(axis, self.min.get(axis) - amount);
        self.max.set(axis, self.max.get(axis) + amount);
        self
    }

    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.max.get(axis) - self.min.get(axis)
    }

    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// True when `min == max` along `axis`.
    #[must_use]
    pub fn is_flat(&self, axis: Axis) -> bool {
        self.min.get(axis) == self.max.get(axis)
    }

    /// True when any axis has zero, negative or NaN extent.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        Axis::ALL.iter().any(|&axis| {
            let extent = self.extent(axis);
            extent.is_nan() || extent <= 0.0
        })
    }

    #[must_use]
    pub fn contains_point(&self, p: Vec3) -> bool {
        Axis::ALL
            .iter()
            .all(|&a| self.min.get(a) <= p.get(a) && p.get(a) <= self.max.get(a))
    }

    /// True when `other`'s span on `axis` lies strictly inside this box's span.
    #[must_use]
    pub fn strictly_contains_on(&self, other: &Bbox, axis: Axis) -> bool {
        self.min.get(axis) < other.min.get(axis) && other.max.get(axis) < self.max.get(axis)
    }
}
