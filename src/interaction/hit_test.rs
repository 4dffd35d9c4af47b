use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PixelRect};

use super::HitTarget;

/// Pixel-space shape used only for pointer containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum HitShape {
    Circle { center: PixelPoint, radius: f64 },
    /// Closed polygon, tested with the even-odd rule.
    Polygon { vertices: Vec<PixelPoint> },
    Rect { rect: PixelRect },
}

impl HitShape {
    #[must_use]
    pub fn bounds(&self) -> Option<PixelRect> {
        match self {
            Self::Circle { center, radius } => Some(PixelRect {
                left: center.x - radius,
                top: center.y - radius,
                right: center.x + radius,
                bottom: center.y + radius,
            }),
            Self::Polygon { vertices } => PixelRect::bounding(vertices),
            Self::Rect { rect } => Some(*rect),
        }
    }

    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        match self {
            Self::Circle { center, radius } => center.distance_squared(point) <= radius * radius,
            Self::Polygon { vertices } => polygon_contains(vertices, point),
            Self::Rect { rect } => rect.contains(point),
        }
    }
}

/// One clickable region plus its cached bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitRegion {
    pub target: HitTarget,
    pub shape: HitShape,
    pub bounds: PixelRect,
}

impl HitRegion {
    /// Returns `None` for shapes without extent (an empty polygon).
    #[must_use]
    pub fn new(target: HitTarget, shape: HitShape) -> Option<Self> {
        let bounds = shape.bounds()?;
        Some(Self {
            target,
            shape,
            bounds,
        })
    }

    #[must_use]
    pub fn contains(&self, point: PixelPoint) -> bool {
        self.bounds.contains(point) && self.shape.contains(point)
    }
}

/// Regions produced by the last completed build, in registration order.
///
/// Builders register regions in series-then-point order, so the first match
/// is also the earliest entity when regions overlap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HitIndex {
    regions: Vec<HitRegion>,
}

impl HitIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region; degenerate shapes are skipped.
    pub fn push(&mut self, target: HitTarget, shape: HitShape) {
        if let Some(region) = HitRegion::new(target, shape) {
            self.regions.push(region);
        }
    }

    #[must_use]
    pub fn hit(&self, x: f64, y: f64) -> Option<HitTarget> {
        let point = PixelPoint::new(x, y);
        self.regions
            .iter()
            .find(|region| region.contains(point))
            .map(|region| region.target)
    }

    #[must_use]
    pub fn region(&self, target: HitTarget) -> Option<&HitRegion> {
        self.regions.iter().find(|region| region.target == target)
    }

    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }
}

fn polygon_contains(vertices: &[PixelPoint], point: PixelPoint) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut previous = vertices[vertices.len() - 1];
    for &current in vertices {
        if (current.y > point.y) != (previous.y > point.y) {
            let crossing_x =
                current.x + (point.y - current.y) * (previous.x - current.x) / (previous.y - current.y);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::{HitIndex, HitShape};
    use crate::core::{PixelPoint, PixelRect};
    use crate::interaction::HitTarget;

    fn square() -> Vec<PixelPoint> {
        vec![
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(10.0, 0.0),
            PixelPoint::new(10.0, 10.0),
            PixelPoint::new(0.0, 10.0),
        ]
    }

    #[test]
    fn polygon_uses_even_odd_containment() {
        let shape = HitShape::Polygon { vertices: square() };
        assert!(shape.contains(PixelPoint::new(5.0, 5.0)));
        assert!(!shape.contains(PixelPoint::new(15.0, 5.0)));
        assert!(!shape.contains(PixelPoint::new(5.0, -1.0)));
    }

    #[test]
    fn circle_edge_is_inclusive() {
        let shape = HitShape::Circle {
            center: PixelPoint::new(0.0, 0.0),
            radius: 5.0,
        };
        assert!(shape.contains(PixelPoint::new(3.0, 4.0)));
        assert!(!shape.contains(PixelPoint::new(3.0, 4.1)));
    }

    #[test]
    fn earliest_region_wins_on_overlap() {
        let mut index = HitIndex::new();
        let first = HitTarget::Point { series: 0, index: 0 };
        let second = HitTarget::Point { series: 1, index: 0 };
        index.push(
            first,
            HitShape::Circle {
                center: PixelPoint::new(0.0, 0.0),
                radius: 10.0,
            },
        );
        index.push(
            second,
            HitShape::Rect {
                rect: PixelRect::from_corners(PixelPoint::new(-5.0, -5.0), PixelPoint::new(5.0, 5.0)),
            },
        );
        assert_eq!(index.hit(1.0, 1.0), Some(first));
        assert_eq!(index.hit(100.0, 100.0), None);
    }

    #[test]
    fn empty_polygon_is_not_registered() {
        let mut index = HitIndex::new();
        index.push(HitTarget::Slice { index: 0 }, HitShape::Polygon { vertices: Vec::new() });
        assert!(index.is_empty());
    }
}
