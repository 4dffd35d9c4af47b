use serde::{Deserialize, Serialize};

use crate::core::line::LinePoint;
use crate::core::mapper::CoordinateMapper;
use crate::core::types::PixelPoint;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    #[must_use]
    pub fn between(from: PixelPoint, to: PixelPoint) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

/// Maps every point of a series into pixel space, preserving point order.
#[must_use]
pub fn project_vertices(points: &[LinePoint], mapper: &CoordinateMapper) -> Vec<PixelPoint> {
    points.iter().map(|point| mapper.map(point.x, point.y)).collect()
}

/// Connects consecutive vertices. Fewer than two vertices produce no segment.
#[must_use]
pub fn polyline_segments(vertices: &[PixelPoint]) -> Vec<LineSegment> {
    vertices
        .windows(2)
        .map(|pair| LineSegment::between(pair[0], pair[1]))
        .collect()
}
