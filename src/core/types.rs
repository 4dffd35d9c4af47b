use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> GraphResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GraphError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Insets around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned pixel rectangle. `left <= right` and `top <= bottom` once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PixelRect {
    /// Builds a rect from any two corners.
    #[must_use]
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    /// Smallest rect enclosing every point, or `None` for an empty slice.
    #[must_use]
    pub fn bounding(points: &[PixelPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut rect = Self::from_corners(*first, *first);
        for point in &points[1..] {
            rect.left = rect.left.min(point.x);
            rect.top = rect.top.min(point.y);
            rect.right = rect.right.max(point.x);
            rect.bottom = rect.bottom.max(point.y);
        }
        Some(rect)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Inclusive containment on all four edges.
    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

/// Device-independent unit to pixel conversion factor injected by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Density(f64);

impl Density {
    pub const IDENTITY: Self = Self(1.0);

    pub fn new(factor: f64) -> GraphResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(GraphError::InvalidData(
                "density must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self(factor))
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn dp_to_px(self, dp: f64) -> f64 {
        dp * self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::{Density, PixelPoint, PixelRect, Viewport};

    #[test]
    fn bounding_rect_covers_all_points() {
        let rect = PixelRect::bounding(&[
            PixelPoint::new(4.0, 1.0),
            PixelPoint::new(-2.0, 8.0),
            PixelPoint::new(3.0, 3.0),
        ])
        .expect("non-empty");
        assert_eq!(rect, PixelRect::from_corners(PixelPoint::new(-2.0, 1.0), PixelPoint::new(4.0, 8.0)));
        assert!(rect.contains(PixelPoint::new(4.0, 8.0)));
        assert!(!rect.contains(PixelPoint::new(4.1, 8.0)));
        assert!(PixelRect::bounding(&[]).is_none());
    }

    #[test]
    fn zero_sized_viewport_is_rejected() {
        assert!(Viewport::new(0, 10).validate().is_err());
        assert!(Viewport::new(10, 10).validate().is_ok());
    }

    #[test]
    fn density_rejects_non_positive_factor() {
        assert!(Density::new(0.0).is_err());
        assert!(Density::new(f64::NAN).is_err());
        let density = Density::new(2.5).expect("valid density");
        assert_eq!(density.dp_to_px(4.0), 10.0);
    }
}
