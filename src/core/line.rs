use serde::{Deserialize, Serialize};

use crate::core::color::{Color, DEFAULT_LINE_COLOR, DEFAULT_POINT_COLOR, DEFAULT_SELECTED_COLOR};
use crate::error::{GraphError, GraphResult};

/// One data-space sample of a [`Line`] plus its marker colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub selected_color: Color,
}

impl LinePoint {
    pub fn new(x: f64, y: f64) -> GraphResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GraphError::InvalidData(
                "line point coordinates must be finite".to_owned(),
            ));
        }
        Ok(Self {
            x,
            y,
            color: DEFAULT_POINT_COLOR,
            selected_color: DEFAULT_SELECTED_COLOR,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    /// Fields are public, so points built by hand are checked here.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "line point coordinates must be finite".to_owned(),
            ));
        }
        self.color.validate()?;
        self.selected_color.validate()
    }
}

/// Ordered polyline series. Insertion order is draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    points: Vec<LinePoint>,
    pub color: Color,
    /// Stroke width in dp.
    pub stroke_width_dp: f64,
    pub show_points: bool,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            color: DEFAULT_LINE_COLOR,
            stroke_width_dp: 6.0,
            show_points: true,
        }
    }
}

impl Line {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_stroke_width_dp(mut self, width: f64) -> Self {
        self.stroke_width_dp = width;
        self
    }

    #[must_use]
    pub fn with_show_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: impl IntoIterator<Item = LinePoint>) -> Self {
        self.points.extend(points);
        self
    }

    #[must_use]
    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&LinePoint> {
        self.points.get(index)
    }

    pub fn point_mut(&mut self, index: usize) -> Option<&mut LinePoint> {
        self.points.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: LinePoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Removes the first point at exactly `(x, y)`.
    pub fn remove_point_at(&mut self, x: f64, y: f64) -> GraphResult<LinePoint> {
        let position = self
            .points
            .iter()
            .position(|point| point.x == x && point.y == y)
            .ok_or_else(|| GraphError::NotFound(format!("no point at ({x}, {y})")))?;
        Ok(self.points.remove(position))
    }

    /// Drops every point whose x satisfies `predicate`; returns the removed count.
    pub fn remove_where_x(&mut self, mut predicate: impl FnMut(f64) -> bool) -> usize {
        let before = self.points.len();
        self.points.retain(|point| !predicate(point.x));
        before - self.points.len()
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.color.validate()?;
        if !self.stroke_width_dp.is_finite() || self.stroke_width_dp <= 0.0 {
            return Err(GraphError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.points.iter().try_for_each(LinePoint::validate)
    }
}
