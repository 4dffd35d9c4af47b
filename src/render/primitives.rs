use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::core::types::PixelPoint;
use crate::error::{GraphError, GraphResult};

/// Compositing mode for filled shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    SourceOver,
    /// Erases everything the shape covers, ignoring its color.
    Clear,
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(GraphError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Filled disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: PixelPoint,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center: PixelPoint, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.center.is_finite() {
            return Err(GraphError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GraphError::InvalidData(
                "circle radius must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Stroke applied along a path outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStroke {
    pub width: f64,
    pub color: Color,
}

/// Closed polygon, filled and/or stroked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub vertices: Vec<PixelPoint>,
    pub fill: Option<Color>,
    pub stroke: Option<PathStroke>,
    pub blend: BlendMode,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(vertices: Vec<PixelPoint>, color: Color) -> Self {
        Self {
            vertices,
            fill: Some(color),
            stroke: None,
            blend: BlendMode::SourceOver,
        }
    }

    /// Shape that erases whatever lies under it.
    #[must_use]
    pub fn clear(vertices: Vec<PixelPoint>) -> Self {
        Self {
            vertices,
            fill: Some(Color::TRANSPARENT),
            stroke: None,
            blend: BlendMode::Clear,
        }
    }

    #[must_use]
    pub fn with_stroke(mut self, width: f64, color: Color) -> Self {
        self.stroke = Some(PathStroke { width, color });
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.vertices.len() < 3 {
            return Err(GraphError::InvalidData(
                "path needs at least three vertices".to_owned(),
            ));
        }
        if self.vertices.iter().any(|vertex| !vertex.is_finite()) {
            return Err(GraphError::InvalidData(
                "path vertices must be finite".to_owned(),
            ));
        }
        if self.fill.is_none() && self.stroke.is_none() {
            return Err(GraphError::InvalidData(
                "path must be filled or stroked".to_owned(),
            ));
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke {
            validate_stroke_width(stroke.width)?;
            stroke.color.validate()?;
        }
        Ok(())
    }
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(GraphError::InvalidData(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(GraphError::InvalidData(
                "rect size must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label. `y` is the top of the text box.
///
/// A non-zero `rotation_deg` turns the aligned text box around `(x, y)`;
/// `-90` reads bottom to top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    #[serde(default)]
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_rotation_deg(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.text.is_empty() {
            return Err(GraphError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(GraphError::InvalidData(
                "text coordinates and rotation must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(GraphError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// One immutable drawing instruction. Frames replay these in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Path(PathPrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> GraphResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Circle(circle) => circle.validate(),
            Self::Path(path) => path.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

impl From<LinePrimitive> for DrawCommand {
    fn from(value: LinePrimitive) -> Self {
        Self::Line(value)
    }
}

impl From<CirclePrimitive> for DrawCommand {
    fn from(value: CirclePrimitive) -> Self {
        Self::Circle(value)
    }
}

impl From<PathPrimitive> for DrawCommand {
    fn from(value: PathPrimitive) -> Self {
        Self::Path(value)
    }
}

impl From<RectPrimitive> for DrawCommand {
    fn from(value: RectPrimitive) -> Self {
        Self::Rect(value)
    }
}

impl From<TextPrimitive> for DrawCommand {
    fn from(value: TextPrimitive) -> Self {
        Self::Text(value)
    }
}

fn validate_stroke_width(width: f64) -> GraphResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(GraphError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, PathPrimitive};
    use crate::core::color::Color;
    use crate::core::types::PixelPoint;

    #[test]
    fn degenerate_path_is_rejected() {
        let path = PathPrimitive::filled(
            vec![PixelPoint::new(0.0, 0.0), PixelPoint::new(1.0, 1.0)],
            Color::BLACK,
        );
        assert!(DrawCommand::from(path).validate().is_err());
    }

    #[test]
    fn clear_path_validates_without_visible_color() {
        let path = PathPrimitive::clear(vec![
            PixelPoint::new(0.0, 0.0),
            PixelPoint::new(1.0, 0.0),
            PixelPoint::new(1.0, 1.0),
        ]);
        assert!(path.validate().is_ok());
    }
}
