use crate::core::axis_range::AxisRange;
use crate::core::types::{Padding, PixelPoint, PixelRect, Viewport};

/// Maps a data-space x to pixel space. Usable width is clamped at zero so
/// oversized padding collapses the plot instead of mirroring it.
#[must_use]
pub fn to_pixel_x(value: f64, canvas_width: f64, left_pad: f64, right_pad: f64, range: AxisRange) -> f64 {
    let usable = (canvas_width - left_pad - right_pad).max(0.0);
    left_pad + range.percent(value) * usable
}

/// Maps a data-space y to pixel space, flipping so larger values sit higher.
#[must_use]
pub fn to_pixel_y(value: f64, canvas_height: f64, top_pad: f64, bottom_pad: f64, range: AxisRange) -> f64 {
    let usable = (canvas_height - top_pad - bottom_pad).max(0.0);
    canvas_height - bottom_pad - range.percent(value) * usable
}

/// Per-pass mapping context: canvas size, padding and the resolved ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    padding: Padding,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(viewport: Viewport, padding: Padding, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            viewport,
            padding,
            x_range,
            y_range,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn padding(&self) -> Padding {
        self.padding
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn x(&self, value: f64) -> f64 {
        to_pixel_x(
            value,
            self.viewport.width_px(),
            self.padding.left,
            self.padding.right,
            self.x_range,
        )
    }

    #[must_use]
    pub fn y(&self, value: f64) -> f64 {
        to_pixel_y(
            value,
            self.viewport.height_px(),
            self.padding.top,
            self.padding.bottom,
            self.y_range,
        )
    }

    #[must_use]
    pub fn map(&self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(self.x(x), self.y(y))
    }

    #[must_use]
    pub fn usable_width(&self) -> f64 {
        (self.viewport.width_px() - self.padding.left - self.padding.right).max(0.0)
    }

    #[must_use]
    pub fn usable_height(&self) -> f64 {
        (self.viewport.height_px() - self.padding.top - self.padding.bottom).max(0.0)
    }

    /// Pixel y of the bottom padding line.
    #[must_use]
    pub fn baseline_y(&self) -> f64 {
        self.viewport.height_px() - self.padding.bottom
    }

    #[must_use]
    pub fn plot_rect(&self) -> PixelRect {
        PixelRect {
            left: self.padding.left,
            top: self.padding.top,
            right: self.padding.left + self.usable_width(),
            bottom: self.baseline_y(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateMapper, to_pixel_x, to_pixel_y};
    use crate::core::axis_range::AxisRange;
    use crate::core::types::{Padding, Viewport};

    #[test]
    fn padding_shifts_and_shrinks_plot() {
        let range = AxisRange::new(0.0, 10.0).expect("valid");
        assert_eq!(to_pixel_x(0.0, 120.0, 10.0, 10.0, range), 10.0);
        assert_eq!(to_pixel_x(10.0, 120.0, 10.0, 10.0, range), 110.0);
        assert_eq!(to_pixel_y(0.0, 120.0, 10.0, 10.0, range), 110.0);
        assert_eq!(to_pixel_y(10.0, 120.0, 10.0, 10.0, range), 10.0);
    }

    #[test]
    fn oversized_padding_collapses_to_left_edge() {
        let range = AxisRange::new(0.0, 1.0).expect("valid");
        assert_eq!(to_pixel_x(1.0, 20.0, 15.0, 15.0, range), 15.0);
    }

    #[test]
    fn plot_rect_follows_padding() {
        let mapper = CoordinateMapper::new(
            Viewport::new(200, 100),
            Padding::new(20.0, 5.0, 10.0, 30.0),
            AxisRange::UNIT,
            AxisRange::UNIT,
        );
        let rect = mapper.plot_rect();
        assert_eq!((rect.left, rect.top, rect.right, rect.bottom), (20.0, 5.0, 190.0, 70.0));
        assert_eq!(mapper.baseline_y(), 70.0);
    }
}
