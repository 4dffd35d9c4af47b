use crate::core::mapper::CoordinateMapper;
use crate::core::types::{PixelPoint, PixelRect};

/// Lays bars out left to right in equal slots across the usable width.
///
/// Each bar is `slot * (1 - spacing_ratio)` wide and centered in its slot.
/// Bars grow from zero, clamped into the mapper's y range, so negative
/// values hang below the zero line.
#[must_use]
pub fn build_bar_rects(values: &[f64], mapper: &CoordinateMapper, spacing_ratio: f64) -> Vec<PixelRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let slot = mapper.usable_width() / values.len() as f64;
    let width = slot * (1.0 - spacing_ratio.clamp(0.0, 1.0));
    let inset = (slot - width) / 2.0;
    let y_range = mapper.y_range();
    let anchor_y = mapper.y(0.0_f64.clamp(y_range.min(), y_range.max()));
    let left_pad = mapper.padding().left;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let left = left_pad + slot * index as f64 + inset;
            PixelRect::from_corners(
                PixelPoint::new(left, mapper.y(*value)),
                PixelPoint::new(left + width, anchor_y),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::build_bar_rects;
    use crate::core::axis_range::AxisRange;
    use crate::core::mapper::CoordinateMapper;
    use crate::core::types::{Padding, Viewport};

    #[test]
    fn bars_share_width_equally() {
        let mapper = CoordinateMapper::new(
            Viewport::new(100, 100),
            Padding::ZERO,
            AxisRange::UNIT,
            AxisRange::new(0.0, 10.0).expect("valid"),
        );
        let rects = build_bar_rects(&[5.0, 10.0], &mapper, 0.2);
        assert_eq!(rects.len(), 2);
        assert!((rects[0].left - 5.0).abs() <= 1e-9);
        assert!((rects[0].width() - 40.0).abs() <= 1e-9);
        assert!((rects[1].left - 55.0).abs() <= 1e-9);
        assert_eq!((rects[0].top, rects[0].bottom), (50.0, 100.0));
        assert_eq!(rects[1].top, 0.0);
    }

    #[test]
    fn negative_value_hangs_below_zero_line() {
        let mapper = CoordinateMapper::new(
            Viewport::new(100, 100),
            Padding::ZERO,
            AxisRange::UNIT,
            AxisRange::new(-5.0, 5.0).expect("valid"),
        );
        let rects = build_bar_rects(&[-5.0], &mapper, 0.0);
        assert_eq!((rects[0].top, rects[0].bottom), (50.0, 100.0));
    }
}
