use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{PixelPoint, PixelRect, Viewport};

/// Maximum angular step used when flattening arcs into polygons.
pub const PIE_ARC_STEP_DEG: f64 = 2.0;

const FULL_TURN_DEG: f64 = 360.0;

/// Resolved pie placement for one pass.
///
/// Angles are in degrees, in screen space (y grows down), so increasing
/// angles run clockwise and `270` points straight up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center: PixelPoint,
    pub radius: f64,
    pub inner_radius: f64,
    pub start_angle_deg: f64,
    pub slice_padding_deg: f64,
}

impl PieLayout {
    /// Centers the pie and fits it into the shorter side minus `radius_padding_px`.
    /// `inner_ratio` carves a donut hole of `radius * inner_ratio / 255`.
    #[must_use]
    pub fn fit(
        viewport: Viewport,
        radius_padding_px: f64,
        inner_ratio: u8,
        start_angle_deg: f64,
        slice_padding_deg: f64,
    ) -> Self {
        let mid_x = viewport.width_px() / 2.0;
        let mid_y = viewport.height_px() / 2.0;
        let radius = (mid_x.min(mid_y) - radius_padding_px).max(0.0);
        Self {
            center: PixelPoint::new(mid_x, mid_y),
            radius,
            inner_radius: radius * f64::from(inner_ratio) / 255.0,
            start_angle_deg,
            slice_padding_deg,
        }
    }

    #[must_use]
    pub fn point_at(&self, radius: f64, angle_deg: f64) -> PixelPoint {
        let radians = angle_deg.to_radians();
        PixelPoint::new(
            self.center.x + radius * radians.cos(),
            self.center.y + radius * radians.sin(),
        )
    }

    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        PixelRect {
            left: self.center.x - self.radius,
            top: self.center.y - self.radius,
            right: self.center.x + self.radius,
            bottom: self.center.y + self.radius,
        }
    }
}

/// Proportional sweep per value, in degrees, before padding.
///
/// A non-positive total yields a zero sweep for every slice.
#[must_use]
pub fn sweep_angles(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        if !values.is_empty() {
            debug!(slice_count = values.len(), "pie total is zero, all sweeps collapse");
        }
        return vec![0.0; values.len()];
    }
    values.iter().map(|value| value / total * FULL_TURN_DEG).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieWedge {
    pub index: usize,
    /// Proportional sweep, padding ignored.
    pub sweep_deg: f64,
    /// First visible angle (start plus padding).
    pub visible_start_deg: f64,
    /// Visible sweep after padding, never negative.
    pub visible_sweep_deg: f64,
    /// Closed outline, empty for an invisible wedge.
    pub outline: Vec<PixelPoint>,
}

impl PieWedge {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.outline.is_empty()
    }
}

/// Lays wedges out in insertion order starting at the layout's start angle.
#[must_use]
pub fn build_pie_wedges(values: &[f64], layout: &PieLayout) -> Vec<PieWedge> {
    let mut current = layout.start_angle_deg;
    sweep_angles(values)
        .into_iter()
        .enumerate()
        .map(|(index, sweep)| {
            let visible_start = current + layout.slice_padding_deg;
            let visible_sweep = (sweep - layout.slice_padding_deg).max(0.0);
            current += sweep;
            PieWedge {
                index,
                sweep_deg: sweep,
                visible_start_deg: visible_start,
                visible_sweep_deg: visible_sweep,
                outline: wedge_outline(layout, visible_start, visible_sweep),
            }
        })
        .collect()
}

fn wedge_outline(layout: &PieLayout, start_deg: f64, sweep_deg: f64) -> Vec<PixelPoint> {
    if sweep_deg <= 0.0 || layout.radius <= 0.0 {
        return Vec::new();
    }

    let steps = (sweep_deg / PIE_ARC_STEP_DEG).ceil().max(1.0) as usize;
    let step = sweep_deg / steps as f64;
    let mut outline = Vec::with_capacity((steps + 1) * 2);
    outline.extend((0..=steps).map(|i| layout.point_at(layout.radius, start_deg + step * i as f64)));

    if layout.inner_radius > 0.0 {
        outline.extend(
            (0..=steps)
                .rev()
                .map(|i| layout.point_at(layout.inner_radius, start_deg + step * i as f64)),
        );
    } else if sweep_deg < FULL_TURN_DEG {
        outline.push(layout.center);
    }
    outline
}

#[cfg(test)]
mod tests {
    use super::{PieLayout, build_pie_wedges, sweep_angles};
    use crate::core::types::Viewport;

    #[test]
    fn sweeps_are_proportional() {
        assert_eq!(sweep_angles(&[1.0, 1.0, 2.0]), vec![90.0, 90.0, 180.0]);
    }

    #[test]
    fn zero_total_collapses_every_sweep() {
        assert_eq!(sweep_angles(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(sweep_angles(&[]).is_empty());
    }

    #[test]
    fn radius_fits_shorter_side() {
        let layout = PieLayout::fit(Viewport::new(200, 100), 10.0, 255, 270.0, 0.0);
        assert_eq!(layout.radius, 40.0);
        assert_eq!(layout.inner_radius, 40.0);
        assert_eq!((layout.center.x, layout.center.y), (100.0, 50.0));
    }

    #[test]
    fn padding_shrinks_visible_sweep_only() {
        let layout = PieLayout::fit(Viewport::new(100, 100), 0.0, 0, 270.0, 4.0);
        let wedges = build_pie_wedges(&[1.0, 3.0], &layout);
        assert_eq!(wedges[0].sweep_deg, 90.0);
        assert_eq!(wedges[0].visible_start_deg, 274.0);
        assert_eq!(wedges[0].visible_sweep_deg, 86.0);
        assert_eq!(wedges[1].visible_start_deg, 364.0);
    }

    #[test]
    fn zero_value_slice_is_invisible() {
        let layout = PieLayout::fit(Viewport::new(100, 100), 0.0, 0, 270.0, 0.0);
        let wedges = build_pie_wedges(&[0.0, 5.0], &layout);
        assert!(!wedges[0].is_visible());
        assert!(wedges[1].is_visible());
    }
}
