//! Diagonal hatch fill under one designated line.
//!
//! The fill is composited in two passes: the full hatch pattern is stroked
//! across the plot, then every region outside the area under the curve is
//! erased with a clear blend. Erase regions are one quad per segment, from
//! the segment up to the top edge, plus one rect per side column.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::line_geometry::LineSegment;
use crate::core::mapper::CoordinateMapper;
use crate::core::types::PixelPoint;

/// Offset of the first hatch stroke from the left edge, in pixels.
pub const HATCH_FIRST_OFFSET_PX: f64 = 10.0;

/// Four-corner erase region. Closed implicitly.
pub type ClearQuad = SmallVec<[PixelPoint; 4]>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HatchFillGeometry {
    /// Diagonal strokes, drawn first.
    pub strokes: Vec<LineSegment>,
    /// Regions erased afterwards, in draw order.
    pub clear_regions: Vec<ClearQuad>,
}

impl HatchFillGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.clear_regions.is_empty()
    }
}

/// Builds the hatch strokes and erase quads for an already projected series.
///
/// Fewer than two vertices enclose no area, so nothing is produced.
/// `spacing_px` must be positive; non-positive spacing yields no strokes.
#[must_use]
pub fn build_hatch_fill(
    vertices: &[PixelPoint],
    mapper: &CoordinateMapper,
    spacing_px: f64,
) -> HatchFillGeometry {
    if vertices.len() < 2 || !spacing_px.is_finite() || spacing_px <= 0.0 {
        return HatchFillGeometry::default();
    }

    let viewport = mapper.viewport();
    let width = viewport.width_px();
    let height = viewport.height_px();
    let baseline = mapper.baseline_y();

    let mut strokes = Vec::new();
    let mut offset = HATCH_FIRST_OFFSET_PX;
    while offset - width < height {
        strokes.push(LineSegment {
            x1: offset,
            y1: baseline,
            x2: 0.0,
            y2: baseline - offset,
        });
        offset += spacing_px;
    }

    let mut clear_regions = Vec::with_capacity(vertices.len() + 1);
    for pair in vertices.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        clear_regions.push(ClearQuad::from_buf([
            previous,
            current,
            PixelPoint::new(current.x, 0.0),
            PixelPoint::new(previous.x, 0.0),
        ]));
    }

    // Side columns reach at least to the outermost vertex so a series that
    // does not span the full x range leaves no hatch beside it.
    let padding = mapper.padding();
    let left_edge = padding.left.max(vertices[0].x);
    let right_edge = (width - padding.right).min(vertices[vertices.len() - 1].x);
    clear_regions.push(column(0.0, left_edge, baseline));
    clear_regions.push(column(right_edge, width, baseline));

    HatchFillGeometry {
        strokes,
        clear_regions,
    }
}

fn column(left: f64, right: f64, baseline: f64) -> ClearQuad {
    ClearQuad::from_buf([
        PixelPoint::new(left, baseline),
        PixelPoint::new(right, baseline),
        PixelPoint::new(right, 0.0),
        PixelPoint::new(left, 0.0),
    ])
}
