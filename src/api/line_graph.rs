use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::hatch_fill::build_hatch_fill;
use crate::core::line_geometry::{polyline_segments, project_vertices};
use crate::core::{AxisBounds, AxisRange, CoordinateMapper, Line, LinePoint, resolve_axis_range};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{HitIndex, HitShape, HitTarget};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayeredRenderFrame, LinePrimitive, PathPrimitive, Renderer,
};

use super::plot_decorations::{
    axis_padding, push_axis_titles, push_axis_values, push_baseline, push_horizontal_grid,
    push_point_marker,
};
use super::validation::validate_hatch_fill_style;
use super::{GraphEngine, GraphKind, GraphScene, HatchFillStyle, SceneContext};

/// Multi-series line graph with an optional hatched "to-fill" series.
pub type LineGraph<R> = GraphEngine<R, LineGraphModel>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGraphModel {
    pub(super) lines: Vec<Line>,
    pub(super) x_bounds: AxisBounds,
    pub(super) y_bounds: AxisBounds,
    pub(super) line_to_fill: Option<usize>,
    pub(super) hatch: HatchFillStyle,
}

impl LineGraphModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn line_to_fill(&self) -> Option<usize> {
        self.line_to_fill
    }

    #[must_use]
    pub fn hatch_style(&self) -> HatchFillStyle {
        self.hatch
    }

    /// Effective x range, `None` while no line has points.
    #[must_use]
    pub fn resolve_x_range(&self) -> Option<AxisRange> {
        resolve_axis_range(self.all_points().map(|point| point.x), &self.x_bounds)
    }

    /// Effective y range, `None` while no line has points.
    #[must_use]
    pub fn resolve_y_range(&self) -> Option<AxisRange> {
        resolve_axis_range(self.all_points().map(|point| point.y), &self.y_bounds)
    }

    fn all_points(&self) -> impl Iterator<Item = &LinePoint> {
        self.lines.iter().flat_map(|line| line.points().iter())
    }

    fn line_mut(&mut self, index: usize) -> GraphResult<&mut Line> {
        let count = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or_else(|| GraphError::NotFound(format!("line {index} (line count {count})")))
    }
}

impl GraphKind for LineGraphModel {
    fn kind_name(&self) -> &'static str {
        "line"
    }

    fn build_scene(&self, context: &SceneContext<'_>) -> GraphResult<GraphScene> {
        let config = context.config;
        let x_range = self.resolve_x_range().unwrap_or(AxisRange::UNIT);
        let y_range = self.resolve_y_range().unwrap_or(AxisRange::UNIT);
        let padding = axis_padding(config, context.measurer, x_range, y_range);
        let mapper = CoordinateMapper::new(config.viewport, padding, x_range, y_range);

        let mut layered = LayeredRenderFrame::canonical(config.viewport);
        let mut hit_index = HitIndex::new();
        let projected: Vec<_> = self
            .lines
            .iter()
            .map(|line| project_vertices(line.points(), &mapper))
            .collect();

        if let Some(vertices) = self.line_to_fill.and_then(|index| projected.get(index)) {
            let hatch = build_hatch_fill(vertices, &mapper, self.hatch.spacing_px);
            for stroke in &hatch.strokes {
                layered.push(
                    CanvasLayerKind::Hatch,
                    LinePrimitive::new(
                        stroke.x1,
                        stroke.y1,
                        stroke.x2,
                        stroke.y2,
                        self.hatch.stroke_width_px,
                        self.hatch.color,
                    ),
                );
            }
            for quad in hatch.clear_regions {
                layered.push(CanvasLayerKind::Hatch, PathPrimitive::clear(quad.into_vec()));
            }
        }

        push_baseline(&mut layered, &mapper, config);
        push_horizontal_grid(&mut layered, &mapper, config);

        let marker_radius = config.marker_radius_px();
        let hit_radius = config.hit_radius_px();
        for (series, (line, vertices)) in self.lines.iter().zip(&projected).enumerate() {
            let stroke_width = config.density.dp_to_px(line.stroke_width_dp);
            for segment in polyline_segments(vertices) {
                layered.push(
                    CanvasLayerKind::Series,
                    LinePrimitive::new(
                        segment.x1,
                        segment.y1,
                        segment.x2,
                        segment.y2,
                        stroke_width,
                        line.color,
                    ),
                );
            }

            if !line.show_points {
                continue;
            }
            for (index, (point, center)) in line.points().iter().zip(vertices).enumerate() {
                let target = HitTarget::Point { series, index };
                push_point_marker(&mut layered, *center, marker_radius, point.color);
                if context.pressed == Some(target) {
                    layered.push(
                        CanvasLayerKind::Selection,
                        CirclePrimitive::new(*center, hit_radius, point.selected_color),
                    );
                }
                hit_index.push(
                    target,
                    HitShape::Circle {
                        center: *center,
                        radius: hit_radius,
                    },
                );
            }
        }

        push_axis_values(&mut layered, &mapper, config);
        push_axis_titles(&mut layered, config);

        Ok(GraphScene {
            frame: layered.flatten(),
            hit_index,
        })
    }
}

impl<R: Renderer> GraphEngine<R, LineGraphModel> {
    pub fn add_line(&mut self, line: Line) -> GraphResult<usize> {
        line.validate()?;
        self.try_mutate(|model| {
            model.lines.push(line);
            debug!(line_count = model.lines.len(), "add line");
            Ok(model.lines.len() - 1)
        })
    }

    /// Drops every line; the fill target is cleared with them.
    pub fn remove_all_lines(&mut self) {
        self.mutate(|model| {
            debug!(line_count = model.lines.len(), "remove all lines");
            model.lines.clear();
            model.line_to_fill = None;
        });
    }

    pub fn add_point_to_line(&mut self, line: usize, point: LinePoint) -> GraphResult<()> {
        point.validate()?;
        self.try_mutate(|model| {
            let target = model.line_mut(line)?;
            target.push(point);
            trace!(line, point_count = target.len(), "add point to line");
            Ok(())
        })
    }

    pub fn add_points_to_line(
        &mut self,
        line: usize,
        points: impl IntoIterator<Item = LinePoint>,
    ) -> GraphResult<()> {
        let points: Vec<LinePoint> = points.into_iter().collect();
        points.iter().try_for_each(LinePoint::validate)?;
        self.try_mutate(|model| {
            let target = model.line_mut(line)?;
            for point in points {
                target.push(point);
            }
            trace!(line, point_count = target.len(), "add points to line");
            Ok(())
        })
    }

    /// Removes the first point of `line` at exactly `(x, y)`.
    pub fn remove_point_from_line(&mut self, line: usize, x: f64, y: f64) -> GraphResult<LinePoint> {
        self.try_mutate(|model| model.line_mut(line)?.remove_point_at(x, y))
    }

    /// Removes points with `start_x <= x <= end_x`; returns how many went.
    pub fn remove_points_between(
        &mut self,
        line: usize,
        start_x: f64,
        end_x: f64,
    ) -> GraphResult<usize> {
        self.remove_points_where(line, |x| x >= start_x && x <= end_x)
    }

    /// Removes points with `x <= threshold`.
    pub fn remove_points_before(&mut self, line: usize, threshold: f64) -> GraphResult<usize> {
        self.remove_points_where(line, |x| x <= threshold)
    }

    /// Removes points with `x >= threshold`.
    pub fn remove_points_after(&mut self, line: usize, threshold: f64) -> GraphResult<usize> {
        self.remove_points_where(line, |x| x >= threshold)
    }

    /// Edits a copy of one line and swaps it in only if it still validates.
    pub fn update_line(&mut self, line: usize, edit: impl FnOnce(&mut Line)) -> GraphResult<()> {
        let mut edited = self.model.line_mut(line)?.clone();
        edit(&mut edited);
        edited.validate()?;
        self.try_mutate(|model| {
            *model.line_mut(line)? = edited;
            Ok(())
        })
    }

    /// Picks the series drawn with the hatch fill.
    pub fn set_line_to_fill(&mut self, line: Option<usize>) -> GraphResult<()> {
        if let Some(index) = line {
            if index >= self.model.lines.len() {
                return Err(GraphError::NotFound(format!(
                    "line {index} (line count {})",
                    self.model.lines.len()
                )));
            }
        }
        self.mutate(|model| model.line_to_fill = line);
        Ok(())
    }

    /// Pins the x range, or returns to scanning with `None`.
    pub fn set_range_x(&mut self, range: Option<AxisRange>) {
        self.mutate(|model| model.x_bounds.pinned = range);
    }

    pub fn set_range_y(&mut self, range: Option<AxisRange>) {
        self.mutate(|model| model.y_bounds.pinned = range);
    }

    pub fn set_range_ratio_x(&mut self, ratio: f64) -> GraphResult<()> {
        self.try_mutate(|model| model.x_bounds.set_ratio(ratio))
    }

    pub fn set_range_ratio_y(&mut self, ratio: f64) -> GraphResult<()> {
        self.try_mutate(|model| model.y_bounds.set_ratio(ratio))
    }

    pub fn set_hatch_style(&mut self, style: HatchFillStyle) -> GraphResult<()> {
        let style = validate_hatch_fill_style(style)?;
        self.mutate(|model| model.hatch = style);
        Ok(())
    }

    fn remove_points_where(
        &mut self,
        line: usize,
        predicate: impl FnMut(f64) -> bool,
    ) -> GraphResult<usize> {
        self.try_mutate(|model| {
            let removed = model.line_mut(line)?.remove_where_x(predicate);
            trace!(line, removed, "remove line points");
            Ok(removed)
        })
    }
}
