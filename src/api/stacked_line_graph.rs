use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::line_geometry::polyline_segments;
use crate::core::stacked_geometry::build_stacked_layers;
use crate::core::{
    AxisBounds, AxisRange, CoordinateMapper, StackedLine, Viewport, resolve_axis_range,
};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{HitIndex, HitShape, HitTarget};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayeredRenderFrame, LinePrimitive, PathPrimitive, Renderer,
};

use super::plot_decorations::{
    axis_padding, push_axis_titles, push_baseline, push_horizontal_grid, push_point_marker,
    push_x_axis_labels, push_x_axis_values, push_y_axis_values,
};
use super::validation::validate_stacked_style;
use super::{
    GraphConfig, GraphEngine, GraphKind, GraphScene, HorizontalGrid, SceneContext, StackedStyle,
};

/// Grid lines drawn by [`StackedLineGraphModel::default_config`].
pub const STACKED_DEFAULT_GRID_LINES: usize = 10;

/// Stacked area graph over one [`StackedLine`].
pub type StackedLineGraph<R> = GraphEngine<R, StackedLineGraphModel>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedLineGraphModel {
    pub(super) line: Option<StackedLine>,
    pub(super) y_bounds: AxisBounds,
    pub(super) style: StackedStyle,
}

impl Default for StackedLineGraphModel {
    fn default() -> Self {
        Self {
            line: None,
            y_bounds: AxisBounds::anchored_at_zero(),
            style: StackedStyle::default(),
        }
    }
}

impl StackedLineGraphModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared config with the stacked graph's evenly spaced grid.
    #[must_use]
    pub fn default_config(viewport: Viewport) -> GraphConfig {
        GraphConfig::new(viewport)
            .with_horizontal_grid(HorizontalGrid::Even(STACKED_DEFAULT_GRID_LINES))
    }

    #[must_use]
    pub fn line(&self) -> Option<&StackedLine> {
        self.line.as_ref()
    }

    #[must_use]
    pub fn style(&self) -> StackedStyle {
        self.style
    }

    /// Point indices `[0, n - 1]`, `None` without points.
    #[must_use]
    pub fn resolve_x_range(&self) -> Option<AxisRange> {
        let count = self.line.as_ref().map_or(0, StackedLine::len);
        if count == 0 {
            return None;
        }
        AxisRange::new(0.0, (count - 1) as f64).ok()
    }

    /// Range over per-point totals, anchored at zero unless pinned.
    #[must_use]
    pub fn resolve_y_range(&self) -> Option<AxisRange> {
        let totals = self.line.as_ref().map(StackedLine::totals).unwrap_or_default();
        resolve_axis_range(totals, &self.y_bounds)
    }
}

impl GraphKind for StackedLineGraphModel {
    fn kind_name(&self) -> &'static str {
        "stacked_line"
    }

    fn build_scene(&self, context: &SceneContext<'_>) -> GraphResult<GraphScene> {
        let config = context.config;
        let x_range = self.resolve_x_range().unwrap_or(AxisRange::UNIT);
        let y_range = self.resolve_y_range().unwrap_or(AxisRange::UNIT);
        let padding = axis_padding(config, context.measurer, x_range, y_range);
        let mapper = CoordinateMapper::new(config.viewport, padding, x_range, y_range);

        let mut layered = LayeredRenderFrame::canonical(config.viewport);
        let mut hit_index = HitIndex::new();

        push_baseline(&mut layered, &mapper, config);
        push_horizontal_grid(&mut layered, &mapper, config);

        if let Some(line) = &self.line {
            let layers = build_stacked_layers(&line.cumulative_layers(), &mapper);
            let marker_radius = config.marker_radius_px();
            let hit_radius = config.hit_radius_px();

            for geometry in &layers {
                let color = line.layer_color(geometry.layer);
                if geometry.band.len() >= 3 {
                    layered.push(
                        CanvasLayerKind::Area,
                        PathPrimitive::filled(
                            geometry.band.clone(),
                            color.with_alpha_u8(self.style.band_alpha),
                        ),
                    );
                }
                for segment in polyline_segments(&geometry.boundary) {
                    layered.push(
                        CanvasLayerKind::Series,
                        LinePrimitive::new(
                            segment.x1,
                            segment.y1,
                            segment.x2,
                            segment.y2,
                            self.style.stroke_width_px,
                            color,
                        ),
                    );
                }
            }

            if line.show_points {
                for geometry in &layers {
                    for (index, center) in geometry.boundary.iter().enumerate() {
                        let target = HitTarget::Point {
                            series: geometry.layer,
                            index,
                        };
                        push_point_marker(
                            &mut layered,
                            *center,
                            marker_radius,
                            self.style.marker_color,
                        );
                        if context.pressed == Some(target) {
                            layered.push(
                                CanvasLayerKind::Selection,
                                CirclePrimitive::new(*center, hit_radius, self.style.selected_color),
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
            }
        }

        let labels: Vec<(f64, String)> = self
            .line
            .iter()
            .flat_map(StackedLine::labels)
            .map(|(column, label)| (column as f64, label.to_owned()))
            .collect();
        if labels.is_empty() {
            push_x_axis_values(&mut layered, &mapper, config);
        } else if config.show_x_axis_values {
            push_x_axis_labels(&mut layered, &mapper, config, labels);
        }
        push_y_axis_values(&mut layered, &mapper, config);
        push_axis_titles(&mut layered, config);

        Ok(GraphScene {
            frame: layered.flatten(),
            hit_index,
        })
    }
}

impl<R: Renderer> GraphEngine<R, StackedLineGraphModel> {
    pub fn set_line(&mut self, line: StackedLine) -> GraphResult<()> {
        line.validate()?;
        debug!(
            point_count = line.len(),
            layer_count = line.layer_count(),
            "set stacked line"
        );
        self.mutate(|model| model.line = Some(line));
        Ok(())
    }

    pub fn remove_line(&mut self) -> Option<StackedLine> {
        self.mutate(|model| model.line.take())
    }

    /// Edits a copy of the line and swaps it in only if it still validates.
    pub fn update_line(&mut self, edit: impl FnOnce(&mut StackedLine)) -> GraphResult<()> {
        let mut edited = self
            .model
            .line
            .clone()
            .ok_or_else(|| GraphError::NotFound("stacked line is not set".to_owned()))?;
        edit(&mut edited);
        self.set_line(edited)
    }

    /// Pins the y range, or returns to scanning totals with `None`.
    pub fn set_range_y(&mut self, range: Option<AxisRange>) {
        self.mutate(|model| model.y_bounds.pinned = range);
    }

    pub fn set_stacked_style(&mut self, style: StackedStyle) -> GraphResult<()> {
        let style = validate_stacked_style(style)?;
        self.mutate(|model| model.style = style);
        Ok(())
    }
}
