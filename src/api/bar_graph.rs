use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::bar_geometry::build_bar_rects;
use crate::core::{AxisBounds, AxisRange, Bar, CoordinateMapper, Padding, resolve_axis_range};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{HitIndex, HitShape, HitTarget};
use crate::render::{
    CanvasLayerKind, LayeredRenderFrame, RectPrimitive, Renderer, TextHAlign, TextPrimitive,
};

use super::plot_decorations::{push_baseline, push_horizontal_grid};
use super::validation::validate_bar_style;
use super::{BarStyle, GraphEngine, GraphKind, GraphScene, SceneContext};

/// Vertical bar graph; bars are laid out left to right in insertion order.
pub type BarGraph<R> = GraphEngine<R, BarGraphModel>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGraphModel {
    pub(super) bars: Vec<Bar>,
    pub(super) y_bounds: AxisBounds,
    pub(super) style: BarStyle,
}

impl Default for BarGraphModel {
    fn default() -> Self {
        Self {
            bars: Vec::new(),
            y_bounds: AxisBounds::anchored_at_zero(),
            style: BarStyle::default(),
        }
    }
}

impl BarGraphModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn bar(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    #[must_use]
    pub fn style(&self) -> BarStyle {
        self.style
    }

    /// Range over bar values with zero included, `None` without bars.
    #[must_use]
    pub fn resolve_y_range(&self) -> Option<AxisRange> {
        resolve_axis_range(self.bars.iter().map(Bar::value), &self.y_bounds)
    }

    /// Rows above and below the bars for value and name labels.
    fn label_padding(&self) -> Padding {
        if !self.style.show_bar_text {
            return Padding::ZERO;
        }
        let row = self.style.label_font_size_px * 2.0;
        Padding::new(0.0, row, 0.0, row)
    }
}

impl GraphKind for BarGraphModel {
    fn kind_name(&self) -> &'static str {
        "bar"
    }

    fn build_scene(&self, context: &SceneContext<'_>) -> GraphResult<GraphScene> {
        let config = context.config;
        let x_range = AxisRange::new(0.0, self.bars.len() as f64)?;
        let y_range = self.resolve_y_range().unwrap_or(AxisRange::UNIT);
        let mapper = CoordinateMapper::new(config.viewport, self.label_padding(), x_range, y_range);

        let mut layered = LayeredRenderFrame::canonical(config.viewport);
        let mut hit_index = HitIndex::new();

        push_baseline(&mut layered, &mapper, config);
        push_horizontal_grid(&mut layered, &mapper, config);

        let values: Vec<f64> = self.bars.iter().map(Bar::value).collect();
        let rects = build_bar_rects(&values, &mapper, self.style.spacing_ratio);
        let font = self.style.label_font_size_px;
        let plot_bottom = mapper.plot_rect().bottom;

        for (index, (bar, rect)) in self.bars.iter().zip(rects).enumerate() {
            let target = HitTarget::Bar { index };
            let color = if context.pressed == Some(target) {
                bar.selected_color
            } else {
                bar.color
            };
            layered.push(
                CanvasLayerKind::Series,
                RectPrimitive::new(rect.left, rect.top, rect.width(), rect.height(), color),
            );
            hit_index.push(target, HitShape::Rect { rect });

            if !self.style.show_bar_text {
                continue;
            }
            let center_x = (rect.left + rect.right) / 2.0;
            let value_text = bar.display_value();
            if !value_text.is_empty() {
                layered.push(
                    CanvasLayerKind::Axis,
                    TextPrimitive::new(
                        value_text,
                        center_x,
                        rect.top - font * 1.25,
                        font,
                        self.style.label_color,
                        TextHAlign::Center,
                    ),
                );
            }
            if !bar.name.is_empty() {
                layered.push(
                    CanvasLayerKind::Axis,
                    TextPrimitive::new(
                        bar.name.clone(),
                        center_x,
                        plot_bottom + font * 0.5,
                        font,
                        self.style.label_color,
                        TextHAlign::Center,
                    ),
                );
            }
        }

        Ok(GraphScene {
            frame: layered.flatten(),
            hit_index,
        })
    }
}

impl<R: Renderer> GraphEngine<R, BarGraphModel> {
    pub fn set_bars(&mut self, bars: Vec<Bar>) -> GraphResult<()> {
        for bar in &bars {
            bar.validate()?;
        }
        debug!(bar_count = bars.len(), "set bars");
        self.mutate(|model| model.bars = bars);
        Ok(())
    }

    pub fn add_bar(&mut self, bar: Bar) -> GraphResult<usize> {
        bar.validate()?;
        self.try_mutate(|model| {
            model.bars.push(bar);
            debug!(bar_count = model.bars.len(), "add bar");
            Ok(model.bars.len() - 1)
        })
    }

    pub fn remove_bar(&mut self, index: usize) -> GraphResult<Bar> {
        self.try_mutate(|model| {
            if index >= model.bars.len() {
                return Err(GraphError::NotFound(format!(
                    "bar {index} (bar count {})",
                    model.bars.len()
                )));
            }
            Ok(model.bars.remove(index))
        })
    }

    pub fn remove_bars(&mut self) {
        self.mutate(|model| model.bars.clear());
    }

    /// Edits a copy of one bar and swaps it in only if it still validates.
    pub fn update_bar(&mut self, index: usize, edit: impl FnOnce(&mut Bar)) -> GraphResult<()> {
        let count = self.model.bars.len();
        let mut edited = self
            .model
            .bars
            .get(index)
            .cloned()
            .ok_or_else(|| GraphError::NotFound(format!("bar {index} (bar count {count})")))?;
        edit(&mut edited);
        edited.validate()?;
        self.mutate(|model| {
            if let Some(slot) = model.bars.get_mut(index) {
                *slot = edited;
            }
        });
        Ok(())
    }

    /// Pins the y range, or returns to scanning values with `None`.
    pub fn set_range_y(&mut self, range: Option<AxisRange>) {
        self.mutate(|model| model.y_bounds.pinned = range);
    }

    pub fn set_bar_style(&mut self, style: BarStyle) -> GraphResult<()> {
        let style = validate_bar_style(style)?;
        self.mutate(|model| model.style = style);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BarGraphModel;
    use crate::core::Bar;

    #[test]
    fn y_range_is_anchored_at_zero() {
        let mut model = BarGraphModel::new();
        model.bars.push(Bar::new("a", 4.0).expect("finite"));
        model.bars.push(Bar::new("b", 9.0).expect("finite"));
        let y = model.resolve_y_range().expect("y range");
        assert_eq!((y.min(), y.max()), (0.0, 9.0));
    }
}
