use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::PieSlice;
use crate::core::pie_geometry::{PieLayout, build_pie_wedges};
use crate::error::{GraphError, GraphResult};
use crate::interaction::{HitIndex, HitShape, HitTarget};
use crate::render::{CanvasLayerKind, LayeredRenderFrame, PathPrimitive, Renderer};

use super::validation::validate_pie_style;
use super::{GraphEngine, GraphKind, GraphScene, PieStyle, SceneContext};

/// Pie or donut graph; slices are laid out in insertion order.
pub type PieGraph<R> = GraphEngine<R, PieGraphModel>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PieGraphModel {
    pub(super) slices: Vec<PieSlice>,
    pub(super) style: PieStyle,
}

impl PieGraphModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slices(&self) -> &[PieSlice] {
        &self.slices
    }

    #[must_use]
    pub fn slice(&self, index: usize) -> Option<&PieSlice> {
        self.slices.get(index)
    }

    #[must_use]
    pub fn style(&self) -> PieStyle {
        self.style
    }

    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.slices.iter().map(PieSlice::value).sum()
    }

    #[must_use]
    pub fn layout(&self, context: &SceneContext<'_>) -> PieLayout {
        PieLayout::fit(
            context.config.viewport,
            self.style.radius_padding_px,
            self.style.inner_circle_ratio,
            self.style.start_angle_deg,
            self.style.slice_padding_deg,
        )
    }
}

impl GraphKind for PieGraphModel {
    fn kind_name(&self) -> &'static str {
        "pie"
    }

    fn build_scene(&self, context: &SceneContext<'_>) -> GraphResult<GraphScene> {
        let layout = self.layout(context);
        let values: Vec<f64> = self.slices.iter().map(PieSlice::value).collect();

        let mut layered = LayeredRenderFrame::canonical(context.config.viewport);
        let mut hit_index = HitIndex::new();

        for (wedge, slice) in build_pie_wedges(&values, &layout).into_iter().zip(&self.slices) {
            if !wedge.is_visible() {
                trace!(index = wedge.index, "skip empty pie wedge");
                continue;
            }
            let target = HitTarget::Slice { index: wedge.index };
            let color = if context.pressed == Some(target) {
                slice.selected_color
            } else {
                slice.color
            };
            layered.push(
                CanvasLayerKind::Series,
                PathPrimitive::filled(wedge.outline.clone(), color),
            );
            hit_index.push(
                target,
                HitShape::Polygon {
                    vertices: wedge.outline,
                },
            );
        }

        Ok(GraphScene {
            frame: layered.flatten(),
            hit_index,
        })
    }
}

impl<R: Renderer> GraphEngine<R, PieGraphModel> {
    pub fn add_slice(&mut self, slice: PieSlice) -> GraphResult<usize> {
        slice.validate()?;
        self.try_mutate(|model| {
            model.slices.push(slice);
            debug!(slice_count = model.slices.len(), "add pie slice");
            Ok(model.slices.len() - 1)
        })
    }

    pub fn set_slices(&mut self, slices: Vec<PieSlice>) -> GraphResult<()> {
        for slice in &slices {
            slice.validate()?;
        }
        debug!(slice_count = slices.len(), "set pie slices");
        self.mutate(|model| model.slices = slices);
        Ok(())
    }

    pub fn remove_slices(&mut self) {
        self.mutate(|model| model.slices.clear());
    }

    /// Edits a copy of one slice and swaps it in only if it still validates.
    pub fn update_slice(&mut self, index: usize, edit: impl FnOnce(&mut PieSlice)) -> GraphResult<()> {
        let count = self.model.slices.len();
        let mut edited = self
            .model
            .slices
            .get(index)
            .cloned()
            .ok_or_else(|| GraphError::NotFound(format!("slice {index} (slice count {count})")))?;
        edit(&mut edited);
        edited.validate()?;
        self.mutate(|model| {
            if let Some(slot) = model.slices.get_mut(index) {
                *slot = edited;
            }
        });
        Ok(())
    }

    pub fn set_pie_style(&mut self, style: PieStyle) -> GraphResult<()> {
        let style = validate_pie_style(style)?;
        self.mutate(|model| model.style = style);
        Ok(())
    }
}
