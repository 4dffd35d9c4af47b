mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod text_metrics;

pub use crate::core::color::Color;
pub use frame::{FrameCounts, RenderFrame};
pub use layer_stack::{CanvasLayerKind, GraphLayerStack};
pub use layered_frame::{LayerCommands, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    BlendMode, CirclePrimitive, DrawCommand, LinePrimitive, PathPrimitive, PathStroke,
    RectPrimitive, TextHAlign, TextPrimitive,
};
pub use text_metrics::{TextMeasurer, estimate_text_width_px};

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, immutable `RenderFrame`, so drawing
/// code stays isolated from graph data and touch handling.
pub trait Renderer: TextMeasurer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
