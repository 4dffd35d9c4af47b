use crate::core::Viewport;

use super::{CanvasLayerKind, DrawCommand, GraphLayerStack, RenderFrame};

#[derive(Debug, Clone, PartialEq)]
pub struct LayerCommands {
    pub kind: CanvasLayerKind,
    pub commands: Vec<DrawCommand>,
}

/// Scene under construction, bucketed by layer.
///
/// Builders push into whichever layer a command belongs to, in any order;
/// `flatten` then emits layers in stack order, keeping push order within
/// each layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerCommands>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn from_stack(viewport: Viewport, stack: GraphLayerStack) -> Self {
        let layers = stack
            .layers
            .into_iter()
            .map(|kind| LayerCommands {
                kind,
                commands: Vec::new(),
            })
            .collect();
        Self { viewport, layers }
    }

    #[must_use]
    pub fn canonical(viewport: Viewport) -> Self {
        Self::from_stack(viewport, GraphLayerStack::canonical())
    }

    /// Commands aimed at a layer missing from the stack are dropped.
    pub fn push(&mut self, kind: CanvasLayerKind, command: impl Into<DrawCommand>) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.commands.push(command.into());
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerCommands> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.commands.extend(layer.commands.iter().cloned());
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[CanvasLayerKind]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            if !include_layers.contains(&layer.kind) {
                continue;
            }
            frame.commands.extend(layer.commands.iter().cloned());
        }
        frame
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerCommands> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
