use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Hatch strokes and their clear-blend erase regions.
    Hatch,
    Grid,
    /// Stacked bands.
    Area,
    Series,
    Markers,
    /// Pressed-point highlight.
    Selection,
    Axis,
}

/// Ordered list of layers a graph composes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl GraphLayerStack {
    /// Erasing layers come first so clear blends never touch later content.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Hatch,
                CanvasLayerKind::Grid,
                CanvasLayerKind::Area,
                CanvasLayerKind::Series,
                CanvasLayerKind::Markers,
                CanvasLayerKind::Selection,
                CanvasLayerKind::Axis,
            ],
        }
    }
}

impl Default for GraphLayerStack {
    fn default() -> Self {
        Self::canonical()
    }
}
