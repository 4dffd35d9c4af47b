mod bar_graph;
mod config;
mod engine;
mod graph_kind;
mod line_graph;
mod pie_graph;
mod plot_decorations;
mod redraw_cache;
mod stacked_line_graph;
mod validation;

pub use bar_graph::{BarGraph, BarGraphModel};
pub use config::{BarStyle, GraphConfig, HatchFillStyle, HorizontalGrid, PieStyle, StackedStyle};
pub use engine::{ClickListener, GraphEngine, PointerOutcome};
pub use graph_kind::{GraphKind, GraphScene, SceneContext};
pub use line_graph::{LineGraph, LineGraphModel};
pub use pie_graph::{PieGraph, PieGraphModel};
pub use redraw_cache::{DrawOutcome, RedrawCache, RedrawState};
pub use stacked_line_graph::{STACKED_DEFAULT_GRID_LINES, StackedLineGraph, StackedLineGraphModel};
