//! holograph: geometry, hit-testing and redraw caching for graph widgets.
//!
//! The crate turns line, stacked-line, pie and bar value models into
//! immutable draw-command frames plus the clickable regions of the same
//! pass. Hosts own the surface and the event loop; they feed pointer events
//! in and call `draw` from their paint callback.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BarGraph, GraphConfig, GraphEngine, GraphKind, LineGraph, PieGraph, StackedLineGraph,
};
pub use error::{GraphError, GraphResult};
pub use interaction::{HitTarget, PointerEvent};
