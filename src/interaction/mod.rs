use serde::{Deserialize, Serialize};

mod hit_test;
mod touch;

pub use hit_test::{HitIndex, HitRegion, HitShape};
pub use touch::{PointerEvent, TouchState, TouchTracker, TouchTransition};

/// Clickable entity of any graph kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitTarget {
    /// Point of a line (or layer of a stacked line).
    Point { series: usize, index: usize },
    Slice { index: usize },
    Bar { index: usize },
}
