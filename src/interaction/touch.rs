use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{HitIndex, HitTarget};

/// Single-pointer input in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    /// Platform-level gesture cancellation.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchState {
    #[default]
    Idle,
    Pressed(HitTarget),
}

impl TouchState {
    #[must_use]
    pub fn pressed(self) -> Option<HitTarget> {
        match self {
            Self::Idle => None,
            Self::Pressed(target) => Some(target),
        }
    }
}

/// What one pointer event did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TouchTransition {
    /// Entity under the release point of a completed press.
    pub clicked: Option<HitTarget>,
    /// Pressed highlight may have changed; the cached surface is stale.
    pub repaint: bool,
}

/// `Idle -> Pressed(target) -> Idle` press tracking against a hit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchTracker {
    state: TouchState,
}

impl TouchTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> TouchState {
        self.state
    }

    /// Drops any press without reporting a click.
    pub fn reset(&mut self) {
        self.state = TouchState::Idle;
    }

    pub fn handle(&mut self, event: PointerEvent, index: &HitIndex) -> TouchTransition {
        match event {
            PointerEvent::Down { x, y } => {
                self.state = index.hit(x, y).map_or(TouchState::Idle, TouchState::Pressed);
                trace!(x, y, state = ?self.state, "pointer down");
                TouchTransition {
                    clicked: None,
                    repaint: true,
                }
            }
            PointerEvent::Move { .. } => TouchTransition::default(),
            PointerEvent::Up { x, y } => {
                // The release point is matched against every region, not only
                // the pressed one.
                let clicked = match self.state {
                    TouchState::Pressed(_) => index.hit(x, y),
                    TouchState::Idle => None,
                };
                self.state = TouchState::Idle;
                trace!(x, y, clicked = ?clicked, "pointer up");
                TouchTransition {
                    clicked,
                    repaint: true,
                }
            }
            PointerEvent::Cancel => {
                self.state = TouchState::Idle;
                TouchTransition {
                    clicked: None,
                    repaint: true,
                }
            }
        }
    }
}
