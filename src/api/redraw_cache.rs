use serde::{Deserialize, Serialize};

use crate::interaction::HitIndex;
use crate::render::RenderFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedrawState {
    Clean,
    #[default]
    Dirty,
}

/// What a draw request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// Geometry was rebuilt and handed to the renderer.
    Rebuilt,
    /// Nothing changed since the last build; the renderer's surface is current.
    Reused,
}

/// Last built frame plus the hit regions that belong to it.
///
/// Mutators move the cache to `Dirty`; the next draw rebuilds and marks it
/// `Clean`. Multiple invalidations between draws coalesce into one rebuild.
#[derive(Debug, Clone, Default)]
pub struct RedrawCache {
    state: RedrawState,
    frame: Option<RenderFrame>,
    hit_index: HitIndex,
}

impl RedrawCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RedrawState {
        self.state
    }

    #[must_use]
    pub fn needs_rebuild(&self) -> bool {
        self.state == RedrawState::Dirty || self.frame.is_none()
    }

    /// Data changed: regions describe stale geometry and stop being hittable.
    pub fn invalidate_data(&mut self) {
        self.state = RedrawState::Dirty;
        self.hit_index.clear();
    }

    /// Only the pressed highlight changed; regions stay valid.
    pub fn invalidate_selection(&mut self) {
        self.state = RedrawState::Dirty;
    }

    pub fn store(&mut self, frame: RenderFrame, hit_index: HitIndex) {
        self.frame = Some(frame);
        self.hit_index = hit_index;
        self.state = RedrawState::Clean;
    }

    #[must_use]
    pub fn frame(&self) -> Option<&RenderFrame> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn hit_index(&self) -> &HitIndex {
        &self.hit_index
    }
}

#[cfg(test)]
mod tests {
    use super::{RedrawCache, RedrawState};
    use crate::core::{PixelPoint, Viewport};
    use crate::interaction::{HitIndex, HitShape, HitTarget};
    use crate::render::RenderFrame;

    fn stored_cache() -> RedrawCache {
        let mut index = HitIndex::new();
        index.push(
            HitTarget::Slice { index: 0 },
            HitShape::Circle {
                center: PixelPoint::new(5.0, 5.0),
                radius: 5.0,
            },
        );
        let mut cache = RedrawCache::new();
        cache.store(RenderFrame::new(Viewport::new(10, 10)), index);
        cache
    }

    #[test]
    fn fresh_cache_needs_rebuild() {
        let cache = RedrawCache::new();
        assert_eq!(cache.state(), RedrawState::Dirty);
        assert!(cache.needs_rebuild());
    }

    #[test]
    fn data_invalidation_drops_regions() {
        let mut cache = stored_cache();
        assert!(!cache.needs_rebuild());
        cache.invalidate_data();
        assert!(cache.needs_rebuild());
        assert!(cache.hit_index().is_empty());
    }

    #[test]
    fn selection_invalidation_keeps_regions() {
        let mut cache = stored_cache();
        cache.invalidate_selection();
        assert_eq!(cache.state(), RedrawState::Dirty);
        assert_eq!(cache.hit_index().len(), 1);
    }
}
