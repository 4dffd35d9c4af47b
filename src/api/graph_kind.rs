use serde::Serialize;

use crate::error::GraphResult;
use crate::interaction::{HitIndex, HitTarget};
use crate::render::{RenderFrame, TextMeasurer};

use super::GraphConfig;

/// Inputs shared by every build pass.
pub struct SceneContext<'a> {
    pub config: &'a GraphConfig,
    pub measurer: &'a dyn TextMeasurer,
    /// Entity currently held down, drawn highlighted.
    pub pressed: Option<HitTarget>,
}

/// Output of one build pass: what to draw and what is clickable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphScene {
    pub frame: RenderFrame,
    pub hit_index: HitIndex,
}

/// Value model of one widget kind, able to turn itself into a scene.
///
/// Implementations must be deterministic: the same model, config and
/// pressed entity always produce the same scene.
pub trait GraphKind {
    fn kind_name(&self) -> &'static str;

    fn build_scene(&self, context: &SceneContext<'_>) -> GraphResult<GraphScene>;
}
