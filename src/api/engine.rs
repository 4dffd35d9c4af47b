use serde::Serialize;
use tracing::{debug, trace};

use crate::core::Viewport;
use crate::error::{GraphError, GraphResult};
use crate::interaction::{HitIndex, HitTarget, PointerEvent, TouchState, TouchTracker};
use crate::render::{RenderFrame, Renderer};

use super::validation::validate_graph_config;
use super::{DrawOutcome, GraphConfig, GraphKind, GraphScene, RedrawCache, RedrawState, SceneContext};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host callback fired once per completed click.
pub type ClickListener = Box<dyn FnMut(HitTarget)>;

type RepaintHook = Box<dyn FnMut()>;

/// Result of feeding one pointer event to a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PointerOutcome {
    pub clicked: Option<HitTarget>,
    pub repaint_requested: bool,
}

/// Main facade consumed by host widgets.
///
/// `GraphEngine` owns one widget kind's value model, its configuration, the
/// redraw cache with the hit regions of the last build, and the touch state.
/// It never draws on its own: hosts call `draw` from their paint callback
/// and forward pointer events to `handle_pointer`.
pub struct GraphEngine<R: Renderer, K: GraphKind> {
    pub(super) renderer: R,
    pub(super) config: GraphConfig,
    pub(super) model: K,
    cache: RedrawCache,
    touch: TouchTracker,
    click_listener: Option<ClickListener>,
    repaint_hook: Option<RepaintHook>,
}

impl<R: Renderer, K: GraphKind> GraphEngine<R, K> {
    pub fn new(renderer: R, config: GraphConfig, model: K) -> GraphResult<Self> {
        validate_graph_config(&config)?;
        debug!(
            kind = model.kind_name(),
            width = config.viewport.width,
            height = config.viewport.height,
            "create graph engine"
        );
        Ok(Self {
            renderer,
            config,
            model,
            cache: RedrawCache::new(),
            touch: TouchTracker::new(),
            click_listener: None,
            repaint_hook: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GraphConfig) -> GraphResult<()> {
        validate_graph_config(&config)?;
        self.config = config;
        self.invalidate_data();
        Ok(())
    }

    /// Applies `edit` to a copy of the config and keeps it only if valid.
    pub fn update_config(&mut self, edit: impl FnOnce(&mut GraphConfig)) -> GraphResult<()> {
        let mut config = self.config.clone();
        edit(&mut config);
        self.set_config(config)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> GraphResult<()> {
        viewport.validate()?;
        if viewport == self.config.viewport {
            return Ok(());
        }
        trace!(width = viewport.width, height = viewport.height, "resize graph");
        self.config.viewport = viewport;
        self.invalidate_data();
        Ok(())
    }

    /// Shows or hides the value labels of both axes.
    pub fn set_show_axis_values(&mut self, show: bool) {
        self.set_show_x_axis_values(show);
        self.set_show_y_axis_values(show);
    }

    pub fn set_show_x_axis_values(&mut self, show: bool) {
        if self.config.show_x_axis_values != show {
            self.config.show_x_axis_values = show;
            self.invalidate_data();
        }
    }

    pub fn set_show_y_axis_values(&mut self, show: bool) {
        if self.config.show_y_axis_values != show {
            self.config.show_y_axis_values = show;
            self.invalidate_data();
        }
    }

    /// `None` removes the title and gives its row back to the plot.
    pub fn set_x_axis_title(&mut self, title: Option<String>) -> GraphResult<()> {
        self.update_config(|config| config.x_axis_title = title)
    }

    pub fn set_y_axis_title(&mut self, title: Option<String>) -> GraphResult<()> {
        self.update_config(|config| config.y_axis_title = title)
    }

    #[must_use]
    pub fn model(&self) -> &K {
        &self.model
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn set_click_listener(&mut self, listener: impl FnMut(HitTarget) + 'static) {
        self.click_listener = Some(Box::new(listener));
    }

    pub fn clear_click_listener(&mut self) {
        self.click_listener = None;
    }

    /// Hook invoked whenever the graph needs repainting.
    pub fn set_repaint_hook(&mut self, hook: impl FnMut() + 'static) {
        self.repaint_hook = Some(Box::new(hook));
    }

    #[must_use]
    pub fn touch_state(&self) -> TouchState {
        self.touch.state()
    }

    #[must_use]
    pub fn redraw_state(&self) -> RedrawState {
        self.cache.state()
    }

    /// Hit regions of the last completed build.
    #[must_use]
    pub fn hit_index(&self) -> &HitIndex {
        self.cache.hit_index()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.cache.frame()
    }

    /// Builds a scene from the current state without touching the cache.
    pub fn build_scene(&self) -> GraphResult<GraphScene> {
        let context = SceneContext {
            config: &self.config,
            measurer: &self.renderer,
            pressed: self.touch.state().pressed(),
        };
        self.model.build_scene(&context)
    }

    /// Draw entry point for the host's paint callback.
    ///
    /// Rebuilds geometry and re-renders only when the cache is dirty.
    pub fn draw(&mut self) -> GraphResult<DrawOutcome> {
        if !self.cache.needs_rebuild() {
            return Ok(DrawOutcome::Reused);
        }

        let GraphScene { frame, hit_index } = self.build_scene()?;
        self.renderer.render(&frame)?;
        trace!(
            kind = self.model.kind_name(),
            command_count = frame.commands.len(),
            hit_region_count = hit_index.len(),
            "graph rebuilt"
        );
        self.cache.store(frame, hit_index);
        Ok(DrawOutcome::Rebuilt)
    }

    /// Blits the cached surface onto a host Cairo context, rebuilding first
    /// when dirty.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context(&mut self, context: &cairo::Context) -> GraphResult<DrawOutcome>
    where
        R: CairoContextRenderer,
    {
        let outcome = self.draw()?;
        self.renderer.blit_onto(context)?;
        Ok(outcome)
    }

    /// Feeds one pointer event through the touch state machine.
    ///
    /// Regions come from the last completed build; a graph that has not been
    /// drawn since its last data change has nothing to hit.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        let transition = self.touch.handle(event, self.cache.hit_index());

        if let Some(target) = transition.clicked {
            debug!(?target, "graph entity clicked");
            if let Some(listener) = self.click_listener.as_mut() {
                listener(target);
            }
        }
        if transition.repaint {
            self.cache.invalidate_selection();
            self.request_repaint();
        }

        PointerOutcome {
            clicked: transition.clicked,
            repaint_requested: transition.repaint,
        }
    }

    /// Serializes a freshly built scene to pretty JSON.
    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        #[derive(Serialize)]
        struct SceneSnapshot<'a> {
            kind: &'static str,
            touch_state: TouchState,
            scene: &'a GraphScene,
        }

        let scene = self.build_scene()?;
        let snapshot = SceneSnapshot {
            kind: self.model.kind_name(),
            touch_state: self.touch.state(),
            scene: &scene,
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize scene snapshot: {e}")))
    }

    /// Runs a model edit, then marks the cache dirty.
    pub(super) fn mutate<T>(&mut self, edit: impl FnOnce(&mut K) -> T) -> T {
        let output = edit(&mut self.model);
        self.invalidate_data();
        output
    }

    /// Runs a fallible model edit; only a successful edit dirties the cache.
    pub(super) fn try_mutate<T>(
        &mut self,
        edit: impl FnOnce(&mut K) -> GraphResult<T>,
    ) -> GraphResult<T> {
        let output = edit(&mut self.model)?;
        self.invalidate_data();
        Ok(output)
    }

    fn invalidate_data(&mut self) {
        self.cache.invalidate_data();
        self.touch.reset();
        self.request_repaint();
    }

    fn request_repaint(&mut self) {
        if let Some(hook) = self.repaint_hook.as_mut() {
            hook();
        }
    }
}
