use crate::error::GraphResult;
use crate::render::{FrameCounts, RenderFrame, Renderer, TextMeasurer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so invalid geometry surfaces before a
/// real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_command_count: usize,
    pub last_counts: FrameCounts,
}

impl TextMeasurer for NullRenderer {}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_command_count = frame.commands.len();
        self.last_counts = frame.counts();
        Ok(())
    }
}
