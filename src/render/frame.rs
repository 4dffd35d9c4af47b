use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::GraphResult;
use crate::render::{
    CirclePrimitive, DrawCommand, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

/// Backend-agnostic scene for one graph draw pass.
///
/// Commands are replayed strictly in order; clear-blend paths only erase
/// what was drawn before them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

/// Per-kind command counts of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameCounts {
    pub lines: usize,
    pub circles: usize,
    pub paths: usize,
    pub rects: usize,
    pub texts: usize,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: impl Into<DrawCommand>) {
        self.commands.push(command.into());
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.push(circle);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.push(path);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.push(text);
        self
    }

    pub fn validate(&self) -> GraphResult<()> {
        self.viewport.validate()?;
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn counts(&self) -> FrameCounts {
        let mut counts = FrameCounts::default();
        for command in &self.commands {
            match command {
                DrawCommand::Line(_) => counts.lines += 1,
                DrawCommand::Circle(_) => counts.circles += 1,
                DrawCommand::Path(_) => counts.paths += 1,
                DrawCommand::Rect(_) => counts.rects += 1,
                DrawCommand::Text(_) => counts.texts += 1,
            }
        }
        counts
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &CirclePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}
