use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::render::{
    BlendMode, Color, DrawCommand, PathPrimitive, RenderFrame, Renderer, TextHAlign,
    TextMeasurer, TextPrimitive, estimate_text_width_px,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub paths_drawn: usize,
    pub clears_applied: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Extension trait for renderers that cooperate with an external Cairo
/// context (for example a GTK `DrawingArea` draw callback).
pub trait CairoContextRenderer {
    /// Replays `frame` directly onto `context`, bypassing the offscreen surface.
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()>;

    /// Paints the last offscreen result onto `context` at the origin.
    fn blit_onto(&self, context: &Context) -> GraphResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// `Renderer::render` rasterises into an owned ARGB image surface, which acts
/// as the redraw cache: hosts blit it on every expose and only re-render when
/// the graph reports a rebuild.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    font_family: String,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GraphResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::TRANSPARENT,
            font_family: "Sans".to_owned(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> GraphResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> GraphResult<()> {
        let mut file = File::create(path.as_ref())
            .map_err(|err| GraphError::Backend(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| GraphError::Backend(format!("failed to write png: {err}")))
    }

    fn ensure_surface_size(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        let width = i32::try_from(frame.viewport.width)
            .map_err(|_| GraphError::InvalidData("viewport width exceeds i32".to_owned()))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|_| GraphError::InvalidData("viewport height exceeds i32".to_owned()))?;
        if self.surface.width() != width || self.surface.height() != height {
            trace!(width, height, "recreating offscreen cairo surface");
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        context.set_operator(Operator::Clear);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);
        if self.clear_color.alpha > 0.0 {
            apply_color(context, self.clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to paint background", err))?;
        }

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            context.new_path();
            match command {
                DrawCommand::Line(line) => {
                    apply_color(context, line.color);
                    context.set_line_width(line.stroke_width);
                    context.move_to(line.x1, line.y1);
                    context.line_to(line.x2, line.y2);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke line", err))?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Circle(circle) => {
                    apply_color(context, circle.color);
                    context.arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill circle", err))?;
                    stats.circles_drawn += 1;
                }
                DrawCommand::Path(path) => {
                    draw_path(context, path)?;
                    match path.blend {
                        BlendMode::Clear => stats.clears_applied += 1,
                        BlendMode::SourceOver => stats.paths_drawn += 1,
                    }
                }
                DrawCommand::Rect(rect) => {
                    apply_color(context, rect.fill_color);
                    context.rectangle(rect.x, rect.y, rect.width, rect.height);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    self.draw_text(context, text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_text(&self, context: &Context, text: &TextPrimitive) -> GraphResult<()> {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&self.font_description(text.font_size_px)));
        layout.set_text(&text.text);

        let (text_width, _text_height) = layout.pixel_size();
        let offset = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };

        apply_color(context, text.color);
        if text.rotation_deg == 0.0 {
            context.move_to(text.x + offset, text.y);
            pangocairo::functions::show_layout(context, &layout);
            return Ok(());
        }

        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(text.x, text.y);
        context.rotate(text.rotation_deg.to_radians());
        context.move_to(offset, 0.0);
        pangocairo::functions::show_layout(context, &layout);
        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))
    }

    fn font_description(&self, font_size_px: f64) -> FontDescription {
        let mut description = FontDescription::from_string(&self.font_family);
        description.set_absolute_size(font_size_px * f64::from(pango::SCALE));
        description
    }
}

impl TextMeasurer for CairoRenderer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        let Ok(context) = Context::new(&self.surface) else {
            return estimate_text_width_px(text, font_size_px);
        };
        let layout = pangocairo::functions::create_layout(&context);
        layout.set_font_description(Some(&self.font_description(font_size_px)));
        layout.set_text(text);
        f64::from(layout.pixel_size().0)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        self.ensure_surface_size(frame)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        drop(context);
        self.surface.flush();
        Ok(())
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(&mut self, context: &Context, frame: &RenderFrame) -> GraphResult<()> {
        self.render_with_context(context, frame)
    }

    fn blit_onto(&self, context: &Context) -> GraphResult<()> {
        context
            .set_source_surface(&self.surface, 0.0, 0.0)
            .map_err(|err| map_backend_error("failed to set source surface", err))?;
        context
            .paint()
            .map_err(|err| map_backend_error("failed to blit cached surface", err))
    }
}

fn draw_path(context: &Context, path: &PathPrimitive) -> GraphResult<()> {
    let Some((first, rest)) = path.vertices.split_first() else {
        return Ok(());
    };
    context.move_to(first.x, first.y);
    for vertex in rest {
        context.line_to(vertex.x, vertex.y);
    }
    context.close_path();

    if path.blend == BlendMode::Clear {
        context.set_operator(Operator::Clear);
        let result = context.fill();
        context.set_operator(Operator::Over);
        return result.map_err(|err| map_backend_error("failed to clear path", err));
    }

    if let Some(fill) = path.fill {
        apply_color(context, fill);
        if path.stroke.is_some() {
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
        } else {
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill path", err))?;
        }
    }
    if let Some(stroke) = path.stroke {
        apply_color(context, stroke.color);
        context.set_line_width(stroke.width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))?;
    }
    Ok(())
}

fn create_surface(width: i32, height: i32) -> GraphResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(GraphError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GraphError {
    GraphError::Backend(format!("{prefix}: {err}"))
}
