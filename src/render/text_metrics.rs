/// Text measurement used for padding and label placement.
///
/// Backends with a real font stack override this; the default keeps layout
/// deterministic and backend-independent.
pub trait TextMeasurer {
    fn measure_text_width(&self, text: &str, font_size_px: f64) -> f64 {
        estimate_text_width_px(text, font_size_px)
    }
}

/// Per-glyph width heuristic in units of the font size.
#[must_use]
pub fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}
