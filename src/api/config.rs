use serde::{Deserialize, Serialize};

use crate::core::{Color, Density, Viewport};
use crate::error::{GraphError, GraphResult};

/// Horizontal grid drawn behind the series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum HorizontalGrid {
    #[default]
    Hidden,
    /// `n` evenly spaced lines above the baseline.
    Even(usize),
    /// Lines at the given data-space y values.
    Values(Vec<f64>),
}

/// Shared graph configuration.
///
/// Serializable so hosts can persist widget setup without inventing their
/// own format. Dimensions suffixed `_dp` are converted through `density`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub density: Density,
    #[serde(default = "default_marker_radius_dp")]
    pub marker_radius_dp: f64,
    #[serde(default = "default_hit_radius_dp")]
    pub hit_radius_dp: f64,
    #[serde(default)]
    pub show_x_axis_values: bool,
    #[serde(default)]
    pub show_y_axis_values: bool,
    #[serde(default = "default_axis_font_size_px")]
    pub axis_font_size_px: f64,
    /// Centred under the plot in its own row.
    #[serde(default)]
    pub x_axis_title: Option<String>,
    /// Drawn bottom to top in its own column left of the plot.
    #[serde(default)]
    pub y_axis_title: Option<String>,
    #[serde(default = "default_axis_title_font_size_px")]
    pub axis_title_font_size_px: f64,
    #[serde(default = "default_axis_label_min_spacing_dp")]
    pub axis_label_min_spacing_dp: f64,
    #[serde(default)]
    pub horizontal_grid: HorizontalGrid,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_axis_text_color")]
    pub axis_text_color: Color,
    #[serde(default = "default_baseline_color")]
    pub baseline_color: Color,
}

impl GraphConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            density: Density::default(),
            marker_radius_dp: default_marker_radius_dp(),
            hit_radius_dp: default_hit_radius_dp(),
            show_x_axis_values: false,
            show_y_axis_values: false,
            axis_font_size_px: default_axis_font_size_px(),
            x_axis_title: None,
            y_axis_title: None,
            axis_title_font_size_px: default_axis_title_font_size_px(),
            axis_label_min_spacing_dp: default_axis_label_min_spacing_dp(),
            horizontal_grid: HorizontalGrid::Hidden,
            grid_color: default_grid_color(),
            axis_text_color: default_axis_text_color(),
            baseline_color: default_baseline_color(),
        }
    }

    #[must_use]
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn with_marker_radius_dp(mut self, radius: f64) -> Self {
        self.marker_radius_dp = radius;
        self
    }

    #[must_use]
    pub fn with_hit_radius_dp(mut self, radius: f64) -> Self {
        self.hit_radius_dp = radius;
        self
    }

    /// Shows or hides the value labels of both axes.
    #[must_use]
    pub fn with_axis_values(mut self, show: bool) -> Self {
        self.show_x_axis_values = show;
        self.show_y_axis_values = show;
        self
    }

    #[must_use]
    pub fn with_x_axis_values(mut self, show: bool) -> Self {
        self.show_x_axis_values = show;
        self
    }

    #[must_use]
    pub fn with_y_axis_values(mut self, show: bool) -> Self {
        self.show_y_axis_values = show;
        self
    }

    #[must_use]
    pub fn with_x_axis_title(mut self, title: impl Into<String>) -> Self {
        self.x_axis_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_axis_title_font_size_px(mut self, size: f64) -> Self {
        self.axis_title_font_size_px = size;
        self
    }

    #[must_use]
    pub fn with_axis_font_size_px(mut self, size: f64) -> Self {
        self.axis_font_size_px = size;
        self
    }

    #[must_use]
    pub fn with_horizontal_grid(mut self, grid: HorizontalGrid) -> Self {
        self.horizontal_grid = grid;
        self
    }

    #[must_use]
    pub fn with_grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_text_color(mut self, color: Color) -> Self {
        self.axis_text_color = color;
        self
    }

    #[must_use]
    pub fn marker_radius_px(&self) -> f64 {
        self.density.dp_to_px(self.marker_radius_dp)
    }

    #[must_use]
    pub fn hit_radius_px(&self) -> f64 {
        self.density.dp_to_px(self.hit_radius_dp)
    }

    #[must_use]
    pub fn axis_label_min_spacing_px(&self) -> f64 {
        self.density.dp_to_px(self.axis_label_min_spacing_dp)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Diagonal hatch under the line graph's "to-fill" series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HatchFillStyle {
    #[serde(default = "default_hatch_color")]
    pub color: Color,
    #[serde(default = "default_hatch_stroke_width_px")]
    pub stroke_width_px: f64,
    #[serde(default = "default_hatch_spacing_px")]
    pub spacing_px: f64,
}

impl Default for HatchFillStyle {
    fn default() -> Self {
        Self {
            color: default_hatch_color(),
            stroke_width_px: default_hatch_stroke_width_px(),
            spacing_px: default_hatch_spacing_px(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieStyle {
    /// Screen-space degrees; 270 points up.
    #[serde(default = "default_pie_start_angle_deg")]
    pub start_angle_deg: f64,
    /// Gap cut from the leading edge of every slice.
    #[serde(default)]
    pub slice_padding_deg: f64,
    #[serde(default)]
    pub radius_padding_px: f64,
    /// Donut hole as a fraction of 255 of the radius.
    #[serde(default)]
    pub inner_circle_ratio: u8,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            start_angle_deg: default_pie_start_angle_deg(),
            slice_padding_deg: 0.0,
            radius_padding_px: 0.0,
            inner_circle_ratio: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    /// Fraction of each slot left empty, in `[0, 1)`.
    #[serde(default = "default_bar_spacing_ratio")]
    pub spacing_ratio: f64,
    #[serde(default = "default_show_bar_text")]
    pub show_bar_text: bool,
    #[serde(default = "default_bar_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_axis_text_color")]
    pub label_color: Color,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            spacing_ratio: default_bar_spacing_ratio(),
            show_bar_text: default_show_bar_text(),
            label_font_size_px: default_bar_label_font_size_px(),
            label_color: default_axis_text_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedStyle {
    #[serde(default = "default_stacked_stroke_width_px")]
    pub stroke_width_px: f64,
    /// 8-bit alpha applied to every band's layer color.
    #[serde(default = "default_band_alpha")]
    pub band_alpha: u8,
    #[serde(default = "default_stacked_marker_color")]
    pub marker_color: Color,
    #[serde(default = "default_stacked_selected_color")]
    pub selected_color: Color,
}

impl Default for StackedStyle {
    fn default() -> Self {
        Self {
            stroke_width_px: default_stacked_stroke_width_px(),
            band_alpha: default_band_alpha(),
            marker_color: default_stacked_marker_color(),
            selected_color: default_stacked_selected_color(),
        }
    }
}

fn default_marker_radius_dp() -> f64 {
    6.0
}

fn default_hit_radius_dp() -> f64 {
    30.0
}

fn default_axis_font_size_px() -> f64 {
    16.0
}

fn default_axis_title_font_size_px() -> f64 {
    20.0
}

fn default_axis_label_min_spacing_dp() -> f64 {
    50.0
}

fn default_grid_color() -> Color {
    Color::BLACK.with_alpha_u8(50)
}

fn default_axis_text_color() -> Color {
    Color::from_argb_hex(0xDD00_0000)
}

fn default_baseline_color() -> Color {
    Color::BLACK.with_alpha_u8(50)
}

fn default_hatch_color() -> Color {
    Color::BLACK
}

fn default_hatch_stroke_width_px() -> f64 {
    2.0
}

fn default_hatch_spacing_px() -> f64 {
    10.0
}

fn default_pie_start_angle_deg() -> f64 {
    270.0
}

fn default_bar_spacing_ratio() -> f64 {
    0.2
}

fn default_show_bar_text() -> bool {
    true
}

fn default_bar_label_font_size_px() -> f64 {
    20.0
}

fn default_stacked_stroke_width_px() -> f64 {
    6.0
}

fn default_band_alpha() -> u8 {
    100
}

fn default_stacked_marker_color() -> Color {
    Color::GREY
}

fn default_stacked_selected_color() -> Color {
    Color::from_argb_hex(0x6433_B5E5)
}
