use crate::error::{GraphError, GraphResult};

use super::{BarStyle, GraphConfig, HatchFillStyle, HorizontalGrid, PieStyle, StackedStyle};

/// Below this the tick scan and hatch sweep grow without useful output.
const MIN_AXIS_LABEL_SPACING_DP: f64 = 1.0;
const MIN_HATCH_SPACING_PX: f64 = 1.0;

pub(super) fn validate_graph_config(config: &GraphConfig) -> GraphResult<()> {
    config.viewport.validate()?;
    if !config.density.factor().is_finite() || config.density.factor() <= 0.0 {
        return Err(GraphError::InvalidData(
            "density must be finite and > 0".to_owned(),
        ));
    }
    if !config.marker_radius_dp.is_finite() || config.marker_radius_dp <= 0.0 {
        return Err(GraphError::InvalidData(
            "marker radius must be finite and > 0".to_owned(),
        ));
    }
    if !config.hit_radius_dp.is_finite() || config.hit_radius_dp < config.marker_radius_dp {
        return Err(GraphError::InvalidData(
            "hit radius must be finite and >= marker radius".to_owned(),
        ));
    }
    if !config.axis_font_size_px.is_finite() || config.axis_font_size_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "axis font size must be finite and > 0".to_owned(),
        ));
    }
    if !config.axis_label_min_spacing_dp.is_finite()
        || config.axis_label_min_spacing_dp < MIN_AXIS_LABEL_SPACING_DP
    {
        return Err(GraphError::InvalidData(format!(
            "axis label spacing must be finite and >= {MIN_AXIS_LABEL_SPACING_DP} dp"
        )));
    }
    if !config.axis_title_font_size_px.is_finite() || config.axis_title_font_size_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "axis title font size must be finite and > 0".to_owned(),
        ));
    }
    for title in [&config.x_axis_title, &config.y_axis_title].into_iter().flatten() {
        if title.is_empty() {
            return Err(GraphError::InvalidData(
                "axis title must not be empty; use None to hide it".to_owned(),
            ));
        }
    }
    if let HorizontalGrid::Values(values) = &config.horizontal_grid {
        if values.iter().any(|value| !value.is_finite()) {
            return Err(GraphError::InvalidData(
                "grid values must be finite".to_owned(),
            ));
        }
    }
    config.grid_color.validate()?;
    config.axis_text_color.validate()?;
    config.baseline_color.validate()
}

pub(super) fn validate_hatch_fill_style(style: HatchFillStyle) -> GraphResult<HatchFillStyle> {
    style.color.validate()?;
    if !style.stroke_width_px.is_finite() || style.stroke_width_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "hatch stroke width must be finite and > 0".to_owned(),
        ));
    }
    if !style.spacing_px.is_finite() || style.spacing_px < MIN_HATCH_SPACING_PX {
        return Err(GraphError::InvalidData(format!(
            "hatch spacing must be finite and >= {MIN_HATCH_SPACING_PX} px"
        )));
    }
    Ok(style)
}

pub(super) fn validate_pie_style(style: PieStyle) -> GraphResult<PieStyle> {
    if !style.start_angle_deg.is_finite() {
        return Err(GraphError::InvalidData(
            "pie start angle must be finite".to_owned(),
        ));
    }
    if !style.slice_padding_deg.is_finite() || !(0.0..360.0).contains(&style.slice_padding_deg) {
        return Err(GraphError::InvalidData(
            "pie slice padding must be in [0, 360)".to_owned(),
        ));
    }
    if !style.radius_padding_px.is_finite() || style.radius_padding_px < 0.0 {
        return Err(GraphError::InvalidData(
            "pie radius padding must be finite and >= 0".to_owned(),
        ));
    }
    Ok(style)
}

pub(super) fn validate_bar_style(style: BarStyle) -> GraphResult<BarStyle> {
    if !style.spacing_ratio.is_finite() || !(0.0..1.0).contains(&style.spacing_ratio) {
        return Err(GraphError::InvalidData(
            "bar spacing ratio must be in [0, 1)".to_owned(),
        ));
    }
    if !style.label_font_size_px.is_finite() || style.label_font_size_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "bar label font size must be finite and > 0".to_owned(),
        ));
    }
    style.label_color.validate()?;
    Ok(style)
}

pub(super) fn validate_stacked_style(style: StackedStyle) -> GraphResult<StackedStyle> {
    if !style.stroke_width_px.is_finite() || style.stroke_width_px <= 0.0 {
        return Err(GraphError::InvalidData(
            "stacked stroke width must be finite and > 0".to_owned(),
        ));
    }
    style.marker_color.validate()?;
    style.selected_color.validate()?;
    Ok(style)
}
