use crate::core::axis_ticks::{even_grid_offsets, format_axis_value, unique_integer_ticks};
use crate::core::{AxisRange, Color, CoordinateMapper, Padding, PixelPoint};
use crate::render::{
    CanvasLayerKind, CirclePrimitive, LayeredRenderFrame, LinePrimitive, TextHAlign,
    TextMeasurer, TextPrimitive,
};

use super::{GraphConfig, HorizontalGrid};

/// Padding reserved for axis value labels and axis titles.
///
/// Top and right leave room for half of the widest end label so it is not
/// clipped; left and bottom hold a full label column or row, plus one title
/// row per axis title.
pub(super) fn axis_padding(
    config: &GraphConfig,
    measurer: &dyn TextMeasurer,
    x_range: AxisRange,
    y_range: AxisRange,
) -> Padding {
    let font = config.axis_font_size_px;
    let mut padding = Padding {
        left: y_title_column(config),
        top: 0.0,
        right: 0.0,
        bottom: x_title_row(config),
    };
    if config.show_x_axis_values {
        padding.bottom += font * 2.0;
        padding.right = measurer.measure_text_width(&format_axis_value(x_range.max()), font) / 2.0;
    }
    if config.show_y_axis_values {
        padding.left += font * 2.0;
        padding.top = measurer.measure_text_width(&format_axis_value(y_range.max()), font) / 2.0;
    }
    padding
}

fn x_title_row(config: &GraphConfig) -> f64 {
    if config.x_axis_title.is_some() {
        config.axis_title_font_size_px
    } else {
        0.0
    }
}

fn y_title_column(config: &GraphConfig) -> f64 {
    if config.y_axis_title.is_some() {
        config.axis_title_font_size_px
    } else {
        0.0
    }
}

pub(super) fn push_baseline(
    layered: &mut LayeredRenderFrame,
    mapper: &CoordinateMapper,
    config: &GraphConfig,
) {
    let plot = mapper.plot_rect();
    layered.push(
        CanvasLayerKind::Grid,
        LinePrimitive::new(
            plot.left,
            plot.bottom,
            plot.right,
            plot.bottom,
            config.density.dp_to_px(1.0),
            config.baseline_color,
        ),
    );
}

pub(super) fn push_horizontal_grid(
    layered: &mut LayeredRenderFrame,
    mapper: &CoordinateMapper,
    config: &GraphConfig,
) {
    let plot = mapper.plot_rect();
    let ys: Vec<f64> = match &config.horizontal_grid {
        HorizontalGrid::Hidden => return,
        HorizontalGrid::Even(count) => even_grid_offsets(mapper.usable_height(), *count)
            .into_iter()
            .map(|offset| plot.bottom - offset)
            .collect(),
        HorizontalGrid::Values(values) => values
            .iter()
            .map(|value| mapper.y(*value))
            .filter(|y| *y >= plot.top && *y <= plot.bottom)
            .collect(),
    };

    let width = config.density.dp_to_px(1.0);
    for y in ys {
        layered.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(plot.left, y, plot.right, y, width, config.grid_color),
        );
    }
}

/// Integer value labels under the x axis and beside the y axis.
pub(super) fn push_axis_values(
    layered: &mut LayeredRenderFrame,
    mapper: &CoordinateMapper,
    config: &GraphConfig,
) {
    push_x_axis_values(layered, mapper, config);
    push_y_axis_values(layered, mapper, config);
}

pub(super) fn push_x_axis_values(
    layered: &mut LayeredRenderFrame,
    mapper: &CoordinateMapper,
    config: &GraphConfig,
) {
    if !config.show_x_axis_values {
        return;
    }
    let spacing = config.axis_label_min_spacing_px();
    let ticks = unique_integer_ticks(mapper.x_range(), mapper.usable_width(), spacing);
    push_x_axis_labels(
        layered,
        mapper,
        config,
        ticks.into_iter().map(|tick| {
            let value = tick as f64;
            (value, format_axis_value(value))
        }),
    );
}

pub(super) fn push_y_axis_values(
    layered: &mut LayeredRenderFrame,
    mapper: &CoordinateMapper,
    config: &GraphConfig,
) {
    if !config.show_y_axis_values {
        return;
    }
    let font = config.axis_font_size_px;
    let spacing = config.axis_label_min_spacing_px();
    let x = y_title_column(config) + font;
    for tick in unique_integer_ticks(mapper.y_range(), mapper.usable_height(), spacing) {
        let value = tick as f64;
        layered.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                format_axis_value(value),
                x,
                mapper.y(value) - font / 2.0,
                font,
                config.axis_text_color,
                TextHAlign::Center,
            ),
        );
    }
}

/// Labels in the x value row, centred on their data-space x. Empty labels are skipped.
///
/// Callers check `show_x_axis_values`.
pub(super) fn push_x_axis_labels(
    layered: &mut LayeredRenderFrame,
    mapper: &CoordinateMapper,
    config: &GraphConfig,
    labels: impl IntoIterator<Item = (f64, String)>,
) {
    let font = config.axis_font_size_px;
    let top = mapper.viewport().height_px() - x_title_row(config) - font * 1.5;
    for (value, text) in labels {
        if text.is_empty() {
            continue;
        }
        layered.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                text,
                mapper.x(value),
                top,
                font,
                config.axis_text_color,
                TextHAlign::Center,
            ),
        );
    }
}

/// X title centred along the bottom row, Y title rotated in the left column.
pub(super) fn push_axis_titles(layered: &mut LayeredRenderFrame, config: &GraphConfig) {
    let font = config.axis_title_font_size_px;
    let width = config.viewport.width_px();
    let height = config.viewport.height_px();
    if let Some(title) = &config.x_axis_title {
        layered.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                title.clone(),
                width / 2.0,
                height - font,
                font,
                config.axis_text_color,
                TextHAlign::Center,
            ),
        );
    }
    if let Some(title) = &config.y_axis_title {
        layered.push(
            CanvasLayerKind::Axis,
            TextPrimitive::new(
                title.clone(),
                0.0,
                height / 2.0,
                font,
                config.axis_text_color,
                TextHAlign::Center,
            )
            .with_rotation_deg(-90.0),
        );
    }
}

/// Outer disc in `color` with a white core of half the radius.
pub(super) fn push_point_marker(
    layered: &mut LayeredRenderFrame,
    center: PixelPoint,
    radius: f64,
    color: Color,
) {
    layered.push(CanvasLayerKind::Markers, CirclePrimitive::new(center, radius, color));
    layered.push(
        CanvasLayerKind::Markers,
        CirclePrimitive::new(center, radius / 2.0, Color::WHITE),
    );
}
