use crate::core::axis_range::AxisRange;

/// Integer tick values spread over `range`, at most one per `min_spacing_px`.
///
/// Candidates are sampled evenly across the range and truncated to integers;
/// consecutive duplicates are dropped, so narrow ranges yield few ticks.
#[must_use]
pub fn unique_integer_ticks(range: AxisRange, usable_px: f64, min_spacing_px: f64) -> Vec<i64> {
    let count = if min_spacing_px > 0.0 && usable_px.is_finite() && usable_px > 0.0 {
        (usable_px / min_spacing_px) as usize + 1
    } else {
        2
    }
    .max(2);

    let step = range.span() / (count - 1) as f64;
    let mut ticks: Vec<i64> = Vec::with_capacity(count);
    for i in 0..count {
        let tick = (range.min() + step * i as f64) as i64;
        if ticks.last() != Some(&tick) {
            ticks.push(tick);
        }
    }
    ticks
}

/// Pixel offsets of `count` evenly spaced lines above the baseline.
#[must_use]
pub fn even_grid_offsets(usable_height: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = usable_height / count as f64;
    (1..=count).map(|i| spacing * i as f64).collect()
}

/// Renders a value as an axis label; whole numbers drop the fraction.
#[must_use]
pub fn format_axis_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
