use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::color::Color;
use crate::error::{GraphError, GraphResult};

/// One column of a stacked chart: one value per layer, index = layer index.
///
/// Values are finite and `>= 0` so each cumulative layer stays at or above
/// the one beneath it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackedLinePoint {
    values: Vec<f64>,
    /// Drawn in place of the column index on the x axis.
    pub label: Option<String>,
}

fn check_layer_value(value: f64) -> GraphResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GraphError::InvalidData(format!(
            "stacked values must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

impl StackedLinePoint {
    pub fn new(values: impl IntoIterator<Item = f64>) -> GraphResult<Self> {
        let values: Vec<f64> = values.into_iter().collect();
        values.iter().copied().try_for_each(check_layer_value)?;
        Ok(Self {
            values,
            label: None,
        })
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn push_value(&mut self, value: f64) -> GraphResult<()> {
        check_layer_value(value)?;
        self.values.push(value);
        Ok(())
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Layer value, with missing layers contributing zero.
    #[must_use]
    pub fn value_or_zero(&self, layer: usize) -> f64 {
        self.values.get(layer).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedLine {
    points: Vec<StackedLinePoint>,
    layer_colors: BTreeMap<usize, Color>,
    pub show_points: bool,
}

impl Default for StackedLine {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            layer_colors: BTreeMap::new(),
            show_points: true,
        }
    }
}

impl StackedLine {
    /// Color used for layers without an explicit entry.
    pub const FALLBACK_LAYER_COLOR: Color = Color::GREY;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_points(mut self, points: impl IntoIterator<Item = StackedLinePoint>) -> Self {
        self.points.extend(points);
        self
    }

    #[must_use]
    pub fn with_layer_color(mut self, layer: usize, color: Color) -> Self {
        self.layer_colors.insert(layer, color);
        self
    }

    #[must_use]
    pub fn with_show_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    pub fn set_layer_color(&mut self, layer: usize, color: Color) {
        self.layer_colors.insert(layer, color);
    }

    #[must_use]
    pub fn layer_color(&self, layer: usize) -> Color {
        self.layer_colors
            .get(&layer)
            .copied()
            .unwrap_or(Self::FALLBACK_LAYER_COLOR)
    }

    pub fn push(&mut self, point: StackedLinePoint) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[StackedLinePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Widest layer count across all points.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.points
            .iter()
            .map(StackedLinePoint::layer_count)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.points.iter().map(StackedLinePoint::total_value).collect()
    }

    /// Running sums per layer: `result[layer][point]` is the sum of layers `0..=layer`.
    #[must_use]
    pub fn cumulative_layers(&self) -> Vec<Vec<f64>> {
        let layer_count = self.layer_count();
        let mut layers = Vec::with_capacity(layer_count);
        let mut running = vec![0.0; self.points.len()];
        for layer in 0..layer_count {
            for (sum, point) in running.iter_mut().zip(&self.points) {
                *sum += point.value_or_zero(layer);
            }
            layers.push(running.clone());
        }
        layers
    }

    /// Also rechecks values, which may arrive through deserialization.
    pub fn validate(&self) -> GraphResult<()> {
        for color in self.layer_colors.values() {
            color.validate()?;
        }
        self.points
            .iter()
            .flat_map(|point| point.values.iter().copied())
            .try_for_each(check_layer_value)
    }

    /// `(column, label)` for every labelled point.
    pub fn labels(&self) -> impl Iterator<Item = (usize, &str)> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| point.label.as_deref().map(|label| (index, label)))
    }
}
