use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// Closed data-space interval for one axis. `min <= max`, both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// Fallback used when an axis has nothing to scan.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> GraphResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GraphError::InvalidData(
                "axis range bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(GraphError::InvalidData(format!(
                "axis range min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.span() == 0.0
    }

    /// Normalized position of `value` inside the range.
    ///
    /// A zero-width range has no meaningful proportion, so every value maps
    /// to the midpoint (`0.5`).
    #[must_use]
    pub fn percent(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.5;
        }
        (value - self.min) / self.span()
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pushes both bounds outward by `ratio * span`.
    #[must_use]
    pub fn expanded(self, ratio: f64) -> Self {
        if ratio <= 0.0 || !ratio.is_finite() {
            return self;
        }
        let margin = self.span() * ratio;
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    #[must_use]
    pub fn including(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// How one axis derives its range on each rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Explicit override; scanning is skipped entirely when set.
    pub pinned: Option<AxisRange>,
    /// Symmetric zoom-out margin applied to scanned ranges.
    pub ratio: f64,
    /// Forces `0` into scanned ranges (stacked and bar charts grow from zero).
    pub include_zero: bool,
}

impl AxisBounds {
    #[must_use]
    pub fn anchored_at_zero() -> Self {
        Self {
            include_zero: true,
            ..Self::default()
        }
    }

    pub fn set_ratio(&mut self, ratio: f64) -> GraphResult<()> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(GraphError::InvalidData(
                "axis range ratio must be finite and >= 0".to_owned(),
            ));
        }
        self.ratio = ratio;
        Ok(())
    }
}

/// Resolves the effective range for one axis.
///
/// A pinned range is returned unchanged. Otherwise min/max start at the first
/// finite value and extend over the rest. Returns `None` when there is
/// nothing to scan.
pub fn resolve_axis_range(
    values: impl IntoIterator<Item = f64>,
    bounds: &AxisBounds,
) -> Option<AxisRange> {
    if let Some(pinned) = bounds.pinned {
        return Some(pinned);
    }

    let mut values = values.into_iter().filter(|value| value.is_finite());
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(min, max), value| {
        (min.min(value), max.max(value))
    });

    let mut range = AxisRange { min, max };
    if bounds.include_zero {
        range = range.including(0.0);
    }
    if range.is_degenerate() {
        debug!(value = range.min, "axis range collapsed to a single value");
    }
    Some(range.expanded(bounds.ratio))
}
