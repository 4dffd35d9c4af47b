use serde::{Deserialize, Serialize};

use crate::core::color::{Color, DEFAULT_LINE_COLOR, DEFAULT_SELECTED_COLOR};
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    value: f64,
    pub color: Color,
    pub selected_color: Color,
    pub title: Option<String>,
}

impl PieSlice {
    /// Slice values must be finite and `>= 0`; zero yields an empty wedge.
    pub fn new(value: f64) -> GraphResult<Self> {
        validate_slice_value(value)?;
        Ok(Self {
            value,
            color: DEFAULT_LINE_COLOR,
            selected_color: DEFAULT_SELECTED_COLOR,
            title: None,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> GraphResult<()> {
        validate_slice_value(value)?;
        self.value = value;
        Ok(())
    }

    pub fn validate(&self) -> GraphResult<()> {
        validate_slice_value(self.value)?;
        self.color.validate()?;
        self.selected_color.validate()
    }
}

fn validate_slice_value(value: f64) -> GraphResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GraphError::InvalidData(
            "pie slice value must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
