use serde::{Deserialize, Serialize};

use crate::core::color::{Color, DEFAULT_LINE_COLOR, DEFAULT_SELECTED_COLOR};
use crate::error::{GraphError, GraphResult};

/// Lifecycle marker kept for hosts that animate bar insertion/removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarAnimateState {
    #[default]
    Normal,
    Insert,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    value: f64,
    goal_value: f64,
    pub name: String,
    /// Text drawn above the bar; defaults to the formatted value.
    pub value_string: Option<String>,
    pub color: Color,
    pub selected_color: Color,
    pub animate_state: BarAnimateState,
}

impl Bar {
    pub fn new(name: impl Into<String>, value: f64) -> GraphResult<Self> {
        validate_bar_value("value", value)?;
        Ok(Self {
            value,
            goal_value: value,
            name: name.into(),
            value_string: None,
            color: DEFAULT_LINE_COLOR,
            selected_color: DEFAULT_SELECTED_COLOR,
            animate_state: BarAnimateState::Normal,
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
    pub fn with_value_string(mut self, text: impl Into<String>) -> Self {
        self.value_string = Some(text.into());
        self
    }

    pub fn with_goal_value(mut self, goal: f64) -> GraphResult<Self> {
        validate_bar_value("goal value", goal)?;
        self.goal_value = goal;
        Ok(self)
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn goal_value(&self) -> f64 {
        self.goal_value
    }

    pub fn set_value(&mut self, value: f64) -> GraphResult<()> {
        validate_bar_value("value", value)?;
        self.value = value;
        Ok(())
    }

    pub fn set_goal_value(&mut self, goal: f64) -> GraphResult<()> {
        validate_bar_value("goal value", goal)?;
        self.goal_value = goal;
        Ok(())
    }

    #[must_use]
    pub fn display_value(&self) -> String {
        self.value_string
            .clone()
            .unwrap_or_else(|| crate::core::axis_ticks::format_axis_value(self.value))
    }

    pub fn validate(&self) -> GraphResult<()> {
        validate_bar_value("value", self.value)?;
        validate_bar_value("goal value", self.goal_value)?;
        self.color.validate()?;
        self.selected_color.validate()
    }
}

fn validate_bar_value(field: &str, value: f64) -> GraphResult<()> {
    if !value.is_finite() {
        return Err(GraphError::InvalidData(format!("bar {field} must be finite")));
    }
    Ok(())
}
