use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const GREY: Self = Self::from_argb_hex(0xFF88_8888);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Packed `0xAARRGGBB`, the layout host toolkits hand colors over in.
    #[must_use]
    pub const fn from_argb_hex(argb: u32) -> Self {
        Self {
            red: ((argb >> 16) & 0xFF) as f64 / 255.0,
            green: ((argb >> 8) & 0xFF) as f64 / 255.0,
            blue: (argb & 0xFF) as f64 / 255.0,
            alpha: ((argb >> 24) & 0xFF) as f64 / 255.0,
        }
    }

    /// Same color with an 8-bit alpha (0..=255).
    #[must_use]
    pub fn with_alpha_u8(self, alpha: u8) -> Self {
        Self {
            alpha: f64::from(alpha) / 255.0,
            ..self
        }
    }

    pub fn validate(self) -> GraphResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(GraphError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Default point color.
pub const DEFAULT_POINT_COLOR: Color = Color::from_argb_hex(0xFF00_0000);
/// Default selection highlight, a translucent holo blue.
pub const DEFAULT_SELECTED_COLOR: Color = Color::from_argb_hex(0x8033_B5E5);
/// Default series stroke color.
pub const DEFAULT_LINE_COLOR: Color = Color::from_argb_hex(0xFF33_B5E5);

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn argb_hex_unpacks_channels() {
        let color = Color::from_argb_hex(0x80FF_0000);
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert_eq!(color.blue, 0.0);
        assert!((color.alpha - 128.0 / 255.0).abs() <= 1e-12);
    }

    #[test]
    fn out_of_range_channel_is_rejected() {
        assert!(Color::rgba(0.0, 1.2, 0.0, 1.0).validate().is_err());
        assert!(Color::WHITE.with_alpha_u8(50).validate().is_ok());
    }
}
