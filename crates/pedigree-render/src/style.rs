//! Render configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default gap between a person's circle and their labels.
pub const DEFAULT_TEXT_PADDING: f64 = 6.0;

/// Style loading errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to parse style: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn gray() -> Self {
        Self::new(128, 128, 128, 255)
    }

    /// CSS color string, e.g. `rgb(128, 128, 128)`.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

/// Style knobs for the SVG renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Stroke color of the scaffolding path.
    pub scaffolding_color: SerializableColor,
    /// Gap between a person's circle and their labels.
    pub text_padding: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            scaffolding_color: SerializableColor::gray(),
            text_padding: DEFAULT_TEXT_PADDING,
        }
    }
}

impl RenderStyle {
    /// Parse a style from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the scaffolding stroke color.
    pub fn with_scaffolding_color(mut self, color: Color) -> Self {
        self.scaffolding_color = color.into();
        self
    }

    /// Set the label padding.
    pub fn with_text_padding(mut self, padding: f64) -> Self {
        self.text_padding = padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = RenderStyle::default();
        assert!((style.text_padding - 6.0).abs() < f64::EPSILON);
        assert_eq!(style.scaffolding_color.to_css(), "rgb(128, 128, 128)");
    }

    #[test]
    fn test_builder() {
        let style = RenderStyle::default()
            .with_text_padding(10.0)
            .with_scaffolding_color(Color::from_rgba8(255, 0, 0, 255));
        assert!((style.text_padding - 10.0).abs() < f64::EPSILON);
        assert_eq!(style.scaffolding_color, SerializableColor::new(255, 0, 0, 255));
    }

    #[test]
    fn test_from_json_partial() {
        let style = RenderStyle::from_json(r#"{"text_padding": 3.0}"#).unwrap();
        assert!((style.text_padding - 3.0).abs() < f64::EPSILON);
        assert_eq!(style.scaffolding_color, SerializableColor::gray());
        assert!(RenderStyle::from_json("[").is_err());
    }

    #[test]
    fn test_translucent_css() {
        assert_eq!(
            SerializableColor::new(0, 0, 0, 0).to_css(),
            "rgba(0, 0, 0, 0)"
        );
    }
}
