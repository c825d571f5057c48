use serde::{Deserialize, Serialize};

use super::ColorPalettePreset;

/// Color palette for generation.
///
/// Exactly one of `name` and `members` must be set; the encoder rejects a
/// palette that carries both or neither.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Named preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ColorPalettePreset>,

    /// Explicit palette members.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ColorPaletteMember>>,
}

impl ColorPalette {
    /// Creates a palette from a named preset.
    pub fn preset(name: ColorPalettePreset) -> Self {
        Self {
            name: Some(name),
            members: None,
        }
    }

    /// Creates a palette from explicit members.
    pub fn members(members: Vec<ColorPaletteMember>) -> Self {
        Self {
            name: None,
            members: Some(members),
        }
    }
}

impl From<ColorPalettePreset> for ColorPalette {
    fn from(name: ColorPalettePreset) -> Self {
        Self::preset(name)
    }
}

/// A single color in an explicit palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPaletteMember {
    /// Hex color, e.g. `#FF5733`.
    pub color: String,

    /// Relative weight in `[0, 1]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ColorPaletteMember {
    /// Creates an unweighted member.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            weight: None,
        }
    }

    /// Sets the member weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// How strongly a remix follows the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageWeight {
    /// Weight in `[0, 1]`.
    pub weight: f64,
}

impl ImageWeight {
    /// Default remix weight.
    pub const DEFAULT: f64 = 0.5;

    /// Creates an image weight.
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for ImageWeight {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}
