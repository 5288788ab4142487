use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub name: String,
    // Brand colors
    pub accent: ColorSpec,
    pub accent_text: ColorSpec,
    pub favorite: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Blend from this color toward `other`; `amount` 0 keeps this color and
    /// 1 yields `other`.
    ///
    pub fn lerp(&self, other: &ColorSpec, amount: f64) -> ColorSpec {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            (from as f64 + (to as f64 - from as f64) * amount).round() as u8
        };
        ColorSpec {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::coral_light()
    }
}

impl Theme {
    /// Light theme with coral accents.
    ///
    pub fn coral_light() -> Self {
        Theme {
            name: "coral-light".to_string(),
            accent: ColorSpec::new(255, 107, 107),
            accent_text: ColorSpec::new(255, 255, 255),
            favorite: ColorSpec::new(230, 160, 0),
            text: ColorSpec::new(51, 51, 51),
            text_secondary: ColorSpec::new(102, 102, 102),
            text_muted: ColorSpec::new(136, 136, 136),
            background: ColorSpec::new(248, 249, 250),
            surface: ColorSpec::new(255, 255, 255),
            error: ColorSpec::new(200, 40, 60),
            border_active: ColorSpec::new(255, 107, 107),
            border_normal: ColorSpec::new(222, 224, 228),
        }
    }

    /// Dark theme with coral accents.
    ///
    pub fn coral_dark() -> Self {
        Theme {
            name: "coral-dark".to_string(),
            accent: ColorSpec::new(255, 120, 120),
            accent_text: ColorSpec::new(30, 30, 36),
            favorite: ColorSpec::new(255, 200, 70),
            text: ColorSpec::new(230, 230, 235),
            text_secondary: ColorSpec::new(180, 180, 190),
            text_muted: ColorSpec::new(130, 130, 145),
            background: ColorSpec::new(24, 24, 30),
            surface: ColorSpec::new(34, 34, 42),
            error: ColorSpec::new(255, 95, 110),
            border_active: ColorSpec::new(255, 120, 120),
            border_normal: ColorSpec::new(70, 70, 84),
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "coral-light" => Some(Self::coral_light()),
            "coral-dark" => Some(Self::coral_dark()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec!["coral-light".to_string(), "coral-dark".to_string()]
    }

    /// Color `spec` as seen at `opacity` over the theme background.
    ///
    pub fn faded(&self, spec: &ColorSpec, opacity: f64) -> Color {
        self.background.lerp(spec, opacity).to_color()
    }
}
