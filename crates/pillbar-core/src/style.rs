//! Style resolver: maps selection, press state and appearance to the visual
//! attributes of one pill.
//!
//! Colours are kept symbolic ([`ColorToken`]) until they are resolved for an
//! appearance mode, so the rules read the same as the design they encode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::FilterItem;
use crate::error::PillError;
use crate::spring::press_transition;

/// Light or dark theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    pub fn name(&self) -> &'static str {
        match self {
            AppearanceMode::Light => "light",
            AppearanceMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, AppearanceMode::Dark)
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AppearanceMode {
    type Err = PillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(AppearanceMode::Light),
            "dark" => Ok(AppearanceMode::Dark),
            other => Err(PillError::InvalidAppearance(other.to_string())),
        }
    }
}

/// System colour roles used by the pill
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    White,
    Black,
    /// Raised surface behind grouped content
    SecondarySurface,
    PrimaryText,
    SecondaryText,
    /// Page background
    GroupedBackground,
}

impl Tone {
    /// RGBA for this role under `mode`
    fn rgba(&self, mode: AppearanceMode) -> (u8, u8, u8, f64) {
        match (self, mode) {
            (Tone::White, _) => (255, 255, 255, 1.0),
            (Tone::Black, _) => (0, 0, 0, 1.0),
            (Tone::SecondarySurface, AppearanceMode::Light) => (242, 242, 247, 1.0),
            (Tone::SecondarySurface, AppearanceMode::Dark) => (28, 28, 30, 1.0),
            (Tone::PrimaryText, AppearanceMode::Light) => (0, 0, 0, 1.0),
            (Tone::PrimaryText, AppearanceMode::Dark) => (255, 255, 255, 1.0),
            (Tone::SecondaryText, AppearanceMode::Light) => (60, 60, 67, 0.6),
            (Tone::SecondaryText, AppearanceMode::Dark) => (235, 235, 245, 0.6),
            (Tone::GroupedBackground, AppearanceMode::Light) => (242, 242, 247, 1.0),
            (Tone::GroupedBackground, AppearanceMode::Dark) => (0, 0, 0, 1.0),
        }
    }
}

/// A tone at some opacity
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorToken {
    pub tone: Tone,
    pub opacity: f64,
}

impl ColorToken {
    pub const fn solid(tone: Tone) -> Self {
        Self { tone, opacity: 1.0 }
    }

    pub const fn with_opacity(tone: Tone, opacity: f64) -> Self {
        Self { tone, opacity }
    }

    /// CSS colour for `mode`
    pub fn css(&self, mode: AppearanceMode) -> String {
        let (r, g, b, a) = self.tone.rgba(mode);
        let alpha = round3(a * self.opacity);
        if alpha >= 1.0 {
            format!("rgb({}, {}, {})", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {})", r, g, b, alpha)
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Stroke width of the capsule outline, in points
pub const STROKE_WIDTH: f64 = 0.5;

/// Resolved visual attributes of one pill
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleAttributes {
    pub background_fill: ColorToken,
    /// Opacity of the black capsule outline
    pub stroke_opacity: f64,
    pub foreground_color: ColorToken,
    /// Opacity of the black drop shadow
    pub shadow_opacity: f64,
    pub shadow_radius: f64,
    pub shadow_offset_y: f64,
    pub scale: f64,
}

impl StyleAttributes {
    /// Inline CSS for the pill, including the spring transition on
    /// scale and shadow.
    pub fn to_css(&self, mode: AppearanceMode) -> String {
        let stroke = ColorToken::with_opacity(Tone::Black, self.stroke_opacity);
        let shadow = ColorToken::with_opacity(Tone::Black, self.shadow_opacity);

        format!(
            "background: {bg}; border: {sw}px solid {stroke}; color: {fg}; \
             box-shadow: 0 {y}px {r}px {shadow}; transform: scale({scale}); \
             transition: {transition};",
            bg = self.background_fill.css(mode),
            sw = STROKE_WIDTH,
            stroke = stroke.css(mode),
            fg = self.foreground_color.css(mode),
            y = self.shadow_offset_y,
            r = self.shadow_radius,
            shadow = shadow.css(mode),
            scale = self.scale,
            transition = press_transition(),
        )
    }
}

/// Resolve the style of `item` for the given selection, press and appearance.
pub fn style_for(
    item: &FilterItem,
    is_selected: bool,
    is_pressed: bool,
    mode: AppearanceMode,
) -> StyleAttributes {
    tracing::trace!(title = %item.title, is_selected, is_pressed, %mode, "resolving pill style");
    PillState {
        selected: is_selected,
        pressed: is_pressed,
    }
    .style(mode)
}

/// Selection and press state of one pill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PillState {
    pub selected: bool,
    pub pressed: bool,
}

impl PillState {
    pub fn style(&self, mode: AppearanceMode) -> StyleAttributes {
        let selected = self.selected;

        let background_fill = match mode {
            AppearanceMode::Light => ColorToken::solid(Tone::White),
            AppearanceMode::Dark => ColorToken::solid(Tone::SecondarySurface),
        };

        let foreground_color = match (mode, selected) {
            (AppearanceMode::Dark, true) => ColorToken::solid(Tone::PrimaryText),
            (AppearanceMode::Dark, false) => ColorToken::solid(Tone::SecondaryText),
            (AppearanceMode::Light, true) => ColorToken::solid(Tone::Black),
            (AppearanceMode::Light, false) => ColorToken::with_opacity(Tone::PrimaryText, 0.45),
        };

        // Press wins over selection for the shadow
        let shadow_opacity = if self.pressed {
            0.12
        } else if selected {
            0.16
        } else {
            0.08
        };

        StyleAttributes {
            background_fill,
            stroke_opacity: if selected { 0.15 } else { 0.06 },
            foreground_color,
            shadow_opacity,
            shadow_radius: if selected { 12.0 } else { 8.0 },
            shadow_offset_y: if selected { 5.0 } else { 2.0 },
            scale: if self.pressed { 0.98 } else { 1.0 },
        }
    }
}
