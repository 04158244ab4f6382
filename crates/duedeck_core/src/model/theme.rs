//! Visual theme settings model.
//!
//! # Responsibility
//! - Define the persisted theming state (dark mode, named theme, custom
//!   theme) as typed data the UI collaborator renders from.
//! - Validate custom theme payloads before they are persisted.
//!
//! # Invariants
//! - `CustomTheme` is a closed tagged union; decoding uses exhaustive
//!   matching, never field probing.
//! - Colors are `#rrggbb` hex strings.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Fixed named background themes selectable from the color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedTheme {
    Purple,
    Pink,
    Blue,
    Green,
    Orange,
    Teal,
    Dark,
    Sunset,
}

impl NamedTheme {
    /// All selectable themes in palette order.
    pub const ALL: [Self; 8] = [
        Self::Purple,
        Self::Pink,
        Self::Blue,
        Self::Green,
        Self::Orange,
        Self::Teal,
        Self::Dark,
        Self::Sunset,
    ];

    /// Stable key used in the persisted `selectedTheme` value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Purple => "purple",
            Self::Pink => "pink",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Teal => "teal",
            Self::Dark => "dark",
            Self::Sunset => "sunset",
        }
    }

    /// Parses a persisted theme key.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "purple" => Some(Self::Purple),
            "pink" => Some(Self::Pink),
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "orange" => Some(Self::Orange),
            "teal" => Some(Self::Teal),
            "dark" => Some(Self::Dark),
            "sunset" => Some(Self::Sunset),
            _ => None,
        }
    }

    /// CSS background gradient the UI applies for this theme.
    pub fn gradient_css(self) -> &'static str {
        match self {
            Self::Purple => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Self::Pink => "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
            Self::Blue => "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
            Self::Green => "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
            Self::Orange => "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
            Self::Teal => "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
            Self::Dark => "linear-gradient(135deg, #2D1B69 0%, #11998e 100%)",
            Self::Sunset => "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
        }
    }
}

/// User-authored background, persisted under the `customTheme` key.
///
/// The wire shape keeps the historical `type` discriminator and camelCase
/// field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CustomTheme {
    /// Two-stop linear gradient at a fixed angle.
    Gradient {
        color1: String,
        color2: String,
        angle: u16,
    },
    /// Single solid background color.
    Solid { color: String },
    /// Background image with a darkening overlay.
    Image {
        #[serde(rename = "imageUrl")]
        image_url: String,
        /// Overlay strength in `0.0..=1.0`.
        opacity: f32,
    },
}

/// Validation error for custom theme payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    /// Color is not a `#rrggbb` hex string.
    InvalidColor(String),
    /// Gradient angle is outside `0..=360` degrees.
    InvalidAngle(u16),
    /// Image overlay opacity is outside `0.0..=1.0`.
    InvalidOpacity(f32),
    /// Image URL is empty.
    EmptyImageUrl,
}

impl std::fmt::Display for ThemeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColor(value) => write!(f, "invalid theme color `{value}`"),
            Self::InvalidAngle(value) => write!(f, "gradient angle {value} exceeds 360 degrees"),
            Self::InvalidOpacity(value) => {
                write!(f, "image overlay opacity {value} is outside 0.0..=1.0")
            }
            Self::EmptyImageUrl => write!(f, "image theme requires a non-empty URL"),
        }
    }
}

impl std::error::Error for ThemeValidationError {}

impl CustomTheme {
    /// Checks payload fields before persistence.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        match self {
            Self::Gradient {
                color1,
                color2,
                angle,
            } => {
                validate_color(color1)?;
                validate_color(color2)?;
                if *angle > 360 {
                    return Err(ThemeValidationError::InvalidAngle(*angle));
                }
                Ok(())
            }
            Self::Solid { color } => validate_color(color),
            Self::Image { image_url, opacity } => {
                if image_url.trim().is_empty() {
                    return Err(ThemeValidationError::EmptyImageUrl);
                }
                if !(0.0..=1.0).contains(opacity) {
                    return Err(ThemeValidationError::InvalidOpacity(*opacity));
                }
                Ok(())
            }
        }
    }
}

fn validate_color(value: &str) -> Result<(), ThemeValidationError> {
    if HEX_COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(ThemeValidationError::InvalidColor(value.to_string()))
    }
}

/// Snapshot of all persisted theming state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeSettings {
    pub dark_mode: bool,
    pub selected_theme: Option<NamedTheme>,
    pub custom_theme: Option<CustomTheme>,
}
