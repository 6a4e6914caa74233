//! Color theme for the Mello UI
//!
//! Defines the brand colors and the dark/light palettes selected by the
//! global [`ThemeMode`].

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

// ============================================================================
// Brand Colors
// ============================================================================

/// Mello purple, used for accents and focus
pub const COLOR_BRAND: Color = Color::Rgb(122, 60, 244); // #7A3CF4

/// Deep navy page background
pub const COLOR_NAVY: Color = Color::Rgb(20, 26, 42); // #141A2A

/// Raised card background on dark pages
pub const COLOR_SLATE: Color = Color::Rgb(39, 48, 67); // #273043

/// Muted body text on dark pages
pub const COLOR_MIST: Color = Color::Rgb(185, 194, 208); // #B9C2D0

// ============================================================================
// Status Colors
// ============================================================================

/// Success state - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Warning / needs practice - amber
pub const COLOR_WARNING: Color = Color::Rgb(245, 158, 11);

/// Recording / error state - red
pub const COLOR_RECORDING: Color = Color::Rgb(239, 68, 68);

/// Progress and highlight - sky blue
pub const COLOR_INFO: Color = Color::Rgb(56, 189, 248);

// ============================================================================
// Palettes
// ============================================================================

/// Global presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn palette(self) -> Palette {
        Palette::for_mode(self)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => f.write_str("dark"),
            ThemeMode::Light => f.write_str("light"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme '{other}', expected dark or light")),
        }
    }
}

/// Colors for one presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub focus: Color,
    pub success: Color,
    pub warning: Color,
    pub recording: Color,
    pub info: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: COLOR_NAVY,
        surface: COLOR_SLATE,
        text: Color::White,
        muted: COLOR_MIST,
        border: Color::Rgb(70, 80, 100),
        accent: COLOR_BRAND,
        focus: Color::Rgb(167, 139, 250),
        success: COLOR_SUCCESS,
        warning: COLOR_WARNING,
        recording: COLOR_RECORDING,
        info: COLOR_INFO,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 250, 252),
        surface: Color::White,
        text: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        border: Color::Rgb(203, 213, 225),
        accent: COLOR_BRAND,
        focus: Color::Rgb(109, 40, 217),
        success: Color::Rgb(22, 163, 74),
        warning: Color::Rgb(217, 119, 6),
        recording: Color::Rgb(220, 38, 38),
        info: Color::Rgb(2, 132, 199),
    };

    pub fn for_mode(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => Self::DARK,
            ThemeMode::Light => Self::LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(" dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("purple".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(ThemeMode::Dark.palette().background, ThemeMode::Light.palette().background);
        assert_eq!(ThemeMode::Light.palette().accent, COLOR_BRAND);
    }
}
