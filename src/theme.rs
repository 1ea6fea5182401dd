//! Color themes
//!
//! A theme only changes what the renderer paints; physics never reads it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rgb;

/// Closed set of selectable themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Nature,
    Sunset,
    Purple,
    Dark,
}

impl ThemeName {
    pub const ALL: [ThemeName; 5] = [
        ThemeName::Default,
        ThemeName::Nature,
        ThemeName::Sunset,
        ThemeName::Purple,
        ThemeName::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Default => "default",
            ThemeName::Nature => "nature",
            ThemeName::Sunset => "sunset",
            ThemeName::Purple => "purple",
            ThemeName::Dark => "dark",
        }
    }

    /// Palette for this theme
    pub fn theme(&self) -> &'static Theme {
        match self {
            ThemeName::Default => &DEFAULT,
            ThemeName::Nature => &NATURE,
            ThemeName::Sunset => &SUNSET,
            ThemeName::Purple => &PURPLE,
            ThemeName::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a theme name is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Palette: sky gradient stops, avatar, obstacle and ground colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Top and bottom of the sky gradient
    pub sky: [[f32; 4]; 2],
    pub bird: [f32; 4],
    pub pipe: [f32; 4],
    pub ground: [f32; 4],
}

impl Theme {
    pub fn get(name: ThemeName) -> &'static Theme {
        name.theme()
    }
}

const DEFAULT: Theme = Theme {
    sky: [rgb(0x56ccf2), rgb(0x2f80ed)],
    bird: rgb(0xffdd59),
    pipe: rgb(0x2ecc71),
    ground: rgb(0x5a3921),
};

const NATURE: Theme = Theme {
    sky: [rgb(0xa8ff78), rgb(0x78ffd6)],
    bird: rgb(0xff9a00),
    pipe: rgb(0x00b09b),
    ground: rgb(0x3a5a40),
};

const SUNSET: Theme = Theme {
    sky: [rgb(0xff416c), rgb(0xff4b2b)],
    bird: rgb(0xfff700),
    pipe: rgb(0xff7b00),
    ground: rgb(0x5d2906),
};

const PURPLE: Theme = Theme {
    sky: [rgb(0x8e2de2), rgb(0x4a00e0)],
    bird: rgb(0xf9d423),
    pipe: rgb(0x00d2ff),
    ground: rgb(0x2c003e),
};

const DARK: Theme = Theme {
    sky: [rgb(0x000000), rgb(0x434343)],
    bird: rgb(0xf9d423),
    pipe: rgb(0x575757),
    ground: rgb(0x1a1a1a),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for name in ThemeName::ALL {
            assert_eq!(name.as_str().parse::<ThemeName>(), Ok(name));
        }
    }

    #[test]
    fn test_unknown_theme() {
        let err = "neon".parse::<ThemeName>().unwrap_err();
        assert_eq!(err, UnknownTheme("neon".to_string()));
    }

    #[test]
    fn test_palettes_are_distinct() {
        assert_ne!(Theme::get(ThemeName::Default), Theme::get(ThemeName::Dark));
        assert_eq!(Theme::get(ThemeName::Dark).sky[0], [0.0, 0.0, 0.0, 1.0]);
    }
}
