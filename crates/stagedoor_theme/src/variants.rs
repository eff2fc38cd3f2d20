//! The three fixed presentations
//!
//! The variant set is closed: every variant id maps to exactly one static
//! [`ThemeConfig`], and nothing at runtime can extend the catalog.

use std::fmt::{Display, Formatter};

use crate::tokens::{ColorTokens, TypographyTokens};

/// The fixed variant catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    /// Black-on-black with deep red accents, ceremonial serifs
    Atmospheric,
    /// Charcoal with old-gold accents, poster lettering
    Raw,
    /// Graphite with royal-blue accents, geometric sans
    Modern,
}

impl ThemeVariant {
    /// The variant adopted when storage is empty or unrecognized
    pub const DEFAULT: ThemeVariant = ThemeVariant::Atmospheric;

    /// Stable variant id for persistence
    pub fn id(self) -> &'static str {
        match self {
            Self::Atmospheric => "atmospheric",
            Self::Raw => "raw",
            Self::Modern => "modern",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Atmospheric => "Atmospheric",
            Self::Raw => "Raw",
            Self::Modern => "Modern",
        }
    }

    /// Full variant list
    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 3] = [
            ThemeVariant::Atmospheric,
            ThemeVariant::Raw,
            ThemeVariant::Modern,
        ];
        &VARIANTS
    }

    /// Parse a persisted id; `None` for anything outside the catalog
    pub fn from_id(id: &str) -> Option<ThemeVariant> {
        match id {
            "atmospheric" => Some(Self::Atmospheric),
            "raw" => Some(Self::Raw),
            "modern" => Some(Self::Modern),
            _ => None,
        }
    }

    /// The static config for this variant
    pub fn config(self) -> &'static ThemeConfig {
        match self {
            Self::Atmospheric => &ATMOSPHERIC,
            Self::Raw => &RAW,
            Self::Modern => &MODERN,
        }
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One variant's complete presentation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeConfig {
    pub variant: ThemeVariant,
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
}

mod palette {
    use stagedoor_core::Color;

    // Atmospheric: #000000 / #FFFFFF / #8B0000 / #1a1a1a
    pub const ATMOSPHERIC_BACKGROUND: Color = Color::BLACK;
    pub const ATMOSPHERIC_TEXT: Color = Color::WHITE;
    pub const ATMOSPHERIC_ACCENT: Color = Color::rgb(139.0 / 255.0, 0.0, 0.0);
    pub const ATMOSPHERIC_SECONDARY: Color =
        Color::rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0);

    // Raw: #1a1a1a / #f5f5f5 / #b8860b / #2d2d2d
    pub const RAW_BACKGROUND: Color = Color::rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0);
    pub const RAW_TEXT: Color = Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
    pub const RAW_ACCENT: Color = Color::rgb(184.0 / 255.0, 134.0 / 255.0, 11.0 / 255.0);
    pub const RAW_SECONDARY: Color = Color::rgb(45.0 / 255.0, 45.0 / 255.0, 45.0 / 255.0);

    // Modern: #2f2f2f / #ffffff / #4169e1 / #4a4a4a
    pub const MODERN_BACKGROUND: Color = Color::rgb(47.0 / 255.0, 47.0 / 255.0, 47.0 / 255.0);
    pub const MODERN_TEXT: Color = Color::WHITE;
    pub const MODERN_ACCENT: Color = Color::rgb(65.0 / 255.0, 105.0 / 255.0, 225.0 / 255.0);
    pub const MODERN_SECONDARY: Color = Color::rgb(74.0 / 255.0, 74.0 / 255.0, 74.0 / 255.0);
}

static ATMOSPHERIC: ThemeConfig = ThemeConfig {
    variant: ThemeVariant::Atmospheric,
    colors: ColorTokens {
        background: palette::ATMOSPHERIC_BACKGROUND,
        text: palette::ATMOSPHERIC_TEXT,
        accent: palette::ATMOSPHERIC_ACCENT,
        secondary: palette::ATMOSPHERIC_SECONDARY,
    },
    typography: TypographyTokens {
        header_font: "Cinzel",
        body_font: "Inter",
    },
};

static RAW: ThemeConfig = ThemeConfig {
    variant: ThemeVariant::Raw,
    colors: ColorTokens {
        background: palette::RAW_BACKGROUND,
        text: palette::RAW_TEXT,
        accent: palette::RAW_ACCENT,
        secondary: palette::RAW_SECONDARY,
    },
    typography: TypographyTokens {
        header_font: "Creepster",
        body_font: "Oswald",
    },
};

static MODERN: ThemeConfig = ThemeConfig {
    variant: ThemeVariant::Modern,
    colors: ColorTokens {
        background: palette::MODERN_BACKGROUND,
        text: palette::MODERN_TEXT,
        accent: palette::MODERN_ACCENT,
        secondary: palette::MODERN_SECONDARY,
    },
    typography: TypographyTokens {
        header_font: "Orbitron",
        body_font: "Source Sans Pro",
    },
};
