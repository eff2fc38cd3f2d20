//! Color tokens for theming

use stagedoor_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Primary page background
    Background,
    /// Primary text color
    Text,
    /// Accent used for affordances, borders, highlights
    Accent,
    /// Secondary surfaces (panels, inputs)
    Secondary,
}

/// Complete set of semantic color tokens
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTokens {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub secondary: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Text => self.text,
            ColorToken::Accent => self.accent,
            ColorToken::Secondary => self.secondary,
        }
    }
}
