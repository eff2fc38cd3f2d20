//! Typography tokens for theming

/// Font token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontToken {
    /// Headings
    Header,
    /// Running text
    Body,
}

/// Font families for a presentation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypographyTokens {
    pub header_font: &'static str,
    pub body_font: &'static str,
}

impl TypographyTokens {
    /// Get a font family by token key
    pub fn get(&self, token: FontToken) -> &'static str {
        match token {
            FontToken::Header => self.header_font,
            FontToken::Body => self.body_font,
        }
    }
}
