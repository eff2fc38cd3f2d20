//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a presentation:
//! - Colors (background, text, accent, secondary)
//! - Typography (header and body font families)

mod color;
mod typography;

pub use color::*;
pub use typography::*;
