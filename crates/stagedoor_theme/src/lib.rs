//! Stagedoor Theme System
//!
//! Site-wide visual presentation as a closed set of variants, each bundling
//! a color palette and a font pairing.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: the four semantic colors and two font families every
//!   component styles itself from
//! - **Variants**: the three fixed presentations (atmospheric, raw, modern)
//! - **Style propagation**: each variant's tokens pushed into a shared
//!   style-variable scope that mounted components re-derive from
//!
//! # Quick Start
//!
//! ```rust
//! use stagedoor_core::MemoryStorage;
//! use stagedoor_theme::{style_vars, ThemeStore, ThemeVariant};
//!
//! let theme = ThemeStore::load(MemoryStorage::shared(), "underground-theme");
//! assert_eq!(theme.variant(), ThemeVariant::Atmospheric);
//!
//! theme.set_variant(ThemeVariant::Raw);
//! assert_eq!(
//!     theme.style_value(style_vars::ACCENT_PRIMARY).as_deref(),
//!     Some("#b8860b")
//! );
//! ```
//!
//! # Determinism
//!
//! A variant always maps to exactly the same [`ThemeConfig`]; switching is
//! idempotent, and an unrecognized persisted variant falls back to the
//! default on load.

pub mod store;
pub mod tokens;
pub mod variants;

pub use store::{style_vars, StyleScope, ThemeStore};
pub use tokens::{ColorToken, ColorTokens, FontToken, TypographyTokens};
pub use variants::{ThemeConfig, ThemeVariant};
