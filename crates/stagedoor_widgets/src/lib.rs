//! Stagedoor Widgets
//!
//! The interactive pieces of the site core:
//!
//! - [`EditableText`]: one editable content slot, Viewing ⇄ Editing
//! - [`ThemeSwitcher`]: lists variants and switches the theme store
//! - [`AdminPanel`]: login flow, edit-mode toggle, logout
//!
//! Widgets hold shared handles to the stores they consume; stores are
//! injected at construction rather than reached through ambient globals.

pub mod admin_panel;
pub mod editable_text;
pub mod theme_switcher;

pub use admin_panel::{AdminPanel, PanelView};
pub use editable_text::{EditableText, RenderedField, TextTag};
pub use theme_switcher::{SwitcherOption, ThemeSwitcher};
