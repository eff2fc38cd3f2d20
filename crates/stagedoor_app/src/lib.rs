//! Stagedoor Application Layer
//!
//! Wires the content, session, and theme stores into one [`SiteContext`],
//! seeds the compiled-in default content, and drives the whole core through
//! JSON scenarios for headless diagnostics.
//!
//! # Example
//!
//! ```rust
//! use stagedoor_app::prelude::*;
//! use stagedoor_core::MemoryStorage;
//!
//! let ctx = SiteContext::with_defaults(MemoryStorage::shared());
//! assert_eq!(ctx.content.resolve("hero-title"), "CRIMSON THRONE");
//! assert_eq!(ctx.theme.variant(), ThemeVariant::Atmospheric);
//! ```

pub mod config;
pub mod context;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod seed;

pub use config::{RecordKeys, SiteConfig};
pub use context::SiteContext;
pub use report::{ScenarioReport, StepFailure};
pub use runner::{RunOutcome, ScenarioRunner};
pub use scenario::{Scenario, ScenarioError, ScenarioStep};
pub use seed::{reset, seed_defaults, seed_status, verify_seed, SeedStatus};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::{RecordKeys, SiteConfig};
    pub use crate::context::SiteContext;
    pub use crate::runner::{RunOutcome, ScenarioRunner};
    pub use crate::scenario::Scenario;
    pub use crate::seed::{seed_defaults, verify_seed};

    // Core types
    pub use stagedoor_content::{AdminSession, ContentStore};
    pub use stagedoor_theme::{ThemeStore, ThemeVariant};
    pub use stagedoor_widgets::EditableText;
}
