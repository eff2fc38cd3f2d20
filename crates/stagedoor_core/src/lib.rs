//! Stagedoor Core Runtime
//!
//! This crate provides the foundational primitives for the stagedoor site kit:
//!
//! - **Colors**: a small color value type shared by the theme tokens
//! - **Events**: platform-agnostic input events consumed by the widgets
//! - **State Machines**: flat statecharts for widget interaction states
//! - **Storage**: the durable key-value abstraction behind every store
//! - **Notify**: subscriber registries for store change propagation
//!
//! # Example
//!
//! ```rust
//! use stagedoor_core::fsm::{StateMachine, Transition};
//!
//! const VIEWING: u32 = 0;
//! const EDITING: u32 = 1;
//! const ACTIVATE: u32 = 1;
//!
//! let mut field = StateMachine::new(
//!     VIEWING,
//!     vec![Transition::new(VIEWING, ACTIVATE, EDITING)],
//! );
//!
//! field.send(ACTIVATE);
//! assert_eq!(field.current_state(), EDITING);
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod notify;
pub mod storage;

pub use color::Color;
pub use events::{Event, EventData, EventType, KeyCode};
pub use fsm::{FsmId, FsmRuntime, StateId, StateMachine, Transition};
pub use notify::{SubscriptionId, Subscribers};
pub use storage::{FileStorage, MemoryStorage, SharedStorage, Storage, StorageError};
