//! Core UI functionality for folio.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the actions components exchange, the component trait itself and the event
//! source feeding the run loop.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and hit-testing helper
//! - [`event_handler`] - Terminal input polling and frame ticks
//!
//! # Architecture
//!
//! 1. **Events** come from the [`EventHandler`] as keys, mouse input, resizes or ticks
//! 2. **Components** implement [`Component`] and turn events into [`Action`]s
//! 3. **Actions** pass through every component's `update` before the app applies
//!    whatever is left

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::{contains, Component};
pub use event_handler::{EventHandler, EventType};
