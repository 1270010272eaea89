//! folio - A terminal portfolio showcase
//!
//! This library renders a filterable catalog of projects in the terminal, with
//! a detail modal for each entry and a handful of decorative pointer effects
//! (a cursor trail, header ripples and a pulsing scroll prompt) built with
//! Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`catalog`] - Catalog data, loading and the filter/selection controller
//! * [`config`] - Application configuration management
//! * [`effects`] - Time-bounded visual effects and their removal scheduling
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Clocks and time helpers

/// Catalog data model, built-in showcase and filter/selection state
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Transient visual effects with scheduled expiry
pub mod effects;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Clocks and millisecond time helpers
pub mod utils;

pub use catalog::{Catalog, CatalogController, CatalogError, CatalogItem, DismissReason, Selection};
pub use effects::{Effect, EffectKind, EffectLayer, Position};
