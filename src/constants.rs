//! Constants used throughout the application
//!
//! This module centralizes effect timings, UI text, and other constant values
//! to improve maintainability and consistency.

use crate::utils::time::Millis;

// Cursor trail
/// Minimum time between two trail spawns
pub const TRAIL_MIN_INTERVAL_MS: Millis = 80;
/// Lifetime of a trail pop
pub const TRAIL_LIFETIME_MS: Millis = 600;
/// Maximum number of live trail pops
pub const TRAIL_MAX_ACTIVE: usize = 10;

// Ripple surface
/// Lifetime of a ripple spawned on a text surface
pub const RIPPLE_LIFETIME_MS: Millis = 1000;
/// A roll above this value spawns a ripple on pointer movement
pub const RIPPLE_SPAWN_THRESHOLD: f64 = 0.85;

// Scroll prompt pulse
/// Cadence of the idle pulse
pub const PULSE_CADENCE_MS: Millis = 1500;
/// Lifetime of a single pulse ring
pub const PULSE_LIFETIME_MS: Millis = 2000;
/// Rings spawned when the prompt is clicked
pub const PULSE_BURST_SIZE: usize = 3;
/// Delay between the start of consecutive burst rings
pub const PULSE_BURST_STAGGER_MS: Millis = 400;

// Toast
/// Default time a toast stays on screen
pub const TOAST_DEFAULT_MS: Millis = 2000;

// Catalog
/// Filter key that matches every item
pub const FILTER_ALL: &str = "all";

// Header copy
pub const HEADER_NAME: &str = "Neha";
pub const HEADER_TAGLINE: &str = "AI engineer building LLM systems and data pipelines";
pub const SECTION_TITLE_WORK: &str = "Selected Work";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const TOAST_NO_LINK: &str = "No public link for this project";
pub const TOAST_NO_PROJECT: &str = "No project under the cursor";
pub const SCROLL_PROMPT_TEXT: &str = "Scroll down";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc', '?' or 'q' to close";

// UI Layout Constants
/// Height of the header strip (name + tagline, with borders)
pub const HEADER_HEIGHT: u16 = 4;
/// Height of the filter bar
pub const FILTER_BAR_HEIGHT: u16 = 3;
/// Height of the scroll prompt strip
pub const SCROLL_PROMPT_HEIGHT: u16 = 3;
/// Modal width as a percentage of the screen
pub const MODAL_WIDTH_PERCENT: u16 = 70;
/// Modal height as a percentage of the screen
pub const MODAL_HEIGHT_PERCENT: u16 = 80;
/// Maximum number of in-memory log lines kept for the logs dialog
pub const LOG_HISTORY_LIMIT: usize = 500;
