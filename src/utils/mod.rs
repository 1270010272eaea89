//! Utility modules for the folio application.
//!
//! - [`time`] - Clocks and millisecond timestamps used by effects and the event loop

pub mod time;
