//! Transient visual effects.
//!
//! Effects are short-lived markers (trail pops, text ripples, idle pulses) that
//! appear in response to pointer input or a timer and disappear on their own after
//! a fixed lifetime. Every surface owns an [`EffectLayer`] holding its live effects
//! and a [`Scheduler`] that remembers when each one has to go.
//!
//! The surfaces differ only in *when* they spawn:
//!
//! - [`CursorTrail`] - time-throttled spawns on pointer movement, capped set
//! - [`RippleSurface`] - unconditional spawns on enter/click, random spawns on movement
//! - [`ScrollPulse`] - spawns on a fixed cadence with no input at all
//!
//! Nothing here touches a real clock. Callers pass the current time in, which keeps
//! every timing rule reproducible under a manual clock. Each surface also has a
//! `with_scheduler` constructor for swapping the removal queue.

pub mod layer;
pub mod pulse;
pub mod ripple;
pub mod scheduler;
pub mod trail;

pub use layer::EffectLayer;
pub use pulse::ScrollPulse;
pub use ripple::{Chance, FastRandChance, RippleSurface, ScriptedChance};
pub use scheduler::{Scheduler, TimerQueue};
pub use trail::CursorTrail;

use crate::utils::time::Millis;

/// Identity of a spawned effect, unique and never reused within a layer
pub type EffectId = u64;

/// A viewport coordinate (terminal column and row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// What kind of marker an effect is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Small pop left behind by the cursor
    Pop,
    /// Ripple spreading over a text surface
    Ripple,
    /// Ring emitted by the idle scroll prompt
    Pulse,
}

/// A single live effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub id: EffectId,
    pub kind: EffectKind,
    pub position: Position,
    pub created_at: Millis,
    pub expires_at: Millis,
}

impl Effect {
    /// Fraction of the lifetime already elapsed at `now`, clamped to `0.0..=1.0`
    pub fn progress(&self, now: Millis) -> f64 {
        let lifetime = self.expires_at.saturating_sub(self.created_at);
        if lifetime == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.created_at).min(lifetime);
        elapsed as f64 / lifetime as f64
    }

    /// False for effects scheduled to start later than `now`
    pub fn has_started(&self, now: Millis) -> bool {
        now >= self.created_at
    }

    pub fn is_expired(&self, now: Millis) -> bool {
        now >= self.expires_at
    }
}
