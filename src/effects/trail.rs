//! Cursor trail: pops left behind while the pointer moves.

use super::scheduler::{Scheduler, TimerQueue};
use super::{Effect, EffectId, EffectKind, EffectLayer, Position};
use crate::constants::{TRAIL_LIFETIME_MS, TRAIL_MAX_ACTIVE, TRAIL_MIN_INTERVAL_MS};
use crate::utils::time::Millis;

/// Time-throttled trail of pops following the pointer.
///
/// Movement closer than `min_interval` to the previous spawn is silently ignored.
/// The live set is capped so a stalled removal timer cannot grow it without bound.
#[derive(Debug)]
pub struct CursorTrail<S = TimerQueue> {
    layer: EffectLayer<S>,
    min_interval: Millis,
    last_spawn: Option<Millis>,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::with_timing(TRAIL_MIN_INTERVAL_MS, TRAIL_LIFETIME_MS, TRAIL_MAX_ACTIVE)
    }

    pub fn with_timing(min_interval: Millis, lifetime: Millis, max_active: usize) -> Self {
        Self::with_scheduler(min_interval, lifetime, max_active, TimerQueue::new())
    }
}

impl<S: Scheduler> CursorTrail<S> {
    /// Build a trail whose removals go through `scheduler`
    pub fn with_scheduler(min_interval: Millis, lifetime: Millis, max_active: usize, scheduler: S) -> Self {
        Self {
            layer: EffectLayer::with_scheduler(EffectKind::Pop, lifetime, scheduler).with_cap(max_active),
            min_interval,
            last_spawn: None,
        }
    }

    /// Pointer moved to `position` at `now`; returns the spawned pop, if any
    pub fn on_pointer_move(&mut self, position: Position, now: Millis) -> Option<EffectId> {
        if let Some(last) = self.last_spawn {
            if now.saturating_sub(last) < self.min_interval {
                return None;
            }
        }

        self.last_spawn = Some(now);
        Some(self.layer.spawn(position, now))
    }

    pub fn advance(&mut self, now: Millis) -> usize {
        self.layer.advance(now)
    }

    pub fn snapshot(&mut self, now: Millis) -> &[Effect] {
        self.layer.snapshot(now)
    }

    pub fn effects(&self) -> &[Effect] {
        self.layer.effects()
    }

    pub fn len(&self) -> usize {
        self.layer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layer.is_empty()
    }

    /// Drop all pops and forget the throttle window, e.g. when the terminal loses focus
    pub fn clear(&mut self) {
        self.layer.clear();
        self.last_spawn = None;
    }
}
