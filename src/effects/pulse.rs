//! Idle pulse emitted by the scroll prompt.

use super::scheduler::{Scheduler, TimerQueue};
use super::{Effect, EffectId, EffectKind, EffectLayer, Position};
use crate::constants::{PULSE_BURST_SIZE, PULSE_BURST_STAGGER_MS, PULSE_CADENCE_MS, PULSE_LIFETIME_MS};
use crate::utils::time::Millis;

/// Ambient ripple indicator that animates without any input.
///
/// `tick` spawns one ring per elapsed cadence window. Windows missed while the
/// loop was stalled are skipped, never replayed in bulk.
#[derive(Debug)]
pub struct ScrollPulse<S = TimerQueue> {
    layer: EffectLayer<S>,
    cadence: Millis,
    next_due: Option<Millis>,
    origin: Position,
    visible: bool,
}

impl Default for ScrollPulse {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPulse {
    pub fn new() -> Self {
        Self::with_timing(PULSE_CADENCE_MS, PULSE_LIFETIME_MS)
    }

    pub fn with_timing(cadence: Millis, lifetime: Millis) -> Self {
        Self::with_scheduler(cadence, lifetime, TimerQueue::new())
    }
}

impl<S: Scheduler> ScrollPulse<S> {
    /// Build a pulse whose removals go through `scheduler`
    pub fn with_scheduler(cadence: Millis, lifetime: Millis, scheduler: S) -> Self {
        Self {
            layer: EffectLayer::with_scheduler(EffectKind::Pulse, lifetime, scheduler),
            cadence: cadence.max(1),
            next_due: None,
            origin: Position::default(),
            visible: true,
        }
    }

    /// Advance the cadence; spawns a ring when a window has elapsed
    pub fn tick(&mut self, now: Millis) -> Option<EffectId> {
        let due = match self.next_due {
            Some(due) => due,
            None => {
                self.next_due = Some(now.saturating_add(self.cadence));
                return None;
            }
        };

        if now < due {
            return None;
        }

        let missed = (now - due) / self.cadence;
        self.next_due = Some(due.saturating_add((missed + 1).saturating_mul(self.cadence)));
        Some(self.layer.spawn(self.origin, now))
    }

    /// Several rings in quick succession, used when the prompt is clicked.
    ///
    /// Ring `i` starts `i * PULSE_BURST_STAGGER_MS` after `now` and keeps its full
    /// lifetime from there. Rings that have not started yet are not drawn.
    pub fn burst(&mut self, now: Millis) -> Vec<EffectId> {
        (0..PULSE_BURST_SIZE as u64)
            .map(|i| {
                let start = now.saturating_add(i * PULSE_BURST_STAGGER_MS);
                self.layer.spawn(self.origin, start)
            })
            .collect()
    }

    /// Where new rings are centred
    pub fn set_origin(&mut self, origin: Position) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// The prompt shows only while the content is scrolled less than `threshold` rows
    pub fn update_visibility(&mut self, scroll_offset: usize, threshold: usize) {
        self.visible = scroll_offset < threshold;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
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
}
