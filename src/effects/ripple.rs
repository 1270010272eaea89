//! Ripples over a text surface.

use super::scheduler::{Scheduler, TimerQueue};
use super::{Effect, EffectId, EffectKind, EffectLayer, Position};
use crate::constants::{RIPPLE_LIFETIME_MS, RIPPLE_SPAWN_THRESHOLD};
use crate::utils::time::Millis;
use std::collections::VecDeque;

/// Source of uniform random numbers in `[0, 1)`
pub trait Chance: Send {
    fn roll(&mut self) -> f64;
}

/// Production randomness backed by `fastrand`
#[derive(Debug, Default)]
pub struct FastRandChance {
    rng: fastrand::Rng,
}

impl FastRandChance {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }
}

impl Chance for FastRandChance {
    fn roll(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Replays a fixed list of rolls, then keeps returning `0.0`
#[derive(Debug, Default, Clone)]
pub struct ScriptedChance {
    rolls: VecDeque<f64>,
}

impl ScriptedChance {
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

impl Chance for ScriptedChance {
    fn roll(&mut self) -> f64 {
        self.rolls.pop_front().unwrap_or(0.0)
    }
}

/// A text area that ripples when the pointer enters, clicks, or wanders over it.
///
/// Positions are relative to the surface origin. Movement spawns are random rather
/// than time-throttled: terminal mouse reports are already rate-limited, and a
/// random pick gives an irregular trail.
pub struct RippleSurface<S = TimerQueue> {
    layer: EffectLayer<S>,
    chance: Box<dyn Chance>,
    threshold: f64,
    hovered: bool,
}

impl<S: std::fmt::Debug> std::fmt::Debug for RippleSurface<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RippleSurface")
            .field("layer", &self.layer)
            .field("threshold", &self.threshold)
            .field("hovered", &self.hovered)
            .finish_non_exhaustive()
    }
}

impl Default for RippleSurface {
    fn default() -> Self {
        Self::new(Box::new(FastRandChance::new()))
    }
}

impl RippleSurface {
    pub fn new(chance: Box<dyn Chance>) -> Self {
        Self::with_scheduler(chance, TimerQueue::new())
    }
}

impl<S: Scheduler> RippleSurface<S> {
    pub fn with_scheduler(chance: Box<dyn Chance>, scheduler: S) -> Self {
        Self {
            layer: EffectLayer::with_scheduler(EffectKind::Ripple, RIPPLE_LIFETIME_MS, scheduler),
            chance,
            threshold: RIPPLE_SPAWN_THRESHOLD,
            hovered: false,
        }
    }

    /// Deliberate interaction (hover enter or click): always spawns
    pub fn on_pointer_enter_or_click(&mut self, position: Position, now: Millis) -> EffectId {
        self.layer.spawn(position, now)
    }

    /// Pointer movement over the surface: spawns only when the roll beats the threshold
    pub fn on_pointer_move_probabilistic(&mut self, position: Position, now: Millis) -> Option<EffectId> {
        if self.chance.roll() > self.threshold {
            Some(self.layer.spawn(position, now))
        } else {
            None
        }
    }

    /// Track hover state from raw pointer positions; spawns on the enter transition.
    ///
    /// Returns the id spawned by an enter or a successful movement roll.
    pub fn on_pointer_at(&mut self, position: Option<Position>, now: Millis) -> Option<EffectId> {
        match (self.hovered, position) {
            (false, Some(position)) => {
                self.hovered = true;
                Some(self.on_pointer_enter_or_click(position, now))
            }
            (true, Some(position)) => self.on_pointer_move_probabilistic(position, now),
            (_, None) => {
                self.hovered = false;
                None
            }
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
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

    /// Drop all ripples and forget hover, so the next pointer report counts as an enter
    pub fn clear(&mut self) {
        self.layer.clear();
        self.hovered = false;
    }
}
