//! Live effect set with timed removal.

use super::scheduler::{Scheduler, TimerQueue};
use super::{Effect, EffectId, EffectKind, Position};
use crate::utils::time::Millis;

/// The set of currently visible effects of one kind.
///
/// Effects are kept in spawn order, which is also the render order. Each spawn
/// schedules its own removal; removal is keyed by id and tolerates ids that are
/// already gone (dropped by the cap or cleared on teardown).
#[derive(Debug)]
pub struct EffectLayer<S = TimerQueue> {
    kind: EffectKind,
    lifetime: Millis,
    cap: Option<usize>,
    active: Vec<Effect>,
    next_id: EffectId,
    scheduler: S,
}

impl EffectLayer<TimerQueue> {
    pub fn new(kind: EffectKind, lifetime: Millis) -> Self {
        Self::with_scheduler(kind, lifetime, TimerQueue::new())
    }
}

impl<S: Scheduler> EffectLayer<S> {
    pub fn with_scheduler(kind: EffectKind, lifetime: Millis, scheduler: S) -> Self {
        Self {
            kind,
            lifetime,
            cap: None,
            active: Vec::new(),
            next_id: 0,
            scheduler,
        }
    }

    /// Keep at most `cap` effects, dropping the oldest first
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn lifetime(&self) -> Millis {
        self.lifetime
    }

    /// Spawn an effect at `position` and schedule its removal
    pub fn spawn(&mut self, position: Position, now: Millis) -> EffectId {
        let id = self.next_id;
        self.next_id += 1;

        let expires_at = now.saturating_add(self.lifetime);
        self.active.push(Effect {
            id,
            kind: self.kind,
            position,
            created_at: now,
            expires_at,
        });

        if let Some(cap) = self.cap {
            if self.active.len() > cap {
                let overflow = self.active.len() - cap;
                self.active.drain(..overflow);
            }
        }

        self.scheduler.schedule(expires_at, id);
        id
    }

    /// Remove an effect by id; returns `false` if it was already gone
    pub fn remove(&mut self, id: EffectId) -> bool {
        match self.active.iter().position(|effect| effect.id == id) {
            Some(index) => {
                self.active.remove(index);
                true
            }
            None => false,
        }
    }

    /// Fire every removal due at `now`; returns how many effects actually went away
    pub fn advance(&mut self, now: Millis) -> usize {
        let due = self.scheduler.take_due(now);
        due.into_iter().filter(|id| self.remove(*id)).count()
    }

    /// Current effects as seen at `now`
    pub fn snapshot(&mut self, now: Millis) -> &[Effect] {
        self.advance(now);
        &self.active
    }

    /// Current effects without advancing time
    pub fn effects(&self) -> &[Effect] {
        &self.active
    }

    pub fn contains(&self, id: EffectId) -> bool {
        self.active.iter().any(|effect| effect.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drop every live effect. Pending removals stay scheduled and fire as no-ops.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn pending_removals(&self) -> usize {
        self.scheduler.pending()
    }
}
