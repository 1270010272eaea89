use folio::effects::{
    CursorTrail, EffectId, EffectKind, EffectLayer, Position, RippleSurface, Scheduler, ScriptedChance, ScrollPulse,
    TimerQueue,
};
use folio::utils::time::{Clock, ManualClock, Millis};

/// Keeps every removal it is handed and never releases any
#[derive(Debug, Default)]
struct RecordingScheduler {
    scheduled: Vec<(Millis, EffectId)>,
}

impl Scheduler for RecordingScheduler {
    fn schedule(&mut self, due: Millis, id: EffectId) {
        self.scheduled.push((due, id));
    }

    fn take_due(&mut self, _now: Millis) -> Vec<EffectId> {
        Vec::new()
    }

    fn pending(&self) -> usize {
        self.scheduled.len()
    }
}

fn at(x: u16, y: u16) -> Position {
    Position::new(x, y)
}

#[test]
fn test_spaced_moves_grow_until_cap() {
    let mut trail = CursorTrail::new();

    for step in 0..15u64 {
        let before = trail.len();
        let spawned = trail.on_pointer_move(at(step as u16, 0), step * 80);
        assert!(spawned.is_some(), "move {} should not be throttled", step);
        assert_eq!(trail.len(), (before + 1).min(10));
    }
}

#[test]
fn test_close_moves_are_throttled() {
    let mut trail = CursorTrail::new();
    trail.on_pointer_move(at(0, 0), 1000);
    let snapshot: Vec<_> = trail.effects().to_vec();

    for now in [1001, 1040, 1079] {
        assert!(trail.on_pointer_move(at(5, 5), now).is_none());
        assert_eq!(trail.effects(), snapshot.as_slice());
    }

    // Exactly at the interval the move counts again
    assert!(trail.on_pointer_move(at(5, 5), 1080).is_some());
    assert_eq!(trail.len(), 2);
}

#[test]
fn test_throttle_measures_from_last_spawn_not_last_move() {
    let mut trail = CursorTrail::new();
    trail.on_pointer_move(at(0, 0), 0);
    // A stream of ignored moves does not push the window forward
    for now in (10..80).step_by(10) {
        trail.on_pointer_move(at(1, 1), now);
    }
    assert!(trail.on_pointer_move(at(2, 2), 80).is_some());
}

#[test]
fn test_pop_lives_exactly_its_lifetime() {
    let mut trail = CursorTrail::new();
    trail.on_pointer_move(at(3, 4), 0);

    assert_eq!(trail.snapshot(0).len(), 1);
    assert_eq!(trail.snapshot(599).len(), 1);
    assert!(trail.snapshot(600).is_empty());
    assert!(trail.snapshot(10_000).is_empty());
}

#[test]
fn test_presence_window_for_staggered_spawns() {
    let clock = ManualClock::new(0);
    let mut trail = CursorTrail::new();

    let mut spawned = Vec::new();
    for _ in 0..5 {
        let now = clock.now();
        let id = trail.on_pointer_move(at(0, 0), now).unwrap();
        spawned.push((id, now));
        clock.advance(100);
    }

    for read_at in (0..1200).step_by(25) {
        let live: Vec<u64> = trail.snapshot(read_at).iter().map(|e| e.id).collect();
        for (id, created) in &spawned {
            let expected = read_at >= *created && read_at < created + 600;
            // Reads are monotonic, so an effect that has gone never comes back
            if read_at >= *created {
                assert_eq!(live.contains(id), expected, "effect {} at t={}", id, read_at);
            }
        }
    }
}

#[test]
fn test_removal_of_one_effect_leaves_the_rest() {
    let mut layer = EffectLayer::new(EffectKind::Ripple, 1000);
    let a = layer.spawn(at(0, 0), 0);
    let b = layer.spawn(at(1, 0), 0);
    let c = layer.spawn(at(2, 0), 0);

    assert!(layer.remove(b));
    assert!(!layer.remove(b));
    assert!(layer.contains(a));
    assert!(layer.contains(c));

    // b's timer still fires later; it must be a harmless no-op
    assert_eq!(layer.advance(1000), 2);
    assert!(layer.is_empty());
}

#[test]
fn test_cap_drops_oldest_and_their_timers_noop() {
    let mut layer = EffectLayer::new(EffectKind::Pop, 600).with_cap(3);
    let ids: Vec<_> = (0..5).map(|i| layer.spawn(at(i, 0), i as u64)).collect();

    let live: Vec<_> = layer.effects().iter().map(|e| e.id).collect();
    assert_eq!(live, ids[2..].to_vec());
    assert_eq!(layer.pending_removals(), 5);

    // The timers of the two dropped pops fire first and remove nothing
    assert_eq!(layer.advance(601), 0);
    assert_eq!(layer.len(), 3);
    assert_eq!(layer.advance(604), 3);
}

#[test]
fn test_clear_leaves_timers_harmless() {
    let mut layer = EffectLayer::new(EffectKind::Pop, 600);
    layer.spawn(at(0, 0), 0);
    layer.spawn(at(0, 0), 10);
    layer.clear();

    assert!(layer.is_empty());
    assert_eq!(layer.advance(10_000), 0);
    assert_eq!(layer.pending_removals(), 0);
}

#[test]
fn test_timer_queue_orders_by_due_time() {
    let mut queue = TimerQueue::new();
    queue.schedule(300, 1);
    queue.schedule(100, 2);
    queue.schedule(200, 3);
    queue.schedule(100, 4);

    assert_eq!(queue.next_due(), Some(100));
    assert_eq!(queue.take_due(99), Vec::<u64>::new());
    assert_eq!(queue.take_due(200), vec![2, 4, 3]);
    assert_eq!(queue.pending(), 1);
}

#[test]
fn test_ripple_enter_and_click_are_unconditional() {
    let mut surface = RippleSurface::new(Box::new(ScriptedChance::new([])));
    surface.on_pointer_enter_or_click(at(1, 1), 0);
    surface.on_pointer_enter_or_click(at(1, 1), 0);
    surface.on_pointer_enter_or_click(at(2, 1), 1);
    assert_eq!(surface.len(), 3);
}

#[test]
fn test_ripple_movement_follows_scripted_rolls() {
    let rolls = [0.10, 0.86, 0.85, 0.99, 0.0];
    let mut surface = RippleSurface::new(Box::new(ScriptedChance::new(rolls)));

    let outcomes: Vec<bool> = (0..rolls.len())
        .map(|i| surface.on_pointer_move_probabilistic(at(i as u16, 0), i as u64).is_some())
        .collect();

    // Strictly greater than 0.85 spawns
    assert_eq!(outcomes, vec![false, true, false, true, false]);
    assert_eq!(surface.len(), 2);
}

#[test]
fn test_ripple_lifetime_is_one_second() {
    let mut surface = RippleSurface::new(Box::new(ScriptedChance::new([])));
    surface.on_pointer_enter_or_click(at(0, 0), 500);
    assert_eq!(surface.snapshot(1499).len(), 1);
    assert!(surface.snapshot(1500).is_empty());
}

#[test]
fn test_pulse_cadence_and_lifetime() {
    let mut pulse = ScrollPulse::new();

    // The first tick only arms the cadence
    assert!(pulse.tick(0).is_none());
    assert!(pulse.tick(1499).is_none());
    assert!(pulse.tick(1500).is_some());
    assert!(pulse.tick(1500).is_none());
    assert!(pulse.tick(3000).is_some());
    assert_eq!(pulse.len(), 2);

    // First ring (t=1500) lasts until t=3500
    assert_eq!(pulse.snapshot(3499).len(), 2);
    assert_eq!(pulse.snapshot(3500).len(), 1);
    assert!(pulse.snapshot(5000).is_empty());
}

#[test]
fn test_pulse_skips_missed_windows() {
    let mut pulse = ScrollPulse::new();
    pulse.tick(0);

    // A stall across several windows yields one ring, then the cadence resumes on the grid
    assert!(pulse.tick(7000).is_some());
    assert_eq!(pulse.len(), 1);
    assert!(pulse.tick(7400).is_none());
    assert!(pulse.tick(7500).is_some());
}

#[test]
fn test_pulse_burst_and_visibility() {
    let mut pulse = ScrollPulse::new();
    pulse.set_origin(at(10, 20));

    let ids = pulse.burst(0);
    assert_eq!(ids.len(), 3);
    assert!(pulse.effects().iter().all(|e| e.position == at(10, 20)));

    assert!(pulse.is_visible());
    pulse.update_visibility(2, 3);
    assert!(pulse.is_visible());
    pulse.update_visibility(3, 3);
    assert!(!pulse.is_visible());
}

#[test]
fn test_burst_rings_are_staggered() {
    let mut pulse = ScrollPulse::new();
    pulse.burst(1000);

    let starts: Vec<Millis> = pulse.effects().iter().map(|e| e.created_at).collect();
    assert_eq!(starts, vec![1000, 1400, 1800]);
    assert!(pulse.effects().iter().all(|e| e.expires_at - e.created_at == 2000));

    // Only the first ring has started; none are drawn on top of each other
    let started = pulse.effects().iter().filter(|e| e.has_started(1000)).count();
    assert_eq!(started, 1);
    let progress: Vec<f64> = pulse.effects().iter().map(|e| e.progress(1800)).collect();
    assert!(progress[0] > progress[1] && progress[1] > progress[2]);

    // The last ring lives until 3800
    assert_eq!(pulse.snapshot(3799).len(), 1);
    assert!(pulse.snapshot(3800).is_empty());
}

#[test]
fn test_trail_removals_go_through_the_given_scheduler() {
    let mut trail = CursorTrail::with_scheduler(80, 600, 10, RecordingScheduler::default());
    let first = trail.on_pointer_move(at(0, 0), 100).unwrap();
    let second = trail.on_pointer_move(at(1, 0), 200).unwrap();

    // Nothing is ever released, so both pops stay past their lifetime
    assert_eq!(trail.advance(5000), 0);
    assert_eq!(trail.len(), 2);
    assert_eq!(trail.effects()[0].id, first);
    assert_eq!(trail.effects()[1].id, second);
}

#[test]
fn test_pulse_and_ripple_accept_a_scheduler() {
    let mut pulse = ScrollPulse::with_scheduler(1500, 2000, RecordingScheduler::default());
    pulse.burst(0);
    assert_eq!(pulse.advance(10_000), 0);
    assert_eq!(pulse.len(), 3);

    let mut surface = RippleSurface::with_scheduler(Box::new(ScriptedChance::new([])), RecordingScheduler::default());
    surface.on_pointer_enter_or_click(at(0, 0), 0);
    assert_eq!(surface.advance(10_000), 0);
    assert_eq!(surface.len(), 1);
}

#[test]
fn test_trail_clear_resets_throttle() {
    let mut trail = CursorTrail::new();
    trail.on_pointer_move(at(0, 0), 0);
    trail.clear();
    assert!(trail.is_empty());
    assert!(trail.on_pointer_move(at(1, 0), 10).is_some());
}
