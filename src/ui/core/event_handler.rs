use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    frame_interval: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(frame_interval_ms: u64) -> Self {
        Self {
            frame_interval: Duration::from_millis(frame_interval_ms),
            last_tick: Instant::now(),
        }
    }

    /// Next terminal event, or a tick once a frame interval passes without input
    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Ignore key releases reported by some terminals
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                Event::FocusLost => EventType::FocusLost,
                _ => EventType::Other,
            });
        }

        let elapsed = self.last_tick.elapsed();
        if elapsed < self.frame_interval {
            // Wake early enough to pick up input between frames
            let wait = (self.frame_interval - elapsed).min(Duration::from_millis(10));
            tokio::time::sleep(wait).await;
            if self.last_tick.elapsed() < self.frame_interval {
                return Ok(EventType::Other);
            }
        }

        self.last_tick = Instant::now();
        Ok(EventType::Tick)
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Terminal window lost focus; only reported once focus change reporting is enabled
    FocusLost,
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(33)
    }
}
