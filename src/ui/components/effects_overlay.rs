//! Draws live effects straight into the frame buffer, on top of whatever is below.

use crate::effects::{Effect, EffectKind, Position};
use crate::icons::IconService;
use crate::ui::core::contains;
use crate::utils::time::Millis;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    Frame,
};

pub struct EffectsOverlay;

impl EffectsOverlay {
    /// Paint `effects` as they look at `now`, dropping any cell outside `clip`
    pub fn render(f: &mut Frame, clip: Rect, effects: &[Effect], icons: &IconService, now: Millis) {
        Self::render_at(f, clip, Position::default(), effects, icons, now);
    }

    /// Like [`Self::render`], for effects stored relative to `origin`
    ///
    /// # Arguments
    /// * `clip` - Cells outside this rect are left untouched
    /// * `origin` - Screen cell that effect position `(0, 0)` maps to
    pub fn render_at(
        f: &mut Frame,
        clip: Rect,
        origin: Position,
        effects: &[Effect],
        icons: &IconService,
        now: Millis,
    ) {
        for effect in effects.iter().filter(|effect| effect.has_started(now)) {
            let progress = effect.progress(now);
            let glyph = icons.effect_glyph(effect.kind, progress);
            let style = Style::default().fg(Self::color(effect.kind));
            let row = origin.y.saturating_add(effect.position.y);
            let x = origin.x.saturating_add(effect.position.x);

            for column in Self::columns(effect.kind, x, progress) {
                if !contains(clip, column, row) {
                    continue;
                }
                if let Some(cell) = f.buffer_mut().cell_mut((column, row)) {
                    cell.set_symbol(glyph);
                    cell.set_style(style);
                }
            }
        }
    }

    fn color(kind: EffectKind) -> Color {
        match kind {
            EffectKind::Pop => Color::Magenta,
            EffectKind::Ripple => Color::Cyan,
            EffectKind::Pulse => Color::LightBlue,
        }
    }

    /// How far a ring has spread, in columns either side of its origin
    fn reach(kind: EffectKind, progress: f64) -> u16 {
        let max = match kind {
            EffectKind::Pop => 0.0,
            EffectKind::Ripple => 3.0,
            EffectKind::Pulse => 5.0,
        };
        (progress * max).round() as u16
    }

    /// Columns painted for an effect centred on `x`: the centre, or the two edges of the ring once it spreads
    fn columns(kind: EffectKind, x: u16, progress: f64) -> Vec<u16> {
        match Self::reach(kind, progress) {
            0 => vec![x],
            reach => {
                let mut columns = vec![x.saturating_add(reach)];
                if let Some(left) = x.checked_sub(reach) {
                    columns.push(left);
                }
                columns
            }
        }
    }
}
