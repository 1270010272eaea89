//! "Scroll down" prompt under the project list, pulsing on its own while idle.

use crate::constants::SCROLL_PROMPT_TEXT;
use crate::effects::{Position, ScrollPulse};
use crate::icons::IconService;
use crate::ui::components::effects_overlay::EffectsOverlay;
use crate::ui::core::{actions::Action, contains};
use crate::utils::time::Millis;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct ScrollPromptComponent {
    pulse: ScrollPulse,
}

impl ScrollPromptComponent {
    /// Centre rings on the bottom row of the prompt area
    pub fn place(&mut self, area: Rect) {
        let x = area.x.saturating_add(area.width / 2);
        let y = area.y.saturating_add(area.height.saturating_sub(1));
        self.pulse.set_origin(Position::new(x, y));
    }

    pub fn pulse(&self) -> &ScrollPulse {
        &self.pulse
    }

    pub fn is_visible(&self) -> bool {
        self.pulse.is_visible()
    }

    pub fn update_visibility(&mut self, scrolled_rows: usize, threshold: usize) {
        self.pulse.update_visibility(scrolled_rows, threshold);
    }

    pub fn tick(&mut self, now: Millis) -> bool {
        self.pulse.tick(now).is_some()
    }

    pub fn burst(&mut self, now: Millis) {
        self.pulse.burst(now);
    }

    pub fn advance(&mut self, now: Millis) -> usize {
        self.pulse.advance(now)
    }

    pub fn handle_mouse(&self, mouse: MouseEvent, area: Rect) -> Action {
        if !self.is_visible() || !contains(area, mouse.column, mouse.row) {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Action::PulseBurst,
            _ => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, icons: &IconService, now: Millis) {
        if !self.is_visible() || rect.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(icons.scroll_down(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", SCROLL_PROMPT_TEXT), Style::default().fg(Color::Gray)),
        ]);
        let text_area = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1.min(rect.height));
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), text_area);

        EffectsOverlay::render(f, rect, self.pulse.snapshot(now), icons, now);
    }
}
