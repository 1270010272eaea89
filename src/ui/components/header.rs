//! Header strip: the name, which ripples under the pointer, and a tagline.

use crate::constants::{HEADER_NAME, HEADER_TAGLINE};
use crate::effects::{Chance, Position, RippleSurface};
use crate::icons::IconService;
use crate::ui::components::effects_overlay::EffectsOverlay;
use crate::ui::core::contains;
use crate::utils::time::Millis;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct HeaderComponent {
    ripples: RippleSurface,
}

impl HeaderComponent {
    pub fn new(chance: Box<dyn Chance>) -> Self {
        Self {
            ripples: RippleSurface::new(chance),
        }
    }

    /// Where the name is drawn inside a header laid out at `area`
    pub fn name_area(area: Rect) -> Rect {
        let width = Span::raw(HEADER_NAME).width() as u16;
        Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(1),
            width.min(area.width.saturating_sub(3)),
            1.min(area.height.saturating_sub(2)),
        )
    }

    /// Screen position mapped into name coordinates, or `None` when it misses the name
    fn relative_to_name(position: Position, area: Rect) -> Option<Position> {
        let name = Self::name_area(area);
        contains(name, position.x, position.y).then(|| Position::new(position.x - name.x, position.y - name.y))
    }

    /// Feed a pointer position; hover enter always ripples, movement over the name sometimes does
    pub fn on_pointer(&mut self, position: Option<Position>, area: Rect, now: Millis) {
        let over_name = position.and_then(|p| Self::relative_to_name(p, area));
        self.ripples.on_pointer_at(over_name, now);
    }

    /// Returns true when the click landed on the name
    pub fn on_click(&mut self, position: Position, area: Rect, now: Millis) -> bool {
        match Self::relative_to_name(position, area) {
            Some(relative) => {
                self.ripples.on_pointer_enter_or_click(relative, now);
                true
            }
            None => false,
        }
    }

    pub fn ripples(&self) -> &RippleSurface {
        &self.ripples
    }

    pub fn advance(&mut self, now: Millis) -> usize {
        self.ripples.advance(now)
    }

    /// Drop ripples and hover state, e.g. when the terminal loses focus
    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, icons: &IconService, now: Millis) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(block, rect);

        let name_area = Self::name_area(rect);
        let name = Paragraph::new(Span::styled(
            HEADER_NAME,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(name, name_area);

        if rect.height > 3 {
            let tagline_area = Rect::new(name_area.x, name_area.y + 1, rect.width.saturating_sub(3), 1);
            let tagline = Paragraph::new(Span::styled(HEADER_TAGLINE, Style::default().fg(Color::Gray)));
            f.render_widget(tagline, tagline_area);
        }

        let origin = Position::new(name_area.x, name_area.y);
        EffectsOverlay::render_at(f, rect, origin, self.ripples.snapshot(now), icons, now);
    }
}
