//! Filter tabs above the project list.
//!
//! Tabs are laid out left to right on a single row. Keyboard cycling and number
//! keys produce filter actions; a left click on a tab selects it directly.

use crate::catalog::FilterDef;
use crate::icons::IconService;
use crate::ui::core::{actions::Action, contains, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

const TAB_SEPARATOR: &str = "│";

/// One tab as laid out on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSlot {
    pub id: String,
    pub text: String,
    pub x: u16,
    pub width: u16,
}

pub struct FilterBarComponent {
    pub filters: Vec<FilterDef>,
    pub counts: Vec<usize>,
    pub active: String,
    pub icons: IconService,
}

impl Default for FilterBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            counts: Vec::new(),
            active: String::new(),
            icons: IconService::default(),
        }
    }

    /// Replace the tabs; `counts` holds how many items each filter matches
    pub fn update_data(&mut self, filters: Vec<FilterDef>, counts: Vec<usize>, active: &str) {
        self.filters = filters;
        self.counts = counts;
        self.active = active.to_string();
    }

    fn tab_text(&self, index: usize, filter: &FilterDef) -> String {
        let count = self.counts.get(index).copied().unwrap_or(0);
        format!(" {} {} ({}) ", self.icons.filter(&filter.id), filter.label, count)
    }

    /// Tab positions inside the bordered bar at `area`
    pub fn layout_tabs(&self, area: Rect) -> Vec<TabSlot> {
        let separator_width = Span::raw(TAB_SEPARATOR).width() as u16;
        let mut x = area.x.saturating_add(1);
        let mut slots = Vec::with_capacity(self.filters.len());

        for (index, filter) in self.filters.iter().enumerate() {
            let text = self.tab_text(index, filter);
            let width = Span::raw(text.as_str()).width() as u16;
            slots.push(TabSlot {
                id: filter.id.clone(),
                text,
                x,
                width,
            });
            x = x.saturating_add(width).saturating_add(separator_width);
        }
        slots
    }

    /// Filter id of the tab under (`column`, `row`)
    pub fn tab_at(&self, area: Rect, column: u16, row: u16) -> Option<String> {
        if row != area.y.saturating_add(1) {
            return None;
        }
        self.layout_tabs(area)
            .into_iter()
            .find(|slot| column >= slot.x && column < slot.x.saturating_add(slot.width))
            .map(|slot| slot.id)
    }
}

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::CycleFilter(1),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::CycleFilter(-1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match self.filters.get(index) {
                    Some(filter) => Action::SetFilter(filter.id.clone()),
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .tab_at(area, mouse.column, mouse.row)
                .map_or(Action::None, Action::SetFilter),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = Vec::new();
        for (index, slot) in self.layout_tabs(rect).into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(TAB_SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let style = if slot.id == self.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(slot.text, style));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(bar, rect);
    }
}
