//! Scrollable list of the projects visible under the active filter.

use crate::catalog::CatalogItem;
use crate::constants::SECTION_TITLE_WORK;
use crate::icons::IconService;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, contains, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Rows taken by one project entry (title line and description line)
pub const ITEM_HEIGHT: usize = 2;

pub struct ProjectListComponent {
    pub items: Vec<CatalogItem>,
    pub icons: IconService,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for ProjectListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            icons: IconService::default(),
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    /// Replace the visible items, keeping the cursor on the same project when it survives
    pub fn update_data(&mut self, items: Vec<CatalogItem>) {
        let same_view = items.len() == self.items.len() && items.iter().zip(&self.items).all(|(a, b)| a.id == b.id);
        if same_view {
            self.items = items;
            return;
        }

        let current_id = self.current_item().map(|item| item.id.clone());
        self.items = items;

        let next = current_id
            .and_then(|id| self.items.iter().position(|item| item.id == id))
            .unwrap_or(0);
        if self.items.is_empty() {
            self.list_state = ListState::default();
        } else {
            self.list_state.select(Some(next));
            *self.list_state.offset_mut() = 0;
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn current_item(&self) -> Option<&CatalogItem> {
        self.list_state.selected().and_then(|index| self.items.get(index))
    }

    /// Move the cursor onto `id` if it is in the list
    pub fn focus(&mut self, id: &str) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.list_state.select(Some(index));
        }
    }

    /// Rows scrolled past the top of the list
    pub fn scrolled_rows(&self) -> usize {
        self.list_state.offset() * ITEM_HEIGHT
    }

    fn move_cursor(&mut self, forward: bool) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let next = match (self.list_state.selected(), forward) {
            (None, _) => 0,
            (Some(index), true) => (index + 1).min(last),
            (Some(index), false) => index.saturating_sub(1),
        };
        self.list_state.select(Some(next));
    }

    /// Index of the entry drawn at `row` inside a list laid out at `area`
    pub fn index_at(&self, area: Rect, row: u16) -> Option<usize> {
        let first_row = area.y.saturating_add(1);
        let last_row = area.y.saturating_add(area.height).saturating_sub(1);
        if row < first_row || row >= last_row {
            return None;
        }
        let index = self.list_state.offset() + (row - first_row) as usize / ITEM_HEIGHT;
        (index < self.items.len()).then_some(index)
    }

    fn render_item(&self, item: &CatalogItem, selected: bool) -> ListItem<'static> {
        let title_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let mut title = vec![Span::styled(item.title.clone(), title_style)];
        if item.link.is_some() {
            title.push(Span::styled(format!(" {}", self.icons.link()), Style::default().fg(Color::DarkGray)));
        }

        let mut detail = vec![Span::styled(
            format!("  {}", item.short_description),
            Style::default().fg(Color::Gray),
        )];
        if !item.tags.is_empty() {
            detail.push(Span::styled(
                format!("  [{}]", item.tags.join(", ")),
                Style::default().fg(Color::DarkGray),
            ));
        }

        ListItem::new(vec![Line::from(title), Line::from(detail)])
    }
}

impl Component for ProjectListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousItem,
            KeyCode::Enter | KeyCode::Char(' ') => self
                .current_item()
                .map_or(Action::None, |item| Action::OpenItem(item.id.clone())),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !contains(area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match self.index_at(area, mouse.row) {
                Some(index) => {
                    self.list_state.select(Some(index));
                    Action::OpenItem(self.items[index].id.clone())
                }
                None => Action::None,
            },
            MouseEventKind::ScrollDown => Action::NextItem,
            MouseEventKind::ScrollUp => Action::PreviousItem,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                self.move_cursor(true);
                Action::None
            }
            Action::PreviousItem => {
                self.move_cursor(false);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let selected = self.list_state.selected();
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| self.render_item(item, selected == Some(index)))
            .collect();

        let total_rows = self.items.len() * ITEM_HEIGHT;
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_rows);
        let viewport_rows = rect.height.saturating_sub(2) as usize;
        self.scrollbar_helper
            .update_state(self.items.len(), selected.unwrap_or(0), viewport_rows / ITEM_HEIGHT);

        let title = format!(" {} {} ", self.icons.projects_title(), SECTION_TITLE_WORK);
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_symbol("▌")
            .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }
}
