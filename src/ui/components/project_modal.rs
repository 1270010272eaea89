//! Detail modal for the selected project.
//!
//! The modal is a pure view of the controller's selection: the app pushes the
//! selected item (and its detail record, if any) in after every state change.
//! Closing goes back through [`Action::CloseModal`] with the reason that
//! triggered it, so the controller stays the single owner of the selection.

use crate::catalog::{CatalogItem, DismissReason, ItemDetail};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{instructions_line, shortcuts};
use crate::ui::core::{actions::Action, contains, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ProjectModalComponent {
    pub item: Option<CatalogItem>,
    pub detail: Option<ItemDetail>,
    pub icons: IconService,
}

impl Default for ProjectModalComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectModalComponent {
    pub fn new() -> Self {
        Self {
            item: None,
            detail: None,
            icons: IconService::default(),
        }
    }

    pub fn set_content(&mut self, item: Option<CatalogItem>, detail: Option<ItemDetail>) {
        self.item = item;
        self.detail = detail;
    }

    pub fn is_open(&self) -> bool {
        self.item.is_some()
    }

    /// The close control in the modal's top-right corner
    pub fn close_area(modal: Rect) -> Rect {
        Rect::new(modal.x + modal.width.saturating_sub(4), modal.y, 3, 1)
    }

    fn body_lines(&self, item: &CatalogItem) -> Vec<Line<'static>> {
        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                item.short_description.clone(),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
            Line::default(),
        ];

        match &self.detail {
            Some(detail) => {
                lines.push(Line::from(detail.description.clone()));

                if !detail.features.is_empty() {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled("Key Features", heading)));
                    for feature in &detail.features {
                        lines.push(Line::from(vec![
                            Span::styled(format!("{} ", self.icons.feature_bullet()), Style::default().fg(Color::Cyan)),
                            Span::raw(feature.clone()),
                        ]));
                    }
                }

                if !detail.technologies.is_empty() {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled("Technologies", heading)));
                    lines.push(Line::from(detail.technologies.join(" · ")));
                }
            }
            None => {
                if !item.tags.is_empty() {
                    lines.push(Line::from(Span::styled("Tags", heading)));
                    lines.push(Line::from(item.tags.join(" · ")));
                }
            }
        }

        lines.push(Line::default());
        match &item.link {
            Some(link) => lines.push(Line::from(vec![
                Span::styled(format!("{} ", self.icons.link()), Style::default().fg(Color::Cyan)),
                Span::styled(link.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)),
            ])),
            None => lines.push(Line::from(Span::styled(
                "No public repository",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        lines
    }
}

impl Component for ProjectModalComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_open() {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Enter => Action::CloseModal(DismissReason::CloseAction),
            KeyCode::Esc => Action::CloseModal(DismissReason::Cancel),
            KeyCode::Down | KeyCode::Char('j') => Action::RetargetItem(1),
            KeyCode::Up | KeyCode::Char('k') => Action::RetargetItem(-1),
            KeyCode::Char('o') => Action::ShowLink,
            _ => Action::None,
        }
    }

    /// `area` is the full screen; clicks outside the modal dismiss it
    fn handle_mouse_events(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        if !self.is_open() {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let modal = LayoutManager::modal_area(area);
                if contains(Self::close_area(modal), mouse.column, mouse.row) {
                    Action::CloseModal(DismissReason::CloseAction)
                } else if !contains(modal, mouse.column, mouse.row) {
                    Action::CloseModal(DismissReason::Backdrop)
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(item) = self.item.as_ref() else {
            return;
        };

        let modal = LayoutManager::modal_area(rect);
        f.render_widget(Clear, modal);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(format!(" {} ", item.title)).left_aligned())
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .title(
                Line::from(Span::styled(
                    format!("[{}]", self.icons.close()),
                    Style::default().fg(Color::Red),
                ))
                .right_aligned(),
            )
            .title_bottom(
                instructions_line(&[
                    shortcuts::JK_SWITCH,
                    shortcuts::SEPARATOR,
                    shortcuts::O_LINK,
                    shortcuts::SEPARATOR,
                    shortcuts::ENTER_CLOSE,
                    shortcuts::SEPARATOR,
                    shortcuts::ESC_CANCEL,
                ])
                .centered(),
            );

        let body = Paragraph::new(self.body_lines(item))
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        f.render_widget(body, modal);
    }
}
