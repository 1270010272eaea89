//! Help and logs overlay.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    logger: Option<Logger>,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            logger: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn content_lines(&self) -> usize {
        match self.dialog_type {
            Some(DialogType::Help) => system_dialogs::help_line_count(),
            Some(DialogType::Logs) => self.logger.as_ref().map_or(0, Logger::len),
            None => 0,
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.content_lines().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max);
    }

    fn close_keys(dialog_type: DialogType) -> &'static [char] {
        match dialog_type {
            DialogType::Help => &['?', 'q'],
            DialogType::Logs => &['G', 'q'],
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Char(c) if Self::close_keys(dialog_type).contains(&c) => Action::HideDialog,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-(PAGE_SIZE as isize));
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(PAGE_SIZE as isize);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                self.scroll_offset = self.content_lines().saturating_sub(1);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, &self.icons, self.scroll_offset, &mut self.scrollbar_state);
            }
            Some(DialogType::Logs) => {
                let logs = self.logger.as_ref().map(Logger::get_logs).unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logs, self.scroll_offset, &mut self.scrollbar_state);
            }
            None => {}
        }
    }
}
