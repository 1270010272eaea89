//! Short-lived notification in the bottom-right corner.

use crate::icons::IconService;
use crate::utils::time::Millis;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Millis,
}

#[derive(Debug, Default)]
pub struct ToastComponent {
    current: Option<Toast>,
}

impl ToastComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` until `now + ttl`, replacing any toast already up
    pub fn show(&mut self, message: String, now: Millis, ttl: Millis) {
        self.current = Some(Toast {
            message,
            expires_at: now.saturating_add(ttl),
        });
    }

    /// Drop the toast once it has expired; returns true if one was removed
    pub fn expire(&mut self, now: Millis) -> bool {
        match &self.current {
            Some(toast) if now >= toast.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, icons: &IconService) {
        let Some(toast) = &self.current else {
            return;
        };

        let text = format!("{} {}", icons.info(), toast.message);
        let width = (Span::raw(text.as_str()).width() as u16 + 4).min(rect.width);
        let height = 3.min(rect.height);
        // Sits just above the status bar
        let area = Rect::new(
            rect.x + rect.width.saturating_sub(width),
            rect.y + rect.height.saturating_sub(height + 1),
            width,
            height,
        );

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::White)))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            area,
        );
    }
}
