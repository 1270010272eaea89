//! Status bar component

use crate::ui::components::dialogs::common::{instructions_line, shortcuts, InstructionShortcut};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const LIST_HINTS: &[InstructionShortcut] = &[
    ("Tab", Color::Cyan, " Filter"),
    shortcuts::SEPARATOR,
    ("j/k", Color::Cyan, " Move"),
    shortcuts::SEPARATOR,
    ("Enter", Color::Green, " Open"),
    shortcuts::SEPARATOR,
    ("?", Color::Yellow, " Help"),
    shortcuts::SEPARATOR,
    ("q", Color::Red, " Quit"),
];

/// What the status bar summarises
pub struct StatusInfo<'a> {
    pub filter_label: &'a str,
    pub visible: usize,
    pub total: usize,
}

pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo) {
        let mut line = instructions_line(LIST_HINTS);
        line.spans.insert(
            0,
            Span::styled(
                format!("{} • {}/{} projects   ", info.filter_label, info.visible, info.total),
                Style::default().fg(Color::White),
            ),
        );

        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
