use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled dialog block
///
/// # Arguments
/// * `title` - Title shown in the top border
/// * `theme_color` - Border and title color
pub fn create_dialog_block<'a>(title: Line<'a>, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
///
/// # Returns
/// A centered single-line paragraph, ready for a dialog footer
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    Paragraph::new(instructions_line(instructions)).alignment(Alignment::Center)
}

/// Color-coded shortcuts as a single line, for status bars and block footers
pub fn instructions_line<'a>(instructions: &[InstructionShortcut]) -> Line<'a> {
    let mut spans = Vec::with_capacity(instructions.len() * 2);
    for (key, color, desc) in instructions {
        spans.push(Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ENTER_CLOSE: InstructionShortcut = ("Enter", Color::Green, " Close");
    pub const JK_SWITCH: InstructionShortcut = ("j/k", Color::Cyan, " Prev/Next project");
    pub const JK_SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
    pub const O_LINK: InstructionShortcut = ("o", Color::Yellow, " Link");
}
