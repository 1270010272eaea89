use super::common::create_dialog_block;
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_CONTENT: &str = r"
FOLIO - Terminal Portfolio
==========================

FILTERS
-------
Tab / l / →     Next filter
Shift+Tab / h / ←  Previous filter
1-9             Jump to filter by position
Click           Pick a filter tab

PROJECTS
--------
j/k  ↓/↑        Move the cursor
Mouse wheel     Move the cursor
Enter / Space   Open project details
Click           Open project details
o               Show the project link

PROJECT DETAILS
---------------
j/k  ↓/↑        Previous/next project in the current filter
q / Enter       Close
Esc             Cancel
Click outside   Close

EFFECTS
-------
Mouse movement  Leaves a trail of pops
Hover the name  Ripples the header
Scroll prompt   Pulses while idle, click for a burst

GENERAL
-------
?               Toggle this help
G               Show logs
i               Change icon theme
q / Esc         Quit
Ctrl+C          Quit
";

/// Number of lines in the help text, used to clamp scrolling
pub fn help_line_count() -> usize {
    HELP_CONTENT.lines().count()
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    let title = format!("{} {}", icons.info(), DIALOG_TITLE_HELP);
    render_scrollable_text(f, area, &title, &lines, scroll_offset, scrollbar_state);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logs: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No logs yet"]
    } else {
        logs.iter().map(String::as_str).collect()
    };
    render_scrollable_text(f, area, DIALOG_TITLE_LOGS, &lines, scroll_offset, scrollbar_state);
}

fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[&str],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let total_lines = lines.len();
    let visible_height = dialog_area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible: Vec<Line> = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .map(|line| Line::from(*line))
        .collect();

    let paragraph = Paragraph::new(visible)
        .block(create_dialog_block(Line::from(title.to_string()), Color::White))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, dialog_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, dialog_area, scrollbar_state);
    }
}
