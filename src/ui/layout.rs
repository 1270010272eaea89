//! Layout management and calculations

use crate::constants::{FILTER_BAR_HEIGHT, HEADER_HEIGHT, MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT, SCROLL_PROMPT_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the main view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MainAreas {
    pub header: Rect,
    pub filters: Rect,
    pub list: Rect,
    pub prompt: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, filter bar, project list, scroll prompt and status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> MainAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(FILTER_BAR_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(SCROLL_PROMPT_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            header: chunks[0],
            filters: chunks[1],
            list: chunks[2],
            prompt: chunks[3],
            status: chunks[4],
        }
    }

    /// Area of the project detail modal
    #[must_use]
    pub fn modal_area(area: Rect) -> Rect {
        Self::centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area)
    }

    /// Calculate a centered rectangle within the given area
    ///
    /// # Arguments
    /// * `percent_x` - Width as a percentage of `r`
    /// * `percent_y` - Height as a percentage of `r`
    /// * `r` - The area to center within
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    ///
    /// # Arguments
    /// * `percent_x` - Width as a percentage of `r`
    /// * `height_lines` - Height in rows; clamped to the height of `r`
    /// * `r` - The area to center within
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height_lines), Constraint::Min(0)])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
