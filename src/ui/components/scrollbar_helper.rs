//! Scrollbar helper shared by the scrollable components.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollbar state plus the layout and styling rules every list uses.
///
/// Components keep one helper each and call, once per frame:
/// - [`ScrollbarHelper::calculate_areas`] to carve the track out of their rect
/// - [`ScrollbarHelper::update_state`] with the current cursor
/// - [`ScrollbarHelper::render`] after drawing their content
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    /// Create a helper for empty content
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Sync the scrollbar with the content length, cursor and viewport height.
    ///
    /// # Arguments
    /// * `content_rows` - Total rows of content, not items (list entries may span several rows)
    /// * `position` - Row the thumb should track, 0-based
    /// * `viewport_rows` - Rows visible at once, used to size the thumb
    pub fn update_state(&mut self, content_rows: usize, position: usize, viewport_rows: usize) {
        self.state = self
            .state
            .content_length(content_rows)
            .viewport_content_length(viewport_rows)
            .position(position);
    }

    /// Check whether content overflows the space it is given.
    ///
    /// # Arguments
    /// * `content_rows` - Total rows of content
    /// * `available_rows` - Rows available inside the borders
    ///
    /// # Returns
    /// `true` if a scrollbar is needed, `false` otherwise
    pub fn needs_scrollbar(content_rows: usize, available_rows: usize) -> bool {
        content_rows > available_rows
    }

    /// Split a bordered `rect` into the content area and, when the content overflows,
    /// a one-column scrollbar track inside the right border.
    ///
    /// # Arguments
    /// * `rect` - The component's full area, borders included
    /// * `content_rows` - Total rows of content
    ///
    /// # Returns
    /// `(content_area, scrollbar_area)`. The content area is `rect` unchanged when
    /// everything fits, and `scrollbar_area` is then `None`.
    pub fn calculate_areas(rect: Rect, content_rows: usize) -> (Rect, Option<Rect>) {
        let available_rows = rect.height.saturating_sub(2) as usize;
        if !Self::needs_scrollbar(content_rows, available_rows) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    /// Draw the track and thumb; does nothing when `scrollbar_area` is `None`
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
