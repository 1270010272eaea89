//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks. It also owns
//! the glyph frames used to draw effects as they age.

use crate::effects::EffectKind;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Filter tab icons
#[derive(Debug, Clone)]
pub struct FilterIcons {
    pub all: &'static str,
    pub llm: &'static str,
    pub data: &'static str,
    pub other: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub projects_title: &'static str,
    pub feature_bullet: &'static str,
    pub link: &'static str,
    pub close: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub scroll_down: &'static str,
}

/// Glyph frames for effects, from freshly spawned to nearly gone
#[derive(Debug, Clone)]
pub struct EffectGlyphs {
    pub pop: &'static [&'static str],
    pub ripple: &'static [&'static str],
    pub pulse: &'static [&'static str],
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub filters: FilterIcons,
    pub ui: UiIcons,
    pub effects: EffectGlyphs,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            filters: FilterIcons {
                all: "🗂️",
                llm: "🧠",
                data: "🗄️",
                other: "🏷️",
            },
            ui: UiIcons {
                projects_title: "📁",
                feature_bullet: "→",
                link: "🔗",
                close: "✖",
                info: "💡",
                success: "✅",
                scroll_down: "⬇️",
            },
            // Effect glyphs stay single-width even in the emoji theme
            effects: EffectGlyphs {
                pop: &["●", "◉", "○", "◌", "·"],
                ripple: &["~", "≈", "∽", "·"],
                pulse: &["◎", "○", "◌", "·"],
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            filters: FilterIcons {
                all: "▦",
                llm: "◈",
                data: "◍",
                other: "◇",
            },
            ui: UiIcons {
                projects_title: "◆",
                feature_bullet: "→",
                link: "↗",
                close: "✕",
                info: "ⓘ",
                success: "✓",
                scroll_down: "↓",
            },
            effects: EffectGlyphs {
                pop: &["●", "◉", "○", "◌", "·"],
                ripple: &["~", "≈", "∽", "·"],
                pulse: &["◎", "○", "◌", "·"],
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            filters: FilterIcons {
                all: "#",
                llm: "*",
                data: "=",
                other: "-",
            },
            ui: UiIcons {
                projects_title: "#",
                feature_bullet: "->",
                link: "@",
                close: "x",
                info: "i",
                success: "+",
                scroll_down: "v",
            },
            effects: EffectGlyphs {
                pop: &["@", "O", "o", "."],
                ripple: &["~", "-", "."],
                pulse: &["O", "o", "."],
            },
        }
    }

    /// Icon for a filter tab by filter id
    #[must_use]
    pub fn filter(&self, id: &str) -> &'static str {
        let filters = self.icons().filters;
        match id {
            "all" => filters.all,
            "llm" => filters.llm,
            "data" => filters.data,
            _ => filters.other,
        }
    }

    /// Glyph for an effect of `kind` that has lived `progress` (0.0..=1.0) of its lifetime
    #[must_use]
    pub fn effect_glyph(&self, kind: EffectKind, progress: f64) -> &'static str {
        let glyphs = self.icons().effects;
        let frames = match kind {
            EffectKind::Pop => glyphs.pop,
            EffectKind::Ripple => glyphs.ripple,
            EffectKind::Pulse => glyphs.pulse,
        };
        let last = frames.len().saturating_sub(1);
        let index = ((progress.clamp(0.0, 1.0) * frames.len() as f64) as usize).min(last);
        frames.get(index).copied().unwrap_or(".")
    }

    #[must_use]
    pub fn projects_title(&self) -> &'static str {
        self.icons().ui.projects_title
    }

    #[must_use]
    pub fn feature_bullet(&self) -> &'static str {
        self.icons().ui.feature_bullet
    }

    #[must_use]
    pub fn link(&self) -> &'static str {
        self.icons().ui.link
    }

    #[must_use]
    pub fn close(&self) -> &'static str {
        self.icons().ui.close
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn scroll_down(&self) -> &'static str {
        self.icons().ui.scroll_down
    }
}
