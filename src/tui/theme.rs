//! Theme support for the TUI.
//!
//! A handful of built-in themes selectable by name from `ui.theme`.

use ratatui::style::Color;

use crate::core::NoticeKind;

/// A complete color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name for display and configuration
    pub name: String,
    /// Primary accent color (headers, focused fields, active step)
    pub primary: Color,
    /// Secondary accent color (completed steps, success indicators)
    pub secondary: Color,
    /// Tertiary accent color (section titles, El Director)
    pub accent: Color,
    /// Main text color
    pub text: Color,
    /// Dimmed text color (descriptions, secondary info)
    pub text_dim: Color,
    /// Muted text color (placeholders, hints)
    pub text_muted: Color,
    /// Background color (Reset uses terminal default)
    pub background: Color,
    /// Border color
    pub border: Color,
    /// Border of a text area in edit mode
    pub editing: Color,
    /// Success indicator color
    pub success: Color,
    /// Warning indicator color
    pub warning: Color,
    /// Error indicator color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme - works well on both light and dark terminals.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            primary: Color::Rgb(99, 102, 241),     // Indigo
            secondary: Color::Rgb(16, 185, 129),   // Emerald
            accent: Color::Rgb(251, 146, 60),      // Orange
            text: Color::White,
            text_dim: Color::Rgb(156, 163, 175),   // Gray-400
            text_muted: Color::Rgb(107, 114, 128), // Gray-500
            background: Color::Reset,
            border: Color::Rgb(75, 85, 99),        // Gray-600
            editing: Color::Rgb(250, 204, 21),     // Yellow
            success: Color::Rgb(34, 197, 94),      // Green
            warning: Color::Rgb(234, 179, 8),      // Amber
            error: Color::Rgb(239, 68, 68),        // Red
        }
    }

    /// Dracula theme - dark purple and pink.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            primary: Color::Rgb(189, 147, 249),   // Purple
            secondary: Color::Rgb(80, 250, 123),  // Green
            accent: Color::Rgb(255, 121, 198),    // Pink
            text: Color::Rgb(248, 248, 242),      // Foreground
            text_dim: Color::Rgb(189, 147, 249),  // Purple (dimmed)
            text_muted: Color::Rgb(98, 114, 164), // Comment
            background: Color::Rgb(40, 42, 54),   // Background
            border: Color::Rgb(68, 71, 90),       // Selection
            editing: Color::Rgb(241, 250, 140),   // Yellow
            success: Color::Rgb(80, 250, 123),    // Green
            warning: Color::Rgb(255, 184, 108),   // Orange
            error: Color::Rgb(255, 85, 85),       // Red
        }
    }

    /// Nord theme - arctic, bluish colors.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            primary: Color::Rgb(136, 192, 208),   // Frost
            secondary: Color::Rgb(163, 190, 140), // Aurora green
            accent: Color::Rgb(208, 135, 112),    // Aurora orange
            text: Color::Rgb(236, 239, 244),      // Snow storm
            text_dim: Color::Rgb(216, 222, 233),
            text_muted: Color::Rgb(76, 86, 106),  // Polar night
            background: Color::Rgb(46, 52, 64),
            border: Color::Rgb(67, 76, 94),
            editing: Color::Rgb(235, 203, 139),   // Aurora yellow
            success: Color::Rgb(163, 190, 140),
            warning: Color::Rgb(235, 203, 139),
            error: Color::Rgb(191, 97, 106),
        }
    }

    /// High Contrast theme - maximum readability.
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            primary: Color::Cyan,
            secondary: Color::Green,
            accent: Color::Yellow,
            text: Color::White,
            text_dim: Color::LightCyan,
            text_muted: Color::Gray,
            background: Color::Black,
            border: Color::White,
            editing: Color::LightYellow,
            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
        }
    }

    /// Get a theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            "high-contrast" | "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// List all available built-in theme names.
    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "dracula", "nord", "high-contrast"]
    }

    /// Color of a notice toast.
    pub fn notice_color(&self, kind: NoticeKind) -> Color {
        match kind {
            NoticeKind::Success => self.success,
            NoticeKind::Error => self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default().name, "default");
    }

    #[test]
    fn test_theme_by_name() {
        assert!(Theme::by_name("Dracula").is_some());
        assert!(Theme::by_name("high_contrast").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_all_builtin_themes_valid() {
        for name in Theme::available_themes() {
            let theme = Theme::by_name(name).unwrap_or_else(|| panic!("Theme {} should exist", name));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_notice_colors() {
        let theme = Theme::nord();
        assert_eq!(theme.notice_color(NoticeKind::Error), theme.error);
        assert_ne!(theme.notice_color(NoticeKind::Success), theme.notice_color(NoticeKind::Error));
    }
}
