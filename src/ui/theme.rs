//! Color themes and badge colors.

use ratatui::style::{Color, Modifier, Style};

use crate::models::{IssuePriority, IssueStatus};
use crate::state::NotificationKind;

// ============================================================================
// Theme Mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Label for the toggle hint, naming the mode you would switch to.
    pub fn switch_label(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "light mode",
            ThemeMode::Light => "dark mode",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}

// ============================================================================
// Palettes
// ============================================================================

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    /// Background of the highlighted table row
    pub highlight: Color,
    /// Border of the focused panel
    pub focus: Color,
}

const DARK: Palette = Palette {
    background: Color::Reset,
    text: Color::White,
    dim: Color::DarkGray,
    border: Color::DarkGray,
    accent: Color::LightCyan,
    highlight: Color::Rgb(40, 44, 60),
    focus: Color::White,
};

const LIGHT: Palette = Palette {
    background: Color::Rgb(245, 245, 245),
    text: Color::Black,
    dim: Color::Gray,
    border: Color::Gray,
    accent: Color::Blue,
    highlight: Color::Rgb(220, 225, 240),
    focus: Color::Black,
};

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border)
        }
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Success green, shared by the Resolved badge and success toasts
pub const COLOR_SUCCESS: Color = Color::Rgb(42, 157, 143);

pub const COLOR_ERROR: Color = Color::Red;

pub fn status_color(status: IssueStatus) -> Color {
    match status {
        IssueStatus::Open => Color::Gray,
        IssueStatus::InProgress => Color::Yellow,
        IssueStatus::Resolved => COLOR_SUCCESS,
    }
}

pub fn priority_color(priority: IssuePriority) -> Color {
    match priority {
        IssuePriority::High => Color::Red,
        IssuePriority::Medium => Color::Gray,
        IssuePriority::Low => Color::Cyan,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => COLOR_SUCCESS,
        NotificationKind::Error => COLOR_ERROR,
    }
}
