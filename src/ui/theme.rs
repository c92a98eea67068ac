//! Centralized theme for widget and dialog chrome colors.

use crate::terminal::Color;

/// All colors used by the widget kit and dialog chrome.
#[derive(Clone, Debug)]
pub struct Theme {
    // Dialog chrome
    pub dialog_fg: Color,
    pub dialog_bg: Color,
    pub dialog_border_fg: Color,
    pub dialog_border_bg: Color,
    pub dialog_title_fg: Color,
    pub dialog_title_bg: Color,
    pub dialog_shadow: bool,

    // Buttons
    pub button_fg: Color,
    pub button_bg: Color,
    pub button_focused_fg: Color,
    pub button_focused_bg: Color,
    pub button_bracket_fg: Color,

    // Labels
    pub label_fg: Color,
    pub label_bg: Color,

    // Text fields
    pub field_fg: Color,
    pub field_bg: Color,
    pub field_focused_fg: Color,
    pub field_focused_bg: Color,

    // Host surface behind dialogs
    pub surface_fg: Color,
    pub surface_bg: Color,
}

impl Theme {
    /// Gray-on-blue dialog styling in the classic DOS manner.
    pub fn classic() -> Self {
        Self {
            dialog_fg: Color::Black,
            dialog_bg: Color::LightGray,
            dialog_border_fg: Color::Black,
            dialog_border_bg: Color::LightGray,
            dialog_title_fg: Color::Black,
            dialog_title_bg: Color::LightGray,
            dialog_shadow: true,

            button_fg: Color::Black,
            button_bg: Color::LightGray,
            button_focused_fg: Color::White,
            button_focused_bg: Color::Black,
            button_bracket_fg: Color::Black,

            label_fg: Color::Black,
            label_bg: Color::LightGray,

            field_fg: Color::White,
            field_bg: Color::Black,
            field_focused_fg: Color::Yellow,
            field_focused_bg: Color::Black,

            surface_fg: Color::LightGray,
            surface_bg: Color::Blue,
        }
    }

    /// Muted dark styling for modern terminals.
    pub fn dark() -> Self {
        Self {
            dialog_fg: Color::LightGray,
            dialog_bg: Color::DarkGray,
            dialog_border_fg: Color::White,
            dialog_border_bg: Color::DarkGray,
            dialog_title_fg: Color::White,
            dialog_title_bg: Color::DarkGray,
            dialog_shadow: true,

            button_fg: Color::LightGray,
            button_bg: Color::DarkGray,
            button_focused_fg: Color::Black,
            button_focused_bg: Color::LightCyan,
            button_bracket_fg: Color::LightGray,

            label_fg: Color::LightGray,
            label_bg: Color::DarkGray,

            field_fg: Color::White,
            field_bg: Color::Black,
            field_focused_fg: Color::LightCyan,
            field_focused_bg: Color::Black,

            surface_fg: Color::LightGray,
            surface_bg: Color::Black,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
