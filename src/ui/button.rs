//! Clickable button widget.

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::widget::{EventResult, SizeHint, Widget};
use std::any::Any;

/// A button rendered as `< label >` that emits a named action when
/// activated by Enter/Space while focused or by a pointer press.
pub struct Button {
    label: String,
    action: String,
    focused: bool,
    min_width: u16,
}

impl Button {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        let label = label.into();
        let min_width = label.chars().count() as u16 + 4;
        Self {
            label,
            action: action.into(),
            focused: false,
            min_width,
        }
    }

    /// Widen the button beyond its natural `< label >` width.
    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = self.min_width.max(width);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for Button {
    fn draw(&self, screen: &mut Screen, bounds: Rect, theme: &Theme) {
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let (fg, bg) = if self.focused {
            (theme.button_focused_fg, theme.button_focused_bg)
        } else {
            (theme.button_fg, theme.button_bg)
        };

        let text = format!(" {} ", self.label);
        let row = bounds.y;
        screen.set(row, bounds.x, '<', theme.button_bracket_fg, theme.button_bg);
        let mut col = bounds.x + 1;
        for ch in text.chars() {
            if col + 1 >= bounds.x + bounds.width {
                break;
            }
            screen.set(row, col, ch, fg, bg);
            col += 1;
        }
        screen.set(
            row,
            bounds.x + bounds.width.saturating_sub(1),
            '>',
            theme.button_bracket_fg,
            theme.button_bg,
        );
    }

    fn handle_event(&mut self, event: &InputEvent, bounds: Rect) -> EventResult {
        if self.focused && matches!(event, InputEvent::Enter | InputEvent::Char(' ')) {
            return EventResult::Action(self.action.clone());
        }

        if let Some((row, col)) = event.mouse_position() {
            if bounds.contains(row, col) && matches!(event, InputEvent::MouseDown { .. }) {
                return EventResult::Action(self.action.clone());
            }
        }

        EventResult::Ignored
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint {
            min_width: self.min_width,
            min_height: 1,
            flex: 0,
        }
    }

    fn wants_tight_width(&self) -> bool {
        true
    }

    fn focusable(&self) -> bool {
        true
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_fires_action_only_when_focused() {
        let mut button = Button::new("OK", "ok");
        let bounds = Rect::new(0, 0, 8, 1);
        assert_eq!(button.handle_event(&InputEvent::Enter, bounds), EventResult::Ignored);
        button.set_focus(true);
        assert_eq!(
            button.handle_event(&InputEvent::Enter, bounds),
            EventResult::Action("ok".into())
        );
    }

    #[test]
    fn click_inside_fires_click_outside_ignored() {
        let mut button = Button::new("OK", "ok");
        let bounds = Rect::new(2, 1, 8, 1);
        assert_eq!(
            button.handle_event(&InputEvent::MouseDown { row: 1, col: 4 }, bounds),
            EventResult::Action("ok".into())
        );
        assert_eq!(
            button.handle_event(&InputEvent::MouseDown { row: 0, col: 0 }, bounds),
            EventResult::Ignored
        );
    }
}
