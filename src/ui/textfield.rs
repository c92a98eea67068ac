//! Single-line editable text field.

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::widget::{EventResult, SizeHint, Widget};
use std::any::Any;

/// Editable text input with cursor movement and horizontal scrolling.
pub struct TextField {
    text: Vec<char>,
    /// Cursor position in characters, 0..=len.
    cursor: usize,
    /// First visible character when the text overflows the bounds.
    scroll: usize,
    focused: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            cursor: 0,
            scroll: 0,
            focused: false,
        }
    }

    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self {
            text: chars,
            cursor,
            scroll: 0,
            focused: false,
        }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.cursor = self.text.len();
        self.scroll = 0;
    }

    /// Insert clipboard content at the cursor. Control characters are
    /// dropped; only the first line of multi-line content is taken.
    pub fn paste(&mut self, content: &str) {
        let line = content.lines().next().unwrap_or("");
        for ch in line.chars().filter(|c| !c.is_control()) {
            self.text.insert(self.cursor, ch);
            self.cursor += 1;
        }
    }

    /// Screen column of the cursor within `bounds`, for host cursor display.
    pub fn cursor_column(&self, bounds: Rect) -> u16 {
        let offset = self.cursor.saturating_sub(self.scroll) as u16;
        bounds.x + offset.min(bounds.width.saturating_sub(1))
    }

    fn keep_cursor_visible(&mut self, width: u16) {
        let width = width.max(1) as usize;
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + width {
            self.scroll = self.cursor + 1 - width;
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextField {
    fn draw(&self, screen: &mut Screen, bounds: Rect, theme: &Theme) {
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let (fg, bg) = if self.focused {
            (theme.field_focused_fg, theme.field_focused_bg)
        } else {
            (theme.field_fg, theme.field_bg)
        };

        screen.fill(bounds.y, bounds.x, bounds.width, 1, ' ', fg, bg);
        let visible: String = self
            .text
            .iter()
            .skip(self.scroll)
            .take(bounds.width as usize)
            .collect();
        screen.write_str(bounds.y, bounds.x, &visible, fg, bg);

        if self.focused {
            screen.set_cursor(bounds.y, self.cursor_column(bounds));
            screen.set_cursor_visible(true);
        }
    }

    fn handle_event(&mut self, event: &InputEvent, bounds: Rect) -> EventResult {
        if let Some((row, col)) = event.mouse_position() {
            if matches!(event, InputEvent::MouseDown { .. }) && bounds.contains(row, col) {
                let offset = (col - bounds.x) as usize + self.scroll;
                self.cursor = offset.min(self.text.len());
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }

        if !self.focused {
            return EventResult::Ignored;
        }

        let result = match event {
            InputEvent::Char(ch) => {
                self.text.insert(self.cursor, *ch);
                self.cursor += 1;
                EventResult::Consumed
            }
            InputEvent::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.text.remove(self.cursor);
                }
                EventResult::Consumed
            }
            InputEvent::Delete => {
                if self.cursor < self.text.len() {
                    self.text.remove(self.cursor);
                }
                EventResult::Consumed
            }
            InputEvent::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EventResult::Consumed
            }
            InputEvent::Right => {
                self.cursor = (self.cursor + 1).min(self.text.len());
                EventResult::Consumed
            }
            InputEvent::Home => {
                self.cursor = 0;
                EventResult::Consumed
            }
            InputEvent::End => {
                self.cursor = self.text.len();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        };

        if result.is_consumed() {
            self.keep_cursor_visible(bounds.width);
        }
        result
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint {
            min_width: 10,
            min_height: 1,
            flex: 0,
        }
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

    fn bounds() -> Rect {
        Rect::new(0, 0, 10, 1)
    }

    #[test]
    fn typing_and_deleting() {
        let mut field = TextField::new();
        field.set_focus(true);
        field.handle_event(&InputEvent::Char('h'), bounds());
        field.handle_event(&InputEvent::Char('i'), bounds());
        assert_eq!(field.text(), "hi");
        field.handle_event(&InputEvent::Backspace, bounds());
        assert_eq!(field.text(), "h");
    }

    #[test]
    fn cursor_movement_clamps() {
        let mut field = TextField::with_text("ab");
        field.set_focus(true);
        field.handle_event(&InputEvent::Right, bounds());
        assert_eq!(field.cursor, 2);
        field.handle_event(&InputEvent::Home, bounds());
        assert_eq!(field.cursor, 0);
        field.handle_event(&InputEvent::Left, bounds());
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn paste_takes_first_line_only() {
        let mut field = TextField::new();
        field.paste("one\ntwo");
        assert_eq!(field.text(), "one");
    }

    #[test]
    fn unfocused_field_ignores_keys() {
        let mut field = TextField::new();
        assert_eq!(
            field.handle_event(&InputEvent::Char('x'), bounds()),
            EventResult::Ignored
        );
        assert_eq!(field.text(), "");
    }
}
