//! Static text widgets.

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::widget::{EventResult, SizeHint, Widget};
use std::any::Any;

/// A single line of non-interactive text.
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn draw(&self, screen: &mut Screen, bounds: Rect, theme: &Theme) {
        if bounds.height == 0 {
            return;
        }
        screen.write_str(bounds.y, bounds.x, &self.text, theme.label_fg, theme.label_bg);
    }

    fn handle_event(&mut self, _event: &InputEvent, _bounds: Rect) -> EventResult {
        EventResult::Ignored
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint {
            min_width: self.text.chars().count() as u16,
            min_height: 1,
            flex: 0,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Empty space. Flexible by default, fixed-width when built with `fixed`.
pub struct Spacer {
    fixed_width: Option<u16>,
}

impl Spacer {
    pub fn new() -> Self {
        Self { fixed_width: None }
    }

    pub fn fixed(width: u16) -> Self {
        Self {
            fixed_width: Some(width),
        }
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Spacer {
    fn draw(&self, _screen: &mut Screen, _bounds: Rect, _theme: &Theme) {}

    fn handle_event(&mut self, _event: &InputEvent, _bounds: Rect) -> EventResult {
        EventResult::Ignored
    }

    fn size_hint(&self) -> SizeHint {
        match self.fixed_width {
            Some(w) => SizeHint {
                min_width: w,
                min_height: 1,
                flex: 0,
            },
            None => SizeHint {
                min_width: 0,
                min_height: 1,
                flex: 0,
            },
        }
    }

    fn wants_tight_width(&self) -> bool {
        self.fixed_width.is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
