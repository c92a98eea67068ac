//! Widget trait and event results.

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use std::any::Any;

/// Result of handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// Event handled, stop propagation.
    Consumed,
    /// Event not handled, continue propagation.
    Ignored,
    /// Event triggered a named action.
    Action(String),
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Minimum-size hint a widget gives the layout engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeHint {
    pub min_width: u16,
    pub min_height: u16,
    /// Nonzero requests a flexible share of leftover height.
    pub flex: u16,
}

/// Common interface for all UI widgets.
///
/// Widgets draw themselves inside bounds handed down by the layout engine
/// and report whether they handled an event. Mouse handlers must check the
/// event position against their bounds before acting.
pub trait Widget: Any {
    fn draw(&self, screen: &mut Screen, bounds: Rect, theme: &Theme);

    fn handle_event(&mut self, event: &InputEvent, bounds: Rect) -> EventResult;

    fn size_hint(&self) -> SizeHint {
        SizeHint::default()
    }

    /// Whether the widget prefers a fixed width equal to its minimum.
    fn wants_tight_width(&self) -> bool {
        false
    }

    fn focusable(&self) -> bool {
        false
    }

    fn has_focus(&self) -> bool {
        false
    }

    fn set_focus(&mut self, _focused: bool) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Whether a mouse-positioned event falls inside bounds. Events without a
/// position are treated as in-bounds.
pub fn is_mouse_in_bounds(event: &InputEvent, bounds: Rect) -> bool {
    match event.mouse_position() {
        Some((row, col)) => bounds.contains(row, col),
        None => true,
    }
}
