//! The trigger part: wraps exactly one child widget.

use crate::dialog::context::DialogContext;
use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::widget::{EventResult, Widget};

/// Wraps a single child widget and merges dialog interaction handling in
/// front of the child's own. Rendering is delegated to the child
/// unchanged; the trigger only records its bounds for hit-testing and
/// exposes an open/closed state label.
pub struct Trigger {
    child: Box<dyn Widget>,
    bounds: Option<Rect>,
    state_label: &'static str,
}

impl Trigger {
    /// Wrap one child widget. The single-parameter signature is the
    /// contract: a trigger has exactly one child, never a list.
    pub fn new(child: Box<dyn Widget>) -> Self {
        Self {
            child,
            bounds: None,
            state_label: "closed",
        }
    }

    /// The `data-state` label from the last draw: `"open"` or `"closed"`.
    pub fn data_state(&self) -> &'static str {
        self.state_label
    }

    /// Bounds recorded by the last draw.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn draw(&mut self, screen: &mut Screen, bounds: Rect, theme: &Theme, ctx: &DialogContext) {
        self.bounds = Some(bounds);
        self.state_label = if ctx.is_open() { "open" } else { "closed" };
        self.child.draw(screen, bounds, theme);
    }

    /// Run the trigger-side chain, then the child's own handler.
    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut DialogContext) -> EventResult {
        let Some(bounds) = self.bounds else {
            return EventResult::Ignored;
        };

        let result = ctx.interactions.on_trigger_event(
            event,
            bounds,
            self.child.has_focus(),
            ctx.state,
        );
        if result.is_consumed() {
            return result;
        }

        self.child.handle_event(event, bounds)
    }

    /// Forward focus to the wrapped child; the host application owns focus
    /// outside the panel.
    pub fn set_focus(&mut self, focused: bool) {
        self.child.set_focus(focused);
    }

    pub fn has_focus(&self) -> bool {
        self.child.has_focus()
    }

    pub fn child(&self) -> &dyn Widget {
        self.child.as_ref()
    }
}
