//! Interaction behaviors and their precedence merge.
//!
//! Three independent behaviors contribute event handling to the trigger and
//! panel sides. They are merged as ordered chains: on the panel side the
//! order is Dismiss, then panel content, then ModalCapture; on the trigger
//! side ClickToggle runs ahead of the wrapped child widget. The first
//! behavior to consume an event ends the chain, so no two behaviors ever
//! act on the same event.

use crate::dialog::state::{OpenState, Ownership};
use crate::dialog::DialogConfig;
use crate::input::InputEvent;
use crate::ui::layout::Rect;
use crate::ui::widget::EventResult;
use tracing::debug;

/// The independent interaction behaviors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Pointer/keyboard activation of the trigger toggles the dialog.
    /// Enabled only for uncontrolled dialogs.
    ClickToggle,
    /// Escape or an outside press closes the dialog. Enabled when
    /// `close_outside` is set, in both ownership modes.
    Dismiss,
    /// While open the dialog claims every event the other behaviors and
    /// the panel content left unhandled, including scroll events.
    ModalCapture,
}

/// Behavior chains resolved once from ownership mode and configuration.
pub struct Interactions {
    trigger: Vec<Behavior>,
    panel: Vec<Behavior>,
}

impl Interactions {
    pub fn resolve(ownership: Ownership, config: &DialogConfig) -> Self {
        let mut trigger = Vec::new();
        if ownership == Ownership::Uncontrolled {
            trigger.push(Behavior::ClickToggle);
        }

        let mut panel = Vec::new();
        if config.close_outside {
            panel.push(Behavior::Dismiss);
        }
        panel.push(Behavior::ModalCapture);

        Self { trigger, panel }
    }

    /// Behaviors active on the trigger side, in precedence order.
    pub fn trigger_behaviors(&self) -> &[Behavior] {
        &self.trigger
    }

    /// Behaviors active on the panel side, in precedence order. Panel
    /// content is dispatched between `Dismiss` and `ModalCapture`.
    pub fn panel_behaviors(&self) -> &[Behavior] {
        &self.panel
    }

    /// Trigger-side chain, run before the wrapped child widget sees the
    /// event.
    pub fn on_trigger_event(
        &self,
        event: &InputEvent,
        bounds: Rect,
        child_focused: bool,
        state: &mut OpenState,
    ) -> EventResult {
        for behavior in &self.trigger {
            if *behavior != Behavior::ClickToggle {
                continue;
            }
            let activated = match event {
                InputEvent::MouseDown { row, col } => bounds.contains(*row, *col),
                InputEvent::Enter | InputEvent::Char(' ') => child_focused,
                _ => false,
            };
            if activated {
                let next = !state.open();
                debug!(next, "trigger toggled dialog");
                state.set_open(next);
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    /// Panel-side chain ahead of the content: the Dismiss behavior.
    pub fn on_panel_event_before_content(
        &self,
        event: &InputEvent,
        panel: Rect,
        state: &mut OpenState,
    ) -> EventResult {
        for behavior in &self.panel {
            if *behavior != Behavior::Dismiss {
                continue;
            }
            let dismissed = match event {
                InputEvent::Escape => true,
                InputEvent::MouseDown { row, col } => !panel.contains(*row, *col),
                _ => false,
            };
            if dismissed {
                debug!(?event, "dismiss behavior requested close");
                state.set_open(false);
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    /// Panel-side chain behind the content: the ModalCapture behavior.
    /// Consuming scroll events here is what locks the surface underneath.
    pub fn on_panel_event_after_content(&self, _event: &InputEvent) -> EventResult {
        if self.panel.contains(&Behavior::ModalCapture) {
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogConfig;

    fn uncontrolled(open: bool) -> OpenState {
        OpenState::resolve(None, None, open)
    }

    #[test]
    fn click_toggle_only_for_uncontrolled() {
        let config = DialogConfig::default();
        let controlled = Interactions::resolve(Ownership::Controlled, &config);
        assert!(controlled.trigger_behaviors().is_empty());

        let uncontrolled = Interactions::resolve(Ownership::Uncontrolled, &config);
        assert_eq!(uncontrolled.trigger_behaviors(), [Behavior::ClickToggle]);
    }

    #[test]
    fn dismiss_gated_on_close_outside() {
        let on = Interactions::resolve(Ownership::Uncontrolled, &DialogConfig::default());
        assert_eq!(on.panel_behaviors(), [Behavior::Dismiss, Behavior::ModalCapture]);

        let config = DialogConfig {
            close_outside: false,
            ..DialogConfig::default()
        };
        let off = Interactions::resolve(Ownership::Uncontrolled, &config);
        assert_eq!(off.panel_behaviors(), [Behavior::ModalCapture]);
    }

    #[test]
    fn trigger_click_toggles_open_state() {
        let config = DialogConfig::default();
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        let mut state = uncontrolled(false);
        let bounds = Rect::new(2, 2, 10, 1);

        let result = interactions.on_trigger_event(
            &InputEvent::MouseDown { row: 2, col: 5 },
            bounds,
            false,
            &mut state,
        );
        assert_eq!(result, EventResult::Consumed);
        assert!(state.open());
    }

    #[test]
    fn trigger_click_outside_bounds_ignored() {
        let config = DialogConfig::default();
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        let mut state = uncontrolled(false);
        let bounds = Rect::new(2, 2, 10, 1);

        let result = interactions.on_trigger_event(
            &InputEvent::MouseDown { row: 9, col: 9 },
            bounds,
            false,
            &mut state,
        );
        assert_eq!(result, EventResult::Ignored);
        assert!(!state.open());
    }

    #[test]
    fn keyboard_activation_requires_child_focus() {
        let config = DialogConfig::default();
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        let mut state = uncontrolled(false);
        let bounds = Rect::new(0, 0, 5, 1);

        assert_eq!(
            interactions.on_trigger_event(&InputEvent::Enter, bounds, false, &mut state),
            EventResult::Ignored
        );
        assert_eq!(
            interactions.on_trigger_event(&InputEvent::Enter, bounds, true, &mut state),
            EventResult::Consumed
        );
        assert!(state.open());
    }

    #[test]
    fn escape_and_outside_press_dismiss() {
        let config = DialogConfig::default();
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        let panel = Rect::new(10, 5, 40, 10);

        let mut state = uncontrolled(true);
        interactions.on_panel_event_before_content(&InputEvent::Escape, panel, &mut state);
        assert!(!state.open());

        let mut state = uncontrolled(true);
        interactions.on_panel_event_before_content(
            &InputEvent::MouseDown { row: 0, col: 0 },
            panel,
            &mut state,
        );
        assert!(!state.open());
    }

    #[test]
    fn press_inside_panel_is_not_a_dismiss() {
        let config = DialogConfig::default();
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        let panel = Rect::new(10, 5, 40, 10);
        let mut state = uncontrolled(true);

        let result = interactions.on_panel_event_before_content(
            &InputEvent::MouseDown { row: 7, col: 20 },
            panel,
            &mut state,
        );
        assert_eq!(result, EventResult::Ignored);
        assert!(state.open());
    }

    #[test]
    fn no_dismiss_when_close_outside_disabled() {
        let config = DialogConfig {
            close_outside: false,
            ..DialogConfig::default()
        };
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        let panel = Rect::new(10, 5, 40, 10);
        let mut state = uncontrolled(true);

        interactions.on_panel_event_before_content(&InputEvent::Escape, panel, &mut state);
        interactions.on_panel_event_before_content(
            &InputEvent::MouseDown { row: 0, col: 0 },
            panel,
            &mut state,
        );
        assert!(state.open());
    }

    #[test]
    fn modal_capture_consumes_leftovers_and_scrolls() {
        let config = DialogConfig::default();
        let interactions = Interactions::resolve(Ownership::Uncontrolled, &config);
        assert_eq!(
            interactions.on_panel_event_after_content(&InputEvent::Char('x')),
            EventResult::Consumed
        );
        assert_eq!(
            interactions.on_panel_event_after_content(&InputEvent::ScrollDown { row: 1, col: 1 }),
            EventResult::Consumed
        );
    }
}
