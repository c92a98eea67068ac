//! The floating dialog primitive.
//!
//! A `Dialog` owns the open-state controller, the immutable configuration,
//! the resolved interaction behaviors, an optional trigger, and the panel
//! content. It is assembled through `DialogBuilder`; missing required
//! parts are composition errors reported at build time.
//!
//! Rendering follows the host's frame loop: `draw_trigger` paints the
//! trigger wherever the host lays it out, and `draw` runs the top-level
//! overlay pass (scrim, shadow, chrome, content) — or paints nothing at
//! all while closed. `handle_event` is offered every input event before
//! the host's own handling; while open it consumes everything except
//! actions bubbling out of the panel's own widgets.

pub mod config;
pub mod content;
pub mod context;
pub mod interactions;
pub mod parts;
pub mod presets;
pub mod state;
pub mod trigger;

pub use config::{panel_origin, panel_rect, panel_size, DialogConfig, DialogPlacement, DialogSize};
pub use content::{Content, OpenSession};
pub use context::{DialogContext, DialogError};
pub use interactions::{Behavior, Interactions};
pub use parts::{Body, Header};
pub use state::{OpenChangeHandler, OpenState, Ownership};
pub use trigger::Trigger;

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::tree::WidgetNode;
use crate::ui::widget::{EventResult, Widget};
use tracing::debug;

/// A floating modal dialog.
pub struct Dialog {
    state: OpenState,
    config: DialogConfig,
    interactions: Interactions,
    trigger: Option<Trigger>,
    content: Content,
    /// Panel rect from the last pass, while open.
    panel: Option<Rect>,
    screen_size: (u16, u16),
}

impl Dialog {
    pub fn builder() -> DialogBuilder {
        DialogBuilder::new()
    }

    /// The effective open value.
    pub fn is_open(&self) -> bool {
        self.state.open()
    }

    pub fn ownership(&self) -> Ownership {
        self.state.ownership()
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Whether the open session (focus trap, modal capture) currently
    /// exists. Mirrors `is_open` after every pass.
    pub fn is_mounted(&self) -> bool {
        self.content.is_mounted()
    }

    /// Request a new open value through the exposed setter.
    pub fn set_open(&mut self, value: bool) {
        self.state.set_open(value);
        self.reconcile();
    }

    /// Toggle through the exposed setter.
    pub fn toggle(&mut self) {
        self.set_open(!self.state.open());
    }

    /// Accept the caller's updated controlled value.
    pub fn sync_open(&mut self, value: bool) {
        self.state.sync(value);
        self.reconcile();
    }

    /// Tell the dialog the host screen size without drawing.
    pub fn set_screen_size(&mut self, width: u16, height: u16) {
        self.screen_size = (width, height);
    }

    pub fn trigger(&self) -> Option<&Trigger> {
        self.trigger.as_ref()
    }

    pub fn trigger_mut(&mut self) -> Option<&mut Trigger> {
        self.trigger.as_mut()
    }

    pub fn body(&self) -> &Body {
        self.content.body()
    }

    pub fn body_mut(&mut self) -> &mut Body {
        self.content.body_mut()
    }

    /// Panel rectangle from the last pass, while open.
    pub fn panel(&self) -> Option<Rect> {
        self.panel
    }

    fn current_panel(&self) -> Rect {
        config::panel_rect(&self.config, self.screen_size.0, self.screen_size.1)
    }

    fn reconcile(&mut self) {
        self.content.reconcile(self.state.open());
        if !self.state.open() {
            self.panel = None;
        }
    }

    /// Draw the trigger at host-provided bounds, recording them for
    /// hit-testing.
    pub fn draw_trigger(&mut self, screen: &mut Screen, bounds: Rect, theme: &Theme) {
        let ctx = DialogContext {
            state: &mut self.state,
            config: &self.config,
            interactions: &self.interactions,
            panel: self.panel,
        };
        if let Some(trigger) = &mut self.trigger {
            trigger.draw(screen, bounds, theme, &ctx);
        }
    }

    /// The overlay pass. Paints nothing while closed.
    pub fn draw(&mut self, screen: &mut Screen, theme: &Theme) {
        let (w, h) = screen.size();
        self.screen_size = (w, h);
        self.reconcile();

        if !self.state.open() {
            return;
        }
        let panel = self.current_panel();
        self.panel = Some(panel);

        let ctx = DialogContext {
            state: &mut self.state,
            config: &self.config,
            interactions: &self.interactions,
            panel: Some(panel),
        };
        self.content.draw(screen, theme, &ctx);
    }

    /// Offer an input event to the dialog.
    ///
    /// While open the panel-side chains run (dismiss, content, modal
    /// capture); while closed only the trigger sees events. `Action`
    /// results from panel widgets bubble out for the host to interpret.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let result = if self.state.open() {
            let panel = self.current_panel();
            self.panel = Some(panel);
            let mut ctx = DialogContext {
                state: &mut self.state,
                config: &self.config,
                interactions: &self.interactions,
                panel: Some(panel),
            };
            self.content.handle_event(event, &mut ctx)
        } else {
            let mut ctx = DialogContext {
                state: &mut self.state,
                config: &self.config,
                interactions: &self.interactions,
                panel: None,
            };
            match &mut self.trigger {
                Some(trigger) => trigger.handle_event(event, &mut ctx),
                None => EventResult::Ignored,
            }
        };

        self.reconcile();
        result
    }
}

/// Assembles a `Dialog` from caller options and parts.
pub struct DialogBuilder {
    open: Option<bool>,
    on_open_change: Option<OpenChangeHandler>,
    initial_open: bool,
    close_outside: bool,
    size: DialogSize,
    placement: DialogPlacement,
    title: Option<String>,
    trigger: Option<Box<dyn Widget>>,
    body: Option<WidgetNode>,
}

impl DialogBuilder {
    pub fn new() -> Self {
        Self {
            open: None,
            on_open_change: None,
            initial_open: false,
            close_outside: true,
            size: DialogSize::default(),
            placement: DialogPlacement::default(),
            title: None,
            trigger: None,
            body: None,
        }
    }

    /// Supply a controlled open value. Fixes ownership as controlled.
    pub fn open(mut self, value: bool) -> Self {
        self.open = Some(value);
        self
    }

    /// Receive change intents in controlled mode.
    pub fn on_open_change(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(handler));
        self
    }

    /// Seed the local value for uncontrolled dialogs. Default closed.
    pub fn initial_open(mut self, value: bool) -> Self {
        self.initial_open = value;
        self
    }

    /// Enable or disable the dismiss behavior. Default enabled.
    pub fn close_outside(mut self, value: bool) -> Self {
        self.close_outside = value;
        self
    }

    pub fn size(mut self, size: DialogSize) -> Self {
        self.size = size;
        self
    }

    pub fn placement(mut self, placement: DialogPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Title for the header row. Without one the panel has no header.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Wrap a single child widget as the trigger.
    pub fn trigger(mut self, child: impl Widget + 'static) -> Self {
        self.trigger = Some(Box::new(child));
        self
    }

    /// The panel content tree. Required.
    pub fn body(mut self, root: WidgetNode) -> Self {
        self.body = Some(root);
        self
    }

    pub fn build(self) -> Result<Dialog, DialogError> {
        let body = self.body.ok_or(DialogError::MissingContent)?;

        let config = DialogConfig {
            size: self.size,
            placement: self.placement,
            close_outside: self.close_outside,
        };
        let state = OpenState::resolve(self.open, self.on_open_change, self.initial_open);
        let interactions = Interactions::resolve(state.ownership(), &config);

        debug!(
            ownership = ?state.ownership(),
            size = ?config.size,
            placement = ?config.placement,
            close_outside = config.close_outside,
            "dialog built"
        );

        let mut dialog = Dialog {
            state,
            config,
            interactions,
            trigger: self.trigger.map(Trigger::new),
            content: Content::new(self.title.map(Header::new), Body::new(body)),
            panel: None,
            screen_size: (80, 25),
        };
        dialog.reconcile();
        Ok(dialog)
    }
}

impl Default for DialogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::button::Button;
    use crate::ui::label::{Label, Spacer};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_body() -> WidgetNode {
        WidgetNode::vstack("body")
            .leaf("line", Label::new("Are you sure?"))
            .child(WidgetNode::leaf("gap", Spacer::new()))
            .child(
                WidgetNode::hstack("buttons")
                    .leaf("ok", Button::new("OK", "ok"))
                    .leaf("cancel", Button::new("Cancel", "cancel"))
                    .spacing(2)
                    .build(),
            )
            .build()
    }

    fn sample_dialog() -> Dialog {
        Dialog::builder()
            .title("Demo")
            .trigger(Button::new("Open", "open_demo"))
            .body(sample_body())
            .build()
            .unwrap()
    }

    fn trigger_bounds() -> Rect {
        Rect::new(2, 1, 10, 1)
    }

    /// Draw a full frame the way a host application would.
    fn frame(dialog: &mut Dialog, screen: &mut Screen, theme: &Theme) {
        screen.clear_with(theme.surface_fg, theme.surface_bg);
        dialog.draw_trigger(screen, trigger_bounds(), theme);
        dialog.draw(screen, theme);
    }

    #[test]
    fn builder_without_body_is_a_composition_error() {
        let result = Dialog::builder().title("Oops").build();
        assert!(matches!(result, Err(DialogError::MissingContent)));
    }

    #[test]
    fn closed_dialog_draws_nothing() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        dialog.draw(&mut screen, &Theme::classic());

        for row in 0..25 {
            for col in 0..80 {
                assert_eq!(screen.get(row, col).unwrap().ch, ' ');
            }
        }
        assert!(!dialog.is_mounted());
    }

    #[test]
    fn open_dialog_draws_one_panel_in_overlay_pass() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        let theme = Theme::classic();
        dialog.set_open(true);
        frame(&mut dialog, &mut screen, &theme);

        // Small/Bottom on 80x25: 40x10 panel at (20, 10).
        let panel = dialog.panel().unwrap();
        assert_eq!(panel, Rect::new(20, 10, 40, 10));
        assert_eq!(screen.get(10, 20).unwrap().ch, '┌');
        assert_eq!(screen.get(19, 59).unwrap().ch, '┘');
        // Scrim dimmed the host surface outside the panel.
        assert_eq!(screen.get(0, 0).unwrap().fg, crate::terminal::Color::DarkGray);
    }

    #[test]
    fn setter_toggles_uncontrolled_and_mounts_content() {
        let mut dialog = sample_dialog();
        assert!(!dialog.is_open());
        dialog.set_open(true);
        assert!(dialog.is_open());
        assert!(dialog.is_mounted());
        dialog.set_open(false);
        assert!(!dialog.is_open());
        assert!(!dialog.is_mounted());
    }

    #[test]
    fn trigger_click_opens_then_outside_click_closes() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        let theme = Theme::classic();
        frame(&mut dialog, &mut screen, &theme);
        assert_eq!(dialog.trigger().unwrap().data_state(), "closed");

        // Click inside the trigger bounds.
        let result = dialog.handle_event(&InputEvent::MouseDown { row: 1, col: 4 });
        assert_eq!(result, EventResult::Consumed);
        assert!(dialog.is_open());
        assert!(dialog.is_mounted());

        frame(&mut dialog, &mut screen, &theme);
        assert_eq!(dialog.trigger().unwrap().data_state(), "open");

        // Click outside the panel.
        let result = dialog.handle_event(&InputEvent::MouseDown { row: 0, col: 0 });
        assert_eq!(result, EventResult::Consumed);
        assert!(!dialog.is_open());
        assert!(!dialog.is_mounted());

        frame(&mut dialog, &mut screen, &theme);
        assert_eq!(dialog.trigger().unwrap().data_state(), "closed");
        assert_eq!(screen.get(10, 20).unwrap().ch, ' ');
    }

    #[test]
    fn controlled_value_is_authoritative_and_intents_forward() {
        let intents = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&intents);
        let mut dialog = Dialog::builder()
            .open(true)
            .on_open_change(move |v| sink.borrow_mut().push(v))
            .trigger(Button::new("Open", "open_demo"))
            .body(sample_body())
            .build()
            .unwrap();
        let mut screen = Screen::new(80, 25);
        let theme = Theme::classic();
        frame(&mut dialog, &mut screen, &theme);

        // The trigger sits outside the open panel, so the press is a
        // dismiss: the intent forwards but the displayed value holds.
        dialog.handle_event(&InputEvent::MouseDown { row: 1, col: 4 });
        assert_eq!(*intents.borrow(), vec![false]);
        assert!(dialog.is_open());
        assert!(dialog.is_mounted());

        // Escape forwards another intent; still no local movement.
        dialog.handle_event(&InputEvent::Escape);
        assert_eq!(*intents.borrow(), vec![false, false]);
        assert!(dialog.is_open());

        // Only the caller's sync moves the displayed value.
        dialog.sync_open(false);
        assert!(!dialog.is_open());
        assert!(!dialog.is_mounted());
    }

    #[test]
    fn controlled_open_drives_panel() {
        // The controlled value alone must mount and render the panel,
        // even though the uncontrolled seed would be closed.
        let mut dialog = Dialog::builder()
            .open(true)
            .initial_open(false)
            .body(sample_body())
            .build()
            .unwrap();
        let mut screen = Screen::new(80, 25);
        dialog.draw(&mut screen, &Theme::classic());

        assert!(dialog.is_mounted());
        assert!(dialog.panel().is_some());
        assert_eq!(screen.get(10, 20).unwrap().ch, '┌');
    }

    #[test]
    fn close_outside_false_blocks_dismissal_but_stays_modal() {
        let mut dialog = Dialog::builder()
            .close_outside(false)
            .body(sample_body())
            .build()
            .unwrap();
        let mut screen = Screen::new(80, 25);
        dialog.set_open(true);
        dialog.draw(&mut screen, &Theme::classic());

        assert_eq!(
            dialog.handle_event(&InputEvent::MouseDown { row: 0, col: 0 }),
            EventResult::Consumed
        );
        assert_eq!(dialog.handle_event(&InputEvent::Escape), EventResult::Consumed);
        assert!(dialog.is_open(), "outside press and escape must not close");
    }

    #[test]
    fn escape_dismisses_by_default() {
        let mut dialog = sample_dialog();
        dialog.set_open(true);
        dialog.handle_event(&InputEvent::Escape);
        assert!(!dialog.is_open());
    }

    #[test]
    fn focus_is_trapped_in_panel_and_released_on_close() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        dialog.set_open(true);
        dialog.draw(&mut screen, &Theme::classic());

        assert_eq!(dialog.body().focus_path(), ["body", "buttons", "ok"]);
        dialog.handle_event(&InputEvent::Tab);
        assert_eq!(dialog.body().focus_path(), ["body", "buttons", "cancel"]);
        dialog.handle_event(&InputEvent::Tab);
        assert_eq!(
            dialog.body().focus_path(),
            ["body", "buttons", "ok"],
            "tab must wrap inside the panel"
        );

        dialog.set_open(false);
        assert!(dialog.body().focus_path().is_empty());

        dialog.set_open(true);
        assert_eq!(dialog.body().focus_path(), ["body", "buttons", "ok"]);
    }

    #[test]
    fn scroll_locked_while_open_only() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        let theme = Theme::classic();
        frame(&mut dialog, &mut screen, &theme);

        let scroll = InputEvent::ScrollDown { row: 3, col: 3 };
        assert_eq!(dialog.handle_event(&scroll), EventResult::Ignored);

        dialog.set_open(true);
        frame(&mut dialog, &mut screen, &theme);
        assert_eq!(dialog.handle_event(&scroll), EventResult::Consumed);
    }

    #[test]
    fn panel_button_actions_bubble_to_host() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        dialog.set_open(true);
        dialog.draw(&mut screen, &Theme::classic());

        // First focusable is the OK button.
        let result = dialog.handle_event(&InputEvent::Enter);
        assert_eq!(result, EventResult::Action("ok".into()));
        assert!(dialog.is_open(), "actions are the host's to interpret");
    }

    #[test]
    fn keys_other_than_actions_are_captured_while_open() {
        let mut dialog = sample_dialog();
        let mut screen = Screen::new(80, 25);
        dialog.set_open(true);
        dialog.draw(&mut screen, &Theme::classic());

        assert_eq!(dialog.handle_event(&InputEvent::Char('x')), EventResult::Consumed);
        assert_eq!(dialog.handle_event(&InputEvent::Up), EventResult::Consumed);
    }

    #[test]
    fn size_and_placement_flow_into_panel_rect() {
        let mut dialog = Dialog::builder()
            .size(DialogSize::Medium)
            .placement(DialogPlacement::Top)
            .body(sample_body())
            .build()
            .unwrap();
        let mut screen = Screen::new(80, 25);
        dialog.set_open(true);
        dialog.draw(&mut screen, &Theme::classic());

        // Medium 56x14 on 80x25, Top: x=12, y=(25-14)/3=3.
        assert_eq!(dialog.panel().unwrap(), Rect::new(12, 3, 56, 14));
    }
}
