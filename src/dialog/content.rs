//! Panel rendering and the open-session resource.
//!
//! A closed dialog's content does not exist: nothing is drawn, no focus is
//! held, no events are captured. The `OpenSession` records the resources
//! acquired on the closed→open transition and is released on every exit
//! path — setter close, dismiss, controlled sync, or wrapper drop.

use crate::dialog::context::DialogContext;
use crate::dialog::parts::{Body, Header};
use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::theme::Theme;
use crate::ui::widget::EventResult;
use tracing::debug;

/// Marker for the resources held while the dialog is open.
///
/// Dropping the session is the release: panel focus is cleared by the
/// owner, and with no session no events are captured and no cells drawn.
pub struct OpenSession {
    _private: (),
}

impl OpenSession {
    fn acquire() -> Self {
        debug!("open session acquired");
        Self { _private: () }
    }
}

impl Drop for OpenSession {
    fn drop(&mut self) {
        debug!("open session released");
    }
}

/// The floating panel: scrim, shadow, chrome, header, and body.
pub struct Content {
    header: Option<Header>,
    body: Body,
    session: Option<OpenSession>,
}

impl Content {
    pub fn new(header: Option<Header>, body: Body) -> Self {
        Self {
            header,
            body,
            session: None,
        }
    }

    /// Whether the open session (focus trap, modal capture) exists.
    pub fn is_mounted(&self) -> bool {
        self.session.is_some()
    }

    /// Align the session with the effective open value, acquiring or
    /// releasing resources as needed.
    pub fn reconcile(&mut self, open: bool) {
        match (open, self.session.is_some()) {
            (true, false) => {
                self.session = Some(OpenSession::acquire());
                self.body.focus_first();
            }
            (false, true) => {
                self.session = None;
                self.body.clear_focus();
            }
            _ => {}
        }
    }

    /// Draw the overlay pass. Emits nothing unless the context is open and
    /// carries a panel rectangle.
    pub fn draw(&self, screen: &mut Screen, theme: &Theme, ctx: &DialogContext) {
        if !ctx.is_open() {
            return;
        }
        let Some(panel) = ctx.panel else {
            return;
        };

        // Full-viewport scrim: everything underneath dims and the panel is
        // repainted on top.
        screen.dim_all();
        if theme.dialog_shadow {
            screen.draw_shadow(panel.y, panel.x, panel.width, panel.height);
        }
        screen.fill(
            panel.y,
            panel.x,
            panel.width,
            panel.height,
            ' ',
            theme.dialog_fg,
            theme.dialog_bg,
        );
        screen.draw_box(
            panel.y,
            panel.x,
            panel.width,
            panel.height,
            theme.dialog_border_fg,
            theme.dialog_border_bg,
        );
        if let Some(header) = &self.header {
            header.draw(screen, panel, theme);
        }
        self.body.draw(screen, panel, theme);
    }

    /// Route an event through the panel-side chains: dismiss, then the
    /// body, then modal capture.
    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut DialogContext) -> EventResult {
        let Some(panel) = ctx.panel else {
            return EventResult::Ignored;
        };

        let result = ctx
            .interactions
            .on_panel_event_before_content(event, panel, ctx.state);
        if result.is_consumed() {
            return result;
        }

        let result = self.body.handle_event(event, panel);
        if result.is_consumed() {
            return result;
        }

        ctx.interactions.on_panel_event_after_content(event)
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::label::Label;
    use crate::ui::tree::WidgetNode;

    fn content() -> Content {
        let body = Body::new(
            WidgetNode::vstack("body")
                .leaf("line", Label::new("hi"))
                .build(),
        );
        Content::new(Some(Header::new("Title")), body)
    }

    #[test]
    fn session_follows_open_value() {
        let mut content = content();
        assert!(!content.is_mounted());
        content.reconcile(true);
        assert!(content.is_mounted());
        content.reconcile(true);
        assert!(content.is_mounted());
        content.reconcile(false);
        assert!(!content.is_mounted());
    }
}
