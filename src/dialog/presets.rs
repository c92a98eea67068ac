//! Stock dialogs assembled from the primitive: message, confirm, prompt.
//!
//! These are opened programmatically by the host (no trigger); dismissal
//! by Escape or an outside press counts as cancellation.

use crate::dialog::{Dialog, DialogPlacement, DialogSize};
use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::button::Button;
use crate::ui::label::{Label, Spacer};
use crate::ui::textfield::TextField;
use crate::ui::theme::Theme;
use crate::ui::tree::{ContainerBuilder, WidgetNode};
use crate::ui::widget::EventResult;

fn lines_into(mut root: ContainerBuilder, text: &str) -> ContainerBuilder {
    for (idx, line) in text.lines().enumerate() {
        root = root.leaf(format!("line_{idx}"), Label::new(line));
    }
    root
}

/// A message box with a single OK button.
pub struct MessageDialog {
    dialog: Dialog,
}

impl MessageDialog {
    pub fn new(title: impl Into<String>, text: &str) -> Self {
        let body = lines_into(WidgetNode::vstack("body"), text)
            .child(WidgetNode::leaf("gap", Spacer::new()))
            .child(
                WidgetNode::hstack("buttons")
                    .child(WidgetNode::leaf("left", Spacer::new()))
                    .leaf("ok", Button::new("OK", "ok"))
                    .child(WidgetNode::leaf("right", Spacer::new()))
                    .build(),
            )
            .build();

        let dialog = Dialog::builder()
            .title(title)
            .size(DialogSize::Small)
            .body(body)
            .build()
            .expect("body is set");
        Self { dialog }
    }

    pub fn open(&mut self) {
        self.dialog.set_open(true);
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn draw(&mut self, screen: &mut Screen, theme: &Theme) {
        self.dialog.draw(screen, theme);
    }

    /// Returns true when the message was acknowledged or dismissed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        if !self.dialog.is_open() {
            return false;
        }
        match self.dialog.handle_event(event) {
            EventResult::Action(action) if action == "ok" => {
                self.dialog.set_open(false);
                true
            }
            _ => !self.dialog.is_open(),
        }
    }
}

/// The outcome of a confirm dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
    Cancel,
}

/// A yes/no/cancel question.
pub struct ConfirmDialog {
    dialog: Dialog,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, text: &str) -> Self {
        let body = lines_into(WidgetNode::vstack("body"), text)
            .child(WidgetNode::leaf("gap", Spacer::new()))
            .child(
                WidgetNode::hstack("buttons")
                    .child(WidgetNode::leaf("left", Spacer::new()))
                    .leaf("yes", Button::new("Yes", "yes"))
                    .child(WidgetNode::leaf("gap1", Spacer::fixed(2)))
                    .leaf("no", Button::new("No", "no"))
                    .child(WidgetNode::leaf("gap2", Spacer::fixed(2)))
                    .leaf("cancel", Button::new("Cancel", "cancel"))
                    .child(WidgetNode::leaf("right", Spacer::new()))
                    .build(),
            )
            .build();

        let dialog = Dialog::builder()
            .title(title)
            .size(DialogSize::Small)
            .body(body)
            .build()
            .expect("body is set");
        Self { dialog }
    }

    pub fn open(&mut self) {
        self.dialog.set_open(true);
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn draw(&mut self, screen: &mut Screen, theme: &Theme) {
        self.dialog.draw(screen, theme);
    }

    /// Returns the user's choice once one is made. Dismissal reads as
    /// Cancel.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ConfirmChoice> {
        if !self.dialog.is_open() {
            return None;
        }
        match self.dialog.handle_event(event) {
            EventResult::Action(action) => {
                let choice = match action.as_str() {
                    "yes" => ConfirmChoice::Yes,
                    "no" => ConfirmChoice::No,
                    _ => ConfirmChoice::Cancel,
                };
                self.dialog.set_open(false);
                Some(choice)
            }
            _ if !self.dialog.is_open() => Some(ConfirmChoice::Cancel),
            _ => None,
        }
    }
}

/// The outcome of a prompt dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome {
    Submitted(String),
    Cancelled,
}

/// A single text input with OK/Cancel.
pub struct PromptDialog {
    dialog: Dialog,
}

impl PromptDialog {
    pub fn new(title: impl Into<String>, label: &str) -> Self {
        let body = WidgetNode::vstack("body")
            .leaf("label", Label::new(label))
            .leaf("input", TextField::new())
            .child(WidgetNode::leaf("gap", Spacer::new()))
            .child(
                WidgetNode::hstack("buttons")
                    .child(WidgetNode::leaf("left", Spacer::new()))
                    .leaf("ok", Button::new("OK", "ok"))
                    .child(WidgetNode::leaf("gap1", Spacer::fixed(2)))
                    .leaf("cancel", Button::new("Cancel", "cancel"))
                    .child(WidgetNode::leaf("right", Spacer::new()))
                    .build(),
            )
            .build();

        let dialog = Dialog::builder()
            .title(title)
            .size(DialogSize::Medium)
            .placement(DialogPlacement::Top)
            .body(body)
            .build()
            .expect("body is set");
        Self { dialog }
    }

    pub fn open(&mut self) {
        self.dialog.set_open(true);
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn draw(&mut self, screen: &mut Screen, theme: &Theme) {
        self.dialog.draw(screen, theme);
    }

    pub fn input_text(&self) -> String {
        self.dialog
            .body()
            .widget(&["body", "input"])
            .and_then(|w| w.as_any().downcast_ref::<TextField>())
            .map(|f| f.text())
            .unwrap_or_default()
    }

    /// Insert clipboard content into the input field.
    pub fn paste(&mut self, content: &str) {
        if let Some(field) = self
            .dialog
            .body_mut()
            .widget_mut(&["body", "input"])
            .and_then(|w| w.as_any_mut().downcast_mut::<TextField>())
        {
            field.paste(content);
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<PromptOutcome> {
        if !self.dialog.is_open() {
            return None;
        }
        match self.dialog.handle_event(event) {
            EventResult::Action(action) => {
                let outcome = if action == "ok" {
                    PromptOutcome::Submitted(self.input_text())
                } else {
                    PromptOutcome::Cancelled
                };
                self.dialog.set_open(false);
                Some(outcome)
            }
            _ if !self.dialog.is_open() => Some(PromptOutcome::Cancelled),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_closes_on_ok() {
        let mut dialog = MessageDialog::new("Note", "Saved.");
        dialog.open();
        let mut screen = Screen::new(80, 25);
        dialog.draw(&mut screen, &Theme::classic());

        // First focusable is the OK button; Enter acknowledges.
        assert!(dialog.handle_event(&InputEvent::Enter));
        assert!(!dialog.is_open());
    }

    #[test]
    fn confirm_maps_buttons_and_dismissal() {
        let mut dialog = ConfirmDialog::new("Quit", "Save changes?");
        dialog.open();
        let mut screen = Screen::new(80, 25);
        dialog.draw(&mut screen, &Theme::classic());

        // Focus starts on Yes; Tab to No and activate.
        dialog.handle_event(&InputEvent::Tab);
        assert_eq!(
            dialog.handle_event(&InputEvent::Enter),
            Some(ConfirmChoice::No)
        );
        assert!(!dialog.is_open());

        let mut dialog = ConfirmDialog::new("Quit", "Save changes?");
        dialog.open();
        dialog.draw(&mut screen, &Theme::classic());
        assert_eq!(
            dialog.handle_event(&InputEvent::Escape),
            Some(ConfirmChoice::Cancel)
        );
    }

    #[test]
    fn prompt_collects_typed_and_pasted_text() {
        let mut dialog = PromptDialog::new("Rename", "New name:");
        dialog.open();
        let mut screen = Screen::new(80, 25);
        dialog.draw(&mut screen, &Theme::classic());

        // The text field is the first focusable widget.
        dialog.handle_event(&InputEvent::Char('a'));
        dialog.paste("bc");
        assert_eq!(dialog.input_text(), "abc");

        // Tab to OK and submit.
        dialog.handle_event(&InputEvent::Tab);
        assert_eq!(
            dialog.handle_event(&InputEvent::Enter),
            Some(PromptOutcome::Submitted("abc".into()))
        );
    }
}
