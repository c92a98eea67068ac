//! Header and body layout parts.

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::Rect;
use crate::ui::theme::Theme;
use crate::ui::tree::{WidgetNode, WidgetTree};
use crate::ui::widget::{EventResult, Widget};

/// The dialog title row.
///
/// Always rendered as one centered line on the panel's top border, in the
/// theme's title colors. Callers cannot change its placement or weight;
/// the heading level of a dialog is part of the chrome, not of the content.
pub struct Header {
    title: String,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn draw(&self, screen: &mut Screen, panel: Rect, theme: &Theme) {
        let text = format!(" {} ", self.title);
        let len = text.chars().count() as u16;
        if len > panel.width {
            return;
        }
        let x = panel.x + (panel.width - len) / 2;
        screen.write_str(panel.y, x, &text, theme.dialog_title_fg, theme.dialog_title_bg);
    }
}

/// The dialog content area: a widget tree drawn inside the chrome with one
/// cell of padding.
pub struct Body {
    tree: WidgetTree,
}

impl Body {
    pub fn new(root: WidgetNode) -> Self {
        Self {
            tree: WidgetTree::new(root),
        }
    }

    /// Content rectangle inside the panel chrome.
    pub fn content_rect(panel: Rect) -> Rect {
        panel.inset(1)
    }

    pub fn draw(&self, screen: &mut Screen, panel: Rect, theme: &Theme) {
        self.tree.draw(screen, Self::content_rect(panel), theme);
    }

    pub fn handle_event(&mut self, event: &InputEvent, panel: Rect) -> EventResult {
        self.tree.handle_event(event, Self::content_rect(panel))
    }

    pub fn focus_first(&mut self) {
        self.tree.focus_first();
    }

    pub fn clear_focus(&mut self) {
        self.tree.clear_focus();
    }

    pub fn focus_path(&self) -> &[String] {
        self.tree.focus_path()
    }

    pub fn widget(&self, path: &[&str]) -> Option<&dyn Widget> {
        self.tree.root().get_widget(path)
    }

    pub fn widget_mut(&mut self, path: &[&str]) -> Option<&mut dyn Widget> {
        self.tree.root_mut().get_widget_mut(path)
    }
}
