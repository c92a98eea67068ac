//! Widget tree: hierarchical composition, layout, focus cycling, and event
//! dispatch for dialog content.
//!
//! Focus traversal wraps at both ends, so while a tree is receiving events
//! keyboard focus cannot leave it. The dialog core relies on this as its
//! focus trap.

use crate::input::InputEvent;
use crate::screen::Screen;
use crate::ui::layout::{compute_child_bounds, LayoutItem, Rect, Size};
use crate::ui::theme::Theme;
use crate::ui::widget::{EventResult, Widget};

/// Container stacking direction.
#[derive(Clone, Debug)]
pub enum ContainerLayout {
    VStack { spacing: u16, padding: u16 },
    HStack { spacing: u16, padding: u16 },
}

/// A node in the widget tree.
pub enum WidgetNode {
    Leaf {
        id: String,
        widget: Box<dyn Widget>,
    },
    Container {
        id: String,
        layout: ContainerLayout,
        children: Vec<WidgetNode>,
    },
}

impl WidgetNode {
    pub fn leaf(id: impl Into<String>, widget: impl Widget + 'static) -> Self {
        WidgetNode::Leaf {
            id: id.into(),
            widget: Box::new(widget),
        }
    }

    pub fn vstack(id: impl Into<String>) -> ContainerBuilder {
        ContainerBuilder {
            id: id.into(),
            layout: ContainerLayout::VStack { spacing: 0, padding: 0 },
            children: Vec::new(),
        }
    }

    pub fn hstack(id: impl Into<String>) -> ContainerBuilder {
        ContainerBuilder {
            id: id.into(),
            layout: ContainerLayout::HStack { spacing: 0, padding: 0 },
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            WidgetNode::Leaf { id, .. } => id,
            WidgetNode::Container { id, .. } => id,
        }
    }

    fn to_layout_item(&self) -> LayoutItem {
        match self {
            WidgetNode::Leaf { id, widget } => {
                let hint = widget.size_hint();
                let mut item = LayoutItem::leaf(id.clone());
                item.min_width = hint.min_width;
                item.min_height = hint.min_height;
                if widget.wants_tight_width() && hint.min_width > 0 {
                    item.width = Size::Fixed(hint.min_width);
                }
                if hint.flex > 0 {
                    item.height = Size::Flex(hint.flex);
                } else if hint.min_height > 0 {
                    item.height = Size::Fixed(hint.min_height);
                }
                item
            }
            WidgetNode::Container { children, layout, .. } => {
                let items: Vec<LayoutItem> = children.iter().map(|c| c.to_layout_item()).collect();
                match layout {
                    ContainerLayout::VStack { spacing, padding } => {
                        LayoutItem::vstack(items).spacing(*spacing).padding(*padding)
                    }
                    ContainerLayout::HStack { spacing, padding } => {
                        LayoutItem::hstack(items).spacing(*spacing).padding(*padding)
                    }
                }
            }
        }
    }

    fn draw(&self, screen: &mut Screen, bounds: Rect, theme: &Theme) {
        screen.push_clip(bounds.x, bounds.y, bounds.width, bounds.height);
        match self {
            WidgetNode::Leaf { widget, .. } => widget.draw(screen, bounds, theme),
            WidgetNode::Container { children, .. } => {
                let child_bounds = compute_child_bounds(&self.to_layout_item(), bounds);
                for (child, rect) in children.iter().zip(child_bounds) {
                    child.draw(screen, rect, theme);
                }
            }
        }
        screen.pop_clip();
    }

    /// Path of ids from this node down to the leaf at the given position.
    fn path_at(&self, row: u16, col: u16, bounds: Rect) -> Option<Vec<String>> {
        if !bounds.contains(row, col) {
            return None;
        }
        match self {
            WidgetNode::Leaf { id, .. } => Some(vec![id.clone()]),
            WidgetNode::Container { id, children, .. } => {
                let child_bounds = compute_child_bounds(&self.to_layout_item(), bounds);
                for (child, rect) in children.iter().zip(child_bounds) {
                    if let Some(mut path) = child.path_at(row, col, rect) {
                        path.insert(0, id.clone());
                        return Some(path);
                    }
                }
                None
            }
        }
    }

    /// Bounds of the node at the given path, resolved against this node.
    fn bounds_at(&self, path: &[String], bounds: Rect) -> Option<Rect> {
        if path.first().map(|s| s.as_str()) != Some(self.id()) {
            return None;
        }
        if path.len() == 1 {
            return Some(bounds);
        }
        if let WidgetNode::Container { children, .. } = self {
            let child_bounds = compute_child_bounds(&self.to_layout_item(), bounds);
            for (child, rect) in children.iter().zip(child_bounds) {
                if child.id() == path[1] {
                    return child.bounds_at(&path[1..], rect);
                }
            }
        }
        None
    }

    pub fn get_widget(&self, path: &[&str]) -> Option<&dyn Widget> {
        if path.first() != Some(&self.id()) {
            return None;
        }
        match self {
            WidgetNode::Leaf { widget, .. } if path.len() == 1 => Some(widget.as_ref()),
            WidgetNode::Container { children, .. } if path.len() > 1 => {
                children.iter().find_map(|c| c.get_widget(&path[1..]))
            }
            _ => None,
        }
    }

    pub fn get_widget_mut(&mut self, path: &[&str]) -> Option<&mut dyn Widget> {
        if path.first() != Some(&self.id()) {
            return None;
        }
        match self {
            WidgetNode::Leaf { widget, .. } if path.len() == 1 => Some(widget.as_mut()),
            WidgetNode::Container { children, .. } if path.len() > 1 => {
                children.iter_mut().find_map(|c| c.get_widget_mut(&path[1..]))
            }
            _ => None,
        }
    }

    fn collect_focusable(&self, prefix: &[String], out: &mut Vec<Vec<String>>) {
        let mut path = prefix.to_vec();
        path.push(self.id().to_string());
        match self {
            WidgetNode::Leaf { widget, .. } => {
                if widget.focusable() {
                    out.push(path);
                }
            }
            WidgetNode::Container { children, .. } => {
                for child in children {
                    child.collect_focusable(&path, out);
                }
            }
        }
    }
}

/// Builder for container nodes.
pub struct ContainerBuilder {
    id: String,
    layout: ContainerLayout,
    children: Vec<WidgetNode>,
}

impl ContainerBuilder {
    pub fn spacing(mut self, spacing: u16) -> Self {
        match &mut self.layout {
            ContainerLayout::VStack { spacing: s, .. } => *s = spacing,
            ContainerLayout::HStack { spacing: s, .. } => *s = spacing,
        }
        self
    }

    pub fn padding(mut self, padding: u16) -> Self {
        match &mut self.layout {
            ContainerLayout::VStack { padding: p, .. } => *p = padding,
            ContainerLayout::HStack { padding: p, .. } => *p = padding,
        }
        self
    }

    pub fn child(mut self, node: WidgetNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn leaf(mut self, id: impl Into<String>, widget: impl Widget + 'static) -> Self {
        self.children.push(WidgetNode::leaf(id, widget));
        self
    }

    pub fn build(self) -> WidgetNode {
        WidgetNode::Container {
            id: self.id,
            layout: self.layout,
            children: self.children,
        }
    }
}

/// A widget tree with focus management.
pub struct WidgetTree {
    root: WidgetNode,
    focus_path: Vec<String>,
}

impl WidgetTree {
    pub fn new(root: WidgetNode) -> Self {
        Self {
            root,
            focus_path: Vec::new(),
        }
    }

    pub fn draw(&self, screen: &mut Screen, bounds: Rect, theme: &Theme) {
        self.root.draw(screen, bounds, theme);
    }

    /// Handle an event within the given bounds.
    ///
    /// Tab/Shift+Tab cycle focus (wrapping). Mouse events route to the leaf
    /// under the pointer; other keys go to the focused widget.
    pub fn handle_event(&mut self, event: &InputEvent, bounds: Rect) -> EventResult {
        match event {
            InputEvent::Tab => {
                self.focus_next();
                return EventResult::Consumed;
            }
            InputEvent::ShiftTab => {
                self.focus_prev();
                return EventResult::Consumed;
            }
            _ => {}
        }

        if let Some((row, col)) = event.mouse_position() {
            let Some(path) = self.root.path_at(row, col, bounds) else {
                return EventResult::Ignored;
            };
            let target_bounds = self.root.bounds_at(&path, bounds);
            let refs: Vec<&str> = path.iter().map(|s| s.as_str()).collect();

            // Pointer press moves focus to the target when it accepts it.
            let focusable = self
                .root
                .get_widget(&refs)
                .map(|w| w.focusable())
                .unwrap_or(false);
            if focusable && matches!(event, InputEvent::MouseDown { .. }) {
                self.set_focus_path(path.clone());
            }

            if let (Some(widget), Some(rect)) = (self.root.get_widget_mut(&refs), target_bounds) {
                return widget.handle_event(event, rect);
            }
            return EventResult::Ignored;
        }

        // Keyboard: send to the focused widget.
        if self.focus_path.is_empty() {
            return EventResult::Ignored;
        }
        let path = self.focus_path.clone();
        let target_bounds = self.root.bounds_at(&path, bounds).unwrap_or_default();
        let refs: Vec<&str> = path.iter().map(|s| s.as_str()).collect();
        match self.root.get_widget_mut(&refs) {
            Some(widget) => widget.handle_event(event, target_bounds),
            None => EventResult::Ignored,
        }
    }

    fn focusable_paths(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        self.root.collect_focusable(&[], &mut out);
        out
    }

    fn set_focus_path(&mut self, path: Vec<String>) {
        if !self.focus_path.is_empty() {
            let refs: Vec<&str> = self.focus_path.iter().map(|s| s.as_str()).collect();
            if let Some(widget) = self.root.get_widget_mut(&refs) {
                widget.set_focus(false);
            }
        }
        let refs: Vec<&str> = path.iter().map(|s| s.as_str()).collect();
        if let Some(widget) = self.root.get_widget_mut(&refs) {
            widget.set_focus(true);
            self.focus_path = path;
        }
    }

    /// Advance focus, wrapping past the last focusable widget.
    pub fn focus_next(&mut self) {
        let paths = self.focusable_paths();
        if paths.is_empty() {
            return;
        }
        let next = match paths.iter().position(|p| *p == self.focus_path) {
            Some(idx) => (idx + 1) % paths.len(),
            None => 0,
        };
        self.set_focus_path(paths[next].clone());
    }

    /// Move focus backwards, wrapping before the first focusable widget.
    pub fn focus_prev(&mut self) {
        let paths = self.focusable_paths();
        if paths.is_empty() {
            return;
        }
        let prev = match paths.iter().position(|p| *p == self.focus_path) {
            Some(0) | None => paths.len() - 1,
            Some(idx) => idx - 1,
        };
        self.set_focus_path(paths[prev].clone());
    }

    /// Focus the first focusable widget.
    pub fn focus_first(&mut self) {
        let paths = self.focusable_paths();
        if let Some(first) = paths.into_iter().next() {
            self.set_focus_path(first);
        }
    }

    /// Drop focus entirely.
    pub fn clear_focus(&mut self) {
        if !self.focus_path.is_empty() {
            let refs: Vec<&str> = self.focus_path.iter().map(|s| s.as_str()).collect();
            if let Some(widget) = self.root.get_widget_mut(&refs) {
                widget.set_focus(false);
            }
            self.focus_path.clear();
        }
    }

    pub fn focus_path(&self) -> &[String] {
        &self.focus_path
    }

    pub fn root(&self) -> &WidgetNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut WidgetNode {
        &mut self.root
    }
}
