//! Stack-based layout engine.
//!
//! Vertical and horizontal stacks of fixed/flex/percent-sized items are
//! resolved into absolute rectangles keyed by item id. The dialog core
//! consumes this engine for panel placement; it never does its own rect
//! math beyond the two pure size/placement mappings.

use std::collections::HashMap;

/// A rectangular region in screen cells, 0-based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, row: u16, col: u16) -> bool {
        row >= self.y && row < self.y + self.height && col >= self.x && col < self.x + self.width
    }

    /// Shrink by a uniform margin on all sides.
    pub fn inset(&self, margin: u16) -> Rect {
        Rect {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width.saturating_sub(margin * 2),
            height: self.height.saturating_sub(margin * 2),
        }
    }
}

/// Size constraint for one axis of a layout item.
#[derive(Clone, Copy, Debug)]
pub enum Size {
    /// Fixed size in cells.
    Fixed(u16),
    /// Weighted share of the remaining space.
    Flex(u16),
    /// Percentage of the parent's size.
    Percent(u16),
}

impl Default for Size {
    fn default() -> Self {
        Size::Flex(1)
    }
}

/// A layout node: stacks, spacers, or content leaves.
#[derive(Clone, Debug)]
pub enum LayoutNode {
    VStack { children: Vec<LayoutItem>, spacing: u16, padding: u16 },
    HStack { children: Vec<LayoutItem>, spacing: u16, padding: u16 },
    Spacer,
    Leaf { id: String },
}

/// A layout node with its size constraints.
#[derive(Clone, Debug)]
pub struct LayoutItem {
    pub node: LayoutNode,
    pub width: Size,
    pub height: Size,
    pub min_width: u16,
    pub min_height: u16,
}

impl LayoutItem {
    pub fn vstack(children: Vec<LayoutItem>) -> Self {
        Self {
            node: LayoutNode::VStack { children, spacing: 0, padding: 0 },
            width: Size::Flex(1),
            height: Size::Flex(1),
            min_width: 0,
            min_height: 0,
        }
    }

    pub fn hstack(children: Vec<LayoutItem>) -> Self {
        Self {
            node: LayoutNode::HStack { children, spacing: 0, padding: 0 },
            width: Size::Flex(1),
            height: Size::Flex(1),
            min_width: 0,
            min_height: 0,
        }
    }

    pub fn spacer() -> Self {
        Self {
            node: LayoutNode::Spacer,
            width: Size::Flex(1),
            height: Size::Flex(1),
            min_width: 0,
            min_height: 0,
        }
    }

    pub fn leaf(id: impl Into<String>) -> Self {
        Self {
            node: LayoutNode::Leaf { id: id.into() },
            width: Size::Flex(1),
            height: Size::Fixed(1),
            min_width: 0,
            min_height: 0,
        }
    }

    pub fn width(mut self, w: Size) -> Self {
        self.width = w;
        self
    }

    pub fn height(mut self, h: Size) -> Self {
        self.height = h;
        self
    }

    pub fn fixed_width(mut self, w: u16) -> Self {
        self.width = Size::Fixed(w);
        self
    }

    pub fn fixed_height(mut self, h: u16) -> Self {
        self.height = Size::Fixed(h);
        self
    }

    pub fn min_size(mut self, w: u16, h: u16) -> Self {
        self.min_width = w;
        self.min_height = h;
        self
    }

    pub fn spacing(mut self, s: u16) -> Self {
        if let LayoutNode::VStack { spacing, .. } | LayoutNode::HStack { spacing, .. } =
            &mut self.node
        {
            *spacing = s;
        }
        self
    }

    pub fn padding(mut self, p: u16) -> Self {
        if let LayoutNode::VStack { padding, .. } | LayoutNode::HStack { padding, .. } =
            &mut self.node
        {
            *padding = p;
        }
        self
    }
}

/// Resolved rectangles keyed by leaf id.
#[derive(Clone, Debug, Default)]
pub struct ComputedLayout {
    pub rects: HashMap<String, Rect>,
}

impl ComputedLayout {
    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    /// Find the smallest leaf containing the point.
    pub fn hit_test(&self, row: u16, col: u16) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (id, rect) in &self.rects {
            if rect.contains(row, col) {
                let area = rect.width as u32 * rect.height as u32;
                if best.map_or(true, |(_, a)| area < a) {
                    best = Some((id.as_str(), area));
                }
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Resolve a layout tree within the given bounds.
pub fn compute_layout(item: &LayoutItem, bounds: Rect) -> ComputedLayout {
    let mut result = ComputedLayout::default();
    resolve(item, bounds, &mut result);
    result
}

/// Rectangles for one container's direct children, in child order.
pub fn compute_child_bounds(item: &LayoutItem, bounds: Rect) -> Vec<Rect> {
    match &item.node {
        LayoutNode::VStack { children, spacing, padding } => {
            distribute(children, bounds.inset(*padding), *spacing, Axis::Vertical)
        }
        LayoutNode::HStack { children, spacing, padding } => {
            distribute(children, bounds.inset(*padding), *spacing, Axis::Horizontal)
        }
        _ => Vec::new(),
    }
}

fn resolve(item: &LayoutItem, bounds: Rect, result: &mut ComputedLayout) {
    match &item.node {
        LayoutNode::VStack { children, .. } | LayoutNode::HStack { children, .. } => {
            let child_bounds = compute_child_bounds(item, bounds);
            for (child, rect) in children.iter().zip(child_bounds) {
                resolve(child, rect, result);
            }
        }
        LayoutNode::Spacer => {}
        LayoutNode::Leaf { id } => {
            result.rects.insert(id.clone(), bounds);
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    Vertical,
    Horizontal,
}

fn axis_constraint(item: &LayoutItem, axis: Axis) -> (Size, u16) {
    match axis {
        Axis::Vertical => (item.height, item.min_height),
        Axis::Horizontal => (item.width, item.min_width),
    }
}

fn distribute(children: &[LayoutItem], bounds: Rect, spacing: u16, axis: Axis) -> Vec<Rect> {
    if children.is_empty() {
        return Vec::new();
    }

    let total = match axis {
        Axis::Vertical => bounds.height,
        Axis::Horizontal => bounds.width,
    };
    let total_spacing = spacing * (children.len() as u16).saturating_sub(1);
    let available = total.saturating_sub(total_spacing);

    let mut fixed_total = 0u16;
    let mut flex_total = 0u16;
    for child in children {
        let (size, min) = axis_constraint(child, axis);
        match size {
            Size::Fixed(n) => fixed_total += n.max(min),
            Size::Flex(w) => flex_total += w,
            Size::Percent(p) => fixed_total += (total * p / 100).max(min),
        }
    }
    let flex_space = available.saturating_sub(fixed_total);

    let mut rects = Vec::with_capacity(children.len());
    let mut cursor = match axis {
        Axis::Vertical => bounds.y,
        Axis::Horizontal => bounds.x,
    };

    for child in children {
        let (size, min) = axis_constraint(child, axis);
        let main = match size {
            Size::Fixed(n) => n.max(min),
            Size::Flex(w) => {
                if flex_total > 0 {
                    (flex_space * w / flex_total).max(min)
                } else {
                    min
                }
            }
            Size::Percent(p) => (total * p / 100).max(min),
        };

        let (cross_size, cross_min) = axis_constraint(
            child,
            match axis {
                Axis::Vertical => Axis::Horizontal,
                Axis::Horizontal => Axis::Vertical,
            },
        );
        let cross_full = match axis {
            Axis::Vertical => bounds.width,
            Axis::Horizontal => bounds.height,
        };
        let cross = match cross_size {
            Size::Fixed(n) => n.max(cross_min),
            Size::Flex(_) => cross_full,
            Size::Percent(100) => cross_full,
            Size::Percent(p) => (cross_full * p / 100).max(cross_min),
        };

        rects.push(match axis {
            Axis::Vertical => Rect::new(bounds.x, cursor, cross, main),
            Axis::Horizontal => Rect::new(cursor, bounds.y, main, cross),
        });

        cursor += main + spacing;
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(rect.contains(3, 2));
        assert!(rect.contains(4, 5));
        assert!(!rect.contains(5, 2));
        assert!(!rect.contains(3, 6));
    }

    #[test]
    fn vstack_fixed_and_flex_split() {
        let item = LayoutItem::vstack(vec![
            LayoutItem::leaf("top").fixed_height(1),
            LayoutItem::leaf("mid").height(Size::Flex(1)),
            LayoutItem::leaf("bottom").fixed_height(2),
        ]);
        let layout = compute_layout(&item, Rect::new(0, 0, 20, 10));
        assert_eq!(layout.get("top").unwrap(), Rect::new(0, 0, 20, 1));
        assert_eq!(layout.get("mid").unwrap(), Rect::new(0, 1, 20, 7));
        assert_eq!(layout.get("bottom").unwrap(), Rect::new(0, 8, 20, 2));
    }

    #[test]
    fn hstack_respects_spacing_and_fixed_widths() {
        let item = LayoutItem::hstack(vec![
            LayoutItem::leaf("a").fixed_width(4).fixed_height(1),
            LayoutItem::leaf("b").fixed_width(4).fixed_height(1),
        ])
        .spacing(2);
        let layout = compute_layout(&item, Rect::new(1, 1, 20, 1));
        assert_eq!(layout.get("a").unwrap().x, 1);
        assert_eq!(layout.get("b").unwrap().x, 7);
    }

    #[test]
    fn flex_weights_divide_remaining_space() {
        let item = LayoutItem::vstack(vec![
            LayoutItem::leaf("one").height(Size::Flex(1)),
            LayoutItem::leaf("three").height(Size::Flex(3)),
        ]);
        let layout = compute_layout(&item, Rect::new(0, 0, 10, 8));
        assert_eq!(layout.get("one").unwrap().height, 2);
        assert_eq!(layout.get("three").unwrap().height, 6);
    }

    #[test]
    fn padding_shrinks_children() {
        let item = LayoutItem::vstack(vec![LayoutItem::leaf("only").height(Size::Flex(1))])
            .padding(1);
        let layout = compute_layout(&item, Rect::new(0, 0, 10, 6));
        assert_eq!(layout.get("only").unwrap(), Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn hit_test_prefers_smallest_rect() {
        let mut layout = ComputedLayout::default();
        layout.rects.insert("outer".into(), Rect::new(0, 0, 10, 10));
        layout.rects.insert("inner".into(), Rect::new(2, 2, 2, 2));
        assert_eq!(layout.hit_test(3, 3), Some("inner"));
        assert_eq!(layout.hit_test(0, 0), Some("outer"));
        assert_eq!(layout.hit_test(20, 20), None);
    }
}
