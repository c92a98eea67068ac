//! Dialog configuration and the pure size/placement mappings.
//!
//! Configuration is read once when the dialog is built and never changes
//! for its lifetime. Unrecognized size or placement names resolve silently
//! to the defaults instead of failing.

use crate::ui::layout::Rect;
use serde::Deserialize;

/// Panel size presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogSize {
    #[default]
    Small,
    Medium,
    Large,
    /// The whole screen.
    Screen,
}

impl DialogSize {
    /// Parse a size name, falling back to `Small` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "medium" => DialogSize::Medium,
            "large" => DialogSize::Large,
            "screen" => DialogSize::Screen,
            _ => DialogSize::Small,
        }
    }
}

/// Vertical placement presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogPlacement {
    Top,
    #[default]
    Bottom,
}

impl DialogPlacement {
    /// Parse a placement name, falling back to `Bottom` for anything
    /// unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "top" => DialogPlacement::Top,
            _ => DialogPlacement::Bottom,
        }
    }
}

/// Immutable per-dialog configuration.
#[derive(Clone, Copy, Debug)]
pub struct DialogConfig {
    pub size: DialogSize,
    pub placement: DialogPlacement,
    /// Dismiss on outside press or Escape. Defaults to true.
    pub close_outside: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            size: DialogSize::Small,
            placement: DialogPlacement::Bottom,
            close_outside: true,
        }
    }
}

/// Panel dimensions for a size preset, clamped to the screen.
pub fn panel_size(size: DialogSize, screen_w: u16, screen_h: u16) -> (u16, u16) {
    let (w, h) = match size {
        DialogSize::Small => (40, 10),
        DialogSize::Medium => (56, 14),
        DialogSize::Large => (72, 18),
        DialogSize::Screen => (screen_w, screen_h),
    };
    (w.min(screen_w), h.min(screen_h))
}

/// Panel origin for a placement preset: horizontally centered, vertically
/// at one third (`Top`) or two thirds (`Bottom`) of the free space.
pub fn panel_origin(
    placement: DialogPlacement,
    screen_w: u16,
    screen_h: u16,
    panel: (u16, u16),
) -> (u16, u16) {
    let (w, h) = panel;
    let x = screen_w.saturating_sub(w) / 2;
    let free = screen_h.saturating_sub(h);
    let y = match placement {
        DialogPlacement::Top => free / 3,
        DialogPlacement::Bottom => free * 2 / 3,
    };
    (x, y)
}

/// The panel rectangle for a configuration on the given screen.
pub fn panel_rect(config: &DialogConfig, screen_w: u16, screen_h: u16) -> Rect {
    let size = panel_size(config.size, screen_w, screen_h);
    let (x, y) = panel_origin(config.placement, screen_w, screen_h, size);
    Rect::new(x, y, size.0, size.1)
}
