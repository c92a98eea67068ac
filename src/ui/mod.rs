//! Widget kit: layout engine, theme, widget trait, widget tree, and the
//! basic widgets dialogs are built from.

pub mod button;
pub mod label;
pub mod layout;
pub mod textfield;
pub mod theme;
pub mod tree;
pub mod widget;

pub use button::Button;
pub use label::{Label, Spacer};
pub use layout::{compute_layout, ComputedLayout, LayoutItem, Rect, Size};
pub use textfield::TextField;
pub use theme::Theme;
pub use tree::{ContainerLayout, WidgetNode, WidgetTree};
pub use widget::{EventResult, SizeHint, Widget};
