//! floatbox — a floating modal dialog toolkit for terminal applications.
//!
//! The crate renders with raw ANSI escape sequences over a double-buffered
//! cell screen; no external TUI library is involved. The core is the
//! [`dialog::Dialog`] primitive: open/closed state with controlled or
//! uncontrolled ownership, dismiss/focus/modal interaction wiring, and a
//! trigger/header/body part family, all assembled through
//! [`dialog::DialogBuilder`].
//!
//! ```no_run
//! use floatbox::dialog::Dialog;
//! use floatbox::ui::{Button, Label, WidgetNode};
//!
//! let dialog = Dialog::builder()
//!     .title("Delete file")
//!     .trigger(Button::new("Delete", "delete"))
//!     .body(
//!         WidgetNode::vstack("body")
//!             .leaf("line", Label::new("This cannot be undone."))
//!             .child(
//!                 WidgetNode::hstack("buttons")
//!                     .leaf("ok", Button::new("OK", "ok"))
//!                     .build(),
//!             )
//!             .build(),
//!     )
//!     .build()?;
//! # Ok::<(), floatbox::dialog::DialogError>(())
//! ```

pub mod dialog;
pub mod input;
pub mod screen;
pub mod terminal;
pub mod ui;

pub use dialog::{Dialog, DialogBuilder, DialogError};
pub use input::{InputEvent, InputParser};
pub use screen::Screen;
pub use terminal::{Color, Terminal};
