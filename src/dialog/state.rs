//! Open/closed state ownership.
//!
//! The ownership decision is made exactly once, at construction: supplying
//! a controlled value yields `Controlled` for the lifetime of the dialog,
//! otherwise local state seeded from `initial_open` is authoritative.
//! There is no way to switch variants afterwards.

use tracing::{debug, trace};

/// Who owns the open value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// The caller owns it; the dialog only forwards change intents.
    Controlled,
    /// The dialog owns it in a local cell.
    Uncontrolled,
}

/// Callback receiving change intents in controlled mode.
pub type OpenChangeHandler = Box<dyn FnMut(bool)>;

/// Tagged open-state variant, resolved once at construction.
pub enum OpenState {
    Controlled {
        open: bool,
        on_change: Option<OpenChangeHandler>,
    },
    Uncontrolled {
        open: bool,
    },
}

impl OpenState {
    /// Resolve ownership from the caller's options.
    pub fn resolve(
        controlled: Option<bool>,
        on_change: Option<OpenChangeHandler>,
        initial_open: bool,
    ) -> Self {
        match controlled {
            Some(open) => {
                debug!(open, "dialog state resolved as controlled");
                OpenState::Controlled { open, on_change }
            }
            None => {
                debug!(open = initial_open, "dialog state resolved as uncontrolled");
                OpenState::Uncontrolled { open: initial_open }
            }
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self {
            OpenState::Controlled { .. } => Ownership::Controlled,
            OpenState::Uncontrolled { .. } => Ownership::Uncontrolled,
        }
    }

    /// The effective open value. This single accessor drives rendering,
    /// panel layout, and the open session in both ownership modes.
    pub fn open(&self) -> bool {
        match self {
            OpenState::Controlled { open, .. } => *open,
            OpenState::Uncontrolled { open } => *open,
        }
    }

    /// Request a new open value.
    ///
    /// Controlled: the intent is forwarded to the caller's handler and the
    /// displayed value does not move until the caller syncs it back.
    /// Uncontrolled: the local value is updated in place.
    pub fn set_open(&mut self, value: bool) {
        match self {
            OpenState::Controlled { on_change, .. } => {
                trace!(value, "forwarding open-change intent to caller");
                if let Some(handler) = on_change {
                    handler(value);
                }
            }
            OpenState::Uncontrolled { open } => {
                if *open != value {
                    debug!(from = *open, to = value, "open state changed");
                }
                *open = value;
            }
        }
    }

    /// Accept the caller's updated value in controlled mode.
    ///
    /// Uncontrolled dialogs ignore this; their value only moves through
    /// `set_open`.
    pub fn sync(&mut self, value: bool) {
        match self {
            OpenState::Controlled { open, .. } => {
                if *open != value {
                    debug!(from = *open, to = value, "controlled value synced");
                }
                *open = value;
            }
            OpenState::Uncontrolled { .. } => {
                trace!("sync ignored for uncontrolled dialog");
            }
        }
    }
}
