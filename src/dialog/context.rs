//! The shared context bundle and composition errors.

use crate::dialog::interactions::Interactions;
use crate::dialog::state::OpenState;
use crate::dialog::DialogConfig;
use crate::ui::layout::Rect;
use thiserror::Error;

/// Composition errors surfaced when a dialog is built.
///
/// These are programming errors, caught at build time: a part cannot be
/// used without its enclosing dialog because the dialog is the only source
/// of the context, and a dialog cannot be built without its required parts.
#[derive(Debug, Error)]
pub enum DialogError {
    /// `DialogBuilder::build` was called without a body.
    #[error("dialog built without content: supply a body before build()")]
    MissingContent,
}

/// The per-pass context bundle handed to dialog parts.
///
/// Created fresh by the wrapper for every draw or event pass; parts receive
/// it by parameter and never store it. All state mutation goes through
/// `state`, never around it.
pub struct DialogContext<'a> {
    pub state: &'a mut OpenState,
    pub config: &'a DialogConfig,
    pub interactions: &'a Interactions,
    /// Panel rectangle for this pass, present while open.
    pub panel: Option<Rect>,
}

impl DialogContext<'_> {
    /// The effective open value for this pass.
    pub fn is_open(&self) -> bool {
        self.state.open()
    }
}
