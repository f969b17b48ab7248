//! Open/closed state of the application dialog

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open)
    }

    /// Move to `Open`. Returns true if the dialog was closed before.
    pub fn open(&mut self) -> bool {
        let was_closed = !self.is_open();
        *self = DialogState::Open;
        was_closed
    }

    /// Move to `Closed`. Returns true if the dialog was open before.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = DialogState::Closed;
        was_open
    }
}
