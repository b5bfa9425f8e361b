use yewdux::prelude::*;

/// App-wide state shared through yewdux.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct State {
    /// Error from a one-shot action (not tied to any fetch hook), shown in
    /// the layout until dismissed.
    pub error_message: Option<String>,
}

impl State {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
