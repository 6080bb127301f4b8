//! Actions returned by screen event handlers.

use crate::model::FieldName;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` applies these to the [`ContactForm`](crate::workflow::ContactForm)
/// and its own navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Replace one field's value.
    EditField(FieldName, String),
    /// Host checks passed; start a submission cycle.
    Submit,
    /// Quit the application.
    Quit,
}
