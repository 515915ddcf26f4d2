//! Actions returned by screen event handlers.

use crate::model::Field;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the session and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Replace one form field with a new value.
    SetField(Field, String),
    /// Validate the form and request an estimate.
    Predict,
    /// Clear the form and results.
    Reset,
    /// Quit the application.
    Quit,
}
