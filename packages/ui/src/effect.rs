//! UI side effects requested by the controllers.
//!
//! Handlers in [`crate::activities`] and [`crate::auth`] never touch the page.
//! They return a list of [`Effect`]s in the order the page should apply them,
//! and [`crate::provider::run_effects`] carries them out.

use crate::message::UiMessage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Replace the global status message.
    Message(UiMessage),
    /// Re-fetch and redraw the activity list.
    RefreshActivities,
    ResetSignupForm,
    CloseLoginModal,
    ResetLoginForm,
    /// Error text shown inside the login prompt only.
    LoginError(String),
    CloseUserMenu,
}

/// The message carried by the first [`Effect::Message`], if any.
pub fn message_of(effects: &[Effect]) -> Option<&UiMessage> {
    effects.iter().find_map(|effect| match effect {
        Effect::Message(message) => Some(message),
        _ => None,
    })
}
