//! This crate contains all shared UI for the workspace.
//!
//! The controllers ([`activities`], [`auth`]) are plain async code that
//! return [`Effect`]s; [`provider`] runs them against Dioxus signals.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod activities;
pub use activities::{ActivityCard, ActivityView, ListContent, ParticipantRow, RefreshOutcome};

pub mod auth;
pub use auth::{AuthController, AuthIndicator, SessionCheck};

pub mod effect;
pub use effect::Effect;

pub mod message;
pub use message::{use_messages, MessageChannel, MessageKind, UiMessage};

mod platform;
pub use platform::{make_api_client, make_session_backend, APP_DIR, NATIVE_DEFAULT_BASE_URL};

pub mod provider;
pub use provider::{use_client, ChromeState, ClientContext, ClientProvider, ClientSession};

pub mod views;

mod activity_list;
pub use activity_list::ActivityList;

mod signup_form;
pub use signup_form::SignupForm;

mod user_menu;
pub use user_menu::UserMenu;

mod login_modal;
pub use login_modal::LoginModal;

mod message_banner;
pub use message_banner::MessageBanner;

#[cfg(test)]
mod testing;
