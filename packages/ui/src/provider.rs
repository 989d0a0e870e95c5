//! Client context and the Dioxus side of the controllers.
//!
//! [`ClientProvider`] owns every piece of page state as a signal and exposes
//! them through [`ClientContext`]. The action functions below read what they
//! need from the signals, await the controller, then hand the returned
//! [`Effect`]s to [`run_effects`]. No signal is borrowed across an `.await`.

use std::time::Duration;

use api::{ActivitiesApi, HttpClient};
use dioxus::prelude::*;
use store::{ClientConfig, KeyValueStore, SessionStore};

use crate::activities::ActivityView;
use crate::auth::{AuthController, AuthIndicator};
use crate::effect::Effect;
use crate::message::{show_message, MessageChannel};
use crate::platform::{make_api_client, make_session_backend};

pub type ClientSession = SessionStore<Box<dyn KeyValueStore>>;

/// Dialogs, menus and controlled form fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChromeState {
    pub login_open: bool,
    pub menu_open: bool,
    /// Shown inside the login prompt, never in the global message area.
    pub login_error: Option<String>,
    pub signup_email: String,
    pub signup_activity: String,
    pub login_email: String,
    pub login_password: String,
}

#[derive(Clone, Copy)]
pub struct ClientContext {
    pub session: Signal<ClientSession>,
    pub activities: Signal<ActivityView>,
    pub messages: Signal<MessageChannel>,
    pub chrome: Signal<ChromeState>,
    pub api: Signal<HttpClient>,
    pub display: Duration,
}

impl ClientContext {
    pub fn indicator(&self) -> AuthIndicator {
        AuthIndicator::from_session(self.session.read().session())
    }

    fn credential(&self) -> Option<String> {
        self.session.peek().credential().map(str::to_string)
    }

    fn client(&self) -> HttpClient {
        self.api.peek().clone()
    }
}

pub fn use_client() -> ClientContext {
    use_context::<ClientContext>()
}

/// Provider component that builds the client state from `config`.
/// Wrap the page with this component.
#[component]
pub fn ClientProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_hook(|| make_api_client(&config).map_err(|e| e.to_string()));
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Cannot start client: {e}");
            return rsx! {
                div { class: "message error", "Cannot reach the activities server: {e}" }
            };
        }
    };

    let session = use_signal(|| SessionStore::load(make_session_backend()));
    let activities = use_signal(ActivityView::new);
    let messages = use_signal(MessageChannel::default);
    let chrome = use_signal(ChromeState::default);
    let api = use_signal(|| client);

    let ctx = use_context_provider(|| ClientContext {
        session,
        activities,
        messages,
        chrome,
        api,
        display: config.message_display(),
    });
    use_context_provider(|| messages);

    let verify_on_load = config.session.verify_on_load;
    use_effect(move || {
        refresh_activities(ctx);
        if verify_on_load {
            verify_restored_session(ctx);
        }
    });

    rsx! {
        {children}
    }
}

/// Carry out `effects` in order.
pub fn run_effects(ctx: ClientContext, effects: Vec<Effect>) {
    let mut signal = ctx.chrome;
    for effect in effects {
        match effect {
            Effect::Message(message) => show_message(ctx.messages, message, ctx.display),
            Effect::RefreshActivities => refresh_activities(ctx),
            Effect::ResetSignupForm => {
                let mut chrome = signal.write();
                chrome.signup_email.clear();
                chrome.signup_activity.clear();
            }
            Effect::CloseLoginModal => signal.write().login_open = false,
            Effect::ResetLoginForm => {
                let mut chrome = signal.write();
                chrome.login_email.clear();
                chrome.login_password.clear();
                chrome.login_error = None;
            }
            Effect::LoginError(text) => signal.write().login_error = Some(text),
            Effect::CloseUserMenu => signal.write().menu_open = false,
        }
    }
}

pub fn refresh_activities(ctx: ClientContext) {
    let mut activities = ctx.activities;
    let ticket = activities.write().begin_refresh();
    let api = ctx.client();
    spawn(async move {
        let result = api.fetch_activities().await;
        activities.write().finish_refresh(ticket, result);
    });
}

pub fn submit_signup(ctx: ClientContext) {
    let (email, activity) = {
        let chrome = ctx.chrome.peek();
        (chrome.signup_email.clone(), chrome.signup_activity.clone())
    };
    let credential = ctx.credential();
    let api = ctx.client();
    spawn(async move {
        let effects =
            ActivityView::handle_signup(&api, credential.as_deref(), &email, &activity).await;
        run_effects(ctx, effects);
    });
}

pub fn remove_participant(ctx: ClientContext, activity: String, email: String) {
    let credential = ctx.credential();
    let api = ctx.client();
    spawn(async move {
        let effects =
            ActivityView::handle_removal(&api, credential.as_deref(), &activity, &email).await;
        run_effects(ctx, effects);
    });
}

pub fn submit_login(ctx: ClientContext) {
    let (email, password) = {
        let chrome = ctx.chrome.peek();
        (chrome.login_email.clone(), chrome.login_password.clone())
    };
    let api = ctx.client();
    spawn(async move {
        let auth = AuthController::new(&api);
        let result = auth.login(&email, &password).await;
        let mut session = ctx.session;
        let effects = auth.apply_login(&mut *session.write(), result);
        run_effects(ctx, effects);
    });
}

pub fn logout(ctx: ClientContext) {
    let credential = ctx.credential();
    let api = ctx.client();
    spawn(async move {
        let auth = AuthController::new(&api);
        auth.logout(credential.as_deref()).await;
        let mut session = ctx.session;
        let effects = auth.apply_logout(&mut *session.write());
        run_effects(ctx, effects);
    });
}

fn verify_restored_session(ctx: ClientContext) {
    let Some(credential) = ctx.credential() else {
        return;
    };
    let api = ctx.client();
    spawn(async move {
        let auth = AuthController::new(&api);
        let check = auth.verify_restored(Some(&credential)).await;
        let mut session = ctx.session;
        let effects = auth.apply_session_check(&mut *session.write(), check);
        run_effects(ctx, effects);
    });
}

pub fn open_login(ctx: ClientContext) {
    let mut signal = ctx.chrome;
    let mut chrome = signal.write();
    chrome.menu_open = false;
    chrome.login_error = None;
    chrome.login_open = true;
}

pub fn close_login(ctx: ClientContext) {
    let mut chrome = ctx.chrome;
    chrome.write().login_open = false;
}
