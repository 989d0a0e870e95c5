//! Header user icon, status label and the login/logout dropdown.

use dioxus::prelude::*;

use crate::icons::FaUser;
use crate::provider::{logout, open_login, use_client};
use crate::Icon;

#[component]
pub fn UserMenu() -> Element {
    let ctx = use_client();
    let mut chrome = ctx.chrome;
    let indicator = ctx.indicator();
    let menu_open = chrome.read().menu_open;

    rsx! {
        div { class: "user-menu",
            span { id: "auth-status", class: indicator.mode_class(), "{indicator.label}" }
            button {
                id: "user-icon",
                title: "Teacher login",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    let mut state = chrome.write();
                    state.menu_open = !state.menu_open;
                },
                Icon { icon: FaUser, width: 18, height: 18 }
            }
            if menu_open {
                div {
                    id: "user-dropdown",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    if indicator.authenticated {
                        button { id: "logout-btn", onclick: move |_| logout(ctx), "Logout" }
                    } else {
                        button { id: "login-btn", onclick: move |_| open_login(ctx), "Login" }
                    }
                }
            }
        }
    }
}
