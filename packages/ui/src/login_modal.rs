use dioxus::prelude::*;

use crate::provider::{close_login, submit_login, use_client};
use crate::views::ModalOverlay;

/// Teacher login prompt. Errors stay inside the prompt.
#[component]
pub fn LoginModal() -> Element {
    let ctx = use_client();
    let mut chrome = ctx.chrome;
    let state = chrome.read().clone();

    if !state.login_open {
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        submit_login(ctx);
    };

    rsx! {
        ModalOverlay { title: "Teacher Login", on_close: move |_| close_login(ctx),
            div { id: "login-modal",
                form { id: "login-form", onsubmit: handle_login,
                    div { class: "form-group",
                        label { r#for: "login-email", "Email:" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            required: true,
                            value: "{state.login_email}",
                            oninput: move |evt: FormEvent| chrome.write().login_email = evt.value(),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "login-password", "Password:" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            required: true,
                            value: "{state.login_password}",
                            oninput: move |evt: FormEvent| chrome.write().login_password = evt.value(),
                        }
                    }
                    if let Some(error) = state.login_error.as_deref() {
                        div { id: "login-message", class: "message error", "{error}" }
                    }
                    button { r#type: "submit", "Login" }
                }
            }
        }
    }
}
