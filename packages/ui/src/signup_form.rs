use dioxus::prelude::*;

use crate::provider::{submit_signup, use_client};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Teacher form registering a student for an activity.
#[component]
pub fn SignupForm() -> Element {
    let ctx = use_client();
    let mut chrome = ctx.chrome;
    let options = ctx.activities.read().options().to_vec();
    let state = chrome.read().clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_signup(ctx);
    };

    rsx! {
        form { id: "signup-form", onsubmit: handle_submit,
            div { class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: "{state.signup_email}",
                    oninput: move |evt: FormEvent| chrome.write().signup_email = evt.value(),
                }
            }
            div { class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    value: "{state.signup_activity}",
                    onchange: move |evt: FormEvent| chrome.write().signup_activity = evt.value(),
                    option { value: "", "{SELECT_PLACEHOLDER}" }
                    for name in options {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }
            button { r#type: "submit", "Sign Up" }
        }
    }
}
